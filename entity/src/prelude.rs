pub use super::member::Entity as Member;
pub use super::post::Entity as Post;
pub use super::post_comment::Entity as PostComment;
