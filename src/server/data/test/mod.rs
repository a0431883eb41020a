mod member;
mod post;
mod post_comment;
