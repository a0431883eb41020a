//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation. Factories handle
//! foreign key dependencies so tests only spell out what they care about.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let member = factory::member::create_member(&db).await?;
//! let post = factory::post::create_post(&db, member.id).await?;
//!
//! let (author, post, comment) = factory::helpers::create_comment_with_dependencies(&db).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let member = factory::member::MemberFactory::new(&db)
//!     .username("ann")
//!     .nickname("Ann")
//!     .api_key("secret-key")
//!     .build()
//!     .await?;
//! ```

pub mod helpers;
pub mod member;
pub mod post;
pub mod post_comment;

pub use member::create_member;
pub use post::create_post;
pub use post_comment::create_comment;
