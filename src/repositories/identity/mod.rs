//! 아이덴티티 디렉터리 계층
//!
//! [`IdentityDirectory`](directory::IdentityDirectory) trait과 MongoDB 카탈로그 구현
//! [`CatalogIdentityDirectory`](catalog_repo::CatalogIdentityDirectory)를 제공합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::identity::{email_claims, CatalogIdentityDirectory, IdentityDirectory};
//!
//! let directory = CatalogIdentityDirectory::new(db, Some(redis), IdentityConfig::from_env());
//! let record = directory.lookup(&email_claims("bob@co.com")).await?;
//! ```

pub mod directory;
pub mod catalog_repo;

pub use directory::*;
pub use catalog_repo::*;
