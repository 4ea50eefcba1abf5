//! Mediaext-Common: Shared types, constants, and utilities.
//!
//! This crate provides common functionality used across mediaext:
//!
//! - **Core Types**: [`MediaKind`] and the closed [`VideoHost`] set
//! - **Path Utilities**: Functions to detect playable media by extension
//! - **Error Handling**: The shared error taxonomy and result alias
//!
//! # Examples
//!
//! ```
//! use mediaext_common::{MediaKind, VideoHost, Error, Result};
//! use mediaext_common::paths::media_kind_of;
//!
//! assert_eq!(media_kind_of("clip.webm"), Some(MediaKind::Video));
//! assert_eq!(VideoHost::from_hostname("youtu.be"), Some(VideoHost::YouTube));
//!
//! fn example() -> Result<()> {
//!     Err(Error::missing_dependency("vault"))
//! }
//! assert!(example().unwrap_err().is_fatal());
//! ```

pub mod error;
pub mod paths;
pub mod types;

pub use error::{Error, Result};
pub use types::*;
