//! Extraction pipelines.
//!
//! This module provides:
//! - Cursor-driven page traversal
//! - Attachment tree flattening
//! - Attachment and photo resolution
//! - Cross-path record merging
//! - The media and posts extraction pipelines

pub mod cursor;
pub mod flatten;
pub mod media;
pub mod merge;
pub mod normalize;
pub mod posts;
pub mod resolve;

pub use cursor::CursorWalker;
pub use flatten::flatten_nested;
pub use media::MediaExtractor;
pub use merge::{MediaKey, MediaSet, PostSet};
pub use posts::PostsExtractor;
pub use resolve::{resolve_attachment, resolve_photo, PostContext, ResolveError};
