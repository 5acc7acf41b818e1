//! File uploader: candidate validation and the inline preview resource

pub mod preview;
pub mod validate;

pub use preview::{default_cache_dir, PreviewResource};
pub use validate::{validate_candidate, ValidationError, PDF_MEDIA_TYPE};
