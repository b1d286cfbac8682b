//! Transcript loading module
//!
//! Turns an uploaded transcript file into a single text blob.

mod loader;

pub use loader::{accepted_extension, load};

/// File extensions the analyze command accepts.
pub const ACCEPTED_EXTENSIONS: [&str; 3] = ["txt", "csv", "docx"];
