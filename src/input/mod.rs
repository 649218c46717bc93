//! Input processing module
//! Handles file type detection and best-effort text extraction

pub mod file_detector;
pub mod text_extractor;

pub use text_extractor::extract_document;
