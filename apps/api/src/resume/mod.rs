// Resume intake: PDF upload, text extraction and skill tagging.

pub mod handlers;
pub mod pdf;
