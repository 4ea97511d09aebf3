//! PDF text extraction. Wraps `pdf-extract`; the parser runs on the blocking pool
//! and a panic inside it is reported as an error rather than taking the worker down.

use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum PdfError {
    #[error("failed to parse PDF: {0}")]
    Parse(String),

    #[error("PDF parser aborted: {0}")]
    Aborted(String),
}

/// Extracts the text of every page, concatenated in page order.
pub async fn extract_text(bytes: Vec<u8>) -> Result<String, PdfError> {
    let size = bytes.len();
    let text = tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&bytes))
        .await
        .map_err(|e| PdfError::Aborted(e.to_string()))?
        .map_err(|e| PdfError::Parse(e.to_string()))?;

    debug!("Extracted {} characters from {} byte PDF", text.len(), size);
    Ok(text)
}


#[cfg(test)]
mod tests {
    use super::fixtures::single_page_pdf;
    use super::*;

    #[tokio::test]
    async fn test_extracts_text_from_simple_pdf() {
        let text = extract_text(single_page_pdf(&["Skills: Python and Docker"]))
            .await
            .unwrap();
        assert!(text.contains("Python"), "extracted: {text:?}");
        assert!(text.contains("Docker"), "extracted: {text:?}");
    }

    #[tokio::test]
    async fn test_page_without_text_extracts_blank() {
        let text = extract_text(single_page_pdf(&[])).await.unwrap();
        assert!(text.trim().is_empty(), "extracted: {text:?}");
    }

    #[tokio::test]
    async fn test_non_pdf_bytes_are_rejected() {
        let result = extract_text(b"this is plainly not a pdf document".to_vec()).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_empty_input_is_rejected() {
        let result = extract_text(Vec::new()).await;
        assert!(result.is_err());
    }
}
