//! Document source: raw text out of a PDF.

use std::any::Any;
use std::panic;
use std::path::Path;

use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("Failed to read document: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to decode PDF: {0}")]
    Pdf(String),

    #[error("Document contains no extractable text")]
    Empty,
}

/// Extracts the text of every page of an in-memory PDF.
///
/// The decoder panics on some malformed content streams; that is reported as
/// `DocumentError::Pdf` like any other decode failure.
pub fn extract_text_from_pdf(bytes: &[u8]) -> Result<String, DocumentError> {
    debug!("Decoding PDF ({} bytes)", bytes.len());
    let pages = panic::catch_unwind(|| pdf_extract::extract_text_from_mem_by_pages(bytes))
        .map_err(|payload| {
            DocumentError::Pdf(format!("decoder panicked: {}", panic_message(&*payload)))
        })?
        .map_err(|e| DocumentError::Pdf(e.to_string()))?;

    for (number, page) in pages.iter().enumerate() {
        debug!("Page {}: {} characters", number + 1, page.chars().count());
    }
    let text = pages.join("\n");
    if text.trim().is_empty() {
        return Err(DocumentError::Empty);
    }
    info!(
        "Extracted {} characters of text from {} PDF pages",
        text.chars().count(),
        pages.len()
    );
    Ok(text)
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("unknown panic")
}

pub fn extract_text_from_path(path: &Path) -> Result<String, DocumentError> {
    info!("Opening PDF: {}", path.display());
    let bytes = std::fs::read(path)?;
    extract_text_from_pdf(&bytes)
}

/// A one-page PDF with a Helvetica `/F1` font and `content` as its only stream.
#[cfg(test)]
pub(crate) fn single_page_pdf(content: &str) -> Vec<u8> {
    let objects = [
        "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
        "<< /Type /Pages /Kids [3 0 R] /Count 1 >>".to_string(),
        "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] \
         /Resources << /Font << /F1 5 0 R >> >> /Contents 4 0 R >>"
            .to_string(),
        format!("<< /Length {} >>\nstream\n{content}\nendstream", content.len()),
        "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica >>".to_string(),
    ];

    let mut pdf = b"%PDF-1.4\n".to_vec();
    let mut offsets = Vec::with_capacity(objects.len());
    for (index, body) in objects.iter().enumerate() {
        offsets.push(pdf.len());
        pdf.extend_from_slice(format!("{} 0 obj\n{body}\nendobj\n", index + 1).as_bytes());
    }
    let xref_start = pdf.len();
    pdf.extend_from_slice(format!("xref\n0 {}\n0000000000 65535 f \n", objects.len() + 1).as_bytes());
    for offset in offsets {
        pdf.extend_from_slice(format!("{offset:010} 00000 n \n").as_bytes());
    }
    pdf.extend_from_slice(
        format!(
            "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{xref_start}\n%%EOF\n",
            objects.len() + 1
        )
        .as_bytes(),
    );
    pdf
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_garbage_bytes_are_a_pdf_error() {
        let result = extract_text_from_pdf(b"definitely not a pdf");
        assert!(matches!(result, Err(DocumentError::Pdf(_))));
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let result = extract_text_from_path(Path::new("/definitely/not/here/resume.pdf"));
        assert!(matches!(result, Err(DocumentError::Io(_))));
    }

    #[test]
    fn test_decoder_panic_is_a_pdf_error() {
        let bytes = single_page_pdf("BT Tf (Hello) Tj ET");
        let result = extract_text_from_pdf(&bytes);
        assert!(matches!(result, Err(DocumentError::Pdf(_))), "{result:?}");
    }

    #[test]
    fn test_single_page_text() {
        let bytes = single_page_pdf("BT /F1 12 Tf 72 720 Td (Hello) Tj ET");
        let text = extract_text_from_pdf(&bytes).unwrap();
        assert!(text.contains("Hello"), "{text:?}");
    }

    #[test]
    fn test_unreadable_file_contents_propagate() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"%PDF-1.4 truncated").unwrap();
        assert!(extract_text_from_path(file.path()).is_err());
    }
}
