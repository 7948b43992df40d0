//! Upload validation for resume PDFs: extension, magic bytes, and size.
//! Failures become 400s before any extraction or AI work happens.

use crate::config::MAX_UPLOAD_BYTES;
use crate::errors::AppError;

const PDF_MAGIC: &[u8] = b"%PDF-";

/// Validates an uploaded resume file. Returns the first failure as a
/// `Validation` error with the message the UI displays inline.
pub fn validate_upload(filename: &str, bytes: &[u8]) -> Result<(), AppError> {
    if filename.is_empty() {
        return Err(AppError::Validation("No file selected".to_string()));
    }

    if !has_pdf_extension(filename) {
        return Err(AppError::Validation(
            "Please upload a PDF file only".to_string(),
        ));
    }

    if bytes.is_empty() {
        return Err(AppError::Validation("Uploaded file is empty".to_string()));
    }

    if bytes.len() > MAX_UPLOAD_BYTES {
        return Err(AppError::PayloadTooLarge);
    }

    if !bytes.starts_with(PDF_MAGIC) {
        return Err(AppError::Validation(
            "Invalid PDF file format".to_string(),
        ));
    }

    Ok(())
}

fn has_pdf_extension(filename: &str) -> bool {
    filename
        .rsplit_once('.')
        .map(|(_, ext)| ext.eq_ignore_ascii_case("pdf"))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pdf_bytes() -> Vec<u8> {
        b"%PDF-1.4 fake content".to_vec()
    }

    #[test]
    fn test_valid_upload_passes() {
        assert!(validate_upload("resume.pdf", &pdf_bytes()).is_ok());
    }

    #[test]
    fn test_extension_check_is_case_insensitive() {
        assert!(validate_upload("Resume.PDF", &pdf_bytes()).is_ok());
    }

    #[test]
    fn test_rejects_missing_filename() {
        assert!(matches!(
            validate_upload("", &pdf_bytes()),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_rejects_non_pdf_extension() {
        assert!(matches!(
            validate_upload("resume.docx", &pdf_bytes()),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_rejects_no_extension() {
        assert!(validate_upload("resume", &pdf_bytes()).is_err());
    }

    #[test]
    fn test_rejects_empty_file() {
        assert!(validate_upload("resume.pdf", &[]).is_err());
    }

    #[test]
    fn test_rejects_oversized_file() {
        let mut bytes = pdf_bytes();
        bytes.resize(MAX_UPLOAD_BYTES + 1, 0);
        assert!(matches!(
            validate_upload("resume.pdf", &bytes),
            Err(AppError::PayloadTooLarge)
        ));
    }

    #[test]
    fn test_rejects_wrong_magic_bytes() {
        assert!(matches!(
            validate_upload("resume.pdf", b"PK\x03\x04 zip header"),
            Err(AppError::Validation(_))
        ));
    }
}
