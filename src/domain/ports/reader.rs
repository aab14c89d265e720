use crate::domain::errors::DomainError;

/// Extracts raw text from an uploaded file by extension. Format-specific
/// extraction (pdf, docx) plugs in behind this seam.
pub trait DocumentReader: Send + Sync {
    fn read(&self, bytes: &[u8], extension: &str) -> Result<String, DomainError>;
}
