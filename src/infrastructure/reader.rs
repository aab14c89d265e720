use crate::domain::{ports::DocumentReader, DomainError};

/// Extension-dispatched reader for uploaded files. Plain text formats are
/// decoded here; binary formats (pdf, docx) need a format-specific
/// `DocumentReader` implementation plugged in behind the port.
pub struct PlainTextReader;

impl DocumentReader for PlainTextReader {
    fn read(&self, bytes: &[u8], extension: &str) -> Result<String, DomainError> {
        let ext = extension.trim_start_matches('.').to_lowercase();

        match ext.as_str() {
            "txt" | "md" => Ok(String::from_utf8_lossy(bytes).into_owned()),
            "pdf" | "docx" => Err(DomainError::unsupported_file_type(format!(
                ".{ext} requires an external extractor"
            ))),
            other => Err(DomainError::unsupported_file_type(format!(".{other}"))),
        }
    }
}
