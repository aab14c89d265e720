use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Embedding;

/// A bounded window of a source document together with its embedding.
///
/// Immutable once persisted; the vector store owns it from then on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chunk {
    pub id: Uuid,
    pub content: String,
    pub embedding: Embedding,
}

impl Chunk {
    pub fn new(content: impl Into<String>, embedding: Embedding) -> Self {
        Self {
            id: Uuid::new_v4(),
            content: content.into(),
            embedding,
        }
    }
}

/// Splits `text` into fixed-size sliding windows.
///
/// Window `i` starts at character offset `i * (chunk_size - overlap)` and is
/// `chunk_size` characters long; the final windows are remainders and may be
/// shorter. Consecutive windows share `overlap` characters, so their union
/// covers the source with no gaps. Whitespace-only windows are not emitted.
pub fn chunk_windows(text: &str, chunk_size: usize, overlap: usize) -> Vec<String> {
    debug_assert!(chunk_size > 0);
    debug_assert!(overlap < chunk_size);

    let chars: Vec<char> = text.chars().collect();
    let step = chunk_size - overlap;

    let mut windows = Vec::new();
    for start in (0..chars.len()).step_by(step) {
        let end = usize::min(start + chunk_size, chars.len());
        let window: String = chars[start..end].iter().collect();
        if !window.trim().is_empty() {
            windows.push(window);
        }
    }

    windows
}
