//! Word-window chunking for document indexing.

use crate::error::CoreError;

/// Split `text` into overlapping windows of whitespace-separated words.
///
/// Windows hold `chunk_size` words and start every `chunk_size - overlap`
/// words, so consecutive chunks share `overlap` words. The final window may
/// be shorter. Words are re-joined with single spaces; sentence structure is
/// not preserved.
///
/// # Errors
/// Returns `CoreError::InvalidInput` if `chunk_size` is zero or
/// `overlap >= chunk_size` (the window would never advance).
pub fn chunk_text(text: &str, chunk_size: usize, overlap: usize) -> Result<Vec<String>, CoreError> {
    if chunk_size == 0 {
        return Err(CoreError::InvalidInput("chunk_size must be positive".to_owned()));
    }
    if overlap >= chunk_size {
        return Err(CoreError::InvalidInput(format!(
            "chunk overlap {overlap} must be smaller than chunk size {chunk_size}"
        )));
    }

    let words: Vec<&str> = text.split_whitespace().collect();
    let stride = chunk_size - overlap;

    let chunks = (0..words.len())
        .step_by(stride)
        .map(|start| {
            let end = (start + chunk_size).min(words.len());
            words[start..end].join(" ")
        })
        .filter(|chunk| !chunk.is_empty())
        .collect();
    Ok(chunks)
}
