use anyhow::{Context, Result};

/// Extracts plain text from an in-memory PDF, trimmed.
/// A thin wrapper over `pdf-extract`; pages arrive newline-separated.
/// Decode failures propagate with the underlying cause attached.
pub fn extract_resume_text(bytes: &[u8]) -> Result<String> {
    let text = pdf_extract::extract_text_from_mem(bytes)
        .context("failed to extract text from PDF bytes")?;
    Ok(text.trim().to_string())
}

/// Length of the text ignoring all whitespace. Drives the scanned-PDF
/// heuristic in the upload flow.
pub fn non_whitespace_len(text: &str) -> usize {
    text.chars().filter(|c| !c.is_whitespace()).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_whitespace_len_ignores_all_whitespace() {
        assert_eq!(non_whitespace_len("a b\tc\nd"), 4);
        assert_eq!(non_whitespace_len("   \n\t  "), 0);
        assert_eq!(non_whitespace_len(""), 0);
    }

    #[test]
    fn test_non_whitespace_len_counts_chars_not_bytes() {
        assert_eq!(non_whitespace_len("über résumé"), 10);
    }

    #[test]
    fn test_extract_rejects_garbage_with_cause() {
        let err = extract_resume_text(b"definitely not a pdf").unwrap_err();
        assert!(err.to_string().contains("failed to extract text"));
    }
}
