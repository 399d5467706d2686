//! Sentence segmentation

/// Sentence delimiters across both supported scripts
///
/// The danda (।) terminates Devanagari sentences; the Latin set covers
/// English and romanized Hindi.
pub const SENTENCE_DELIMITERS: [char; 4] = ['।', '.', '!', '?'];

/// Split text into sentences
///
/// Delimiters are consumed, each segment is trimmed, and empty segments
/// (from consecutive delimiters or trailing punctuation) are dropped.
pub fn split_sentences(text: &str) -> Vec<String> {
    text.split(|c| SENTENCE_DELIMITERS.contains(&c))
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_danda_without_space() {
        // Segmentation must not depend on whitespace after the delimiter.
        let sentences = split_sentences("नमस्ते।आप कैसे हैं?");
        assert_eq!(sentences, vec!["नमस्ते", "आप कैसे हैं"]);
    }

    #[test]
    fn test_split_mixed_delimiters() {
        let sentences = split_sentences("First. Second! Third?");
        assert_eq!(sentences, vec!["First", "Second", "Third"]);
    }

    #[test]
    fn test_split_consecutive_delimiters() {
        let sentences = split_sentences("Wait... what?");
        assert_eq!(sentences, vec!["Wait", "what"]);
    }

    #[test]
    fn test_split_empty() {
        assert!(split_sentences("").is_empty());
        assert!(split_sentences("।।।").is_empty());
    }

    #[test]
    fn test_split_no_delimiters() {
        let sentences = split_sentences("no punctuation here");
        assert_eq!(sentences, vec!["no punctuation here"]);
    }
}
