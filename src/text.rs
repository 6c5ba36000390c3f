//! Default tokenizer and stopword sources for callers that have none of their own.

use std::collections::HashSet;

/// Small English stopword list, plus URL scheme noise.
pub fn default_stopwords() -> HashSet<String> {
    [
        "a","an","and","are","as","at","be","by","for","from","has","in",
        "is","it","of","on","or","that","the","to","was","were","will","with",
        "http","https","ftp","s3"
    ]
    .into_iter()
    .map(str::to_string)
    .collect()
}

/// One stopword per line; surrounding whitespace and blank lines are ignored.
pub fn parse_stopwords(text: &str) -> HashSet<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Lowercases and splits on anything that is not a letter.
///
/// No filtering happens here; short tokens and stopwords are dropped by
/// the vocabulary builder.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .chars()
        .map(|c| if c.is_alphabetic() { c } else { ' ' })
        .collect::<String>()
        .split_whitespace()
        .map(|tok| tok.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_keeps_short_words() {
        let tokens = tokenize("A car, 2 cars; the Apple!");
        assert_eq!(tokens, vec!["a", "car", "cars", "the", "apple"]);
    }

    #[test]
    fn test_parse_stopwords() {
        let stop = parse_stopwords("the\n  and \n\nof\r\n");
        assert_eq!(stop.len(), 3);
        assert!(stop.contains("and"));
        assert!(stop.contains("of"));
    }

    #[test]
    fn test_default_stopwords() {
        let stop = default_stopwords();
        assert!(stop.contains("the"));
        assert!(!stop.contains("apple"));
    }
}
