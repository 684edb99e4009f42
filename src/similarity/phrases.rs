/// Split `document` on whitespace and join every run of `window_size`
/// consecutive words with single spaces.
///
/// The window slides one word at a time, giving
/// `max(0, word_count - window_size + 1)` phrases. A `window_size` of 0
/// yields no phrases; [`crate::similarity::score`] rejects it up front.
#[must_use]
pub fn segment(document: &str, window_size: usize) -> Vec<String> {
    if window_size == 0 {
        return Vec::new();
    }
    let words: Vec<&str> = document.split_whitespace().collect();
    words.windows(window_size).map(|w| w.join(" ")).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sliding_windows() {
        assert_eq!(
            segment("the quick brown fox jumps", 4),
            vec!["the quick brown fox", "quick brown fox jumps"]
        );
    }

    #[test]
    fn test_collapses_whitespace() {
        assert_eq!(
            segment("  one\t two\n\nthree  ", 2),
            vec!["one two", "two three"]
        );
    }

    #[test]
    fn test_fewer_words_than_window() {
        assert!(segment("only three words", 4).is_empty());
        assert!(segment("", 1).is_empty());
    }

    #[test]
    fn test_phrase_count() {
        let doc = "a b c d e f g";
        for window in 1..=8 {
            assert_eq!(segment(doc, window).len(), (7 + 1usize).saturating_sub(window));
        }
    }

    #[test]
    fn test_zero_window() {
        assert!(segment("a b c", 0).is_empty());
    }
}
