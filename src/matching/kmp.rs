/// Failure function: for each prefix `pattern[..=i]`, the length of its
/// longest proper prefix that is also a suffix.
pub fn failure_function<T: PartialEq>(pattern: &[T]) -> Vec<usize> {
    let mut lps = vec![0usize; pattern.len()];
    let mut length = 0;
    let mut i = 1;

    while i < pattern.len() {
        if pattern[i] == pattern[length] {
            length += 1;
            lps[i] = length;
            i += 1;
        } else if length != 0 {
            length = lps[length - 1];
        } else {
            lps[i] = 0;
            i += 1;
        }
    }
    lps
}

/// Knuth-Morris-Pratt search.
///
/// On a mismatch the pattern index falls back through the failure function
/// instead of restarting at the next text offset, giving O(n + m).
/// Overlapping matches are reported. Callers guarantee `pattern` is non-empty.
pub fn kmp_search<T: PartialEq>(text: &[T], pattern: &[T]) -> Vec<usize> {
    let (n, m) = (text.len(), pattern.len());
    if m == 0 || m > n {
        return Vec::new();
    }

    let lps = failure_function(pattern);
    let mut positions = Vec::new();
    let mut j = 0;

    for (i, symbol) in text.iter().enumerate() {
        while j > 0 && *symbol != pattern[j] {
            j = lps[j - 1];
        }
        if *symbol == pattern[j] {
            j += 1;
        }
        if j == m {
            positions.push(i + 1 - m);
            j = lps[j - 1];
        }
    }
    positions
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_failure_function() {
        assert_eq!(failure_function(&chars("ababaca")), vec![0, 0, 1, 2, 3, 0, 1]);
        assert_eq!(failure_function(&chars("aaaa")), vec![0, 1, 2, 3]);
        assert_eq!(failure_function(&chars("abcd")), vec![0, 0, 0, 0]);
        assert_eq!(failure_function(&chars("aabaaab")), vec![0, 1, 0, 1, 2, 2, 3]);
    }

    #[test]
    fn test_single_match() {
        let text = chars("Hello World! this is Computer Science");
        assert_eq!(kmp_search(&text, &chars("Computer")), vec![21]);
    }

    #[test]
    fn test_overlapping_matches() {
        assert_eq!(kmp_search(&chars("aaaa"), &chars("aa")), vec![0, 1, 2]);
        assert_eq!(kmp_search(&chars("abababab"), &chars("abab")), vec![0, 2, 4]);
    }

    #[test]
    fn test_fallback_after_partial_match() {
        assert_eq!(kmp_search(&chars("aabaaabaab"), &chars("aabaab")), vec![4]);
    }

    #[test]
    fn test_no_match() {
        assert!(kmp_search(&chars("abcdef"), &chars("xyz")).is_empty());
        assert!(kmp_search(&chars("ab"), &chars("abc")).is_empty());
    }
}
