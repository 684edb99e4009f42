/// Brute-force search: try every start offset, stopping each comparison at
/// the first mismatch.
///
/// O(n·m) in the worst case. Callers guarantee `pattern` is non-empty.
pub fn naive_search<T: PartialEq>(text: &[T], pattern: &[T]) -> Vec<usize> {
    let (n, m) = (text.len(), pattern.len());
    if m == 0 || m > n {
        return Vec::new();
    }

    let mut positions = Vec::new();
    for start in 0..=n - m {
        let mut matched = true;
        for (j, symbol) in pattern.iter().enumerate() {
            if text[start + j] != *symbol {
                matched = false;
                break;
            }
        }
        if matched {
            positions.push(start);
        }
    }
    positions
}
