/// Radix of the rolling polynomial hash
pub const BASE: u64 = 256;

/// Prime modulus of the rolling hash
pub const MODULUS: u64 = 1_000_000_007;

/// Rabin-Karp search with a rolling polynomial hash.
///
/// Each length-m window of `text` is hashed in O(1) from the previous one.
/// A hash hit is always confirmed by a full comparison, so collisions never
/// produce a false match. Callers guarantee `pattern` is non-empty.
pub fn rabin_karp_search<T>(text: &[T], pattern: &[T]) -> Vec<usize>
where
    T: Copy + PartialEq + Into<u32>,
{
    let (n, m) = (text.len(), pattern.len());
    if m == 0 || m > n {
        return Vec::new();
    }

    // BASE^(m-1) mod MODULUS, weight of the symbol leaving the window
    let high = (1..m).fold(1u64, |acc, _| acc * BASE % MODULUS);

    let mut pattern_hash = 0u64;
    let mut window_hash = 0u64;
    for (&p, &t) in pattern.iter().zip(&text[..m]) {
        pattern_hash = push_symbol(pattern_hash, p);
        window_hash = push_symbol(window_hash, t);
    }

    let mut positions = Vec::new();
    for start in 0..=n - m {
        if pattern_hash == window_hash && text[start..start + m] == *pattern {
            positions.push(start);
        }
        if start < n - m {
            let leaving = value(text[start]) * high % MODULUS;
            window_hash = (window_hash + MODULUS - leaving) % MODULUS;
            window_hash = push_symbol(window_hash, text[start + m]);
        }
    }
    positions
}

#[inline]
fn value<T: Into<u32>>(symbol: T) -> u64 {
    u64::from(symbol.into()) % MODULUS
}

#[inline]
fn push_symbol<T: Into<u32>>(hash: u64, symbol: T) -> u64 {
    (hash * BASE + value(symbol)) % MODULUS
}
