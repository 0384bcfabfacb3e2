pub mod message;
pub mod url;

use std::collections::HashMap;

/// Shannon entropy in bits per character. Kept in the utility layer for
/// hostname randomness measurement; not currently part of either engine's
/// scoring.
pub fn shannon_entropy(s: &str) -> f64 {
    if s.is_empty() {
        return 0.0;
    }

    let mut counts: HashMap<char, usize> = HashMap::new();
    for ch in s.chars() {
        *counts.entry(ch).or_insert(0) += 1;
    }

    let total = s.chars().count() as f64;
    counts
        .values()
        .map(|&count| {
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum()
}
