//! Quick similarity ratio
//!
//! An upper bound on the classic "matching blocks" sequence ratio that only
//! looks at character multiplicities, ignoring order. Cheap to compute and
//! deliberately whole-string: a short rule scored against a long document
//! gets a low ratio because the document length dominates the denominator.

use std::collections::HashMap;

/// Compute `2 * M / (|a| + |b|)`, where `M` is the number of characters the
/// two strings have in common counting multiplicity
///
/// Lengths are measured in `char`s. Two empty strings are identical and
/// score `1.0`; one empty string against a non-empty one scores `0.0`.
/// The result always lies in `[0.0, 1.0]`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn quick_ratio(a: &str, b: &str) -> f64 {
    let mut available: HashMap<char, usize> = HashMap::new();
    let mut len_b = 0usize;
    for c in b.chars() {
        *available.entry(c).or_insert(0) += 1;
        len_b += 1;
    }

    let mut len_a = 0usize;
    let mut matches = 0usize;
    for c in a.chars() {
        len_a += 1;
        match available.get_mut(&c) {
            Some(count) if *count > 0 => {
                *count -= 1;
                matches += 1;
            },
            _ => {},
        }
    }

    let total = len_a + len_b;
    if total == 0 {
        return 1.0;
    }
    2.0 * matches as f64 / total as f64
}
