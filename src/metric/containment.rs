use crate::text::normalized_tokens;
use itertools::Itertools;
use std::collections::HashSet;

/// Fraction of the word trigrams of `paraphrase` that also occur in `original`.
///
/// Each trigram of `paraphrase` is counted once per occurrence and checked for
/// membership in the set of `original` trigrams. A paraphrase with fewer than
/// three tokens has no trigrams; the denominator is then 1 and the result 0.
pub fn containment_measure(original: &str, paraphrase: &str) -> f64 {
    let original_tokens = normalized_tokens(original);
    let paraphrase_tokens = normalized_tokens(paraphrase);

    let original_trigrams: HashSet<(&str, &str, &str)> = original_tokens
        .iter()
        .map(String::as_str)
        .tuple_windows::<(_, _, _)>()
        .collect();

    let mut shared = 0usize;
    let mut total = 0usize;
    for trigram in paraphrase_tokens
        .iter()
        .map(String::as_str)
        .tuple_windows::<(_, _, _)>()
    {
        total += 1;
        if original_trigrams.contains(&trigram) {
            shared += 1;
        }
    }

    let denominator = if total == 0 { 1 } else { total };
    shared as f64 / denominator as f64
}
