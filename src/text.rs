//! Word tokenization shared by the grammar and structure scores.
//!
//! Follows the Penn Treebank conventions closely enough for n-gram
//! comparison: punctuation runs become their own tokens and contractions
//! are split into stem and clitic (`I'm` -> `I`, `'m`; `don't` -> `do`, `n't`).
//! Hyphenated words (`well-known`) and numbers with separators (`3.5`,
//! `1,000`) stay whole.

use regex::Regex;
use std::sync::LazyLock;

static WORD_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\d+(?:[.,]\d+)+|\w+(?:[-']\w+)*|[^\w\s]+").expect("word pattern is valid")
});

/// Splits `text` into word and punctuation tokens.
pub fn word_tokenize(text: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    for m in WORD_PATTERN.find_iter(text) {
        push_with_clitic(m.as_str(), &mut tokens);
    }
    tokens
}

fn push_with_clitic<'a>(token: &'a str, out: &mut Vec<&'a str>) {
    let Some(apostrophe) = token.find('\'') else {
        out.push(token);
        return;
    };

    let lower = token.to_lowercase();
    if lower.ends_with("n't") && token.len() > 3 {
        let split = token.len() - 3;
        out.push(&token[..split]);
        out.push(&token[split..]);
    } else {
        out.push(&token[..apostrophe]);
        out.push(&token[apostrophe..]);
    }
}

/// True for non-empty tokens made only of alphabetic characters.
#[inline]
pub fn is_alphabetic(token: &str) -> bool {
    !token.is_empty() && token.chars().all(char::is_alphabetic)
}

/// Number of purely alphabetic tokens in `text`.
pub fn count_word_tokens(text: &str) -> usize {
    word_tokenize(text)
        .into_iter()
        .filter(|t| is_alphabetic(t))
        .count()
}

/// Lowercased tokens with line breaks treated as spaces.
pub fn normalized_tokens(text: &str) -> Vec<String> {
    let flattened = text.replace("\r\n", " ").replace('\n', " ");
    word_tokenize(&flattened)
        .into_iter()
        .map(str::to_lowercase)
        .collect()
}
