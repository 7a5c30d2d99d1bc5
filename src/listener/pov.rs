use itertools::Itertools;

/// Speaker -> listener substitutions. Matched against whole
/// whitespace-delimited tokens, case-sensitive, punctuation included.
const PERSPECTIVE_SWAPS: [(&str, &str); 10] = [
    ("I", "you"),
    ("my", "your"),
    ("My", "Your"),
    ("I'm", "you're"),
    ("am", "are"),
    ("we", "you"),
    ("We", "You"),
    ("myself", "yourself"),
    ("Myself", "Yourself"),
    ("I'd", "you'd"),
];

fn swap_token(token: &str) -> &str {
    PERSPECTIVE_SWAPS
        .iter()
        .find(|(from, _)| *from == token)
        .map_or(token, |&(_, to)| to)
}

/// Rewrites a first-person statement from the listener's side.
///
/// Tokens are re-joined with single spaces and the first character is
/// lowercased so the result reads as a clause after a lead-in phrase.
/// `I,` or `my.` keep their punctuation and are left unchanged.
pub fn flip_point_of_view(text: &str) -> String {
    let flipped = text.split_whitespace().map(swap_token).join(" ");
    lowercase_first(&flipped)
}

fn lowercase_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}
