//! Two-line caption layout for promo cards.

#[cfg(test)]
#[path = "caption_test.rs"]
mod caption_test;

/// Split `text` on whitespace into two display lines.
///
/// The first line takes the first `ceil(n / 2)` words and the second line the
/// rest; both are re-joined with single spaces. Any Unicode whitespace
/// separates words, including the ideographic space.
#[must_use]
pub fn split_caption(text: &str) -> (String, String) {
    let words: Vec<&str> = text.split_whitespace().collect();
    let midpoint = words.len().div_ceil(2);
    (words[..midpoint].join(" "), words[midpoint..].join(" "))
}
