//! YAML front-matter splitting and parsing for column source files.

use serde::Deserialize;

/// Metadata block at the top of a column markdown file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FrontMatter {
    pub title: String,
    pub excerpt: String,
    pub image: String,
    #[serde(default)]
    pub date: Option<String>,
    /// Overrides the slug derived from the file stem.
    #[serde(default)]
    pub slug: Option<String>,
}

/// Split `source` into `(yaml, body)`.
///
/// The first line must be `---`; the block ends at the next line that is
/// exactly `---`. Returns `None` when either delimiter is missing.
#[must_use]
pub fn split_front_matter(source: &str) -> Option<(&str, &str)> {
    let source = source.strip_prefix('\u{feff}').unwrap_or(source);
    let rest = source.strip_prefix("---")?;
    let rest = rest
        .strip_prefix("\r\n")
        .or_else(|| rest.strip_prefix('\n'))?;

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end_matches(['\r', '\n']) == "---" {
            let yaml = &rest[..offset];
            let body = &rest[offset + line.len()..];
            return Some((yaml, body));
        }
        offset += line.len();
    }
    None
}

/// Parse the YAML block into typed front matter.
///
/// # Errors
///
/// Returns the `serde_yaml` error when required keys are missing or mistyped.
pub fn parse_front_matter(yaml: &str) -> Result<FrontMatter, serde_yaml::Error> {
    serde_yaml::from_str(yaml)
}

/// Slugs are URL path segments: lowercase ASCII letters, digits, `-`, `_`.
#[must_use]
pub fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && slug
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-' || b == b'_')
}

/// Dates are `YYYY-MM-DD` so that text order matches chronological order.
///
/// Month and day ranges are checked; month lengths are not.
#[must_use]
pub fn is_valid_date(date: &str) -> bool {
    let bytes = date.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return false;
    }
    let digits = |range: std::ops::Range<usize>| -> Option<u32> {
        let part = &date[range];
        part.bytes().all(|b| b.is_ascii_digit()).then(|| part.parse().ok()).flatten()
    };
    match (digits(0..4), digits(5..7), digits(8..10)) {
        (Some(_), Some(month), Some(day)) => (1..=12).contains(&month) && (1..=31).contains(&day),
        _ => false,
    }
}

#[cfg(test)]
#[path = "front_matter_test.rs"]
mod front_matter_test;
