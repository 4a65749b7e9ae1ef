//! Shared column DTOs for the client/server boundary.
//!
//! DESIGN
//! ======
//! The server loads these from markdown files and serves them as JSON; the
//! hydrated pages deserialize the same types, so both sides stay in lockstep.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Summary of one column as shown on the list page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSummary {
    /// Unique URL-safe identifier; also the rendering key.
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    /// Image URI (site-relative or absolute).
    pub image: String,
}

/// Full column including its markdown body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDetail {
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    pub image: String,
    /// Publication date as `YYYY-MM-DD`, if the source declares one.
    #[serde(default)]
    pub date: Option<String>,
    /// Markdown source.
    #[serde(default)]
    pub body: String,
}

impl ColumnDetail {
    #[must_use]
    pub fn summary(&self) -> ColumnSummary {
        ColumnSummary {
            slug: self.slug.clone(),
            title: self.title.clone(),
            excerpt: self.excerpt.clone(),
            image: self.image.clone(),
        }
    }
}
