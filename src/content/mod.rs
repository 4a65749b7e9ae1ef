//! Column content loader.
//!
//! DESIGN
//! ======
//! Columns are markdown files with a YAML front-matter block, one file per
//! column, read once at startup into an immutable `ColumnStore`. Handlers
//! only read the store, so it is shared behind an `Arc` without locking.
//!
//! ERROR HANDLING
//! ==============
//! Any malformed file fails the whole load. Serving a partial column list
//! would silently drop articles, so startup aborts instead.

pub mod front_matter;

use std::cmp::Ordering;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use guardpost_ui::net::types::{ColumnDetail, ColumnSummary};
use tracing::{debug, warn};

use self::front_matter::{is_valid_date, is_valid_slug, parse_front_matter, split_front_matter};

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("missing front matter in {0}")]
    MissingFrontMatter(PathBuf),
    #[error("invalid front matter in {path}: {source}")]
    FrontMatter {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("invalid slug {slug:?} in {path}")]
    InvalidSlug { path: PathBuf, slug: String },
    #[error("invalid date {date:?} in {path}; expected YYYY-MM-DD")]
    InvalidDate { path: PathBuf, date: String },
    #[error("duplicate column slug: {0}")]
    DuplicateSlug(String),
}

/// Immutable, ordered set of columns keyed by slug.
#[derive(Debug, Default)]
pub struct ColumnStore {
    columns: Vec<ColumnDetail>,
    by_slug: HashMap<String, usize>,
}

// =============================================================================
// LOADING
// =============================================================================

impl ColumnStore {
    /// Load every `*.md` file in `dir`.
    ///
    /// A missing directory yields an empty store; the list page then renders
    /// no cards.
    ///
    /// # Errors
    ///
    /// Returns `ContentError` when a file cannot be read or parsed, or when
    /// two files resolve to the same slug.
    pub fn load_dir(dir: &Path) -> Result<Self, ContentError> {
        if !dir.exists() {
            warn!(dir = %dir.display(), "content directory missing; serving no columns");
            return Ok(Self::default());
        }

        let entries = std::fs::read_dir(dir).map_err(|source| ContentError::Io { path: dir.to_path_buf(), source })?;

        let mut paths = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| ContentError::Io { path: dir.to_path_buf(), source })?;
            let path = entry.path();
            if path.is_file() && path.extension().is_some_and(|ext| ext == "md") {
                paths.push(path);
            }
        }
        paths.sort();

        let mut columns = Vec::with_capacity(paths.len());
        for path in paths {
            let source =
                std::fs::read_to_string(&path).map_err(|source| ContentError::Io { path: path.clone(), source })?;
            let column = parse_column(&path, &source)?;
            debug!(slug = %column.slug, path = %path.display(), "loaded column");
            columns.push(column);
        }

        Self::from_columns(columns)
    }

    /// Build a store from already-parsed columns, applying loader ordering.
    ///
    /// # Errors
    ///
    /// Returns `ContentError::DuplicateSlug` if two columns share a slug.
    pub fn from_columns(mut columns: Vec<ColumnDetail>) -> Result<Self, ContentError> {
        columns.sort_by(compare_columns);

        let mut by_slug = HashMap::with_capacity(columns.len());
        for (idx, column) in columns.iter().enumerate() {
            if by_slug.insert(column.slug.clone(), idx).is_some() {
                return Err(ContentError::DuplicateSlug(column.slug.clone()));
            }
        }
        Ok(Self { columns, by_slug })
    }

    /// Column summaries in loader order.
    #[must_use]
    pub fn all_columns(&self) -> Vec<ColumnSummary> {
        self.columns.iter().map(ColumnDetail::summary).collect()
    }

    #[must_use]
    pub fn column(&self, slug: &str) -> Option<&ColumnDetail> {
        self.by_slug.get(slug).map(|&idx| &self.columns[idx])
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// Newest first; undated columns last; slug breaks ties.
fn compare_columns(a: &ColumnDetail, b: &ColumnDetail) -> Ordering {
    match (&a.date, &b.date) {
        (Some(da), Some(db)) => db.cmp(da),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
    .then_with(|| a.slug.cmp(&b.slug))
}

/// Parse one column source file.
///
/// # Errors
///
/// Returns `ContentError` for missing or malformed front matter, for slugs
/// that are not URL-safe, and for dates not written as `YYYY-MM-DD`.
pub fn parse_column(path: &Path, source: &str) -> Result<ColumnDetail, ContentError> {
    let (yaml, body) = split_front_matter(source).ok_or_else(|| ContentError::MissingFrontMatter(path.to_path_buf()))?;
    let fm = parse_front_matter(yaml).map_err(|source| ContentError::FrontMatter { path: path.to_path_buf(), source })?;

    let slug = fm.slug.unwrap_or_else(|| {
        path.file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default()
    });
    if !is_valid_slug(&slug) {
        return Err(ContentError::InvalidSlug { path: path.to_path_buf(), slug });
    }
    if let Some(date) = fm.date.as_ref().filter(|date| !is_valid_date(date)) {
        return Err(ContentError::InvalidDate { path: path.to_path_buf(), date: date.clone() });
    }

    Ok(ColumnDetail {
        slug,
        title: fm.title,
        excerpt: fm.excerpt,
        image: fm.image,
        date: fm.date,
        body: body.trim_start_matches(['\r', '\n']).to_owned(),
    })
}
