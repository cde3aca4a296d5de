//! Static image catalog for the visual topics (venues, dresses, hairstyles,
//! cakes).
//!
//! Items are seeded in [`seed`] and resolved against a blob-storage base URL
//! at lookup time. Every item handed out is normalized so that title,
//! description and tags are never empty.

mod query;
mod seed;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

pub use query::{Carousel, CatalogResult, QueryOptions};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Blob-storage project used when no other project is configured.
pub const DEFAULT_PROJECT_ID: &str = "sayyes";

/// Description substituted when a record carries none.
pub const DEFAULT_DESCRIPTION: &str = "A beautiful choice for your big day";

// ---------------------------------------------------------------------------
// Category
// ---------------------------------------------------------------------------

/// A visual topic the catalog can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Venues,
    Dresses,
    Hairstyles,
    Cakes,
}

impl Category {
    /// Every category, in display order.
    pub const ALL: [Category; 4] = [
        Category::Venues,
        Category::Dresses,
        Category::Hairstyles,
        Category::Cakes,
    ];

    /// Lowercase key, as used in URLs and request bodies.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Venues => "venues",
            Category::Dresses => "dresses",
            Category::Hairstyles => "hairstyles",
            Category::Cakes => "cakes",
        }
    }

    /// Capitalized name used in carousel titles and default item titles.
    pub fn display_name(self) -> &'static str {
        match self {
            Category::Venues => "Venues",
            Category::Dresses => "Dresses",
            Category::Hairstyles => "Hairstyles",
            Category::Cakes => "Cakes",
        }
    }

    /// Storage folder, already percent-encoded for use in a URL path.
    fn folder(self) -> &'static str {
        match self {
            Category::Venues => "wedding%20venues",
            Category::Dresses => "wedding%20dresses",
            Category::Hairstyles => "wedding%20hairstyles",
            Category::Cakes => "wedding%20cakes",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = CoreError;

    /// Case-insensitive parse of a category key.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == key)
            .ok_or_else(|| CoreError::UnknownCategory(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Catalog item
// ---------------------------------------------------------------------------

/// One visual offering shown in a carousel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    /// Fully resolved image URL.
    pub image: String,
    pub title: String,
    pub description: String,
    /// Venues only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Dresses only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub designer: Option<String>,
    /// Price band such as `"$$$"`. Venues, dresses and cakes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl CatalogItem {
    /// Fill in any missing title, description or tags.
    ///
    /// `position` is the zero-based index of the item within its category
    /// and only feeds the last-resort `"<Category> <n>"` title.
    pub fn normalized(mut self, category: Category, position: usize) -> Self {
        if self.title.trim().is_empty() {
            let derived = clean_title(&self.image);
            self.title = if derived.is_empty() {
                format!("{} {}", category.display_name(), position + 1)
            } else {
                derived
            };
        }

        self.description = clean_description(&self.description);
        if self.description.is_empty() {
            self.description = DEFAULT_DESCRIPTION.to_string();
        }

        self.tags.retain(|t| !t.trim().is_empty());
        if self.tags.is_empty() {
            self.tags = vec!["Wedding".to_string(), category.display_name().to_string()];
        }

        self
    }

    /// Whether `needle` (already lowercase) appears in the title, description
    /// or any tag.
    fn matches_style(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
            || self.tags.iter().any(|t| t.to_lowercase().contains(needle))
    }

    /// Whether `needle` (already lowercase) appears in the location field.
    fn matches_location(&self, needle: &str) -> bool {
        self.location
            .as_deref()
            .is_some_and(|l| l.to_lowercase().contains(needle))
    }
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

/// Read-only catalog resolved against one image base URL.
///
/// Holds no mutable state, so a single instance can be shared across any
/// number of concurrent requests.
#[derive(Debug, Clone)]
pub struct Catalog {
    base_url: String,
}

impl Catalog {
    /// Catalog whose image URLs hang off `base_url` (trailing `/` ignored).
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Catalog backed by the public blob store of `project_id`.
    pub fn for_project(project_id: &str) -> Self {
        Self::new(format!("https://{project_id}.public.blob.vercel-storage.com"))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// All items for `category`, normalized, in seed order.
    pub fn items(&self, category: Category) -> Vec<CatalogItem> {
        seed::seeds(category)
            .iter()
            .enumerate()
            .map(|(i, s)| {
                CatalogItem {
                    image: format!("{}/{}/{}", self.base_url, category.folder(), s.file),
                    title: s.title.to_string(),
                    description: s.description.to_string(),
                    location: s.location.map(str::to_string),
                    designer: s.designer.map(str::to_string),
                    price: s.price.map(str::to_string),
                    tags: s.tags.iter().map(|t| t.to_string()).collect(),
                }
                .normalized(category, i)
            })
            .collect()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::for_project(DEFAULT_PROJECT_ID)
    }
}

// ---------------------------------------------------------------------------
// Text cleanup
// ---------------------------------------------------------------------------

/// Derive a display title from an image path or URL.
///
/// Takes the last path segment, drops the extension, turns underscores into
/// spaces and title-cases the result.
///
/// ```
/// use sayyes_core::catalog::clean_title;
///
/// assert_eq!(clean_title("x/alexb_79_Classic_Wedding_Cake.png"), "Alexb 79 Classic Wedding Cake");
/// ```
pub fn clean_title(name: &str) -> String {
    let file = name.rsplit('/').next().unwrap_or_default();
    let stem = file.split('.').next().unwrap_or_default().replace('_', " ");

    let mut out = String::with_capacity(stem.len());
    let mut prev_alpha = false;
    for ch in stem.trim().chars() {
        if prev_alpha {
            out.extend(ch.to_lowercase());
        } else {
            out.extend(ch.to_uppercase());
        }
        prev_alpha = ch.is_alphabetic();
    }
    out
}

/// Trim a description and keep only its first line / first clause.
///
/// Some upstream records repeat the description after a newline or a
/// semicolon; only the part before the first of either is kept.
pub fn clean_description(description: &str) -> String {
    let first_line = description.trim().split('\n').next().unwrap_or_default();
    first_line
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_string()
}
