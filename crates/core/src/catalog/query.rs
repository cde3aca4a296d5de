//! Catalog query service: category lookup plus style/location filtering.
//!
//! A filter that would eliminate every item is skipped and the unfiltered
//! list is returned instead. The response text only mentions filters that
//! actually narrowed the result.

use serde::{Deserialize, Serialize};

use super::{Catalog, CatalogItem, Category};

/// Optional filters for [`Catalog::query`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct QueryOptions {
    /// Case-insensitive substring matched against title, description and tags.
    pub style: Option<String>,
    /// Case-insensitive substring matched against the venue location.
    /// Ignored for every other category.
    pub location: Option<String>,
    /// Rotates the start of the result list by `cursor % len`.
    pub cursor: Option<usize>,
}

impl QueryOptions {
    pub fn with_style(mut self, style: Option<&str>) -> Self {
        self.style = style.map(str::to_string);
        self
    }

    pub fn with_location(mut self, location: Option<&str>) -> Self {
        self.location = location.map(str::to_string);
        self
    }
}

/// A titled, ordered list of catalog items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Carousel {
    pub title: String,
    pub items: Vec<CatalogItem>,
}

/// Result of a catalog query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogResult {
    pub text: String,
    pub carousel: Carousel,
}

impl CatalogResult {
    /// Empty carousel with an apology, for lookups that cannot be served.
    fn unavailable(category: &str) -> Self {
        let category = category.trim().to_lowercase();
        Self {
            text: format!("Sorry, I couldn't find any {category} to show you right now. 😔"),
            carousel: Carousel {
                title: format!("{} Collection", capitalize(&category)),
                items: Vec::new(),
            },
        }
    }
}

impl Catalog {
    /// Look up `category` by name and apply `options`.
    ///
    /// Never fails: an unknown category yields an empty carousel and an
    /// apologetic text.
    pub fn query(&self, category: &str, options: &QueryOptions) -> CatalogResult {
        match category.parse::<Category>() {
            Ok(category) => self.query_category(category, options),
            Err(err) => {
                tracing::warn!(error = %err, "Catalog lookup failed");
                CatalogResult::unavailable(category)
            }
        }
    }

    /// Apply `options` to the items of a known category.
    pub fn query_category(&self, category: Category, options: &QueryOptions) -> CatalogResult {
        let mut items = self.items(category);

        let style = non_blank(options.style.as_deref());
        let style_applied = match style {
            Some(style) => {
                let needle = style.to_lowercase();
                narrow(&mut items, |item| item.matches_style(&needle))
            }
            None => false,
        };

        let location = non_blank(options.location.as_deref())
            .filter(|_| category == Category::Venues);
        let location_applied = match location {
            Some(location) => {
                let needle = location.to_lowercase();
                narrow(&mut items, |item| item.matches_location(&needle))
            }
            None => false,
        };

        if let Some(cursor) = options.cursor {
            if !items.is_empty() {
                let len = items.len();
                items.rotate_left(cursor % len);
            }
        }

        tracing::debug!(
            %category,
            style = style.unwrap_or_default(),
            style_applied,
            location = location.unwrap_or_default(),
            location_applied,
            count = items.len(),
            "Catalog query"
        );

        let mut text = String::from("Here are some ");
        if let Some(style) = style.filter(|_| style_applied) {
            text.push_str(style);
            text.push(' ');
        }
        text.push_str(category.as_str());
        if let Some(location) = location.filter(|_| location_applied) {
            text.push_str(" in ");
            text.push_str(location);
        }
        text.push('!');

        CatalogResult {
            text,
            carousel: Carousel {
                title: format!("{} Collection", category.display_name()),
                items,
            },
        }
    }
}

/// Keep only items matching `pred`, unless that would leave nothing.
///
/// Returns whether the filter was applied.
fn narrow(items: &mut Vec<CatalogItem>, pred: impl Fn(&CatalogItem) -> bool) -> bool {
    if items.iter().any(&pred) {
        items.retain(|item| pred(item));
        true
    } else {
        false
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
