//! Keyword matching over the latest user message.
//!
//! All functions expect text that has already been lowercased.

/// Style keywords in priority order, with the style each one maps to.
const STYLE_KEYWORDS: &[(&[&str], &str)] = &[
    (&["rustic"], "rustic"),
    (&["modern"], "modern"),
    (&["elegant", "luxury"], "luxury"),
    (&["bohemian", "boho"], "bohemian"),
];

/// Whether `text` contains any of `keywords`.
pub fn mentions_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| text.contains(k))
}

/// First style found in `text`, checked in fixed priority order.
///
/// ```
/// use sayyes_core::keywords::extract_style;
///
/// assert_eq!(extract_style("an elegant boho barn"), Some("luxury"));
/// assert_eq!(extract_style("something simple"), None);
/// ```
pub fn extract_style(text: &str) -> Option<&'static str> {
    STYLE_KEYWORDS
        .iter()
        .find(|(keywords, _)| mentions_any(text, keywords))
        .map(|(_, style)| *style)
}

/// The word following the first occurrence of `"in "`.
///
/// Surrounding punctuation is stripped, so `"in austin?"` yields `austin`.
/// The marker is matched as a raw substring, so it also fires inside words
/// such as `"begin "`.
pub fn extract_location(text: &str) -> Option<&str> {
    let (_, rest) = text.split_once("in ")?;
    rest.split_whitespace()
        .next()
        .map(|word| word.trim_matches(|c: char| !c.is_alphanumeric()))
        .filter(|word| !word.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn style_priority_order() {
        assert_eq!(extract_style("modern rustic"), Some("rustic"));
        assert_eq!(extract_style("luxury but modern"), Some("modern"));
        assert_eq!(extract_style("boho luxe"), Some("bohemian"));
        assert_eq!(extract_style("very elegant"), Some("luxury"));
    }

    #[test]
    fn location_after_first_in() {
        assert_eq!(extract_location("venues in austin please"), Some("austin"));
        assert_eq!(
            extract_location("venues in montana or in paris"),
            Some("montana")
        );
    }

    #[test]
    fn location_strips_punctuation() {
        assert_eq!(extract_location("any venues in paris?"), Some("paris"));
    }

    #[test]
    fn location_absent() {
        assert_eq!(extract_location("show me venues"), None);
        assert_eq!(extract_location("venues in "), None);
        assert_eq!(extract_location("venues in ??"), None);
    }

    #[test]
    fn location_marker_matches_inside_words() {
        assert_eq!(extract_location("we begin soon"), Some("soon"));
    }

    #[test]
    fn mentions_any_matches_substrings() {
        assert!(mentions_any("hairstyles please", &["hair"]));
        assert!(!mentions_any("cake", &["venue", "location"]));
    }
}
