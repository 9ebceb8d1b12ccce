use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

use crate::extractor::{
    cleaner::clean_text,
    markers::mentions_brand,
    scanner::{PatternScanner, TextRegionScanner},
};

// Tried in order; the first acceptable candidate wins.
static TITLE_SCANNERS: LazyLock<Vec<PatternScanner>> = LazyLock::new(|| {
    vec![
        PatternScanner::element_text("title"),
        PatternScanner::element_text("h1"),
        PatternScanner::element_text("h2"),
        PatternScanner::new(Regex::new(r#"(?i)data-title="([^"]+)""#).unwrap()),
        PatternScanner::new(Regex::new(r#"(?i)title:\s*["']([^"']+)["']"#).unwrap()),
    ]
});

static DESCRIPTION_SCANNERS: LazyLock<Vec<PatternScanner>> = LazyLock::new(|| {
    vec![
        PatternScanner::new(
            Regex::new(r#"(?i)<meta[^>]*name="description"[^>]*content="([^"]+)""#).unwrap(),
        ),
        PatternScanner::class_text("p", "summary"),
        PatternScanner::class_text("div", "description"),
    ]
});

static META_TAG_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]*name="([^"]+)"[^>]*content="([^"]+)""#).unwrap()
});

static DATA_ATTR_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)data-([^=]+)="([^"]+)""#).unwrap());

static EXTENSION_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\.[^/.]+$").unwrap());

/// Lesson title from markup, or one derived from the file name.
///
/// Candidates naming the authoring tool itself are skipped.
pub fn extract_title(html: &str, file_name: &str) -> String {
    TITLE_SCANNERS
        .iter()
        .filter_map(|scanner| scanner.first(html))
        .filter(|region| !mentions_brand(region.inner))
        .map(|region| clean_text(region.inner))
        .find(|title| !title.is_empty())
        .unwrap_or_else(|| title_from_file_name(file_name))
}

/// `intro-to-safety.html` becomes `Intro To Safety`.
pub fn title_from_file_name(file_name: &str) -> String {
    let stem = EXTENSION_REGEX.replace(file_name, "");
    let spaced = stem.replace(['-', '_'], " ");

    let mut title = String::with_capacity(spaced.len());
    let mut prev_is_word = false;
    for c in spaced.chars() {
        let is_word = c.is_ascii_alphanumeric() || c == '_';
        if is_word && !prev_is_word {
            title.push(c.to_ascii_uppercase());
        } else {
            title.push(c);
        }
        prev_is_word = is_word;
    }
    title
}

/// Lesson summary, or an empty string when the page has none.
pub fn extract_description(html: &str) -> String {
    DESCRIPTION_SCANNERS
        .iter()
        .filter_map(|scanner| scanner.first(html))
        .map(|region| clean_text(region.inner))
        .find(|description| !description.is_empty())
        .unwrap_or_default()
}

/// Named meta tags plus every `data-*` attribute in the page.
///
/// A later occurrence of a key replaces an earlier one.
pub fn extract_metadata(html: &str) -> BTreeMap<String, String> {
    let mut metadata = BTreeMap::new();

    for caps in META_TAG_REGEX.captures_iter(html) {
        metadata.insert(caps[1].to_string(), caps[2].to_string());
    }

    for caps in DATA_ATTR_REGEX.captures_iter(html) {
        metadata.insert(format!("data-{}", &caps[1]), caps[2].to_string());
    }

    metadata
}
