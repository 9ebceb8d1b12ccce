//! Region scanning over raw markup text.
//!
//! Extractors only see [`TextRegionScanner`], so the regex-backed
//! [`PatternScanner`] can be replaced by a tokenizer without touching
//! their contracts.
//!
//! Region patterns end at the *first* closing tag of the same name. A
//! region holding a nested element of that name is cut short at the
//! nested element's closing tag.

use regex::Regex;

/// One matched region: the whole match and its captured inner text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region<'h> {
    pub whole: &'h str,
    pub inner: &'h str,
}

pub trait TextRegionScanner: Send + Sync {
    /// All non-overlapping regions, left to right.
    fn regions<'h>(&self, haystack: &'h str) -> Vec<Region<'h>>;

    /// The leftmost region, if any.
    fn first<'h>(&self, haystack: &'h str) -> Option<Region<'h>> {
        self.regions(haystack).into_iter().next()
    }
}

/// Regex-backed scanner. Capture group 1 is the inner text.
#[derive(Debug, Clone)]
pub struct PatternScanner {
    regex: Regex,
}

impl PatternScanner {
    pub fn new(regex: Regex) -> Self {
        Self { regex }
    }

    /// `<tag class="...fragment...">inner</tag>` with `inner` spanning any markup.
    pub fn class_region(tag: &str, class_fragment: &str) -> Self {
        Self::from_pattern(&format!(
            r#"(?i)<{tag}[^>]*class="[^"]*{frag}[^"]*"[^>]*>((?s:.*?))</{tag}>"#,
            tag = tag,
            frag = regex::escape(class_fragment),
        ))
    }

    /// Like [`class_region`](Self::class_region) but the inner text may not contain a tag.
    pub fn class_text(tag: &str, class_fragment: &str) -> Self {
        Self::from_pattern(&format!(
            r#"(?i)<{tag}[^>]*class="[^"]*{frag}[^"]*"[^>]*>([^<]+)</{tag}>"#,
            tag = tag,
            frag = regex::escape(class_fragment),
        ))
    }

    /// `<tag ...>text</tag>` where the text holds no markup.
    pub fn element_text(tag: &str) -> Self {
        Self::from_pattern(&format!(r"(?i)<{tag}[^>]*>([^<]+)</{tag}>", tag = tag))
    }

    /// `<tag ... src="locator" ...>`, capturing the locator.
    pub fn element_src(tag: &str) -> Self {
        Self::from_pattern(&format!(r#"(?i)<{tag}[^>]*src="([^"]+)"[^>]*>"#, tag = tag))
    }

    // Patterns are built from fixed tables at startup; a bad one is a programming error.
    fn from_pattern(pattern: &str) -> Self {
        Self::new(Regex::new(pattern).unwrap())
    }
}

impl TextRegionScanner for PatternScanner {
    fn regions<'h>(&self, haystack: &'h str) -> Vec<Region<'h>> {
        self.regex
            .captures_iter(haystack)
            .filter_map(|caps| {
                Some(Region {
                    whole: caps.get(0)?.as_str(),
                    inner: caps.get(1)?.as_str(),
                })
            })
            .collect()
    }

    fn first<'h>(&self, haystack: &'h str) -> Option<Region<'h>> {
        let caps = self.regex.captures(haystack)?;
        Some(Region {
            whole: caps.get(0)?.as_str(),
            inner: caps.get(1)?.as_str(),
        })
    }
}

/// Run every `(kind, scanner)` pair in table order and collect each
/// scanner's regions left to right.
pub fn scan_table<'h, K: Copy, S: TextRegionScanner>(
    table: &[(K, S)],
    haystack: &'h str,
) -> Vec<(K, Region<'h>)> {
    table
        .iter()
        .flat_map(|(kind, scanner)| {
            scanner
                .regions(haystack)
                .into_iter()
                .map(move |region| (*kind, region))
        })
        .collect()
}
