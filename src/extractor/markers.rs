/// Signatures left in pages exported by the authoring tool.
pub const AUTHORING_TOOL_MARKERS: &[&str] = &[
    "rise-player",
    "rise-content",
    "articulate",
    "data-rise",
    "rise-lesson",
    "storyline",
    "articulate-content",
    "rise-course",
    "rise-block",
];

/// Brand token that disqualifies a title candidate.
pub const BRAND_TOKEN: &str = "rise";

pub fn is_authoring_tool_content(html: &str) -> bool {
    let html_lower = html.to_lowercase();
    AUTHORING_TOOL_MARKERS
        .iter()
        .any(|marker| html_lower.contains(marker))
}

pub fn mentions_brand(text: &str) -> bool {
    text.to_lowercase().contains(BRAND_TOKEN)
}
