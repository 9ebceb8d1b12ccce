//! Typed records for tagged regions of a lesson page.
//!
//! Every table is scanned independently over the whole page, so one span
//! of markup can appear in several collections. An image inside a text
//! block shows up in that block's text and again as a media reference.

use std::sync::LazyLock;

use crate::extractor::{
    cleaner::clean_text,
    model::{
        Assessment, AssessmentKind, BlockKind, ContentBlock, Interaction, InteractionKind,
        MediaKind, MediaReference,
    },
    scanner::{PatternScanner, scan_table},
};

static BLOCK_PATTERNS: LazyLock<Vec<(BlockKind, PatternScanner)>> = LazyLock::new(|| {
    vec![
        (BlockKind::Text, PatternScanner::class_region("div", "text-block")),
        (BlockKind::Image, PatternScanner::class_region("div", "image-block")),
        (BlockKind::Video, PatternScanner::class_region("div", "video-block")),
        (BlockKind::Audio, PatternScanner::class_region("div", "audio-block")),
    ]
});

static INTERACTION_PATTERNS: LazyLock<Vec<(InteractionKind, PatternScanner)>> =
    LazyLock::new(|| {
        vec![
            (InteractionKind::Button, PatternScanner::class_text("button", "rise")),
            (InteractionKind::Accordion, PatternScanner::class_region("div", "accordion")),
            (InteractionKind::Tab, PatternScanner::class_region("div", "tab")),
            (InteractionKind::Popup, PatternScanner::class_region("div", "popup")),
        ]
    });

static ASSESSMENT_PATTERNS: LazyLock<Vec<(AssessmentKind, PatternScanner)>> =
    LazyLock::new(|| {
        vec![
            (AssessmentKind::Quiz, PatternScanner::class_region("div", "quiz")),
            (AssessmentKind::Question, PatternScanner::class_region("div", "question")),
            (
                AssessmentKind::KnowledgeCheck,
                PatternScanner::class_region("div", "knowledge-check"),
            ),
        ]
    });

static MEDIA_PATTERNS: LazyLock<Vec<(MediaKind, PatternScanner)>> = LazyLock::new(|| {
    vec![
        (MediaKind::Image, PatternScanner::element_src("img")),
        (MediaKind::Video, PatternScanner::element_src("video")),
        (MediaKind::Audio, PatternScanner::element_src("audio")),
    ]
});

pub fn extract_content_blocks(html: &str) -> Vec<ContentBlock> {
    scan_table(BLOCK_PATTERNS.as_slice(), html)
        .into_iter()
        .map(|(kind, region)| ContentBlock {
            kind,
            content: clean_text(region.inner),
            raw_html: region.whole.to_string(),
        })
        .collect()
}

pub fn extract_interactions(html: &str) -> Vec<Interaction> {
    scan_table(INTERACTION_PATTERNS.as_slice(), html)
        .into_iter()
        .map(|(kind, region)| Interaction {
            kind,
            content: clean_text(region.inner),
        })
        .collect()
}

pub fn extract_assessments(html: &str) -> Vec<Assessment> {
    scan_table(ASSESSMENT_PATTERNS.as_slice(), html)
        .into_iter()
        .map(|(kind, region)| Assessment {
            kind,
            content: clean_text(region.inner),
        })
        .collect()
}

/// Media sources are kept verbatim.
pub fn extract_media_references(html: &str) -> Vec<MediaReference> {
    scan_table(MEDIA_PATTERNS.as_slice(), html)
        .into_iter()
        .map(|(kind, region)| MediaReference {
            kind,
            src: region.inner.to_string(),
            element: region.whole.to_string(),
            local_path: None,
        })
        .collect()
}
