use std::fs;

use crate::extractor::{
    AssessmentKind, BlockKind, InteractionKind, MediaKind, analyze_lesson,
    analyze_lesson_with_media,
};

fn fixture(name: &str) -> String {
    fs::read_to_string(format!("src/extractor/tests/fixtures/{}", name))
        .expect("Failed to read test fixture")
}

#[test]
fn test_analyze_full_lesson() {
    let html = fixture("lesson.html");
    let lesson = analyze_lesson(&html, "lessons/lesson-2.html", "lesson-2.html")
        .expect("lesson should be recognised");

    assert_eq!(lesson.path, "lessons/lesson-2.html");
    assert_eq!(lesson.file_name, "lesson-2.html");
    assert_eq!(lesson.title, "Ladder Safety Basics");
    assert_eq!(lesson.description, "How to set up and climb a ladder safely.");

    assert_eq!(
        lesson.block_kinds(),
        vec![BlockKind::Text, BlockKind::Text, BlockKind::Image]
    );
    assert_eq!(lesson.blocks[0].content, "Inspect every rung before you climb.");

    let interactions: Vec<(InteractionKind, &str)> = lesson
        .interactions
        .iter()
        .map(|i| (i.kind, i.content.as_str()))
        .collect();
    assert_eq!(
        interactions,
        vec![
            (InteractionKind::Button, "Continue"),
            (InteractionKind::Accordion, "Why three points?"),
        ]
    );

    assert_eq!(lesson.assessments.len(), 1);
    assert_eq!(lesson.assessments[0].kind, AssessmentKind::KnowledgeCheck);

    assert_eq!(lesson.media.len(), 1);
    assert_eq!(lesson.media[0].kind, MediaKind::Image);
    assert_eq!(lesson.media[0].src, "assets/ladder%20angle.png");

    assert_eq!(
        lesson.metadata.get("author").map(String::as_str),
        Some("Safety Team")
    );
    assert_eq!(
        lesson.metadata.get("data-lesson-id").map(String::as_str),
        Some("ladder-01")
    );
    assert_eq!(lesson.language.as_deref(), Some("en"));
}

#[test]
fn test_clean_content_drops_scripts_and_chrome() {
    let html = fixture("lesson.html");
    let lesson = analyze_lesson(&html, "lesson.html", "lesson.html").unwrap();

    assert!(!lesson.clean_content.contains("<script"));
    assert!(!lesson.clean_content.contains("<style"));
    assert!(!lesson.clean_content.contains("<nav"));
    assert!(!lesson.clean_content.contains("<header"));
    assert!(!lesson.clean_content.contains("<footer"));
    assert!(!lesson.clean_content.contains("Loading player"));
    assert!(!lesson.clean_content.contains("Workplace Safety Program"));
    assert!(lesson.clean_content.contains("Inspect every rung before you climb."));
    assert!(!lesson.clean_content.contains('\n'));
}

#[test]
fn test_media_located_while_building_the_lesson() {
    let html = fixture("lesson.html");
    let lesson = analyze_lesson_with_media(&html, "lessons/lesson-2.html", "lesson-2.html", |src| {
        (src == "assets/ladder%20angle.png").then(|| "lessons/assets/ladder angle.png".to_string())
    })
    .unwrap();
    assert_eq!(
        lesson.media[0].local_path.as_deref(),
        Some("lessons/assets/ladder angle.png")
    );

    let standalone = analyze_lesson(&html, "lessons/lesson-2.html", "lesson-2.html").unwrap();
    assert_eq!(standalone.media[0].local_path, None);
}

#[test]
fn test_plain_page_is_not_a_lesson() {
    let html = fixture("plain.html");
    assert!(analyze_lesson(&html, "index.html", "index.html").is_none());
}

#[test]
fn test_untitled_lesson_uses_file_name() {
    let html = fixture("untitled.html");
    let lesson = analyze_lesson(&html, "emergency-exits.html", "emergency-exits.html").unwrap();

    assert_eq!(lesson.title, "Emergency Exits");
    assert_eq!(lesson.description, "");
    assert_eq!(lesson.block_kinds(), vec![BlockKind::Text]);
    assert_eq!(lesson.assessments[0].kind, AssessmentKind::Quiz);
    assert_eq!(lesson.assessments[0].content, "Where is the nearest exit?");
    assert_eq!(lesson.media[0].kind, MediaKind::Video);
    assert_eq!(lesson.media[0].src, "https://cdn.example.com/exits.mp4");
    // The empty <video></video> element is collapsed out of the body
    assert!(!lesson.clean_content.contains("<video"));
}

#[test]
fn test_malformed_markup_does_not_panic() {
    let html = r#"<div class="rise-block"><div class="text-block">Unclosed <b>bold<div class="quiz">"#;
    let lesson = analyze_lesson(html, "broken.html", "broken.html").unwrap();

    assert_eq!(lesson.title, "Broken");
    assert!(lesson.blocks.is_empty());
    assert!(lesson.assessments.is_empty());
}

#[cfg(feature = "fuzz")]
mod fuzz {
    use super::*;
    use crate::extractor::cleaner::sanitize_for_document;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_analyze_never_panics(html in ".*", name in "[a-z_-]{0,12}\\.html") {
            let _ = analyze_lesson(&html, &name, &name);
        }

        #[test]
        fn test_marked_pages_always_produce_a_titled_lesson(body in "[a-z <>/=\"]*") {
            let html = format!("<div class=\"rise-block\">{}</div>", body);
            let lesson = analyze_lesson(&html, "page-1.html", "page-1.html");
            prop_assert!(lesson.is_some());
            prop_assert!(!lesson.unwrap().title.is_empty());
        }

        #[test]
        fn test_sanitized_output_is_trimmed(html in ".*") {
            let cleaned = sanitize_for_document(&html);
            prop_assert_eq!(cleaned.trim(), cleaned.as_str());
        }
    }
}
