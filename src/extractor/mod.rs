pub mod blocks;
pub mod cleaner;
pub mod fields;
pub mod language;
pub mod markers;
pub mod model;
pub mod scanner;

#[cfg(test)]
mod tests;

pub use model::{
    Assessment, AssessmentKind, BlockKind, ContentBlock, Interaction, InteractionKind, Lesson,
    MediaKind, MediaReference,
};

/// Build a lesson from one HTML page.
///
/// Returns `None` when the page was not exported by the authoring tool.
/// Media references are left without a `local_path`.
pub fn analyze_lesson(html: &str, path: &str, file_name: &str) -> Option<Lesson> {
    analyze_lesson_with_media(html, path, file_name, |_| None)
}

/// Like [`analyze_lesson`], with `locate` mapping each media `src` to a
/// file in the course folder.
pub fn analyze_lesson_with_media(
    html: &str,
    path: &str,
    file_name: &str,
    locate: impl Fn(&str) -> Option<String>,
) -> Option<Lesson> {
    // 1. Gate on authoring-tool markers
    if !markers::is_authoring_tool_content(html) {
        return None;
    }

    // 2. Sanitize the body for presentation
    let clean_content = cleaner::sanitize_for_document(html);

    // 3. Typed regions
    let content_blocks = blocks::extract_content_blocks(html);
    let media = blocks::extract_media_references(html)
        .into_iter()
        .map(|reference| MediaReference {
            local_path: locate(&reference.src),
            ..reference
        })
        .collect();

    // 4. Language of the lesson prose
    let language =
        language::detect_lesson_language(&content_blocks, &cleaner::clean_text(&clean_content));

    Some(Lesson {
        path: path.to_string(),
        file_name: file_name.to_string(),
        title: fields::extract_title(html, file_name),
        description: fields::extract_description(html),
        blocks: content_blocks,
        interactions: blocks::extract_interactions(html),
        assessments: blocks::extract_assessments(html),
        media,
        clean_content,
        language,
        metadata: fields::extract_metadata(html),
    })
}
