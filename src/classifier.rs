//! File classification by extension and position in the course folder.

use std::sync::Arc;

use crate::source::{CourseFile, FileRole, InputFile};

const HTML_EXTENSIONS: &[&str] = &[".html", ".htm"];
const JSON_EXTENSIONS: &[&str] = &[".json"];
const MEDIA_EXTENSIONS: &[&str] = &[
    ".jpg", ".jpeg", ".png", ".gif", ".svg", ".mp4", ".mp3", ".wav", ".pdf",
];

/// Assign exactly one role from the file name (case-insensitive).
pub fn classify(name: &str) -> FileRole {
    let name = name.to_lowercase();
    let has_ext = |exts: &[&str]| exts.iter().any(|ext| name.ends_with(ext));

    if has_ext(HTML_EXTENSIONS) {
        FileRole::Html
    } else if has_ext(JSON_EXTENSIONS) {
        FileRole::Json
    } else if has_ext(MEDIA_EXTENSIONS) {
        FileRole::Media
    } else {
        FileRole::Unknown
    }
}

/// A root-level `index.html` is the course entry point.
pub fn is_main_index(name: &str, relative_path: &str) -> bool {
    name.eq_ignore_ascii_case("index.html") && !relative_path.contains('/')
}

pub fn classify_file(file: Arc<dyn CourseFile>) -> InputFile {
    let name = file.name().to_string();
    let path = file.relative_path().to_string();
    // Browsers hand over a bare name when there is no folder path
    let path = if path.is_empty() { name.clone() } else { path };

    InputFile {
        role: classify(&name),
        name,
        path,
        file,
    }
}
