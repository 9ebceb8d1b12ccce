use percent_encoding::percent_decode_str;
use std::collections::HashSet;
use url::Url;

/// Resolve a media `src` against the lesson page it appears in.
///
/// Returns a `/`-separated path relative to the course root, or `None`
/// for absolute URLs, protocol-relative URLs and `data:` URIs.
pub fn resolve_local_path(lesson_path: &str, src: &str) -> Option<String> {
    let src = src.trim();
    if src.is_empty() || src.to_ascii_lowercase().starts_with("data:") {
        return None;
    }

    let root = Url::parse("file:///").ok()?;
    let page = root.join(lesson_path).ok()?;
    let target = page.join(src).ok()?;

    if target.scheme() != "file" || target.host_str().is_some_and(|h| !h.is_empty()) {
        return None;
    }

    let decoded = percent_decode_str(target.path()).decode_utf8_lossy();
    let relative = decoded.trim_start_matches('/');
    if relative.is_empty() {
        return None;
    }
    Some(relative.to_string())
}

/// Locate a lesson's media `src` among the course's media files.
pub fn locate_in_course<'a>(
    lesson_path: &'a str,
    media_paths: &'a HashSet<&'a str>,
) -> impl Fn(&str) -> Option<String> + 'a {
    move |src| {
        resolve_local_path(lesson_path, src).filter(|path| media_paths.contains(path.as_str()))
    }
}
