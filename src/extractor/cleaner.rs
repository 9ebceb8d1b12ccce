use regex::Regex;
use std::sync::LazyLock;

static TAG_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").unwrap());
static WHITESPACE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

static BODY_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<body[^>]*>((?s:.*))</body>").unwrap());

// Removed in order, before the body is narrowed.
static PLAYER_REGEXES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)<script(?s:.*?)</script>",
        r"(?i)<style(?s:.*?)</style>",
        r#"(?i)<div[^>]*class="[^"]*rise-player[^"]*"[^>]*>(?s:.*?)</div>"#,
        r"(?i)<div[^>]*data-rise[^>]*>(?s:.*?)</div>",
    ]
    .into_iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

// Removed in order, after the body is narrowed.
static CHROME_REGEXES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)<nav(?s:.*?)</nav>",
        r"(?i)<header(?s:.*?)</header>",
        r"(?i)<footer(?s:.*?)</footer>",
        r#"(?i)<div[^>]*class="[^"]*nav[^"]*"[^>]*>(?s:.*?)</div>"#,
    ]
    .into_iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

// Open and close names are compared in `drop_empty_elements`.
static EMPTY_ELEMENT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<([0-9A-Za-z_]+)[^>]*>\s*</([0-9A-Za-z_]+)>").unwrap());

/// Strip tags, collapse whitespace and trim.
pub fn clean_text(text: &str) -> String {
    let stripped = TAG_REGEX.replace_all(text, "");
    WHITESPACE_REGEX
        .replace_all(&stripped, " ")
        .trim()
        .to_string()
}

/// Produce the presentation-safe body of a lesson page.
///
/// Inline markup survives. Scripts, styles, player widgets and page
/// chrome are removed, then any element left empty by those removals is
/// dropped in a single pass.
pub fn sanitize_for_document(html: &str) -> String {
    let mut cleaned = html.to_string();

    for regex in PLAYER_REGEXES.iter() {
        cleaned = regex.replace_all(&cleaned, "").into_owned();
    }

    if let Some(body) = BODY_REGEX.captures(&cleaned).and_then(|c| c.get(1)) {
        cleaned = body.as_str().to_string();
    }

    for regex in CHROME_REGEXES.iter() {
        cleaned = regex.replace_all(&cleaned, "").into_owned();
    }

    cleaned = drop_empty_elements(&cleaned);

    WHITESPACE_REGEX
        .replace_all(&cleaned, " ")
        .trim()
        .to_string()
}

fn drop_empty_elements(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut copied = 0;
    let mut from = 0;

    while let Some(caps) = EMPTY_ELEMENT_REGEX.captures_at(html, from) {
        let Some(whole) = caps.get(0) else {
            break;
        };
        let open = caps[1].to_ascii_lowercase();
        let close = caps[2].to_ascii_lowercase();

        // The open name may run on into attribute text (`<divx></div>`)
        if open.starts_with(&close) {
            out.push_str(&html[copied..whole.start()]);
            copied = whole.end();
            from = whole.end();
        } else {
            // Retry just past this `<`, which may sit inside attribute text
            from = whole.start() + 1;
        }
    }

    out.push_str(&html[copied..]);
    out
}
