use encoding_rs::{Encoding, UTF_8};
use regex::Regex;
use std::sync::LazyLock;
use tracing::warn;

static META_CHARSET_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)<meta\s+[^>]*?charset\s*=\s*["']?([^"'\s/>]+)"#).unwrap());

static META_HTTP_EQUIV_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta\s+[^>]*?http-equiv\s*=\s*["']?content-type["']?[^>]*?content\s*=\s*["']?[^"'>]*?charset\s*=\s*([^"'\s;/>]+)"#).unwrap()
});

const SNIFF_LEN: usize = 4096;

/// Decode a course file's bytes into text.
///
/// Bytes the chosen encoding cannot map become U+FFFD and the file is
/// kept. Undeclared content is read as UTF-8.
pub fn decode_text(body: &[u8], path: &str) -> String {
    let encoding = detect_encoding(body);

    // `decode` honours a BOM over the detected encoding
    let (decoded, used, had_errors) = encoding.decode(body);

    if had_errors {
        warn!(
            "Replaced undecodable bytes in {} while reading it as {}",
            path,
            used.name()
        );
    }

    decoded.into_owned()
}

fn detect_encoding(body: &[u8]) -> &'static Encoding {
    if let Some((encoding, _)) = Encoding::for_bom(body) {
        return encoding;
    }

    let search_bytes = &body[..body.len().min(SNIFF_LEN)];
    let search_str = String::from_utf8_lossy(search_bytes);

    let Some(label) = declared_charset(&search_str) else {
        return UTF_8;
    };

    // A UTF-16 label inside ASCII-compatible markup means UTF-8
    match Encoding::for_label(label.as_bytes()) {
        Some(encoding) => encoding.output_encoding(),
        None => guess_encoding(search_bytes, body.len() <= SNIFF_LEN),
    }
}

/// `<meta charset="...">`, then `<meta http-equiv="Content-Type" content="...; charset=...">`.
fn declared_charset(head: &str) -> Option<String> {
    [&*META_CHARSET_REGEX, &*META_HTTP_EQUIV_REGEX]
        .into_iter()
        .find_map(|regex| regex.captures(head)?.get(1))
        .map(|charset| charset.as_str().trim().to_ascii_lowercase())
}

/// Only reached when a page declares a charset nobody recognises.
fn guess_encoding(bytes: &[u8], last: bool) -> &'static Encoding {
    let mut detector = chardetng::EncodingDetector::new();
    detector.feed(bytes, last);
    detector.guess(None, true)
}
