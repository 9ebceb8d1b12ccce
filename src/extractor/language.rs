//! Language of a lesson's prose.
//!
//! Text blocks carry the lesson's own wording, so they are sampled first.
//! Pages whose blocks are too thin fall back to the sanitized body.

use whatlang::Detector;

use crate::extractor::model::ContentBlock;

/// Characters, not bytes, so non-Latin scripts are not favoured.
const MIN_SAMPLE_CHARS: usize = 50;
const MIN_CONFIDENCE: f64 = 0.25;

pub fn detect_lesson_language(blocks: &[ContentBlock], body_text: &str) -> Option<String> {
    let block_text = blocks
        .iter()
        .map(|block| block.content.as_str())
        .filter(|content| !content.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    if block_text.chars().count() >= MIN_SAMPLE_CHARS {
        detect_language(&block_text)
    } else {
        detect_language(body_text)
    }
}

/// ISO 639-1 code of `text`, or `None` when it is too short or ambiguous.
pub fn detect_language(text: &str) -> Option<String> {
    let text = text.trim();
    if text.chars().count() < MIN_SAMPLE_CHARS {
        return None;
    }

    let info = Detector::new().detect(text)?;
    if info.confidence() < MIN_CONFIDENCE {
        return None;
    }

    two_letter_code(info.lang().code()).map(str::to_string)
}

/// Maps whatlang's ISO 639-3 codes onto ISO 639-1.
fn two_letter_code(three_letter: &str) -> Option<&'static str> {
    const CODES: &[(&str, &str)] = &[
        ("afr", "af"), ("aka", "ak"), ("amh", "am"), ("ara", "ar"), ("aze", "az"),
        ("bel", "be"), ("ben", "bn"), ("bul", "bg"), ("cat", "ca"), ("ces", "cs"),
        ("cmn", "zh"), ("dan", "da"), ("deu", "de"), ("ell", "el"), ("eng", "en"),
        ("epo", "eo"), ("est", "et"), ("fin", "fi"), ("fra", "fr"), ("guj", "gu"),
        ("heb", "he"), ("hin", "hi"), ("hrv", "hr"), ("hun", "hu"), ("hye", "hy"),
        ("ind", "id"), ("ita", "it"), ("jav", "jv"), ("jpn", "ja"), ("kan", "kn"),
        ("kat", "ka"), ("khm", "km"), ("kor", "ko"), ("lat", "la"), ("lav", "lv"),
        ("lit", "lt"), ("mal", "ml"), ("mar", "mr"), ("mkd", "mk"), ("mya", "my"),
        ("nep", "ne"), ("nld", "nl"), ("nob", "nb"), ("ori", "or"), ("pan", "pa"),
        ("pes", "fa"), ("pol", "pl"), ("por", "pt"), ("ron", "ro"), ("rus", "ru"),
        ("sin", "si"), ("slk", "sk"), ("slv", "sl"), ("sna", "sn"), ("spa", "es"),
        ("srp", "sr"), ("swe", "sv"), ("tam", "ta"), ("tel", "te"), ("tgl", "tl"),
        ("tha", "th"), ("tuk", "tk"), ("tur", "tr"), ("ukr", "uk"), ("urd", "ur"),
        ("uzb", "uz"), ("vie", "vi"), ("yid", "yi"), ("zul", "zu"),
    ];

    CODES
        .iter()
        .find(|(long, _)| *long == three_letter)
        .map(|(_, short)| *short)
}
