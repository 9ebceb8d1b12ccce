use regex::Regex;
use std::cmp::Ordering;
use std::sync::LazyLock;

use crate::extractor::Lesson;

static NUMBER_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9]+").unwrap());

/// Compare two lesson paths by their first run of digits when both have
/// one, otherwise by the full path.
pub fn compare_paths(a: &str, b: &str) -> Ordering {
    match (NUMBER_REGEX.find(a), NUMBER_REGEX.find(b)) {
        (Some(a_num), Some(b_num)) => compare_digit_runs(a_num.as_str(), b_num.as_str()),
        _ => a.cmp(b),
    }
}

// Arbitrary-length numeric comparison without parsing.
fn compare_digit_runs(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

/// Stable sort of lessons by [`compare_paths`].
///
/// Mixing numbered and unnumbered paths makes the comparison
/// intransitive, which `slice::sort_by` is allowed to panic on, so this
/// is a plain insertion sort. Ties keep input order.
pub fn sort_lessons(lessons: &mut [Lesson]) {
    for i in 1..lessons.len() {
        let mut j = i;
        while j > 0 && compare_paths(&lessons[j - 1].path, &lessons[j].path) == Ordering::Greater {
            lessons.swap(j - 1, j);
            j -= 1;
        }
    }
}
