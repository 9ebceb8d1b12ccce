#![no_main]

use libfuzzer_sys::fuzz_target;

use jobaid::analyze_lesson;
use jobaid::extractor::cleaner::sanitize_for_document;

fuzz_target!(|data: &[u8]| {
    // Convert raw bytes to string, handling invalid UTF-8 gracefully
    let html = String::from_utf8_lossy(data);

    // Neither the extractor nor the sanitizer may panic on any input
    let _ = analyze_lesson(&html, "fuzz/lesson-1.html", "lesson-1.html");
    let _ = sanitize_for_document(&html);
});
