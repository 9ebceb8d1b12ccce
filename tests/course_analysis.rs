mod helpers;

use chrono::NaiveDate;
use helpers::{GaugedFile, ReadGauge, file, file_bytes, rise_lesson, unreadable};
use std::sync::Arc;
use jobaid::{
    AnalyzerOptions, StructureOptions, analyze_course,
    extractor::{BlockKind, MediaKind},
    structure::build_structure_at,
};
use serde_json::json;

#[tokio::test]
async fn test_total_files_counts_everything() {
    let files = vec![
        file("index.html", "<html><body>Launcher</body></html>"),
        file("lesson-1.html", &rise_lesson("Ladders", "<p>x</p>")),
        file("data/course.json", "{}"),
        file("assets/pic.png", "png"),
        file("styles/site.css", "body {}"),
        unreadable("lesson-2.html"),
    ];

    let analysis = analyze_course(files, AnalyzerOptions::default()).await;

    assert_eq!(analysis.total_files, 6);
    assert_eq!(analysis.html_files.len(), 3);
    assert_eq!(analysis.json_files.len(), 1);
    assert_eq!(analysis.media_files.len(), 1);
    assert_eq!(analysis.lessons.len(), 1);
}

#[tokio::test]
async fn test_non_marker_html_is_counted_but_not_a_lesson() {
    let files = vec![
        file("about.html", "<html><head><title>About</title></head><body><p>Plain page</p></body></html>"),
        file("lesson.html", &rise_lesson("Gloves", "")),
    ];

    let analysis = analyze_course(files, AnalyzerOptions::default()).await;

    assert_eq!(analysis.html_files.len(), 2);
    let paths: Vec<&str> = analysis.lessons.iter().map(|l| l.path.as_str()).collect();
    assert_eq!(paths, vec!["lesson.html"]);
}

#[tokio::test]
async fn test_read_failure_is_isolated() {
    let files = vec![
        file("lesson-1.html", &rise_lesson("One", "")),
        unreadable("lesson-2.html"),
        file("lesson-3.html", &rise_lesson("Three", "")),
    ];

    let analysis = analyze_course(files, AnalyzerOptions::default()).await;

    let titles: Vec<&str> = analysis.lessons.iter().map(|l| l.title.as_str()).collect();
    assert_eq!(titles, vec!["One", "Three"]);
    assert_eq!(analysis.skipped.len(), 1);
    assert_eq!(analysis.skipped[0].path, "lesson-2.html");
    assert!(analysis.skipped[0].reason.contains("permission denied"));
}

#[tokio::test]
async fn test_lessons_sorted_naturally() {
    let files = vec![
        file("lesson-10.html", &rise_lesson("Ten", "")),
        file("lesson-2.html", &rise_lesson("Two", "")),
        file("lesson-1.html", &rise_lesson("One", "")),
    ];

    let analysis = analyze_course(files, AnalyzerOptions::default()).await;

    let paths: Vec<&str> = analysis.lessons.iter().map(|l| l.path.as_str()).collect();
    assert_eq!(paths, vec!["lesson-1.html", "lesson-2.html", "lesson-10.html"]);
}

#[tokio::test]
async fn test_concurrent_reads_keep_deterministic_order() {
    let make_files = || {
        (1..=12)
            .rev()
            .map(|i| {
                file(
                    &format!("lesson-{}.html", i),
                    &rise_lesson(&format!("Lesson {}", i), "<div class=\"text-block\">t</div>"),
                )
            })
            .collect::<Vec<_>>()
    };

    let sequential = analyze_course(make_files(), AnalyzerOptions::default()).await;
    let concurrent = analyze_course(
        make_files(),
        AnalyzerOptions {
            read_concurrency: 4,
        },
    )
    .await;

    let titles = |a: &jobaid::CourseAnalysis| -> Vec<String> {
        a.lessons.iter().map(|l| l.title.clone()).collect()
    };
    assert_eq!(titles(&sequential), titles(&concurrent));
    assert_eq!(titles(&sequential)[0], "Lesson 1");
    assert_eq!(titles(&sequential)[11], "Lesson 12");
}

#[tokio::test]
async fn test_reads_in_flight_stay_within_concurrency() {
    let gauge = Arc::new(ReadGauge::default());
    let files: Vec<Arc<dyn jobaid::CourseFile>> = (1..=6)
        .map(|i| {
            Arc::new(GaugedFile {
                path: format!("lesson-{}.html", i),
                body: rise_lesson(&format!("Lesson {}", i), ""),
                gauge: gauge.clone(),
            }) as Arc<dyn jobaid::CourseFile>
        })
        .collect();

    let analysis = analyze_course(
        files,
        AnalyzerOptions {
            read_concurrency: 2,
        },
    )
    .await;

    assert_eq!(analysis.lessons.len(), 6);
    assert_eq!(gauge.peak(), 2);
}

#[tokio::test]
async fn test_stray_bytes_keep_the_lesson() {
    let declared = b"<html><head><meta charset=\"utf-8\"><title>Caf\xc3\xa9 Safety</title></head>\
        <body class=\"rise-lesson\"><div class=\"text-block\">It\x92s slippery.</div></body></html>";
    let undeclared = b"<html><head><title>Caf\xc3\xa9 Safety</title></head>\
        <body class=\"rise-lesson\"><div class=\"text-block\">It\x92s slippery.</div></body></html>";
    let files = vec![
        file_bytes("lesson-1.html", declared),
        file_bytes("lesson-2.html", undeclared),
    ];

    let analysis = analyze_course(files, AnalyzerOptions::default()).await;

    assert!(analysis.skipped.is_empty());
    assert_eq!(analysis.lessons.len(), 2);
    for lesson in &analysis.lessons {
        assert_eq!(lesson.title, "Café Safety");
        assert_eq!(lesson.blocks[0].content, "It\u{FFFD}s slippery.");
    }
}

#[tokio::test]
async fn test_main_index_detection() {
    let files = vec![
        file("index.html", "<html></html>"),
        file("scormcontent/index.html", "<html></html>"),
        file("INDEX.HTML", "<html></html>"),
    ];

    let analysis = analyze_course(files, AnalyzerOptions::default()).await;

    // Both root candidates qualify; the last one wins.
    let main = analysis.main_index.expect("root index should be found");
    assert_eq!(main.path, "INDEX.HTML");
}

#[tokio::test]
async fn test_no_main_index_in_subfolder_only() {
    let files = vec![file("scormcontent/index.html", "<html></html>")];
    let analysis = analyze_course(files, AnalyzerOptions::default()).await;
    assert!(analysis.main_index.is_none());
}

#[tokio::test]
async fn test_media_linked_to_course_files() {
    let body = r#"<img src="../assets/ladder.png"><img src="https://cdn.example.com/x.png"><img src="missing.png">"#;
    let files = vec![
        file("scormcontent/lessons/lesson-1.html", &rise_lesson("Ladders", body)),
        file("scormcontent/assets/ladder.png", "png"),
    ];

    let analysis = analyze_course(files, AnalyzerOptions::default()).await;
    let media = &analysis.lessons[0].media;

    assert_eq!(media.len(), 3);
    assert_eq!(media[0].local_path.as_deref(), Some("scormcontent/assets/ladder.png"));
    assert_eq!(media[1].local_path, None);
    assert_eq!(media[2].local_path, None);

    let unresolved: Vec<&str> = analysis
        .unresolved_media()
        .into_iter()
        .map(|(_, m)| m.src.as_str())
        .collect();
    assert_eq!(unresolved, vec!["https://cdn.example.com/x.png", "missing.png"]);
}

#[tokio::test]
async fn test_end_to_end_structure() {
    let body = r#"<div class="block text-block"><p>Face the ladder when climbing.</p></div><p><img src="assets/ladder.png" alt=""></p>"#;
    let files = vec![
        file("index.html", "<html><body>Launcher</body></html>"),
        file("lesson-1.html", &rise_lesson("Climbing Ladders", body)),
        file("assets/ladder.png", "png"),
    ];

    let analysis = analyze_course(files, AnalyzerOptions::default()).await;
    let structure = build_structure_at(
        &analysis.lessons,
        &StructureOptions::default(),
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap(),
    );

    assert_eq!(structure.sections.len(), 1);
    assert_eq!(structure.sections[0].media.len(), 1);
    assert_eq!(structure.sections[0].media[0].kind, MediaKind::Image);
    assert_eq!(structure.table_of_contents.len(), 1);
    assert_eq!(structure.table_of_contents[0].sections, vec![BlockKind::Text]);
    assert_eq!(structure.table_of_contents[0].page, 2);

    let value = serde_json::to_value(&structure).unwrap();
    assert_eq!(value["title"], json!("Rise Course Job Aid"));
    assert_eq!(value["generated"], json!("10/19/2026"));
    assert_eq!(value["tableOfContents"][0]["sections"], json!(["text"]));
    assert_eq!(value["sections"][0]["title"], json!("Climbing Ladders"));
    assert_eq!(
        value["sections"][0]["media"][0]["localPath"],
        json!("assets/ladder.png")
    );
}
