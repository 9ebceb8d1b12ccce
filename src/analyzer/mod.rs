pub mod media;
pub mod ordering;

use futures::{StreamExt, stream};
use serde::Serialize;
use std::collections::HashSet;
use std::pin::pin;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

use crate::classifier::{classify_file, is_main_index};
use crate::extractor::{Lesson, MediaReference, analyze_lesson_with_media};
use crate::source::{CourseFile, FileRole, InputFile};

/// Analyzer tuning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalyzerOptions {
    /// Reads in flight at once. Results are consumed in input order
    /// regardless of which read finishes first.
    pub read_concurrency: usize,
}

impl Default for AnalyzerOptions {
    fn default() -> Self {
        Self {
            read_concurrency: 1,
        }
    }
}

/// An HTML file that could not be read.
#[derive(Debug, Clone, Serialize)]
pub struct SkippedFile {
    pub path: String,
    pub reason: String,
}

/// Whole-course analysis result.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseAnalysis {
    pub total_files: usize,
    pub html_files: Vec<InputFile>,
    pub json_files: Vec<InputFile>,
    pub media_files: Vec<InputFile>,
    pub main_index: Option<InputFile>,
    pub lessons: Vec<Lesson>,
    pub skipped: Vec<SkippedFile>,
}

impl CourseAnalysis {
    /// Media references that do not point at a file in the course folder.
    pub fn unresolved_media(&self) -> Vec<(&Lesson, &MediaReference)> {
        self.lessons
            .iter()
            .flat_map(|lesson| {
                lesson
                    .media
                    .iter()
                    .filter(|m| m.local_path.is_none())
                    .map(move |m| (lesson, m))
            })
            .collect()
    }
}

/// Classify every file, turn authoring-tool pages into lessons and order
/// them by path.
///
/// Never fails: a file that cannot be read is logged and listed in
/// [`CourseAnalysis::skipped`].
#[instrument(skip_all, fields(files = files.len()))]
pub async fn analyze_course(
    files: Vec<Arc<dyn CourseFile>>,
    options: AnalyzerOptions,
) -> CourseAnalysis {
    let mut analysis = CourseAnalysis {
        total_files: files.len(),
        html_files: Vec::new(),
        json_files: Vec::new(),
        media_files: Vec::new(),
        main_index: None,
        lessons: Vec::new(),
        skipped: Vec::new(),
    };

    for file in files {
        let input = classify_file(file);

        // Last root index.html wins
        if is_main_index(&input.name, &input.path) {
            analysis.main_index = Some(input.clone());
        }

        match input.role {
            FileRole::Html => analysis.html_files.push(input),
            FileRole::Json => analysis.json_files.push(input),
            FileRole::Media => analysis.media_files.push(input),
            FileRole::Unknown => debug!("Ignoring unsupported file {}", input.path),
        }
    }

    let mut lessons = Vec::new();
    let mut skipped = Vec::new();
    {
        let media_paths: HashSet<&str> = analysis
            .media_files
            .iter()
            .map(|f| f.path.as_str())
            .collect();

        // Bodies are consumed as they arrive so at most `read_concurrency` are held
        let mut reads = pin!(
            stream::iter(analysis.html_files.iter())
                .map(|input| async move { (input, input.read_text().await) })
                .buffered(options.read_concurrency.max(1))
        );

        while let Some((input, result)) = reads.next().await {
            match result {
                Ok(html) => {
                    let locate = media::locate_in_course(&input.path, &media_paths);
                    match analyze_lesson_with_media(&html, &input.path, &input.name, locate) {
                        Some(lesson) => {
                            debug!(
                                "Extracted lesson '{}' from {} ({} blocks, {} media)",
                                lesson.title,
                                input.path,
                                lesson.blocks.len(),
                                lesson.media.len()
                            );
                            lessons.push(lesson);
                        }
                        None => debug!("{} is not authoring-tool content, skipping", input.path),
                    }
                }
                Err(e) => {
                    warn!(transient = e.is_transient(), "Error analyzing {}: {}", input.path, e);
                    skipped.push(SkippedFile {
                        path: input.path.clone(),
                        reason: e.to_string(),
                    });
                }
            }
        }
    }

    ordering::sort_lessons(&mut lessons);

    analysis.lessons = lessons;
    analysis.skipped = skipped;

    info!(
        "Analyzed {} files: {} html, {} lessons, {} skipped",
        analysis.total_files,
        analysis.html_files.len(),
        analysis.lessons.len(),
        analysis.skipped.len()
    );

    analysis
}
