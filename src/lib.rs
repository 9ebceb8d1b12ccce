//! Structured lesson extraction from exported e-learning course folders.
//!
//! [`analyzer::analyze_course`] classifies the files of an unzipped course,
//! turns each authoring-tool page into a [`extractor::Lesson`], and
//! [`structure::build_structure`] projects the ordered lessons into the
//! [`structure::DocumentStructure`] consumed by the job aid renderer.

pub mod analyzer;
pub mod classifier;
pub mod config;
pub mod extractor;
pub mod source;
pub mod structure;

pub use analyzer::{AnalyzerOptions, CourseAnalysis, analyze_course};
pub use extractor::{Lesson, analyze_lesson, analyze_lesson_with_media};
pub use source::{CourseFile, DiskFile, MemoryFile, ReadError, load_course_dir};
pub use structure::{DocumentStructure, StructureOptions, build_structure};
