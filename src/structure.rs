//! Document structure handed to the job aid renderer.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::extractor::{Assessment, BlockKind, Interaction, Lesson, MediaReference};

pub const DEFAULT_TITLE: &str = "Rise Course Job Aid";
pub const DEFAULT_AUTHOR: &str = "Course Author";

pub const REFLECTION_QUESTION: &str = "What are the key takeaways from this lesson?";
pub const REFLECTION_SPACE: &str = "Use this area to write your notes and action items.";

/// Page 1 is the cover.
const FIRST_LESSON_PAGE: usize = 2;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StructureOptions {
    pub title: Option<String>,
    pub author: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentStructure {
    pub title: String,
    pub author: String,
    pub generated: String,
    pub table_of_contents: Vec<TocEntry>,
    pub sections: Vec<Section>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TocEntry {
    pub title: String,
    pub page: usize,
    /// Kinds of the lesson's content blocks.
    pub sections: Vec<BlockKind>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub title: String,
    pub description: String,
    pub content: String,
    pub interactions: Vec<Interaction>,
    pub assessments: Vec<Assessment>,
    pub media: Vec<MediaReference>,
    pub reflection: Reflection,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reflection {
    pub question: String,
    pub space: String,
}

impl Default for Reflection {
    fn default() -> Self {
        Self {
            question: REFLECTION_QUESTION.to_string(),
            space: REFLECTION_SPACE.to_string(),
        }
    }
}

/// Build the document structure dated today.
pub fn build_structure(lessons: &[Lesson], options: &StructureOptions) -> DocumentStructure {
    build_structure_at(lessons, options, Local::now().date_naive())
}

pub fn build_structure_at(
    lessons: &[Lesson],
    options: &StructureOptions,
    date: NaiveDate,
) -> DocumentStructure {
    let table_of_contents = lessons
        .iter()
        .enumerate()
        .map(|(index, lesson)| TocEntry {
            title: lesson.title.clone(),
            page: index + FIRST_LESSON_PAGE,
            sections: lesson.block_kinds(),
        })
        .collect();

    let sections = lessons
        .iter()
        .map(|lesson| Section {
            title: lesson.title.clone(),
            description: lesson.description.clone(),
            content: lesson.clean_content.clone(),
            interactions: lesson.interactions.clone(),
            assessments: lesson.assessments.clone(),
            media: lesson.media.clone(),
            reflection: Reflection::default(),
        })
        .collect();

    DocumentStructure {
        title: options
            .title
            .clone()
            .unwrap_or_else(|| DEFAULT_TITLE.to_string()),
        author: options
            .author
            .clone()
            .unwrap_or_else(|| DEFAULT_AUTHOR.to_string()),
        generated: date.format("%-m/%-d/%Y").to_string(),
        table_of_contents,
        sections,
    }
}
