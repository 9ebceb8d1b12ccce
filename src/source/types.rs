use async_trait::async_trait;
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::source::{errors::ReadError, pipeline::decode_text};

/// A file handle from an exported course folder.
///
/// `relative_path` uses `/` separators; files at the root of the
/// collection have no separator at all.
#[async_trait]
pub trait CourseFile: Send + Sync {
    fn name(&self) -> &str;

    fn relative_path(&self) -> &str;

    /// Read the whole file as text.
    async fn read_text(&self) -> Result<String, ReadError>;
}

/// Role assigned to a file by the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileRole {
    Html,
    Json,
    Media,
    Unknown,
}

/// A classified course file.
#[derive(Clone, Serialize)]
pub struct InputFile {
    pub name: String,
    pub path: String,
    pub role: FileRole,
    #[serde(skip)]
    pub file: Arc<dyn CourseFile>,
}

impl InputFile {
    pub async fn read_text(&self) -> Result<String, ReadError> {
        self.file.read_text().await
    }
}

impl std::fmt::Debug for InputFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InputFile")
            .field("name", &self.name)
            .field("path", &self.path)
            .field("role", &self.role)
            .finish()
    }
}

/// A course file held entirely in memory.
#[derive(Debug, Clone)]
pub struct MemoryFile {
    name: String,
    path: String,
    body: Bytes,
}

impl MemoryFile {
    /// The file name is taken from the last path segment.
    pub fn new(path: impl Into<String>, body: impl Into<Bytes>) -> Self {
        let path = path.into();
        let name = path.rsplit('/').next().unwrap_or(&path).to_string();
        Self {
            name,
            path,
            body: body.into(),
        }
    }

    pub fn into_shared(self) -> Arc<dyn CourseFile> {
        Arc::new(self)
    }
}

#[async_trait]
impl CourseFile for MemoryFile {
    fn name(&self) -> &str {
        &self.name
    }

    fn relative_path(&self) -> &str {
        &self.path
    }

    async fn read_text(&self) -> Result<String, ReadError> {
        Ok(decode_text(&self.body, &self.path))
    }
}
