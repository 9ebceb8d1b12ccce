use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{instrument, warn};
use walkdir::WalkDir;

use crate::source::{errors::ReadError, pipeline::decode_text, types::CourseFile};

pub const DEFAULT_MAX_FILE_BYTES: u64 = 20 * 1024 * 1024; // 20MB

/// A course file on the local filesystem.
#[derive(Debug, Clone)]
pub struct DiskFile {
    name: String,
    relative_path: String,
    full_path: PathBuf,
    max_bytes: u64,
}

impl DiskFile {
    pub fn new(full_path: PathBuf, relative_path: String, max_bytes: u64) -> Self {
        let name = full_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| relative_path.clone());
        Self {
            name,
            relative_path,
            full_path,
            max_bytes,
        }
    }

    pub fn full_path(&self) -> &Path {
        &self.full_path
    }
}

#[async_trait]
impl CourseFile for DiskFile {
    fn name(&self) -> &str {
        &self.name
    }

    fn relative_path(&self) -> &str {
        &self.relative_path
    }

    #[instrument(skip_all, fields(path = %self.relative_path))]
    async fn read_text(&self) -> Result<String, ReadError> {
        let metadata = tokio::fs::metadata(&self.full_path)
            .await
            .map_err(|e| ReadError::from_io_error(e, &self.relative_path))?;

        // Check size before reading the whole file
        if metadata.len() > self.max_bytes {
            return Err(ReadError::TooLarge(metadata.len()));
        }

        let body = tokio::fs::read(&self.full_path)
            .await
            .map_err(|e| ReadError::from_io_error(e, &self.relative_path))?;

        Ok(decode_text(&body, &self.relative_path))
    }
}

/// Collect every regular file under an unzipped course folder.
///
/// Paths are relative to `root` with `/` separators and the result is
/// sorted by path.
pub fn load_course_dir(
    root: impl AsRef<Path>,
    max_bytes: u64,
) -> Result<Vec<Arc<dyn CourseFile>>, ReadError> {
    let root = root.as_ref();
    let display_root = root.display().to_string();

    let metadata = std::fs::metadata(root).map_err(|e| ReadError::from_io_error(e, &display_root))?;
    if !metadata.is_dir() {
        return Err(ReadError::Io(format!("{} is not a directory", display_root)));
    }

    let mut files: Vec<DiskFile> = Vec::new();
    for entry in WalkDir::new(root).follow_links(true) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Skipping unreadable entry under {}: {}", display_root, e);
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }

        let Ok(relative) = entry.path().strip_prefix(root) else {
            continue;
        };
        let relative_path = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");

        files.push(DiskFile::new(
            entry.path().to_path_buf(),
            relative_path,
            max_bytes,
        ));
    }

    files.sort_by(|a, b| a.relative_path.cmp(&b.relative_path));

    Ok(files
        .into_iter()
        .map(|f| Arc::new(f) as Arc<dyn CourseFile>)
        .collect())
}
