use async_trait::async_trait;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use jobaid::{CourseFile, MemoryFile, ReadError};

/// A file whose read always fails.
pub struct UnreadableFile {
    pub path: String,
}

#[async_trait]
impl CourseFile for UnreadableFile {
    fn name(&self) -> &str {
        self.path.rsplit('/').next().unwrap_or(&self.path)
    }

    fn relative_path(&self) -> &str {
        &self.path
    }

    async fn read_text(&self) -> Result<String, ReadError> {
        Err(ReadError::PermissionDenied(self.path.clone()))
    }
}

pub fn file(path: &str, body: &str) -> Arc<dyn CourseFile> {
    MemoryFile::new(path, body.to_string()).into_shared()
}

pub fn unreadable(path: &str) -> Arc<dyn CourseFile> {
    Arc::new(UnreadableFile {
        path: path.to_string(),
    })
}

pub fn rise_lesson(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html><html><head><title>{title}</title></head><body class="rise-lesson"><h1>{title}</h1>{body}</body></html>"#,
    )
}

pub fn file_bytes(path: &str, body: &[u8]) -> Arc<dyn CourseFile> {
    MemoryFile::new(path, body.to_vec()).into_shared()
}

/// Counts reads in flight across a set of files.
#[derive(Default)]
pub struct ReadGauge {
    current: AtomicUsize,
    peak: AtomicUsize,
}

impl ReadGauge {
    pub fn peak(&self) -> usize {
        self.peak.load(Ordering::SeqCst)
    }
}

/// A lesson whose read yields to the executor before returning.
pub struct GaugedFile {
    pub path: String,
    pub body: String,
    pub gauge: Arc<ReadGauge>,
}

#[async_trait]
impl CourseFile for GaugedFile {
    fn name(&self) -> &str {
        self.path.rsplit('/').next().unwrap_or(&self.path)
    }

    fn relative_path(&self) -> &str {
        &self.path
    }

    async fn read_text(&self) -> Result<String, ReadError> {
        let now = self.gauge.current.fetch_add(1, Ordering::SeqCst) + 1;
        self.gauge.peak.fetch_max(now, Ordering::SeqCst);
        for _ in 0..3 {
            tokio::task::yield_now().await;
        }
        self.gauge.current.fetch_sub(1, Ordering::SeqCst);
        Ok(self.body.clone())
    }
}
