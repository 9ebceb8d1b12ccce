use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReadError {
    #[error("file not found: {0}")]
    NotFound(String),

    #[error("permission denied: {0}")]
    PermissionDenied(String),

    #[error("file too large ({0} bytes)")]
    TooLarge(u64),

    #[error("io error: {0}")]
    Io(String),
}

impl ReadError {
    /// Whether a second read of the same file could plausibly succeed.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::NotFound(_) => false,
            Self::PermissionDenied(_) => false,
            Self::TooLarge(_) => false,

            Self::Io(_) => true,
        }
    }

    pub fn from_io_error(err: std::io::Error, path: &str) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => Self::NotFound(path.to_string()),
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied(path.to_string()),
            _ => Self::Io(format!("{}: {}", path, err)),
        }
    }
}
