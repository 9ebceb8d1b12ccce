pub mod disk;
pub mod errors;
pub mod pipeline;
pub mod types;

pub use disk::{DEFAULT_MAX_FILE_BYTES, DiskFile, load_course_dir};
pub use errors::ReadError;
pub use types::{CourseFile, FileRole, InputFile, MemoryFile};
