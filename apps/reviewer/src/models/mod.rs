pub mod resume;

pub use resume::{ResultRow, ResumeFile};
