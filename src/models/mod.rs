// Data Models
pub mod file_entry;
pub mod history;
pub mod navigator;
pub mod viewer;

pub use file_entry::{FileEntry, FileKind};
pub use history::DirectoryHistory;
pub use navigator::Navigator;
pub use viewer::{Viewer, ViewerContent};
