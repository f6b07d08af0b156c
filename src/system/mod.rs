// System Layer
pub mod config;
pub mod filesystem;
pub mod image_decoder;
pub mod loader;
pub mod preview;

pub use config::Config;
pub use filesystem::{FileAccess, FileSystem};
pub use loader::{Lane, LoadJob, LoadOutcome, LoadResult, Loader};
pub use preview::PreviewKind;
