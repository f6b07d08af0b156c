// UI Layer
pub mod components;
pub mod layout;
pub mod renderer;
pub mod theme;

pub use layout::{LayoutAreas, LayoutManager};
pub use theme::Theme;
