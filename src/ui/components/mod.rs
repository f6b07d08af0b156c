// UI Components
pub mod command_bar;
pub mod file_list;
pub mod image_viewer;
pub mod status_bar;
pub mod text_viewer;
pub mod title_bar;
pub mod warning;

// Re-export components for convenience
pub use command_bar::{CommandBar, CommandItem};
pub use file_list::{FileList, IconMode};
pub use image_viewer::ImageViewer;
pub use status_bar::StatusBar;
pub use text_viewer::TextViewer;
pub use title_bar::TitleBar;
pub use warning::WarningScreen;

/// 버퍼의 한 줄을 문자열로 (렌더링 테스트용)
#[cfg(test)]
pub(crate) fn buffer_line(buf: &ratatui::buffer::Buffer, y: u16) -> String {
    let area = buf.area;
    (area.x..area.x + area.width)
        .map(|x| buf[(x, y)].symbol().to_string())
        .collect()
}
