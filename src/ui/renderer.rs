// Renderer - App 상태를 화면에 그린다

use crate::app::{App, Mode};
use crate::models::ViewerContent;
use crate::ui::components::file_list::scroll_to_cursor;
use crate::ui::components::{
    CommandBar, FileList, ImageViewer, StatusBar, TextViewer, TitleBar, WarningScreen,
};
use crate::ui::{LayoutAreas, Theme};
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    widgets::{Paragraph, Widget},
    Frame,
};

/// 한 프레임 그리기
///
/// 레이아웃을 갱신하고, 창 크기가 바뀌어 커서가 화면 밖으로 나갔으면 스크롤을 보정한다.
pub fn render(f: &mut Frame<'_>, app: &mut App) {
    let size = f.area();
    app.layout.update(size);

    if app.layout.is_too_small() {
        let (width, height) = app.layout.terminal_size();
        let warning = WarningScreen::new()
            .current_size(width, height)
            .theme(&app.theme);
        f.render_widget(warning, app.layout.areas().warning);
        return;
    }

    app.scroll_offset =
        scroll_to_cursor(app.selected_index, app.scroll_offset, app.layout.body_height());

    let areas = *app.layout.areas();
    render_main_ui(f, app, &areas);
}

fn render_main_ui(f: &mut Frame<'_>, app: &App, areas: &LayoutAreas) {
    let theme = &app.theme;

    let title = app.title();
    let title_bar = TitleBar::new(&title)
        .path(app.navigator.current_dir())
        .home(app.home_dir())
        .theme(theme);
    f.render_widget(title_bar, areas.title_bar);

    match app.mode() {
        Mode::Browsing => {
            let list = FileList::new(app.navigator.entries())
                .selected_index(app.selected_index)
                .scroll_offset(app.scroll_offset)
                .loading(app.is_listing_pending())
                .icon_mode(app.icon_mode)
                .theme(theme);
            f.render_widget(list, areas.body);
        }
        Mode::Previewing => render_viewer(f, app, theme, areas.body),
    }

    render_status_bar(f, app, theme, areas.status_bar);

    let commands = app.command_items();
    f.render_widget(CommandBar::new(&commands).theme(theme), areas.command_bar);
}

fn render_viewer(f: &mut Frame<'_>, app: &App, theme: &Theme, area: Rect) {
    match app.viewer.content() {
        ViewerContent::Text(text) => {
            let viewer = TextViewer::new(text).scroll(app.viewer_scroll).theme(theme);
            f.render_widget(viewer, area);
        }
        ViewerContent::Image(image) => {
            let viewer = ImageViewer::new(image)
                .zoom(app.image_zoom)
                .offset(app.image_offset)
                .theme(theme);
            f.render_widget(viewer, area);
        }
        // 워커 응답 대기 중
        ViewerContent::None => {
            let y = area.y + area.height / 2;
            Paragraph::new("Loading...")
                .alignment(Alignment::Center)
                .style(Style::default().fg(theme.metadata.to_color()))
                .render(Rect { y, height: 1, ..area }, f.buffer_mut());
        }
    }
}

fn render_status_bar(f: &mut Frame<'_>, app: &App, theme: &Theme, area: Rect) {
    let entries = app.navigator.entries();
    let dir_count = entries.iter().filter(|entry| entry.is_directory).count();
    let detail = app.status_detail();

    let status_bar = StatusBar::new()
        .dir_count(dir_count)
        .file_count(entries.len() - dir_count)
        .loading(app.is_loading())
        .message(app.toast())
        .detail(detail.as_deref())
        .theme(theme);
    f.render_widget(status_bar, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::filesystem::fake::MemoryFileSystem;
    use crate::system::{Config, FileAccess};
    use crate::ui::components::buffer_line;
    use ratatui::{backend::TestBackend, Terminal};
    use std::path::PathBuf;
    use std::sync::Arc;

    fn app_at(fs: MemoryFileSystem, start: &str) -> App {
        let fs: Arc<dyn FileAccess> = Arc::new(fs);
        let mut app = App::new(&Config::default(), &[PathBuf::from(start)], fs).unwrap();
        app.settle();
        app
    }

    fn draw(app: &mut App, width: u16, height: u16) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| render(f, app)).unwrap();
        let buf = terminal.backend().buffer();
        (0..height).map(|y| buffer_line(buf, y)).collect()
    }

    #[test]
    fn test_empty_folder_state_is_rendered() {
        let fs = MemoryFileSystem::new();
        fs.add_dir("/empty");
        let mut app = app_at(fs, "/empty");

        let screen = draw(&mut app, 60, 12);

        assert!(screen[0].contains("empty"));
        assert!(screen[1].contains("/empty"));
        assert!(screen.iter().any(|line| line.contains("Empty folder")));
        assert!(screen[10].contains("0 folders, 0 files"));
    }

    #[test]
    fn test_text_preview_replaces_listing() {
        let fs = MemoryFileSystem::new();
        fs.add_dir("/notes").add_file("/notes/todo.txt", b"buy milk");
        let mut app = app_at(fs, "/notes");
        app.open_selected();
        app.settle();

        let screen = draw(&mut app, 60, 12);

        assert!(screen[0].contains("todo.txt"));
        assert!(screen[2].contains("buy milk"));
        assert!(screen[11].contains("Close"));
    }

    #[test]
    fn test_small_terminal_shows_warning() {
        let fs = MemoryFileSystem::new();
        fs.add_dir("/empty");
        let mut app = app_at(fs, "/empty");

        let screen = draw(&mut app, 30, 6);

        assert!(screen.iter().any(|line| line.contains("Terminal too small")));
    }
}
