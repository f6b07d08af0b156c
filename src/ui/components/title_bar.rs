// Title bar component - 상단 타이틀바
//
// 1줄: 제목 (열린 파일 이름 또는 현재 디렉토리 이름)
// 2줄: 현재 디렉토리 전체 경로

use crate::ui::Theme;
use crate::utils::path_display::shorten_path;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};
use std::path::Path;

/// 초기화 전 제목
pub const DEFAULT_TITLE: &str = "File Explorer";

pub struct TitleBar<'a> {
    title: &'a str,
    path: Option<&'a Path>,
    home: Option<&'a Path>,
    bg_color: Color,
    fg_color: Color,
    subtitle_color: Color,
}

impl<'a> TitleBar<'a> {
    pub fn new(title: &'a str) -> Self {
        Self {
            title,
            path: None,
            home: None,
            bg_color: Color::Rgb(45, 45, 48),
            fg_color: Color::Rgb(255, 255, 255),
            subtitle_color: Color::Rgb(157, 157, 157),
        }
    }

    /// 부제목으로 표시할 경로
    pub fn path(mut self, path: Option<&'a Path>) -> Self {
        self.path = path;
        self
    }

    /// `~` 축약 기준 홈 디렉토리
    pub fn home(mut self, home: Option<&'a Path>) -> Self {
        self.home = home;
        self
    }

    /// 테마 적용
    pub fn theme(mut self, theme: &Theme) -> Self {
        self.bg_color = theme.title_bar_bg.to_color();
        self.fg_color = theme.title_bar_fg.to_color();
        self.subtitle_color = theme.subtitle_fg.to_color();
        self
    }
}

impl Widget for TitleBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }
        buf.set_style(area, Style::default().bg(self.bg_color));

        let title = Line::from(vec![
            Span::raw(" "),
            Span::styled(
                self.title,
                Style::default().fg(self.fg_color).add_modifier(Modifier::BOLD),
            ),
        ]);
        buf.set_line(area.x, area.y, &title, area.width);

        if area.height < 2 {
            return;
        }
        if let Some(path) = self.path {
            let max_width = (area.width as usize).saturating_sub(2);
            let subtitle = format!(" {}", shorten_path(path, self.home, max_width));
            buf.set_string(
                area.x,
                area.y + 1,
                subtitle,
                Style::default().fg(self.subtitle_color),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::components::buffer_line;

    #[test]
    fn test_title_and_path_lines() {
        let area = Rect::new(0, 0, 40, 2);
        let mut buf = Buffer::empty(area);

        TitleBar::new("Music")
            .path(Some(Path::new("/storage/Music")))
            .render(area, &mut buf);

        assert!(buffer_line(&buf, 0).starts_with(" Music"));
        assert!(buffer_line(&buf, 1).starts_with(" /storage/Music"));
    }

    #[test]
    fn test_without_path_only_title() {
        let area = Rect::new(0, 0, 40, 2);
        let mut buf = Buffer::empty(area);

        TitleBar::new(DEFAULT_TITLE).render(area, &mut buf);

        assert!(buffer_line(&buf, 0).starts_with(" File Explorer"));
        assert_eq!(buffer_line(&buf, 1).trim(), "");
    }
}
