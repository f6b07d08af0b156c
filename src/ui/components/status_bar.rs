// Status bar component - 상태바 컴포넌트
//
// 항목 개수, 로딩 표시, 알림 메시지, 커서 위치/뷰어 정보 표시

use crate::ui::Theme;
use crate::utils::formatter::pluralize;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

/// 상태바 컴포넌트
pub struct StatusBar<'a> {
    dir_count: usize,
    file_count: usize,
    /// 백그라운드 로딩 중 여부
    loading: bool,
    /// 알림 메시지 (개수 대신 표시)
    message: Option<&'a str>,
    /// 오른쪽 정보 (커서 위치, 이미지 크기 등)
    detail: Option<&'a str>,
    bg_color: Color,
    fg_color: Color,
    message_color: Color,
}

impl<'a> Default for StatusBar<'a> {
    fn default() -> Self {
        Self {
            dir_count: 0,
            file_count: 0,
            loading: false,
            message: None,
            detail: None,
            bg_color: Color::Rgb(0, 122, 204),
            fg_color: Color::Rgb(255, 255, 255),
            message_color: Color::Yellow,
        }
    }
}

impl<'a> StatusBar<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dir_count(mut self, count: usize) -> Self {
        self.dir_count = count;
        self
    }

    pub fn file_count(mut self, count: usize) -> Self {
        self.file_count = count;
        self
    }

    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    pub fn message(mut self, message: Option<&'a str>) -> Self {
        self.message = message;
        self
    }

    pub fn detail(mut self, detail: Option<&'a str>) -> Self {
        self.detail = detail;
        self
    }

    /// 테마 적용
    pub fn theme(mut self, theme: &Theme) -> Self {
        self.bg_color = theme.status_bar_bg.to_color();
        self.fg_color = theme.status_bar_fg.to_color();
        self.message_color = theme.warning.to_color();
        self
    }

    fn left_text(&self) -> (String, Color) {
        if let Some(message) = self.message {
            return (format!(" {}", message), self.message_color);
        }
        if self.loading {
            return (" Loading...".to_string(), self.fg_color);
        }
        (
            format!(
                " {}, {}",
                pluralize(self.dir_count, "folder", "folders"),
                pluralize(self.file_count, "file", "files")
            ),
            self.fg_color,
        )
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(self.bg_color));

        let (left, left_color) = self.left_text();
        let right = self.detail.map(|d| format!("{} ", d)).unwrap_or_default();

        let padding_len = (area.width as usize).saturating_sub(left.width() + right.width());

        let spans = vec![
            Span::styled(left, Style::default().fg(left_color)),
            Span::raw(" ".repeat(padding_len)),
            Span::styled(right, Style::default().fg(self.fg_color)),
        ];

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
