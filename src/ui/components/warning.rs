// Warning screen - 창이 최소 크기보다 작을 때 본문 대신 표시

use crate::ui::layout::{MIN_HEIGHT, MIN_WIDTH};
use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

pub struct WarningScreen {
    width: u16,
    height: u16,
    background: Color,
    headline: Color,
    actual: Color,
    required: Color,
}

impl WarningScreen {
    pub fn new() -> Self {
        Self {
            width: 0,
            height: 0,
            background: Color::Reset,
            headline: Color::Yellow,
            actual: Color::Red,
            required: Color::Gray,
        }
    }

    pub fn current_size(mut self, width: u16, height: u16) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn theme(mut self, theme: &Theme) -> Self {
        self.background = theme.bg_primary.to_color();
        self.headline = theme.warning.to_color();
        self.actual = theme.error.to_color();
        self.required = theme.fg_primary.to_color();
        self
    }

    fn lines(&self) -> [Line<'static>; 2] {
        [
            Line::styled(
                "Terminal too small",
                Style::default().fg(self.headline).add_modifier(Modifier::BOLD),
            ),
            Line::from(vec![
                Span::styled(
                    format!("{}x{}", self.width, self.height),
                    Style::default().fg(self.actual),
                ),
                Span::styled(
                    format!(" < {}x{}", MIN_WIDTH, MIN_HEIGHT),
                    Style::default().fg(self.required),
                ),
            ]),
        ]
    }
}

impl Default for WarningScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for WarningScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(self.background));

        let lines = self.lines();
        let top = area.y + area.height.saturating_sub(lines.len() as u16) / 2;
        for (row, line) in (top..area.bottom()).zip(lines.iter()) {
            // 너비가 모자라면 오른쪽이 잘린다
            let x = area.x + area.width.saturating_sub(line.width() as u16) / 2;
            buf.set_line(x, row, line, area.right() - x);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::components::buffer_line;

    #[test]
    fn test_warning_shows_current_and_required_size() {
        let area = Rect::new(0, 0, 30, 6);
        let mut buf = Buffer::empty(area);

        WarningScreen::new().current_size(30, 6).render(area, &mut buf);

        let text: Vec<String> = (0..area.height).map(|y| buffer_line(&buf, y)).collect();
        assert_eq!(text[2].trim(), "Terminal too small");
        assert_eq!(text[3].trim(), "30x6 < 40x10");
    }

    #[test]
    fn test_warning_survives_single_row() {
        let area = Rect::new(0, 0, 8, 1);
        let mut buf = Buffer::empty(area);

        WarningScreen::new().current_size(8, 1).render(area, &mut buf);

        assert_eq!(buffer_line(&buf, 0), "Terminal");
    }
}
