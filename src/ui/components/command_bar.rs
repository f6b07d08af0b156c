// Command bar component - 하단 커맨드 바 컴포넌트
//
// 현재 모드에서 쓸 수 있는 단축키 표시

use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// 커맨드 항목
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandItem {
    /// 단축키 표시 (j/k, Enter, ...)
    pub key: String,
    pub label: String,
}

impl CommandItem {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
        }
    }
}

/// 커맨드 바 컴포넌트
pub struct CommandBar<'a> {
    commands: &'a [CommandItem],
    bg_color: Color,
    key_fg_color: Color,
    label_fg_color: Color,
}

impl<'a> CommandBar<'a> {
    pub fn new(commands: &'a [CommandItem]) -> Self {
        Self {
            commands,
            bg_color: Color::Rgb(45, 45, 48),
            key_fg_color: Color::Rgb(86, 156, 214),
            label_fg_color: Color::Rgb(204, 204, 204),
        }
    }

    /// 테마 적용
    pub fn theme(mut self, theme: &Theme) -> Self {
        self.bg_color = theme.command_bar_bg.to_color();
        self.key_fg_color = theme.command_key_fg.to_color();
        self.label_fg_color = theme.command_bar_fg.to_color();
        self
    }
}

impl Widget for CommandBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(self.bg_color));

        let key_style = Style::default()
            .fg(self.key_fg_color)
            .add_modifier(Modifier::BOLD);
        let label_style = Style::default().fg(self.label_fg_color);

        let mut spans = vec![Span::raw(" ")];
        for (i, cmd) in self.commands.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(cmd.key.as_str(), key_style));
            spans.push(Span::styled(" ", label_style));
            spans.push(Span::styled(cmd.label.as_str(), label_style));
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::components::buffer_line;

    #[test]
    fn test_command_item_creation() {
        let item = CommandItem::new("Esc", "Back");
        assert_eq!(item.key, "Esc");
        assert_eq!(item.label, "Back");
    }

    #[test]
    fn test_command_bar_renders_keys_and_labels() {
        let items = vec![CommandItem::new("q", "Quit"), CommandItem::new("r", "Refresh")];
        let area = Rect::new(0, 0, 30, 1);
        let mut buf = Buffer::empty(area);

        CommandBar::new(&items).render(area, &mut buf);

        assert!(buffer_line(&buf, 0).starts_with(" q Quit  r Refresh"));
    }
}
