// Text viewer component - 텍스트 미리보기
//
// 긴 줄은 표시 너비 기준으로 글자 단위로 접는다. 스크롤 단위는 접힌 화면 줄이다.

use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};
use unicode_width::UnicodeWidthChar;

/// 좌우 여백 (칸)
const PADDING: u16 = 1;
const TAB_WIDTH: usize = 4;

pub struct TextViewer<'a> {
    text: &'a str,
    /// 맨 위에 보일 화면 줄 번호
    scroll: usize,
    bg_color: Color,
    fg_color: Color,
}

impl<'a> TextViewer<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            scroll: 0,
            bg_color: Color::Rgb(30, 30, 30),
            fg_color: Color::Rgb(212, 212, 212),
        }
    }

    pub fn scroll(mut self, scroll: usize) -> Self {
        self.scroll = scroll;
        self
    }

    /// 테마 적용
    pub fn theme(mut self, theme: &Theme) -> Self {
        self.bg_color = theme.bg_primary.to_color();
        self.fg_color = theme.fg_primary.to_color();
        self
    }
}

impl Widget for TextViewer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let style = Style::default().fg(self.fg_color).bg(self.bg_color);
        buf.set_style(area, style);
        if area.width <= PADDING * 2 {
            return;
        }

        let width = content_width(area.width);
        let x = area.x + PADDING;
        let rows = wrapped_rows(self.text, width)
            .skip(self.scroll)
            .take(area.height as usize);
        for (y, row) in (area.y..area.bottom()).zip(rows) {
            buf.set_stringn(x, y, &row, width, style);
        }
    }
}

/// 본문 너비에서 여백을 뺀 글자 영역 너비
pub fn content_width(body_width: u16) -> usize {
    usize::from(body_width.saturating_sub(PADDING * 2)).max(1)
}

/// 전체 텍스트를 접은 화면 줄
fn wrapped_rows(text: &str, width: usize) -> impl Iterator<Item = String> + '_ {
    text.lines().flat_map(move |line| wrap_line(line, width))
}

/// 한 줄을 `width` 칸씩 접는다. 빈 줄도 화면 한 줄을 차지한다
fn wrap_line(line: &str, width: usize) -> Vec<String> {
    let mut rows = Vec::new();
    let mut current = String::new();
    let mut used = 0;

    for ch in line.chars() {
        let (piece, ch_width) = match ch {
            '\t' => (" ".repeat(TAB_WIDTH), TAB_WIDTH),
            _ => match ch.width() {
                Some(w) => (ch.to_string(), w),
                // 제어 문자
                None => continue,
            },
        };

        if used + ch_width > width && used > 0 {
            rows.push(std::mem::take(&mut current));
            used = 0;
        }
        current.push_str(&piece);
        used += ch_width;
    }

    rows.push(current);
    rows
}

/// 접힌 화면 줄 수
pub fn wrapped_row_count(text: &str, width: usize) -> usize {
    text.lines().map(|line| wrap_line(line, width).len()).sum()
}

/// 스크롤 가능한 마지막 화면 줄 번호
pub fn max_scroll(text: &str, width: usize, visible_rows: usize) -> usize {
    wrapped_row_count(text, width).saturating_sub(visible_rows.max(1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::components::buffer_line;

    #[test]
    fn test_renders_from_scroll_offset() {
        let text = "line 0\nline 1\nline 2\nline 3";
        let area = Rect::new(0, 0, 20, 2);
        let mut buf = Buffer::empty(area);

        TextViewer::new(text).scroll(2).render(area, &mut buf);

        assert_eq!(buffer_line(&buf, 0).trim(), "line 2");
        assert_eq!(buffer_line(&buf, 1).trim(), "line 3");
    }

    #[test]
    fn test_long_lines_wrap() {
        let area = Rect::new(0, 0, 12, 3);
        let mut buf = Buffer::empty(area);

        TextViewer::new("abcdefghijklmno").render(area, &mut buf);

        assert_eq!(buffer_line(&buf, 0).trim(), "abcdefghij");
        assert_eq!(buffer_line(&buf, 1).trim(), "klmno");
    }

    #[test]
    fn test_scroll_counts_wrapped_rows() {
        // 25글자 한 줄, 폭 10이면 화면 3줄
        let text = "abcdefghijklmnopqrstuvwxy";
        assert_eq!(wrapped_row_count(text, 10), 3);
        assert_eq!(max_scroll(text, 10, 2), 1);

        let area = Rect::new(0, 0, 12, 2);
        let mut buf = Buffer::empty(area);
        TextViewer::new(text).scroll(1).render(area, &mut buf);

        assert_eq!(buffer_line(&buf, 0).trim(), "klmnopqrst");
        assert_eq!(buffer_line(&buf, 1).trim(), "uvwxy");
    }

    #[test]
    fn test_wide_characters_do_not_split() {
        // 한글 한 글자는 2칸
        assert_eq!(wrap_line("가나다", 5), vec!["가나", "다"]);
        assert_eq!(wrap_line("", 5), vec![""]);
        assert_eq!(wrap_line("a\tb", 10), vec!["a    b"]);
    }

    #[test]
    fn test_scroll_reaches_beyond_u16_rows() {
        let text: String = (0..70_000).map(|i| format!("row {}\n", i)).collect();
        let area = Rect::new(0, 0, 20, 2);
        let max = max_scroll(&text, content_width(area.width), area.height as usize);
        assert_eq!(max, 69_998);

        let mut buf = Buffer::empty(area);
        TextViewer::new(&text).scroll(max).render(area, &mut buf);

        assert_eq!(buffer_line(&buf, 0).trim(), "row 69998");
        assert_eq!(buffer_line(&buf, 1).trim(), "row 69999");
    }

    #[test]
    fn test_max_scroll() {
        assert_eq!(max_scroll("a\nb\nc\nd", 10, 2), 2);
        assert_eq!(max_scroll("a", 10, 10), 0);
        assert_eq!(max_scroll("", 10, 0), 0);
    }
}
