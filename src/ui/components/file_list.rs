// File list component - 디렉토리 목록 컴포넌트
//
// 아이콘, 이름, 크기, 수정 시각을 한 줄에 표시하고 커서 행을 강조

use crate::models::file_entry::{FileEntry, FileKind};
use crate::ui::Theme;
use crate::utils::formatter::{format_date, format_file_size};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use serde::{Deserialize, Serialize};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// 아이콘 표시 모드
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconMode {
    /// 이모지 아이콘 (기본)
    #[default]
    Emoji,
    /// ASCII 텍스트 아이콘 (터미널 호환)
    Ascii,
}

impl IconMode {
    /// 종류별 아이콘
    pub fn icon(self, kind: FileKind) -> &'static str {
        match self {
            IconMode::Emoji => match kind {
                FileKind::Directory => "📁",
                FileKind::Image => "📷",
                FileKind::Text => "📝",
                FileKind::Other => "📄",
            },
            IconMode::Ascii => match kind {
                FileKind::Directory => "/",
                FileKind::Image => "*",
                FileKind::Text => "=",
                FileKind::Other => " ",
            },
        }
    }
}

/// 날짜 컬럼 너비 ("dd/MM/yyyy HH:mm:ss")
const DATE_WIDTH: usize = 19;
/// 크기 컬럼 너비 ("1023.9 KB")
const SIZE_WIDTH: usize = 9;

/// 파일 목록 컴포넌트
pub struct FileList<'a> {
    entries: &'a [FileEntry],
    selected_index: usize,
    scroll_offset: usize,
    /// 목록을 읽는 중이면 빈 목록 대신 로딩 표시
    loading: bool,
    icon_mode: IconMode,
    bg_color: Color,
    file_normal_color: Color,
    file_selected_color: Color,
    file_selected_bg_color: Color,
    directory_color: Color,
    image_color: Color,
    text_color: Color,
    metadata_color: Color,
}

impl<'a> Default for FileList<'a> {
    fn default() -> Self {
        Self {
            entries: &[],
            selected_index: 0,
            scroll_offset: 0,
            loading: false,
            icon_mode: IconMode::default(),
            bg_color: Color::Rgb(30, 30, 30),
            file_normal_color: Color::Rgb(212, 212, 212),
            file_selected_color: Color::Rgb(255, 255, 255),
            file_selected_bg_color: Color::Rgb(0, 120, 212),
            directory_color: Color::Rgb(86, 156, 214),
            image_color: Color::Rgb(197, 134, 192),
            text_color: Color::Rgb(78, 201, 176),
            metadata_color: Color::Rgb(128, 128, 128),
        }
    }
}

impl<'a> FileList<'a> {
    pub fn new(entries: &'a [FileEntry]) -> Self {
        Self {
            entries,
            ..Self::default()
        }
    }

    pub fn selected_index(mut self, index: usize) -> Self {
        self.selected_index = index;
        self
    }

    pub fn scroll_offset(mut self, offset: usize) -> Self {
        self.scroll_offset = offset;
        self
    }

    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    pub fn icon_mode(mut self, mode: IconMode) -> Self {
        self.icon_mode = mode;
        self
    }

    /// 테마 적용
    pub fn theme(mut self, theme: &Theme) -> Self {
        self.bg_color = theme.bg_primary.to_color();
        self.file_normal_color = theme.file_normal.to_color();
        self.file_selected_color = theme.file_selected.to_color();
        self.file_selected_bg_color = theme.file_selected_bg.to_color();
        self.directory_color = theme.directory.to_color();
        self.image_color = theme.image_file.to_color();
        self.text_color = theme.text_file.to_color();
        self.metadata_color = theme.metadata.to_color();
        self
    }

    fn kind_color(&self, kind: FileKind) -> Color {
        match kind {
            FileKind::Directory => self.directory_color,
            FileKind::Image => self.image_color,
            FileKind::Text => self.text_color,
            FileKind::Other => self.file_normal_color,
        }
    }

    /// 목록 대신 가운데 안내 문구 표시
    fn render_placeholder(&self, text: String, area: Rect, buf: &mut Buffer) {
        let y = area.y + area.height / 2;
        let line = Line::from(Span::styled(text, Style::default().fg(self.metadata_color)));
        Paragraph::new(line)
            .alignment(Alignment::Center)
            .render(Rect { y, height: 1, ..area }, buf);
    }

    fn render_entry(&self, entry: &FileEntry, is_cursor: bool, area: Rect, y: u16, buf: &mut Buffer) {
        let width = area.width as usize;
        let show_date = width >= 60;
        let show_size = width >= 45;

        let kind = entry.kind();
        let (name_style, meta_style) = if is_cursor {
            let selected = Style::default()
                .fg(self.file_selected_color)
                .bg(self.file_selected_bg_color);
            (selected.add_modifier(Modifier::BOLD), selected)
        } else {
            (
                Style::default().fg(self.kind_color(kind)),
                Style::default().fg(self.metadata_color),
            )
        };

        let icon = format!(" {} ", self.icon_mode.icon(kind));
        let meta_width = if show_date { DATE_WIDTH + 2 } else { 0 }
            + if show_size { SIZE_WIDTH + 1 } else { 0 };
        let name_width = width.saturating_sub(icon.width() + meta_width + 1);
        let name = truncate_name(&entry.name, name_width);
        let padding = name_width.saturating_sub(name.width()) + 1;

        let mut spans = vec![
            Span::styled(icon, name_style),
            Span::styled(name, name_style),
            Span::styled(" ".repeat(padding), meta_style),
        ];

        if show_size {
            // 디렉토리는 크기를 표시하지 않는다
            let size = if entry.is_directory {
                String::new()
            } else {
                format_file_size(entry.size)
            };
            spans.push(Span::styled(format!("{:>width$} ", size, width = SIZE_WIDTH), meta_style));
        }
        if show_date {
            spans.push(Span::styled(format!(" {} ", format_date(entry.modified)), meta_style));
        }

        buf.set_line(area.x, y, &Line::from(spans), area.width);
    }
}

impl Widget for FileList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        buf.set_style(area, Style::default().bg(self.bg_color));

        if self.entries.is_empty() {
            let text = if self.loading {
                "Loading...".to_string()
            } else {
                format!("{} Empty folder", self.icon_mode.icon(FileKind::Directory))
            };
            self.render_placeholder(text, area, buf);
            return;
        }

        let start = self.scroll_offset.min(self.entries.len());
        let end = (start + area.height as usize).min(self.entries.len());

        for (row, entry) in self.entries[start..end].iter().enumerate() {
            let index = start + row;
            self.render_entry(entry, index == self.selected_index, area, area.y + row as u16, buf);
        }
    }
}

/// 파일명을 최대 너비로 잘라냄 (확장자 보존)
///
/// 중간 생략 방식: "very_long_fi...txt". 확장자가 없으면 끝에서 자른다.
fn truncate_name(name: &str, max_width: usize) -> String {
    if name.width() <= max_width {
        return name.to_string();
    }

    let ellipsis = "...";
    let (stem, ext) = match name.rfind('.') {
        Some(dot) if dot > 0 => (&name[..dot], &name[dot..]),
        _ => (name, ""),
    };

    let keep_ext = !ext.is_empty() && ext.width() + ellipsis.len() < max_width;
    let (source, suffix) = if keep_ext { (stem, ext) } else { (name, "") };
    let budget = max_width.saturating_sub(ellipsis.len() + suffix.width());

    let mut truncated = String::new();
    let mut current = 0;
    for ch in source.chars() {
        let w = ch.width().unwrap_or(1);
        if current + w > budget {
            break;
        }
        truncated.push(ch);
        current += w;
    }
    truncated.push_str(ellipsis);
    truncated.push_str(suffix);
    truncated
}

/// 커서가 보이도록 스크롤 오프셋 보정
pub fn scroll_to_cursor(selected: usize, scroll: usize, visible_rows: usize) -> usize {
    if visible_rows == 0 {
        return selected;
    }
    if selected < scroll {
        selected
    } else if selected >= scroll + visible_rows {
        selected + 1 - visible_rows
    } else {
        scroll
    }
}
