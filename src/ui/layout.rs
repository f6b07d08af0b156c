// Layout system - 화면 레이아웃
//
// 타이틀바 | 본문(목록 또는 뷰어) | 상태바 | 커맨드바
// 최소 크기보다 작으면 경고 화면만 표시

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// 최소 터미널 크기 상수
pub const MIN_WIDTH: u16 = 40;
pub const MIN_HEIGHT: u16 = 10;

/// 레이아웃 모드
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutMode {
    #[default]
    Normal,
    /// 경고 모드 (터미널이 너무 작음)
    TooSmall,
}

/// 레이아웃 영역
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LayoutAreas {
    /// 상단 타이틀바 (2줄: 제목 + 경로)
    pub title_bar: Rect,
    /// 목록 또는 뷰어 영역
    pub body: Rect,
    pub status_bar: Rect,
    pub command_bar: Rect,
    /// TooSmall 모드에서 사용
    pub warning: Rect,
}

/// 레이아웃 매니저
#[derive(Debug, Default)]
pub struct LayoutManager {
    mode: LayoutMode,
    terminal_size: (u16, u16),
    areas: LayoutAreas,
}

impl LayoutManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// 터미널 크기에 따라 레이아웃 모드 결정
    fn determine_mode(width: u16, height: u16) -> LayoutMode {
        if width < MIN_WIDTH || height < MIN_HEIGHT {
            LayoutMode::TooSmall
        } else {
            LayoutMode::Normal
        }
    }

    /// 터미널 크기 업데이트 및 레이아웃 재계산
    pub fn update(&mut self, area: Rect) {
        self.terminal_size = (area.width, area.height);
        self.mode = Self::determine_mode(area.width, area.height);
        self.areas = match self.mode {
            LayoutMode::TooSmall => LayoutAreas {
                warning: area,
                ..Default::default()
            },
            LayoutMode::Normal => Self::calculate_areas(area),
        };
    }

    fn calculate_areas(area: Rect) -> LayoutAreas {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // 타이틀바
                Constraint::Min(3),    // 본문
                Constraint::Length(1), // 상태바
                Constraint::Length(1), // 커맨드바
            ])
            .split(area);

        LayoutAreas {
            title_bar: chunks[0],
            body: chunks[1],
            status_bar: chunks[2],
            command_bar: chunks[3],
            warning: Rect::default(),
        }
    }

    pub fn areas(&self) -> &LayoutAreas {
        &self.areas
    }

    pub fn terminal_size(&self) -> (u16, u16) {
        self.terminal_size
    }

    pub fn is_too_small(&self) -> bool {
        matches!(self.mode, LayoutMode::TooSmall)
    }

    /// 본문 영역의 표시 가능 줄 수 (페이지 이동 단위)
    pub fn body_height(&self) -> usize {
        self.areas.body.height as usize
    }

    pub fn body_width(&self) -> u16 {
        self.areas.body.width
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determine_mode() {
        assert_eq!(LayoutManager::determine_mode(80, 24), LayoutMode::Normal);
        assert_eq!(LayoutManager::determine_mode(40, 10), LayoutMode::Normal);
        assert_eq!(LayoutManager::determine_mode(39, 24), LayoutMode::TooSmall);
        assert_eq!(LayoutManager::determine_mode(80, 9), LayoutMode::TooSmall);
    }

    #[test]
    fn test_normal_areas_stack_vertically() {
        let mut manager = LayoutManager::new();
        manager.update(Rect::new(0, 0, 80, 24));

        let areas = manager.areas();
        assert_eq!(areas.title_bar.height, 2);
        assert_eq!(areas.body, Rect::new(0, 2, 80, 20));
        assert_eq!(areas.status_bar.y, 22);
        assert_eq!(areas.command_bar.y, 23);
        assert_eq!(manager.body_height(), 20);
        assert_eq!(manager.body_width(), 80);
    }

    #[test]
    fn test_too_small_uses_whole_area_for_warning() {
        let mut manager = LayoutManager::new();
        manager.update(Rect::new(0, 0, 30, 8));

        assert!(manager.is_too_small());
        assert_eq!(manager.areas().warning, Rect::new(0, 0, 30, 8));
        assert_eq!(manager.areas().body, Rect::default());
        assert_eq!(manager.terminal_size(), (30, 8));
    }
}
