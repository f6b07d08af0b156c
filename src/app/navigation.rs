use super::*;
use crate::core::actions::Action;
use crate::system::LoadJob;
use crate::ui::components::file_list::scroll_to_cursor;
use tracing::{debug, info};

impl App {
    /// 액션 실행 (같은 키라도 모드에 따라 다르게 해석)
    pub fn execute_action(&mut self, action: Action) {
        let mode = self.mode();
        match (action, mode) {
            (Action::Quit, _) => self.quit(),
            (Action::NavigateBack, _) => {
                // 히스토리도 비었으면 앱 종료
                if !self.navigate_back() {
                    self.quit();
                }
            }

            (Action::MoveUp, Mode::Browsing) => self.move_selection_up(),
            (Action::MoveDown, Mode::Browsing) => self.move_selection_down(),
            (Action::PageUp, Mode::Browsing) => self.move_selection_page_up(),
            (Action::PageDown, Mode::Browsing) => self.move_selection_page_down(),
            (Action::GoToTop, Mode::Browsing) => self.go_to_top(),
            (Action::GoToBottom, Mode::Browsing) => self.go_to_bottom(),
            (Action::OpenSelected, Mode::Browsing) => self.open_selected(),
            (Action::NavigateUp, Mode::Browsing) => {
                if !self.navigate_up() {
                    self.set_toast("Cannot go up from here");
                }
            }
            (Action::Refresh, Mode::Browsing) => self.refresh(),

            (Action::MoveUp, Mode::Previewing) => self.scroll_viewer_by(-1),
            (Action::MoveDown, Mode::Previewing) => self.scroll_viewer_by(1),
            (Action::PageUp, Mode::Previewing) => self.scroll_viewer_by(-self.page_delta()),
            (Action::PageDown, Mode::Previewing) => self.scroll_viewer_by(self.page_delta()),
            (Action::GoToTop, Mode::Previewing) => self.viewer_scroll = 0,
            (Action::GoToBottom, Mode::Previewing) => self.scroll_viewer_by(isize::MAX),
            (Action::NavigateUp, Mode::Previewing) => self.close_viewer(),
            (Action::ZoomIn, Mode::Previewing) => self.zoom_in(),
            (Action::ZoomOut, Mode::Previewing) => self.zoom_out(),
            (Action::ZoomReset, Mode::Previewing) => self.zoom_reset(),
            // 왼쪽을 보려면 이미지를 오른쪽으로 민다
            (Action::PanLeft, Mode::Previewing) => self.pan_image_by(1.0, 0.0),
            (Action::PanRight, Mode::Previewing) => self.pan_image_by(-1.0, 0.0),
            (Action::PanUp, Mode::Previewing) => self.pan_image_by(0.0, 1.0),
            (Action::PanDown, Mode::Previewing) => self.pan_image_by(0.0, -1.0),

            (
                Action::ZoomIn
                | Action::ZoomOut
                | Action::ZoomReset
                | Action::PanLeft
                | Action::PanRight
                | Action::PanUp
                | Action::PanDown,
                Mode::Browsing,
            )
            | (Action::OpenSelected | Action::Refresh, Mode::Previewing) => {}
        }
    }

    // === 디렉토리 이동 ===

    /// 디렉토리로 진입. 읽을 수 없으면 토스트만 띄우고 상태는 그대로
    pub fn navigate_into(&mut self, path: &Path) -> bool {
        self.close_viewer();
        match self.navigator.navigate_into(self.fs.as_ref(), path) {
            Ok(()) => {
                info!("Entered {}", path.display());
                self.reset_cursor(None);
                self.request_listing();
                true
            }
            Err(err) => {
                warn!("{}", err);
                self.set_toast(&err.to_string());
                false
            }
        }
    }

    /// 상위 디렉토리로 이동. 이동 후 커서는 떠나온 디렉토리에 둔다
    pub fn navigate_up(&mut self) -> bool {
        let came_from = self
            .navigator
            .current_dir()
            .and_then(Path::file_name)
            .map(|name| name.to_string_lossy().into_owned());

        self.close_viewer();
        if !self.navigator.navigate_up(self.fs.as_ref()) {
            return false;
        }

        self.reset_cursor(came_from);
        self.request_listing();
        true
    }

    /// 뒤로 가기. 뷰어가 열려 있으면 뷰어만 닫는다
    ///
    /// 히스토리가 비어 있으면 false (호출자가 종료를 결정).
    pub fn navigate_back(&mut self) -> bool {
        if self.mode() == Mode::Previewing {
            self.close_viewer();
            return true;
        }

        let came_from = self
            .navigator
            .current_dir()
            .and_then(Path::file_name)
            .map(|name| name.to_string_lossy().into_owned());

        let history = self.navigator.history();
        debug!("Back to {:?} (depth {})", history.peek(), history.len());
        if !self.navigator.go_back(self.fs.as_ref()) {
            return false;
        }

        self.reset_cursor(came_from);
        self.request_listing();
        true
    }

    /// 현재 디렉토리 다시 읽기 (커서 항목 유지)
    pub fn refresh(&mut self) {
        let focused = self
            .navigator
            .entries()
            .get(self.selected_index)
            .map(|entry| entry.name.clone());
        self.focus_after_load = focused;
        self.request_listing();
    }

    /// 현재 디렉토리 목록을 워커에 요청 (이전 목록 요청은 무효화)
    pub(super) fn request_listing(&mut self) {
        let Some(dir) = self.navigator.current_dir().map(Path::to_path_buf) else {
            return;
        };
        debug!("Requesting listing of {}", dir.display());
        self.pending_listing = Some(self.loader.submit(LoadJob::Listing { dir }));
    }

    fn reset_cursor(&mut self, focus: Option<String>) {
        self.selected_index = 0;
        self.scroll_offset = 0;
        self.focus_after_load = focus;
    }

    // === 커서 이동 ===

    fn page_size(&self) -> usize {
        self.layout.body_height().max(1)
    }

    fn page_delta(&self) -> isize {
        isize::try_from(self.page_size()).unwrap_or(isize::MAX)
    }

    fn max_index(&self) -> usize {
        self.navigator.entries().len().saturating_sub(1)
    }

    /// 선택을 위로 이동
    pub fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
            self.adjust_scroll_offset();
        }
    }

    /// 선택을 아래로 이동
    pub fn move_selection_down(&mut self) {
        if self.selected_index < self.max_index() {
            self.selected_index += 1;
            self.adjust_scroll_offset();
        }
    }

    /// 페이지 위로 이동
    pub fn move_selection_page_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(self.page_size());
        self.adjust_scroll_offset();
    }

    /// 페이지 아래로 이동
    pub fn move_selection_page_down(&mut self) {
        self.selected_index = (self.selected_index + self.page_size()).min(self.max_index());
        self.adjust_scroll_offset();
    }

    /// 맨 위로 이동 (Home / g)
    pub fn go_to_top(&mut self) {
        self.selected_index = 0;
        self.adjust_scroll_offset();
    }

    /// 맨 아래로 이동 (End / G)
    pub fn go_to_bottom(&mut self) {
        self.selected_index = self.max_index();
        self.adjust_scroll_offset();
    }

    /// 커서가 화면 안에 보이도록 스크롤 보정
    pub(super) fn adjust_scroll_offset(&mut self) {
        self.scroll_offset =
            scroll_to_cursor(self.selected_index, self.scroll_offset, self.layout.body_height());
    }

    /// 목록 적용 후 커서 위치 복원
    pub(super) fn restore_cursor(&mut self) {
        let entries = self.navigator.entries();
        if let Some(name) = self.focus_after_load.take() {
            if let Some(index) = entries.iter().position(|entry| entry.name == name) {
                self.selected_index = index;
            }
        }
        self.selected_index = self.selected_index.min(self.max_index());
        self.adjust_scroll_offset();
    }
}
