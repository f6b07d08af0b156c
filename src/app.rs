use crate::core::actions::{command_items, CommandContext};
use crate::models::{Navigator, Viewer, ViewerContent};
use crate::system::{Config, FileAccess, Loader};
use crate::ui::components::text_viewer::{content_width, wrapped_row_count};
use crate::ui::components::title_bar::DEFAULT_TITLE;
use crate::ui::components::{CommandItem, IconMode};
use crate::ui::{LayoutManager, Theme};
use crate::utils::error::Result;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use tracing::warn;

mod navigation;
mod preview;


/// 화면 모드
///
/// 뒤로 가기는 Previewing을 먼저 벗어난 뒤에야 히스토리를 건드린다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// 디렉토리 목록
    Browsing,
    /// 미리보기 표시 중 (로딩 중 포함)
    Previewing,
}

/// 응답을 기다리는 미리보기 요청
#[derive(Debug, Clone)]
struct PendingPreview {
    ticket: u64,
    file_name: String,
}

/// 앱 상태
pub struct App {
    /// 종료 플래그
    pub should_quit: bool,
    /// 레이아웃 매니저
    pub layout: LayoutManager,
    pub theme: Theme,
    /// 아이콘 표시 모드
    pub icon_mode: IconMode,
    /// 파일 시스템
    fs: Arc<dyn FileAccess>,
    /// 백그라운드 로더
    loader: Loader,
    pub navigator: Navigator,
    pub viewer: Viewer,
    /// 목록 커서
    pub selected_index: usize,
    /// 목록 스크롤 오프셋
    pub scroll_offset: usize,
    /// 텍스트 뷰어 스크롤 (줄)
    pub viewer_scroll: usize,
    /// 이미지 배율 (1.0 = 화면에 맞춤)
    pub image_zoom: f32,
    /// 이미지 이동 오프셋 (화면 픽셀, 가운데 정렬 기준)
    pub image_offset: (f32, f32),
    /// 진행 중인 목록 요청 티켓
    pending_listing: Option<u64>,
    pending_preview: Option<PendingPreview>,
    /// 목록 로드 후 커서를 옮길 항목 이름
    focus_after_load: Option<String>,
    /// 토스트 메시지 (3초 후 자동 소멸)
    pub toast_message: Option<(String, Instant)>,
    /// 타이틀바 경로 축약용
    home_dir: Option<PathBuf>,
}

impl App {
    /// 시작 디렉토리를 정하고 첫 목록을 읽는다
    pub fn new(config: &Config, candidates: &[PathBuf], fs: Arc<dyn FileAccess>) -> Result<Self> {
        let themes_dir = Config::config_dir().map(|dir| dir.join("themes"));
        let theme = Theme::by_name(&config.theme, themes_dir.as_deref()).unwrap_or_else(|err| {
            warn!("Falling back to dark theme: {:#}", err);
            Theme::dark()
        });

        let mut navigator = Navigator::new();
        navigator.initialize(fs.as_ref(), candidates)?;

        Ok(Self {
            should_quit: false,
            layout: LayoutManager::new(),
            theme,
            icon_mode: config.icon_mode,
            loader: Loader::new(Arc::clone(&fs)),
            fs,
            navigator,
            viewer: Viewer::new(),
            selected_index: 0,
            scroll_offset: 0,
            viewer_scroll: 0,
            image_zoom: 1.0,
            image_offset: (0.0, 0.0),
            pending_listing: None,
            pending_preview: None,
            focus_after_load: None,
            toast_message: None,
            home_dir: dirs::home_dir(),
        })
    }

    /// 진행 중인 로드가 모두 반영될 때까지 대기
    #[cfg(test)]
    pub(crate) fn settle(&mut self) {
        let mut guard = 0usize;
        while self.is_loading() && guard < 5_000 {
            self.process_loads();
            std::thread::sleep(std::time::Duration::from_millis(1));
            guard += 1;
        }
        assert!(guard < 5_000, "load loop guard exceeded");
    }

    /// 종료
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn mode(&self) -> Mode {
        if self.viewer.is_active() || self.pending_preview.is_some() {
            Mode::Previewing
        } else {
            Mode::Browsing
        }
    }

    /// 목록 요청이 진행 중인지
    pub fn is_listing_pending(&self) -> bool {
        self.pending_listing.is_some()
    }

    /// 어떤 레인이든 응답을 기다리는 중인지
    pub fn is_loading(&self) -> bool {
        self.pending_listing.is_some() || self.pending_preview.is_some()
    }

    pub fn home_dir(&self) -> Option<&Path> {
        self.home_dir.as_deref()
    }

    /// 타이틀바 제목: 열린 파일 이름 > 현재 디렉토리 이름 > 기본 제목
    pub fn title(&self) -> String {
        if let Some(pending) = &self.pending_preview {
            return pending.file_name.clone();
        }
        if self.viewer.is_active() {
            return self.viewer.file_name().to_string();
        }

        match self.navigator.current_dir() {
            Some(dir) => dir
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| dir.display().to_string()),
            None => DEFAULT_TITLE.to_string(),
        }
    }

    /// 현재 화면의 커맨드바 항목
    pub fn command_items(&self) -> Vec<CommandItem> {
        let context = match self.viewer.content() {
            ViewerContent::Image(_) => CommandContext::ImageViewer,
            ViewerContent::Text(_) => CommandContext::TextViewer,
            ViewerContent::None if self.pending_preview.is_some() => CommandContext::TextViewer,
            ViewerContent::None if self.navigator.history().is_empty() => {
                CommandContext::BrowsingRoot
            }
            ViewerContent::None => CommandContext::Browsing,
        };
        command_items(context)
    }

    /// 상태바 오른쪽 정보
    pub fn status_detail(&self) -> Option<String> {
        match self.viewer.content() {
            ViewerContent::Image(image) => Some(format!(
                "{}x{}  {:.0}%",
                image.width,
                image.height,
                self.image_zoom * 100.0
            )),
            ViewerContent::Text(text) => {
                let width = content_width(self.layout.body_width());
                let total = wrapped_row_count(text, width).max(1);
                Some(format!("Ln {}/{}", (self.viewer_scroll + 1).min(total), total))
            }
            ViewerContent::None => {
                let total = self.navigator.entries().len();
                (self.mode() == Mode::Browsing && total > 0)
                    .then(|| format!("{}/{}", self.selected_index + 1, total))
            }
        }
    }

    /// 토스트 메시지 설정
    pub fn set_toast(&mut self, message: &str) {
        self.toast_message = Some((message.to_string(), Instant::now()));
    }

    /// 만료된 토스트 제거
    pub fn clear_expired_toast(&mut self) {
        if let Some((_, time)) = &self.toast_message {
            if time.elapsed().as_secs() >= 3 {
                self.toast_message = None;
            }
        }
    }

    pub fn toast(&self) -> Option<&str> {
        self.toast_message.as_ref().map(|(message, _)| message.as_str())
    }
}
