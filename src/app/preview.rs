use super::*;
use crate::models::{FileEntry, FileKind};
use crate::system::preview::unsupported_message;
use crate::system::{Lane, LoadJob, LoadOutcome, LoadResult, PreviewKind};
use crate::ui::components::image_viewer;
use crate::ui::components::text_viewer::{content_width, max_scroll};
use tracing::{debug, info};

impl App {
    /// 커서 항목 열기
    pub fn open_selected(&mut self) {
        if let Some(entry) = self.navigator.entries().get(self.selected_index).cloned() {
            self.open_entry(entry);
        }
    }

    /// 종류별 열기: 디렉토리는 진입, 이미지/텍스트는 워커에서 로드, 나머지는 안내 문구
    pub fn open_entry(&mut self, entry: FileEntry) {
        match entry.kind() {
            FileKind::Directory => {
                self.navigate_into(&entry.path);
            }
            FileKind::Image => self.request_preview(entry, PreviewKind::Image),
            FileKind::Text => self.request_preview(entry, PreviewKind::Text),
            FileKind::Other => {
                self.close_viewer();
                let message = unsupported_message(&entry);
                self.viewer.show(entry.name, ViewerContent::Text(message));
            }
        }
    }

    fn request_preview(&mut self, entry: FileEntry, kind: PreviewKind) {
        self.close_viewer();
        let file_name = entry.name.clone();
        info!("Opening {:?} preview of {}", kind, entry.path.display());
        let ticket = self.loader.submit(LoadJob::Preview { entry, kind });
        self.pending_preview = Some(PendingPreview { ticket, file_name });
    }

    /// 뷰어 닫기 (진행 중인 미리보기도 취소). 여러 번 호출해도 같다
    pub fn close_viewer(&mut self) {
        if self.pending_preview.take().is_some() {
            self.loader.cancel(Lane::Preview);
        }
        self.viewer.close();
        self.viewer_scroll = 0;
        self.zoom_reset();
    }

    /// 도착한 워커 결과를 모두 반영. 화면이 바뀌었으면 true
    pub fn process_loads(&mut self) -> bool {
        let mut changed = false;
        while let Some(result) = self.loader.try_recv() {
            changed |= self.apply_load_result(result);
        }
        changed
    }

    /// 결과 하나 반영. 최신 요청의 결과가 아니면 버리고 false
    pub(super) fn apply_load_result(&mut self, result: LoadResult) -> bool {
        if !self.loader.is_current(&result) {
            debug!("Ignoring stale {:?} result #{}", result.lane, result.ticket);
            return false;
        }

        match result.outcome {
            LoadOutcome::Listing { dir, entries } => {
                if self.pending_listing != Some(result.ticket) {
                    return false;
                }
                self.pending_listing = None;

                let count = entries.len();
                if !self.navigator.apply_listing(&dir, entries) {
                    return false;
                }
                debug!("Showing {} entries of {}", count, dir.display());
                self.restore_cursor();
                true
            }
            LoadOutcome::Preview { file_name, content } => {
                match &self.pending_preview {
                    Some(pending) if pending.ticket == result.ticket => {}
                    _ => return false,
                }
                self.pending_preview = None;
                self.viewer.show(file_name, content);
                self.viewer_scroll = 0;
                self.zoom_reset();
                true
            }
        }
    }

    // === 뷰어 조작 ===

    /// 텍스트 뷰어 스크롤 (음수는 위로)
    pub fn scroll_viewer_by(&mut self, delta: isize) {
        let Some(text) = self.viewer.text() else {
            return;
        };
        let width = content_width(self.layout.body_width());
        let max = max_scroll(text, width, self.layout.body_height());
        self.viewer_scroll = self.viewer_scroll.saturating_add_signed(delta).min(max);
    }

    pub fn zoom_in(&mut self) {
        if matches!(self.viewer.content(), ViewerContent::Image(_)) {
            self.image_zoom = image_viewer::zoom_in(self.image_zoom);
            self.pan_image_by(0.0, 0.0);
        }
    }

    /// 축소하면 허용 범위가 줄어드므로 오프셋도 다시 제한
    pub fn zoom_out(&mut self) {
        if matches!(self.viewer.content(), ViewerContent::Image(_)) {
            self.image_zoom = image_viewer::zoom_out(self.image_zoom);
            self.pan_image_by(0.0, 0.0);
        }
    }

    pub fn zoom_reset(&mut self) {
        self.image_zoom = 1.0;
        self.image_offset = (0.0, 0.0);
    }

    /// 이미지 이동. 단위는 한 번의 이동 거리, 양수면 이미지가 오른쪽/아래로 간다
    pub fn pan_image_by(&mut self, steps_x: f32, steps_y: f32) {
        let ViewerContent::Image(image) = self.viewer.content() else {
            return;
        };
        let area = self.layout.areas().body;
        let (step_x, step_y) = image_viewer::pan_step(area);
        let limits = image_viewer::pan_limits(image, area, self.image_zoom);
        let (x, y) = self.image_offset;
        self.image_offset =
            image_viewer::clamp_offset((x + steps_x * step_x, y + steps_y * step_y), limits);
    }
}
