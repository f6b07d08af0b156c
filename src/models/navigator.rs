use crate::models::file_entry::FileEntry;
use crate::models::history::DirectoryHistory;
use crate::system::filesystem::{load_listing, FileAccess};
use crate::utils::error::{PeekDirError, Result};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// 탐색 상태 관리자
///
/// 현재 디렉토리, 뒤로 가기 히스토리, 현재 디렉토리의 목록을 소유한다.
/// 시작 디렉토리 목록은 `initialize`가 바로 읽고, 이후 디렉토리를 바꾸는 연산은
/// 목록을 비워 둔 채 `apply_listing`(워커 결과)을 기다린다.
#[derive(Debug, Clone, Default)]
pub struct Navigator {
    current_dir: Option<PathBuf>,
    history: DirectoryHistory,
    entries: Vec<FileEntry>,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// 현재 디렉토리 (초기화 전에는 None)
    pub fn current_dir(&self) -> Option<&Path> {
        self.current_dir.as_deref()
    }

    pub fn entries(&self) -> &[FileEntry] {
        &self.entries
    }

    pub fn history(&self) -> &DirectoryHistory {
        &self.history
    }

    /// 후보 중 처음으로 존재하고 읽을 수 있는 디렉토리를 현재 디렉토리로 선택하고 목록을 읽음
    pub fn initialize(&mut self, fs: &dyn FileAccess, candidates: &[PathBuf]) -> Result<PathBuf> {
        let root = candidates
            .iter()
            .find(|path| fs.is_directory(path) && fs.can_read(path))
            .cloned()
            .ok_or_else(|| PeekDirError::NoAccessibleRoot {
                candidates: candidates.to_vec(),
            })?;

        info!("Starting in {}", root.display());
        self.current_dir = Some(root.clone());
        self.history.clear();
        self.reload(fs);
        Ok(root)
    }

    /// 디렉토리로 진입. 읽을 수 없으면 상태 변경 없이 NotReadable
    pub fn navigate_into(&mut self, fs: &dyn FileAccess, path: &Path) -> Result<()> {
        if !(fs.is_directory(path) && fs.can_read(path)) {
            return Err(PeekDirError::NotReadable {
                path: path.to_path_buf(),
            });
        }

        self.enter(path.to_path_buf());
        Ok(())
    }

    /// 상위 디렉토리로 이동. 부모가 없거나 읽을 수 없으면 false
    pub fn navigate_up(&mut self, fs: &dyn FileAccess) -> bool {
        let Some(current) = self.current_dir.as_deref() else {
            return false;
        };
        let Some(parent) = fs.parent_of(current) else {
            return false;
        };
        if !fs.can_read(&parent) {
            return false;
        }

        self.enter(parent);
        true
    }

    /// 히스토리에서 이전 디렉토리 복원. 히스토리가 비었으면 false
    ///
    /// 꺼낸 경로가 더 이상 유효하지 않아도 현재 디렉토리로 설정되며 목록은 비게 된다.
    pub fn go_back(&mut self, fs: &dyn FileAccess) -> bool {
        let Some(previous) = self.history.pop() else {
            return false;
        };

        if !(fs.is_directory(&previous) && fs.can_read(&previous)) {
            warn!(
                "History entry {} is no longer a readable directory",
                previous.display()
            );
        }

        self.current_dir = Some(previous);
        self.entries.clear();
        true
    }

    /// 현재 디렉토리 목록을 동기적으로 다시 읽음
    pub fn reload(&mut self, fs: &dyn FileAccess) {
        self.entries = match self.current_dir.as_deref() {
            Some(dir) => load_listing(fs, dir),
            None => Vec::new(),
        };
    }

    /// 워커가 읽은 목록 반영. 현재 디렉토리와 다르면 무시하고 false
    pub fn apply_listing(&mut self, dir: &Path, entries: Vec<FileEntry>) -> bool {
        if self.current_dir.as_deref() != Some(dir) {
            return false;
        }
        self.entries = entries;
        true
    }

    fn enter(&mut self, dir: PathBuf) {
        if let Some(previous) = self.current_dir.replace(dir) {
            self.history.push(previous);
        }
        self.entries.clear();
    }
}
