use std::path::{Path, PathBuf};

/// 뒤로 가기용 디렉토리 히스토리 스택
///
/// 새 디렉토리로 이동할 때마다 이전 디렉토리를 push, 뒤로 가기에서 pop.
/// 프로세스 종료 시 버려집니다.
#[derive(Debug, Clone, Default)]
pub struct DirectoryHistory {
    entries: Vec<PathBuf>,
}

impl DirectoryHistory {
    pub fn push(&mut self, path: PathBuf) {
        self.entries.push(path);
    }

    pub fn pop(&mut self) -> Option<PathBuf> {
        self.entries.pop()
    }

    /// 가장 최근 항목
    pub fn peek(&self) -> Option<&Path> {
        self.entries.last().map(PathBuf::as_path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_is_lifo() {
        let mut history = DirectoryHistory::default();
        history.push(PathBuf::from("/a"));
        history.push(PathBuf::from("/a/b"));

        assert_eq!(history.len(), 2);
        assert_eq!(history.peek(), Some(Path::new("/a/b")));
        assert_eq!(history.pop(), Some(PathBuf::from("/a/b")));
        assert_eq!(history.pop(), Some(PathBuf::from("/a")));
        assert_eq!(history.pop(), None);
        assert!(history.is_empty());
    }
}
