use crate::models::file_entry::FileEntry;
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use tracing::debug;

/// 목록 조회 시 자식 엔트리 하나의 원시 정보
#[derive(Debug, Clone)]
pub struct ChildInfo {
    pub name: String,
    pub path: PathBuf,
    pub is_directory: bool,
    pub size: u64,
    pub modified: SystemTime,
    /// 현재 읽기 가능 여부
    pub readable: bool,
}

/// 파일 시스템 접근 추상화
///
/// 워커 스레드에서 공유하므로 `Send + Sync`.
pub trait FileAccess: Send + Sync {
    /// 직접 자식 목록 (재귀 없음, 정렬 없음)
    fn list_children(&self, path: &Path) -> io::Result<Vec<ChildInfo>>;

    /// 파일 전체 읽기
    fn read_all(&self, path: &Path) -> io::Result<Vec<u8>>;

    fn exists(&self, path: &Path) -> bool;

    fn is_directory(&self, path: &Path) -> bool;

    fn can_read(&self, path: &Path) -> bool;

    /// 상위 디렉토리. 루트이면 None
    fn parent_of(&self, path: &Path) -> Option<PathBuf> {
        path.parent().map(Path::to_path_buf)
    }
}

/// 파일 시스템 모듈 (std::fs 기반)
#[derive(Debug, Default, Clone, Copy)]
pub struct FileSystem;

impl FileSystem {
    /// 새 파일 시스템 인스턴스 생성
    pub fn new() -> Self {
        Self
    }
}

impl FileAccess for FileSystem {
    fn list_children(&self, path: &Path) -> io::Result<Vec<ChildInfo>> {
        let mut children = Vec::new();

        for entry in fs::read_dir(path)? {
            // 에러 발생 시 해당 엔트리는 스킵
            let Ok(entry) = entry else { continue };

            let child_path = entry.path();
            let name = entry.file_name().to_string_lossy().to_string();

            // symlink는 대상 메타데이터 기준. 깨진 링크는 읽을 수 없는 엔트리로 취급
            let Ok(metadata) = fs::metadata(&child_path) else {
                children.push(ChildInfo {
                    name,
                    path: child_path,
                    is_directory: false,
                    size: 0,
                    modified: SystemTime::UNIX_EPOCH,
                    readable: false,
                });
                continue;
            };

            let readable = self.can_read(&child_path);
            children.push(ChildInfo {
                name,
                path: child_path,
                is_directory: metadata.is_dir(),
                size: if metadata.is_dir() { 0 } else { metadata.len() },
                modified: metadata.modified().unwrap_or(SystemTime::UNIX_EPOCH),
                readable,
            });
        }

        Ok(children)
    }

    fn read_all(&self, path: &Path) -> io::Result<Vec<u8>> {
        fs::read(path)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_directory(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn can_read(&self, path: &Path) -> bool {
        let Ok(metadata) = fs::metadata(path) else {
            return false;
        };

        if metadata.is_dir() {
            fs::read_dir(path).is_ok()
        } else if metadata.is_file() {
            File::open(path).is_ok()
        } else {
            // FIFO/소켓/장치 파일은 open 시 블록될 수 있으므로 권한 비트만 확인
            special_file_readable(&metadata)
        }
    }
}

#[cfg(unix)]
fn special_file_readable(metadata: &fs::Metadata) -> bool {
    use std::os::unix::fs::PermissionsExt;
    metadata.permissions().mode() & 0o444 != 0
}

#[cfg(not(unix))]
fn special_file_readable(_metadata: &fs::Metadata) -> bool {
    true
}

/// 디렉토리 목록 로드
///
/// 읽을 수 없는 엔트리는 조용히 제외하고, 디렉토리 우선 + 대소문자 무시 이름 오름차순으로 정렬합니다.
/// 디렉토리 자체를 읽지 못하면 빈 목록을 반환합니다.
pub fn load_listing(fs: &dyn FileAccess, directory: &Path) -> Vec<FileEntry> {
    load_listing_unless(fs, directory, &|| false).unwrap_or_default()
}

/// 취소 가능한 목록 로드. `is_cancelled`가 true가 되면 None
pub fn load_listing_unless(
    fs: &dyn FileAccess,
    directory: &Path,
    is_cancelled: &dyn Fn() -> bool,
) -> Option<Vec<FileEntry>> {
    debug!("Loading listing of {}", directory.display());

    let children = match fs.list_children(directory) {
        Ok(children) => children,
        Err(err) => {
            debug!("Cannot enumerate {}: {}", directory.display(), err);
            return Some(Vec::new());
        }
    };

    let mut entries = Vec::with_capacity(children.len());
    for child in children {
        if is_cancelled() {
            debug!("Listing of {} superseded", directory.display());
            return None;
        }

        if !child.readable {
            debug!("Skipping unreadable entry: {}", child.name);
            continue;
        }

        entries.push(FileEntry::new(
            child.name,
            child.path,
            child.is_directory,
            child.size,
            child.modified,
        ));
    }

    sort_entries(&mut entries);
    debug!("Loaded {} entries from {}", entries.len(), directory.display());
    Some(entries)
}

/// 디렉토리 우선, 그 다음 대소문자 무시 이름 오름차순 (안정 정렬)
pub fn sort_entries(entries: &mut [FileEntry]) {
    entries.sort_by_cached_key(|entry| (!entry.is_directory, entry.name.to_lowercase()));
}


#[cfg(test)]
mod tests {
    use super::fake::MemoryFileSystem;
    use super::*;
    use std::cell::Cell;
    use tempfile::TempDir;

    fn names(entries: &[FileEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn test_read_directory_on_disk() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("docs")).unwrap();
        fs::write(temp.path().join("a.txt"), "hello").unwrap();

        let entries = load_listing(&FileSystem::new(), temp.path());

        assert_eq!(names(&entries), vec!["docs", "a.txt"]);
        assert!(entries[0].is_directory);
        assert_eq!(entries[0].size, 0);
        assert_eq!(entries[1].size, 5);
        assert_eq!(entries[1].path, temp.path().join("a.txt"));
    }

    #[test]
    fn test_listing_sorts_directories_first_then_case_insensitive() {
        let temp = TempDir::new().unwrap();
        for dir in ["zeta", "Alpha"] {
            fs::create_dir(temp.path().join(dir)).unwrap();
        }
        for file in ["b.txt", "A.md", "c.png", "Banana"] {
            fs::write(temp.path().join(file), "x").unwrap();
        }

        let entries = load_listing(&FileSystem::new(), temp.path());

        assert_eq!(
            names(&entries),
            vec!["Alpha", "zeta", "A.md", "b.txt", "Banana", "c.png"]
        );
        let first_file = entries.iter().position(|e| !e.is_directory).unwrap();
        assert!(entries[first_file..].iter().all(|e| !e.is_directory));
    }

    #[test]
    fn test_empty_directory_yields_empty_listing() {
        let temp = TempDir::new().unwrap();
        assert!(load_listing(&FileSystem::new(), temp.path()).is_empty());
    }

    #[test]
    fn test_nonexistent_directory_yields_empty_listing() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("gone");
        assert!(load_listing(&FileSystem::new(), &missing).is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_broken_symlink_is_skipped() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("real.txt"), "x").unwrap();
        std::os::unix::fs::symlink(temp.path().join("missing"), temp.path().join("dangling"))
            .unwrap();

        let entries = load_listing(&FileSystem::new(), temp.path());

        assert_eq!(names(&entries), vec!["real.txt"]);
    }

    #[test]
    fn test_unreadable_entries_are_excluded_without_error() {
        let fs = MemoryFileSystem::new();
        fs.add_dir("/home")
            .add_dir("/home/open")
            .add_unreadable_dir("/home/locked")
            .add_file("/home/notes.txt", b"hi")
            .add_unreadable_file("/home/secret.txt");

        let entries = load_listing(&fs, Path::new("/home"));

        assert_eq!(names(&entries), vec!["open", "notes.txt"]);
    }

    #[test]
    fn test_cancelled_listing_returns_none() {
        let fs = MemoryFileSystem::new();
        fs.add_dir("/data").add_file("/data/a.txt", b"a");

        let calls = Cell::new(0);
        let result = load_listing_unless(&fs, Path::new("/data"), &|| {
            calls.set(calls.get() + 1);
            true
        });

        assert!(result.is_none());
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_can_read_on_disk() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("f.txt");
        fs::write(&file, "x").unwrap();

        let fs = FileSystem::new();
        assert!(fs.can_read(temp.path()));
        assert!(fs.can_read(&file));
        assert!(!fs.can_read(&temp.path().join("missing")));
    }

    #[test]
    fn test_parent_of_root_is_none() {
        let fs = FileSystem::new();
        assert!(fs.parent_of(Path::new("/")).is_none());
        assert_eq!(fs.parent_of(Path::new("/a/b")), Some(PathBuf::from("/a")));
    }
}
