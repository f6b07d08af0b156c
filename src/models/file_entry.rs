use std::path::PathBuf;
use std::time::SystemTime;

/// 이미지로 미리보기하는 확장자 (소문자)
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "bmp", "webp"];

/// 텍스트로 미리보기하는 확장자 (소문자)
pub const TEXT_EXTENSIONS: &[&str] = &[
    "txt",
    "md",
    "json",
    "xml",
    "html",
    "css",
    "js",
    "kt",
    "java",
    "py",
    "c",
    "cpp",
    "h",
    "hpp",
    "csv",
    "log",
    "ini",
    "properties",
    "yaml",
    "yml",
    "toml",
    "gradle",
    "gitignore",
    "sh",
    "bat",
    "config",
];

/// 엔트리 종류 (열기 동작 분기 기준)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    /// 디렉토리
    Directory,
    /// 이미지 파일
    Image,
    /// 텍스트 파일
    Text,
    /// 그 외 (미리보기 불가)
    Other,
}

impl FileKind {
    /// 이름과 디렉토리 여부로 종류 판단 (내용은 보지 않음)
    pub fn classify(name: &str, is_directory: bool) -> Self {
        if is_directory {
            FileKind::Directory
        } else if is_image_file(name) {
            FileKind::Image
        } else if is_text_file(name) {
            FileKind::Text
        } else {
            FileKind::Other
        }
    }
}

/// 마지막 '.' 뒤의 문자열을 소문자로 반환. '.'이 없으면 빈 문자열
pub fn extension_of(name: &str) -> String {
    match name.rfind('.') {
        Some(pos) => name[pos + 1..].to_lowercase(),
        None => String::new(),
    }
}

pub fn is_image_file(name: &str) -> bool {
    IMAGE_EXTENSIONS.contains(&extension_of(name).as_str())
}

pub fn is_text_file(name: &str) -> bool {
    TEXT_EXTENSIONS.contains(&extension_of(name).as_str())
}

/// 파일 엔트리
///
/// 목록을 읽을 때마다 새로 만들어지며 이후 변경되지 않습니다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// 파일/디렉토리 이름
    pub name: String,
    /// 절대 경로
    pub path: PathBuf,
    /// 디렉토리 여부
    pub is_directory: bool,
    /// 바이트 단위 크기 (디렉토리는 0)
    pub size: u64,
    /// 수정 시간
    pub modified: SystemTime,
}

impl FileEntry {
    /// 새 파일 엔트리 생성
    pub fn new(
        name: String,
        path: PathBuf,
        is_directory: bool,
        size: u64,
        modified: SystemTime,
    ) -> Self {
        Self {
            name,
            path,
            is_directory,
            size: if is_directory { 0 } else { size },
            modified,
        }
    }

    pub fn kind(&self) -> FileKind {
        FileKind::classify(&self.name, self.is_directory)
    }
}
