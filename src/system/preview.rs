// Preview loading - 텍스트/이미지 미리보기 내용 생성
//
// 모든 읽기/디코딩 실패는 진단 문자열로 바뀌어 Text 변형에 담긴다. 호출자에게 에러를 돌려주지 않는다.

use crate::models::file_entry::FileEntry;
use crate::models::viewer::ViewerContent;
use crate::system::filesystem::FileAccess;
use crate::system::image_decoder::decode_image;
use crate::utils::formatter::format_file_size;
use std::path::Path;
use tracing::warn;

/// 비어 있거나 공백뿐인 텍스트 파일 표시
pub const EMPTY_FILE_MARKER: &str = "[file is empty]";

/// 워커에서 생성하는 미리보기 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewKind {
    Text,
    Image,
}

/// 취소 가능한 미리보기 로드. 디코딩 전에 취소되면 None
pub fn load_preview_unless(
    fs: &dyn FileAccess,
    entry: &FileEntry,
    kind: PreviewKind,
    is_cancelled: &dyn Fn() -> bool,
) -> Option<ViewerContent> {
    match kind {
        PreviewKind::Text => Some(ViewerContent::Text(load_text(fs, &entry.path))),
        PreviewKind::Image => load_image(fs, &entry.path, is_cancelled),
    }
}

/// 텍스트 파일 내용 (실패 시 진단 문자열)
pub fn load_text(fs: &dyn FileAccess, path: &Path) -> String {
    if !fs.exists(path) {
        return format!("The file does not exist.\nPath: {}", path.display());
    }

    if !fs.can_read(path) {
        return format!(
            "The file exists but cannot be read due to insufficient permissions.\nPath: {}",
            path.display()
        );
    }

    match fs.read_all(path) {
        Ok(bytes) => {
            let content = String::from_utf8_lossy(&bytes).into_owned();
            if content.trim().is_empty() {
                EMPTY_FILE_MARKER.to_string()
            } else {
                content
            }
        }
        Err(err) => {
            warn!("Failed to read {}: {}", path.display(), err);
            format!(
                "Error reading the file: {}\nKind: {:?}\nPath: {}",
                err,
                err.kind(),
                path.display()
            )
        }
    }
}

fn load_image(
    fs: &dyn FileAccess,
    path: &Path,
    is_cancelled: &dyn Fn() -> bool,
) -> Option<ViewerContent> {
    if !(fs.exists(path) && fs.can_read(path)) {
        return Some(ViewerContent::Text(format!(
            "Cannot access the image.\nPath: {}",
            path.display()
        )));
    }

    let bytes = match fs.read_all(path) {
        Ok(bytes) => bytes,
        Err(err) => {
            warn!("Failed to read image {}: {}", path.display(), err);
            return Some(ViewerContent::Text(format!(
                "Error opening the image: {}\nPath: {}",
                err,
                path.display()
            )));
        }
    };

    if is_cancelled() {
        return None;
    }

    Some(match decode_image(&bytes) {
        Ok(image) => ViewerContent::Image(image),
        Err(err) => {
            warn!("Failed to decode image {}: {}", path.display(), err);
            ViewerContent::Text(format!(
                "Could not load the image. The format may not be supported.\n{}\nPath: {}",
                err,
                path.display()
            ))
        }
    })
}

/// 미리보기를 지원하지 않는 파일 안내 문구
pub fn unsupported_message(entry: &FileEntry) -> String {
    format!(
        "This file type cannot be previewed directly.\nPath: {}\nSize: {}",
        entry.path.display(),
        format_file_size(entry.size)
    )
}
