use std::path::Path;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ELLIPSIS: &str = "...";

/// 타이틀바 부제목용 경로 축약
///
/// 홈 디렉토리는 `~`로 바꾸고, 그래도 길면 앞부분을 `...`으로 생략해
/// 마지막 디렉토리 이름이 보이게 한다.
pub fn shorten_path(path: &Path, home: Option<&Path>, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }

    let display = match home.and_then(|home| path.strip_prefix(home).ok()) {
        Some(rest) if rest.as_os_str().is_empty() => "~".to_string(),
        Some(rest) => format!("~/{}", rest.display()),
        None => path.display().to_string(),
    };

    if display.width() <= max_width {
        return display;
    }
    if max_width <= ELLIPSIS.len() {
        return ".".repeat(max_width);
    }

    let tail = take_suffix_by_width(&display, max_width - ELLIPSIS.len());
    format!("{}{}", ELLIPSIS, tail)
}

fn take_suffix_by_width(text: &str, max_width: usize) -> String {
    let mut rev_chars: Vec<char> = Vec::new();
    let mut width = 0;
    for ch in text.chars().rev() {
        let ch_width = UnicodeWidthChar::width(ch).unwrap_or(1);
        if width + ch_width > max_width {
            break;
        }
        rev_chars.push(ch);
        width += ch_width;
    }
    rev_chars.reverse();
    rev_chars.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_path_unchanged() {
        assert_eq!(shorten_path(Path::new("/tmp/docs"), None, 20), "/tmp/docs");
    }

    #[test]
    fn test_home_prefix_becomes_tilde() {
        let home = Path::new("/home/ana");
        assert_eq!(shorten_path(Path::new("/home/ana"), Some(home), 20), "~");
        assert_eq!(shorten_path(Path::new("/home/ana/Music"), Some(home), 20), "~/Music");
        assert_eq!(shorten_path(Path::new("/home/anabel"), Some(home), 20), "/home/anabel");
    }

    #[test]
    fn test_long_path_keeps_tail() {
        let path = Path::new("/storage/emulated/0/DCIM/Camera/2024/summer");
        let shortened = shorten_path(path, None, 20);
        assert!(shortened.starts_with("..."));
        assert!(shortened.ends_with("/summer"));
        assert!(shortened.width() <= 20);
    }

    #[test]
    fn test_wide_characters_respect_width() {
        let path = Path::new("/사진/가나다라마바사아자차카타파하");
        assert!(shorten_path(path, None, 12).width() <= 12);
    }
}
