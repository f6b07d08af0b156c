// Formatters - 파일 크기, 날짜, 개수 포맷팅

use chrono::{DateTime, Local};
use std::time::SystemTime;

const SIZE_UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

/// 파일 크기를 읽기 쉬운 형식으로 포맷팅
///
/// 단위는 1024 기준 `floor(log1024(bytes))`로 고르고, 값은 항상 소수점 한 자리로 표시합니다.
/// TB보다 큰 값은 TB로 표시합니다.
///
/// # Examples
/// ```ignore
/// assert_eq!(format_file_size(0), "0 B");
/// assert_eq!(format_file_size(512), "512.0 B");
/// assert_eq!(format_file_size(1536), "1.5 KB");
/// assert_eq!(format_file_size(1_073_741_824), "1.0 GB");
/// ```
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 B".to_string();
    }

    // 부동소수 log 대신 정수 나눗셈으로 단위 인덱스 계산 (경계값 오차 방지)
    let mut unit = 0;
    let mut remaining = bytes;
    while remaining >= 1024 && unit < SIZE_UNITS.len() - 1 {
        remaining /= 1024;
        unit += 1;
    }

    let scaled = bytes as f64 / 1024f64.powi(unit as i32);
    format!("{:.1} {}", scaled, SIZE_UNITS[unit])
}

/// 수정 시간을 "dd/MM/yyyy HH:mm:ss" 형식으로 포맷팅 (로컬 시간, 19자 고정)
pub fn format_date(time: SystemTime) -> String {
    let datetime: DateTime<Local> = time.into();
    datetime.format("%d/%m/%Y %H:%M:%S").to_string()
}

/// 개수에 따라 단수/복수형 반환
///
/// # Examples
/// ```ignore
/// assert_eq!(pluralize(1, "file", "files"), "1 file");
/// assert_eq!(pluralize(3, "file", "files"), "3 files");
/// ```
pub fn pluralize(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{} {}", count, singular)
    } else {
        format!("{} {}", count, plural)
    }
}
