use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PeekDirError {
    /// 시작 후보 경로 중 읽을 수 있는 디렉토리가 하나도 없음
    #[error("No accessible start directory among {} candidate(s)", candidates.len())]
    NoAccessibleRoot { candidates: Vec<PathBuf> },

    /// 디렉토리가 아니거나 읽기 권한 없음
    #[error("Not a readable directory: {}", path.display())]
    NotReadable { path: PathBuf },

    #[error("Image decode failed: {reason}")]
    Decode { reason: String },

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, PeekDirError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_readable_message_contains_path() {
        let err = PeekDirError::NotReadable {
            path: PathBuf::from("/root/secret"),
        };
        assert_eq!(err.to_string(), "Not a readable directory: /root/secret");
    }

    #[test]
    fn test_decode_and_config_messages() {
        let decode = PeekDirError::Decode {
            reason: "bad header".to_string(),
        };
        assert_eq!(decode.to_string(), "Image decode failed: bad header");
        let config = PeekDirError::Config("theme name must not be empty".to_string());
        assert_eq!(config.to_string(), "Configuration error: theme name must not be empty");
    }

    #[test]
    fn test_no_accessible_root_counts_candidates() {
        let err = PeekDirError::NoAccessibleRoot {
            candidates: vec![PathBuf::from("/a"), PathBuf::from("/b")],
        };
        assert!(err.to_string().contains("2 candidate(s)"));
    }
}
