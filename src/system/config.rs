// Configuration - 설정 파일 로드
//
// 설정 파일 위치: PEEKDIR_CONFIG 환경변수 > ~/.config/peekdir/config.toml

use crate::ui::components::file_list::IconMode;
use crate::utils::error::{PeekDirError, Result};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_ENV: &str = "PEEKDIR_CONFIG";
const APP_DIR: &str = "peekdir";

/// 사용자 설정 (모든 항목 선택)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 기본 후보보다 먼저 시도할 시작 디렉토리
    pub start_dirs: Vec<PathBuf>,
    /// 테마 이름 (dark, light 또는 themes/<name>.toml)
    pub theme: String,
    /// 아이콘 표시 모드
    pub icon_mode: IconMode,
    /// 로그 파일 경로 (없으면 로그 비활성)
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            start_dirs: Vec::new(),
            theme: "dark".to_string(),
            icon_mode: IconMode::default(),
            log_file: None,
        }
    }
}

impl Config {
    /// 설정 로드
    ///
    /// 명시 경로가 주어지면 반드시 존재해야 한다. 기본 위치의 파일이 없으면 기본 설정을 쓴다.
    pub fn load(explicit: Option<&Path>) -> anyhow::Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        match Self::default_path() {
            Some(path) if path.exists() => Self::from_file(&path),
            _ => Ok(Self::default()),
        }
    }

    /// TOML 파일에서 설정 로드
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("cannot read config file {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("invalid config file {}", path.display()))?;
        config
            .validate()
            .with_context(|| format!("invalid config file {}", path.display()))?;
        Ok(config)
    }

    /// 파싱 이후의 값 검사
    fn validate(&self) -> Result<()> {
        if self.theme.trim().is_empty() {
            return Err(PeekDirError::Config("theme name must not be empty".to_string()));
        }
        if self.start_dirs.iter().any(|dir| dir.as_os_str().is_empty()) {
            return Err(PeekDirError::Config("start_dirs contains an empty path".to_string()));
        }
        Ok(())
    }

    fn default_path() -> Option<PathBuf> {
        if let Ok(custom) = env::var(CONFIG_ENV) {
            let trimmed = custom.trim();
            if !trimmed.is_empty() {
                return Some(PathBuf::from(trimmed));
            }
        }
        Self::config_dir().map(|dir| dir.join("config.toml"))
    }

    /// 앱 설정 디렉토리 (~/.config/peekdir)
    pub fn config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR))
    }

    /// 시작 디렉토리 후보 (앞에서부터 시도)
    ///
    /// CLI 경로 > 설정의 start_dirs > 홈 > 현재 디렉토리 > 루트
    pub fn start_candidates(&self, cli_path: Option<&Path>) -> Vec<PathBuf> {
        let mut candidates = Vec::new();
        candidates.extend(cli_path.map(absolutize));
        candidates.extend(self.start_dirs.iter().map(|p| absolutize(p)));
        candidates.extend(dirs::home_dir());
        candidates.extend(env::current_dir().ok());

        #[cfg(unix)]
        candidates.push(PathBuf::from("/"));
        #[cfg(windows)]
        candidates.push(PathBuf::from("C:\\"));

        candidates.dedup();
        candidates
    }
}

/// 상대 경로는 현재 디렉토리 기준 절대 경로로
fn absolutize(path: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    env::current_dir()
        .map(|cwd| cwd.join(path))
        .unwrap_or_else(|_| path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.theme, "dark");
        assert_eq!(config.icon_mode, IconMode::Emoji);
        assert!(config.start_dirs.is_empty());
        assert!(config.log_file.is_none());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "icon_mode = \"ascii\"\nstart_dirs = [\"/srv/media\"]\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();

        assert_eq!(config.icon_mode, IconMode::Ascii);
        assert_eq!(config.start_dirs, vec![PathBuf::from("/srv/media")]);
        assert_eq!(config.theme, "dark");
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "theme = [").unwrap();

        assert!(Config::load(Some(&path)).is_err());
    }

    #[test]
    fn test_empty_theme_name_is_rejected() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "theme = \"  \"\n").unwrap();

        let err = Config::load(Some(&path)).unwrap_err();
        assert!(format!("{:#}", err).contains("theme name must not be empty"));
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        assert!(Config::load(Some(&temp.path().join("absent.toml"))).is_err());
    }

    #[test]
    fn test_start_candidates_order() {
        let config = Config {
            start_dirs: vec![PathBuf::from("/configured")],
            ..Config::default()
        };

        let candidates = config.start_candidates(Some(Path::new("/from/cli")));

        assert_eq!(candidates[0], PathBuf::from("/from/cli"));
        assert_eq!(candidates[1], PathBuf::from("/configured"));
        #[cfg(unix)]
        assert_eq!(candidates.last(), Some(&PathBuf::from("/")));
    }
}
