use anyhow::{bail, Context};
use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// 색상 테마 시스템
///
/// 내장 테마(dark, light) 또는 설정 디렉토리의 `themes/<name>.toml`에서 로드합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    // 배경/전경
    pub bg_primary: ColorDef,
    pub fg_primary: ColorDef,

    // 타이틀바
    pub title_bar_bg: ColorDef,
    pub title_bar_fg: ColorDef,
    pub subtitle_fg: ColorDef,

    // 파일 리스트
    pub file_normal: ColorDef,
    pub file_selected: ColorDef,
    pub file_selected_bg: ColorDef,
    pub directory: ColorDef,
    pub image_file: ColorDef,
    pub text_file: ColorDef,
    pub metadata: ColorDef,

    // 하단 바
    pub status_bar_bg: ColorDef,
    pub status_bar_fg: ColorDef,
    pub command_bar_bg: ColorDef,
    pub command_bar_fg: ColorDef,
    pub command_key_fg: ColorDef,

    // 강조
    pub warning: ColorDef,
    pub error: ColorDef,
}

/// 색상 값
///
/// TOML에는 문자열 하나로 쓴다: `"#1e1e1e"`, `"red"`, `"dark gray"`, 또는 256색 인덱스 `"236"`.
/// 해석할 수 없는 값은 터미널 기본색(`Color::Reset`)이 된다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorDef(String);

impl ColorDef {
    pub fn to_color(&self) -> Color {
        Color::from_str(self.0.trim()).unwrap_or(Color::Reset)
    }
}

impl From<&str> for ColorDef {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl Theme {
    /// Dark 테마 (기본)
    pub fn dark() -> Self {
        Theme {
            bg_primary: "#1e1e1e".into(),
            fg_primary: "#d4d4d4".into(),

            title_bar_bg: "#2d2d30".into(),
            title_bar_fg: "#ffffff".into(),
            subtitle_fg: "#9d9d9d".into(),

            file_normal: "#d4d4d4".into(),
            file_selected: "#ffffff".into(),
            file_selected_bg: "#0078d4".into(),
            directory: "#569cd6".into(),
            image_file: "#c586c0".into(),
            text_file: "#4ec9b0".into(),
            metadata: "#808080".into(),

            status_bar_bg: "#007acc".into(),
            status_bar_fg: "#ffffff".into(),
            command_bar_bg: "#2d2d30".into(),
            command_bar_fg: "#cccccc".into(),
            command_key_fg: "#569cd6".into(),

            warning: "#ffa500".into(),
            error: "#f44747".into(),
        }
    }

    /// Light 테마
    pub fn light() -> Self {
        Theme {
            bg_primary: "#ffffff".into(),
            fg_primary: "#1e1e1e".into(),

            title_bar_bg: "#0078d4".into(),
            title_bar_fg: "#ffffff".into(),
            subtitle_fg: "#dddddd".into(),

            file_normal: "#1e1e1e".into(),
            file_selected: "#000000".into(),
            file_selected_bg: "#add6ff".into(),
            directory: "#0066cc".into(),
            image_file: "#af00db".into(),
            text_file: "#008080".into(),
            metadata: "#6e6e6e".into(),

            status_bar_bg: "#0078d4".into(),
            status_bar_fg: "#ffffff".into(),
            command_bar_bg: "#f3f3f3".into(),
            command_bar_fg: "#1e1e1e".into(),
            command_key_fg: "#0066cc".into(),

            warning: "#ff8c00".into(),
            error: "#e51400".into(),
        }
    }

    /// 이름으로 테마 찾기
    ///
    /// 내장 테마가 아니면 `themes_dir/<name>.toml`을 읽는다.
    pub fn by_name(name: &str, themes_dir: Option<&Path>) -> anyhow::Result<Self> {
        match name {
            "dark" => Ok(Self::dark()),
            "light" => Ok(Self::light()),
            custom => match themes_dir {
                Some(dir) => Self::from_file(&dir.join(format!("{}.toml", custom))),
                None => bail!("unknown theme: {}", custom),
            },
        }
    }

    /// TOML 파일에서 테마 로드
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("cannot read theme file {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("invalid theme file {}", path.display()))
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_dark_theme_creation() {
        let theme = Theme::dark();
        assert_eq!(theme.bg_primary.to_color(), Color::Rgb(30, 30, 30));
    }

    #[test]
    fn test_light_theme_creation() {
        let theme = Theme::light();
        assert_eq!(theme.bg_primary.to_color(), Color::Rgb(255, 255, 255));
    }

    #[test]
    fn test_color_values() {
        assert_eq!(ColorDef::from("#1e1e1e").to_color(), Color::Rgb(30, 30, 30));
        assert_eq!(ColorDef::from("White").to_color(), Color::White);
        assert_eq!(ColorDef::from("dark gray").to_color(), Color::DarkGray);
        assert_eq!(ColorDef::from("236").to_color(), Color::Indexed(236));
        assert_eq!(ColorDef::from("#123").to_color(), Color::Reset);
        assert_eq!(ColorDef::from("sunset").to_color(), Color::Reset);
    }

    #[test]
    fn test_by_name_builtin_and_unknown() {
        assert!(Theme::by_name("light", None).is_ok());
        assert!(Theme::by_name("solarized", None).is_err());
    }

    #[test]
    fn test_custom_theme_round_trips_through_file() {
        let temp = TempDir::new().unwrap();
        let content = toml::to_string_pretty(&Theme::light()).unwrap();
        std::fs::write(temp.path().join("paper.toml"), content).unwrap();

        let theme = Theme::by_name("paper", Some(temp.path())).unwrap();
        assert_eq!(theme.bg_primary.to_color(), Color::Rgb(255, 255, 255));
    }
}
