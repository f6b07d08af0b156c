//! 액션 시스템: 키 바인딩과 커맨드바 항목을 한 곳에서 정의
//!
//! 같은 키라도 모드(목록/미리보기)에 따라 App이 다르게 해석한다.

use crate::ui::components::command_bar::CommandItem;
use crossterm::event::{KeyCode, KeyModifiers};

/// 모든 가능한 액션의 열거
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    // Navigation
    MoveUp,
    MoveDown,
    GoToTop,
    GoToBottom,
    PageUp,
    PageDown,
    OpenSelected,
    NavigateUp,
    NavigateBack,
    Refresh,
    // Image viewer
    ZoomIn,
    ZoomOut,
    ZoomReset,
    PanLeft,
    PanRight,
    PanUp,
    PanDown,
    // System
    Quit,
}

/// 키 바인딩 정의
pub struct KeyBinding {
    pub code: KeyCode,
    pub modifiers: Option<KeyModifiers>, // None = any modifier
    pub action: Action,
}

const fn bind(code: KeyCode, modifiers: Option<KeyModifiers>, action: Action) -> KeyBinding {
    KeyBinding {
        code,
        modifiers,
        action,
    }
}

/// 전체 키 바인딩 테이블 (위에서부터 첫 일치)
pub static KEY_BINDINGS: &[KeyBinding] = &[
    bind(KeyCode::Char('c'), Some(KeyModifiers::CONTROL), Action::Quit),
    bind(KeyCode::Char('u'), Some(KeyModifiers::CONTROL), Action::PageUp),
    bind(KeyCode::Char('d'), Some(KeyModifiers::CONTROL), Action::PageDown),
    bind(KeyCode::Char('q'), Some(KeyModifiers::NONE), Action::Quit),
    bind(KeyCode::Left, Some(KeyModifiers::SHIFT), Action::PanLeft),
    bind(KeyCode::Right, Some(KeyModifiers::SHIFT), Action::PanRight),
    bind(KeyCode::Up, Some(KeyModifiers::SHIFT), Action::PanUp),
    bind(KeyCode::Down, Some(KeyModifiers::SHIFT), Action::PanDown),
    bind(KeyCode::Char('H'), None, Action::PanLeft),
    bind(KeyCode::Char('L'), None, Action::PanRight),
    bind(KeyCode::Char('K'), None, Action::PanUp),
    bind(KeyCode::Char('J'), None, Action::PanDown),
    bind(KeyCode::Up, None, Action::MoveUp),
    bind(KeyCode::Char('k'), Some(KeyModifiers::NONE), Action::MoveUp),
    bind(KeyCode::Down, None, Action::MoveDown),
    bind(KeyCode::Char('j'), Some(KeyModifiers::NONE), Action::MoveDown),
    bind(KeyCode::Home, None, Action::GoToTop),
    bind(KeyCode::Char('g'), Some(KeyModifiers::NONE), Action::GoToTop),
    bind(KeyCode::End, None, Action::GoToBottom),
    bind(KeyCode::Char('G'), None, Action::GoToBottom),
    bind(KeyCode::PageUp, None, Action::PageUp),
    bind(KeyCode::PageDown, None, Action::PageDown),
    bind(KeyCode::Enter, None, Action::OpenSelected),
    bind(KeyCode::Right, None, Action::OpenSelected),
    bind(KeyCode::Char('l'), Some(KeyModifiers::NONE), Action::OpenSelected),
    bind(KeyCode::Left, None, Action::NavigateUp),
    bind(KeyCode::Char('h'), Some(KeyModifiers::NONE), Action::NavigateUp),
    bind(KeyCode::Esc, None, Action::NavigateBack),
    bind(KeyCode::Backspace, None, Action::NavigateBack),
    bind(KeyCode::Char('r'), Some(KeyModifiers::NONE), Action::Refresh),
    bind(KeyCode::Char('+'), None, Action::ZoomIn),
    bind(KeyCode::Char('='), None, Action::ZoomIn),
    bind(KeyCode::Char('-'), None, Action::ZoomOut),
    bind(KeyCode::Char('0'), None, Action::ZoomReset),
];

/// 키 입력으로 액션 조회
pub fn find_action(modifiers: KeyModifiers, code: KeyCode) -> Option<Action> {
    KEY_BINDINGS
        .iter()
        .find(|binding| {
            let mod_matches = match binding.modifiers {
                None => true, // any modifier
                Some(required) => modifiers == required,
            };
            binding.code == code && mod_matches
        })
        .map(|binding| binding.action)
}

/// 커맨드바 표시 정보
pub struct CommandBarEntry {
    pub key: &'static str,
    pub label: &'static str,
}

const BROWSING_COMMANDS: &[CommandBarEntry] = &[
    CommandBarEntry { key: "j/k", label: "Move" },
    CommandBarEntry { key: "Enter", label: "Open" },
    CommandBarEntry { key: "h", label: "Up" },
    CommandBarEntry { key: "Esc", label: "Back" },
    CommandBarEntry { key: "r", label: "Refresh" },
    CommandBarEntry { key: "q", label: "Quit" },
];

/// 히스토리가 비어 있으면 Esc가 곧 종료
const BROWSING_ROOT_COMMANDS: &[CommandBarEntry] = &[
    CommandBarEntry { key: "j/k", label: "Move" },
    CommandBarEntry { key: "Enter", label: "Open" },
    CommandBarEntry { key: "h", label: "Up" },
    CommandBarEntry { key: "r", label: "Refresh" },
    CommandBarEntry { key: "q/Esc", label: "Quit" },
];

const TEXT_VIEWER_COMMANDS: &[CommandBarEntry] = &[
    CommandBarEntry { key: "j/k", label: "Scroll" },
    CommandBarEntry { key: "PgUp/PgDn", label: "Page" },
    CommandBarEntry { key: "Esc", label: "Close" },
    CommandBarEntry { key: "q", label: "Quit" },
];

const IMAGE_VIEWER_COMMANDS: &[CommandBarEntry] = &[
    CommandBarEntry { key: "+/-", label: "Zoom" },
    CommandBarEntry { key: "HJKL", label: "Pan" },
    CommandBarEntry { key: "0", label: "Reset" },
    CommandBarEntry { key: "Esc", label: "Close" },
    CommandBarEntry { key: "q", label: "Quit" },
];

/// 커맨드바 문맥
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandContext {
    Browsing,
    /// 돌아갈 히스토리가 없는 목록
    BrowsingRoot,
    TextViewer,
    ImageViewer,
}

/// 문맥별 커맨드바 항목
pub fn command_items(context: CommandContext) -> Vec<CommandItem> {
    let entries = match context {
        CommandContext::Browsing => BROWSING_COMMANDS,
        CommandContext::BrowsingRoot => BROWSING_ROOT_COMMANDS,
        CommandContext::TextViewer => TEXT_VIEWER_COMMANDS,
        CommandContext::ImageViewer => IMAGE_VIEWER_COMMANDS,
    };
    entries
        .iter()
        .map(|entry| CommandItem::new(entry.key, entry.label))
        .collect()
}
