use crate::system::image_decoder::DecodedImage;

/// 미리보기 내용. 항상 하나의 변형만 활성
#[derive(Debug, Clone, Default)]
pub enum ViewerContent {
    /// 뷰어 닫힘
    #[default]
    None,
    /// 텍스트 (읽기/디코딩 실패 진단 메시지 포함)
    Text(String),
    /// 디코딩된 이미지
    Image(DecodedImage),
}

/// 뷰어 상태 관리자
///
/// 현재 미리보기 모드, 내용, 파일 이름을 소유한다. 디렉토리 히스토리는 건드리지 않는다.
#[derive(Debug, Clone, Default)]
pub struct Viewer {
    content: ViewerContent,
    file_name: String,
}

impl Viewer {
    pub fn new() -> Self {
        Self::default()
    }

    /// 내용 표시 (이전 미리보기를 대체)
    pub fn show(&mut self, file_name: impl Into<String>, content: ViewerContent) {
        self.file_name = file_name.into();
        self.content = content;
    }

    /// 뷰어 닫기. 여러 번 호출해도 결과는 같다
    pub fn close(&mut self) {
        self.content = ViewerContent::None;
        self.file_name.clear();
    }

    pub fn is_active(&self) -> bool {
        !matches!(self.content, ViewerContent::None)
    }

    pub fn content(&self) -> &ViewerContent {
        &self.content
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// 텍스트 모드일 때 내용
    pub fn text(&self) -> Option<&str> {
        match &self.content {
            ViewerContent::Text(text) => Some(text),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(viewer: &Viewer) -> (bool, String, Option<String>) {
        (
            viewer.is_active(),
            viewer.file_name().to_string(),
            viewer.text().map(str::to_string),
        )
    }

    #[test]
    fn test_new_viewer_is_closed() {
        let viewer = Viewer::new();
        assert!(!viewer.is_active());
        assert!(viewer.file_name().is_empty());
    }

    #[test]
    fn test_show_replaces_previous_content() {
        let mut viewer = Viewer::new();
        viewer.show("a.txt", ViewerContent::Text("first".into()));
        viewer.show("b.txt", ViewerContent::Text("second".into()));

        assert!(viewer.is_active());
        assert_eq!(viewer.file_name(), "b.txt");
        assert_eq!(viewer.text(), Some("second"));
    }

    #[test]
    fn test_close_is_idempotent() {
        let mut viewer = Viewer::new();
        viewer.show("a.txt", ViewerContent::Text("body".into()));

        viewer.close();
        let once = snapshot(&viewer);
        viewer.close();
        let twice = snapshot(&viewer);

        assert_eq!(once, (false, String::new(), None));
        assert_eq!(once, twice);
    }
}
