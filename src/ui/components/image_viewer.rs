// Image viewer component - 이미지 미리보기
//
// 셀 하나에 세로 픽셀 두 개를 '▀'(전경=위, 배경=아래)로 그린다.
// 배율 1.0은 영역에 맞춤. 확대하면 가운데 기준으로 잘리고, 오프셋으로 옮겨 볼 수 있다.
// 오프셋 단위는 화면 픽셀 (가로 = 칸, 세로 = 반 칸).

use crate::system::image_decoder::DecodedImage;
use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

pub const MIN_ZOOM: f32 = 0.25;
pub const MAX_ZOOM: f32 = 8.0;
const ZOOM_STEP: f32 = 1.25;
/// 한 번 이동할 때 옮기는 비율 (본문 크기 기준)
const PAN_FRACTION: f32 = 0.25;

/// 알파가 이 값보다 작으면 배경으로 취급
const ALPHA_THRESHOLD: u8 = 128;

pub fn zoom_in(zoom: f32) -> f32 {
    (zoom * ZOOM_STEP).min(MAX_ZOOM)
}

pub fn zoom_out(zoom: f32) -> f32 {
    (zoom / ZOOM_STEP).max(MIN_ZOOM)
}

/// 배율에서 허용되는 최대 오프셋 (x, y)
///
/// 맞춤 크기가 확대로 늘어난 만큼의 절반. 배율이 1 이하이면 (0, 0).
pub fn pan_limits(image: &DecodedImage, area: Rect, zoom: f32) -> (f32, f32) {
    match fitted_size(image, area) {
        Some((fit_w, fit_h)) => {
            let grow = (zoom - 1.0).max(0.0) / 2.0;
            (fit_w * grow, fit_h * grow)
        }
        None => (0.0, 0.0),
    }
}

/// 오프셋을 배율의 허용 범위로 제한
pub fn clamp_offset(offset: (f32, f32), limits: (f32, f32)) -> (f32, f32) {
    (
        offset.0.clamp(-limits.0, limits.0),
        offset.1.clamp(-limits.1, limits.1),
    )
}

/// 한 번의 이동 거리 (x, y)
pub fn pan_step(area: Rect) -> (f32, f32) {
    (
        f32::from(area.width) * PAN_FRACTION,
        f32::from(area.height) * 2.0 * PAN_FRACTION,
    )
}

/// 배율 1.0일 때 화면 픽셀 기준 이미지 크기
fn fitted_size(image: &DecodedImage, area: Rect) -> Option<(f32, f32)> {
    let (width, height) = image.thumbnail.dimensions();
    if width == 0 || height == 0 || area.width == 0 || area.height == 0 {
        return None;
    }
    let avail_w = f32::from(area.width);
    let avail_h = f32::from(area.height) * 2.0;
    let fit = (avail_w / width as f32).min(avail_h / height as f32);
    Some((width as f32 * fit, height as f32 * fit))
}

pub struct ImageViewer<'a> {
    image: &'a DecodedImage,
    zoom: f32,
    offset: (f32, f32),
    bg_color: Color,
}

impl<'a> ImageViewer<'a> {
    pub fn new(image: &'a DecodedImage) -> Self {
        Self {
            image,
            zoom: 1.0,
            offset: (0.0, 0.0),
            bg_color: Color::Rgb(30, 30, 30),
        }
    }

    pub fn zoom(mut self, zoom: f32) -> Self {
        self.zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
        self
    }

    /// 가운데 정렬 위치에서 옮길 거리. 양수면 이미지가 오른쪽/아래로 간다
    pub fn offset(mut self, offset: (f32, f32)) -> Self {
        self.offset = offset;
        self
    }

    /// 테마 적용
    pub fn theme(mut self, theme: &Theme) -> Self {
        self.bg_color = theme.bg_primary.to_color();
        self
    }
}

/// 화면 좌표를 축소본 픽셀로 매핑하는 변환
struct Projection {
    scale: f32,
    offset_x: f32,
    offset_y: f32,
    width: u32,
    height: u32,
}

impl Projection {
    fn new(image: &DecodedImage, area: Rect, zoom: f32, offset: (f32, f32)) -> Option<Self> {
        let (fit_w, fit_h) = fitted_size(image, area)?;
        let (width, height) = image.thumbnail.dimensions();
        let scale = fit_w / width as f32 * zoom;

        // 창 크기가 바뀌었을 수 있으니 그릴 때도 다시 제한
        let (pan_x, pan_y) = clamp_offset(offset, pan_limits(image, area, zoom));
        let avail_w = f32::from(area.width);
        let avail_h = f32::from(area.height) * 2.0;

        Some(Self {
            scale,
            offset_x: (avail_w - fit_w * zoom) / 2.0 + pan_x,
            offset_y: (avail_h - fit_h * zoom) / 2.0 + pan_y,
            width,
            height,
        })
    }

    /// 화면 픽셀 (x, 반 행 y) 위치의 원본 좌표
    fn source(&self, x: u16, y: u32) -> Option<(u32, u32)> {
        let sx = (x as f32 + 0.5 - self.offset_x) / self.scale;
        let sy = (y as f32 + 0.5 - self.offset_y) / self.scale;
        if sx < 0.0 || sy < 0.0 {
            return None;
        }
        let (sx, sy) = (sx as u32, sy as u32);
        (sx < self.width && sy < self.height).then_some((sx, sy))
    }
}

impl ImageViewer<'_> {
    fn sample(&self, projection: &Projection, x: u16, y: u32) -> Option<Color> {
        let (sx, sy) = projection.source(x, y)?;
        let [r, g, b, a] = self.image.thumbnail.get_pixel(sx, sy).0;
        (a >= ALPHA_THRESHOLD).then_some(Color::Rgb(r, g, b))
    }
}

impl Widget for ImageViewer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(self.bg_color));
        let Some(projection) = Projection::new(self.image, area, self.zoom, self.offset) else {
            return;
        };

        for row in 0..area.height {
            for col in 0..area.width {
                let top = self.sample(&projection, col, row as u32 * 2);
                let bottom = self.sample(&projection, col, row as u32 * 2 + 1);
                if top.is_none() && bottom.is_none() {
                    continue;
                }

                let cell = &mut buf[(area.x + col, area.y + row)];
                cell.set_symbol("▀")
                    .set_fg(top.unwrap_or(self.bg_color))
                    .set_bg(bottom.unwrap_or(self.bg_color));
            }
        }
    }
}
