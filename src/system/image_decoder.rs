// Image decoding - 이미지 디코딩
//
// 원본 크기만 기억하고 터미널 렌더링용 축소본을 보관한다.

use crate::utils::error::{PeekDirError, Result};
use image::RgbaImage;

/// 축소본 최대 변 길이 (픽셀)
pub const THUMBNAIL_MAX_SIDE: u32 = 320;

/// 디코딩된 이미지 핸들
#[derive(Debug, Clone)]
pub struct DecodedImage {
    /// 원본 너비
    pub width: u32,
    /// 원본 높이
    pub height: u32,
    /// 비율을 유지한 축소본
    pub thumbnail: RgbaImage,
}

/// 바이트에서 이미지 디코딩 (포맷은 내용으로 추정)
pub fn decode_image(bytes: &[u8]) -> Result<DecodedImage> {
    let image = image::load_from_memory(bytes).map_err(|e| PeekDirError::Decode {
        reason: e.to_string(),
    })?;

    let thumbnail = if image.width() > THUMBNAIL_MAX_SIDE || image.height() > THUMBNAIL_MAX_SIDE {
        image
            .thumbnail(THUMBNAIL_MAX_SIDE, THUMBNAIL_MAX_SIDE)
            .to_rgba8()
    } else {
        image.to_rgba8()
    };

    Ok(DecodedImage {
        width: image.width(),
        height: image.height(),
        thumbnail,
    })
}

#[cfg(test)]
pub(crate) fn encode_png(width: u32, height: u32) -> Vec<u8> {
    use image::{ImageFormat, Rgba};
    use std::io::Cursor;

    let img = RgbaImage::from_pixel(width, height, Rgba([200, 40, 40, 255]));
    let mut bytes = Cursor::new(Vec::new());
    img.write_to(&mut bytes, ImageFormat::Png).unwrap();
    bytes.into_inner()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_png_keeps_original_dimensions() {
        let decoded = decode_image(&encode_png(8, 4)).unwrap();
        assert_eq!((decoded.width, decoded.height), (8, 4));
        assert_eq!(decoded.thumbnail.dimensions(), (8, 4));
    }

    #[test]
    fn test_large_image_thumbnail_is_bounded() {
        let decoded = decode_image(&encode_png(1000, 500)).unwrap();
        assert_eq!(decoded.width, 1000);
        let (w, h) = decoded.thumbnail.dimensions();
        assert!(w <= THUMBNAIL_MAX_SIDE && h <= THUMBNAIL_MAX_SIDE);
        assert!(w > h);
    }

    #[test]
    fn test_corrupt_bytes_fail_to_decode() {
        let mut bytes = encode_png(4, 4);
        bytes.truncate(20);
        let err = decode_image(&bytes).unwrap_err();
        assert!(matches!(err, PeekDirError::Decode { .. }));
    }
}
