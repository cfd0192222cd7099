// キャンバスのサイズ計算と中央配置
// 元画像は常に等倍で描画するため、リサンプリングは発生しない

use crate::core::{RatioMode, ResizeError, ResizeResult};
use image::{imageops, DynamicImage, RgbaImage};

/// Target width:height ratio of every canvas.
pub const TARGET_ASPECT_RATIO: f64 = 0.75;

const BYTES_PER_PIXEL: u64 = 4;

/// Largest RGBA canvas allocated, in bytes; the decoder's own allocation limit.
pub fn max_canvas_bytes() -> u64 {
    image::Limits::default().max_alloc.unwrap_or(u64::MAX)
}

/// Canvas size and where the source lands on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasLayout {
    pub width: u32,
    pub height: u32,
    /// Negative when the canvas is narrower than the source.
    pub offset_x: i64,
    pub offset_y: i64,
}

/// Computes the canvas for a `src_width` x `src_height` source.
///
/// In [`RatioMode::Truncating`] the ratio is `src_width / src_height` in
/// integer division, so it is always a whole number: any source narrower
/// than it is tall counts as too narrow, anything else as too wide.
/// [`RatioMode::Exact`] compares the real quotient instead, which makes an
/// exact 3:4 source keep its size.
pub fn layout_for(src_width: u32, src_height: u32, mode: RatioMode) -> ResizeResult<CanvasLayout> {
    if src_height == 0 {
        return Err(ResizeError::ZeroHeight { width: src_width });
    }

    let quotient = match mode {
        RatioMode::Truncating => (src_width / src_height) as f64,
        RatioMode::Exact => src_width as f64 / src_height as f64,
    };

    let width = if quotient < TARGET_ASPECT_RATIO {
        u64::from(src_height) * 3 / 4
    } else {
        u64::from(src_width)
    };
    let height = if quotient > TARGET_ASPECT_RATIO {
        u64::from(src_width) * 4 / 3
    } else {
        u64::from(src_height)
    };

    let fits = width
        .checked_mul(height)
        .and_then(|pixels| pixels.checked_mul(BYTES_PER_PIXEL))
        .is_some_and(|bytes| bytes <= max_canvas_bytes());
    let (true, Ok(canvas_width), Ok(canvas_height)) =
        (fits, u32::try_from(width), u32::try_from(height))
    else {
        return Err(ResizeError::CanvasTooLarge { width, height });
    };

    Ok(CanvasLayout {
        width: canvas_width,
        height: canvas_height,
        offset_x: (i64::from(canvas_width) - i64::from(src_width)) / 2,
        offset_y: (i64::from(canvas_height) - i64::from(src_height)) / 2,
    })
}

/// Draws `source` onto a fully transparent canvas at the layout's offset.
///
/// Parts of the source that fall outside the canvas are clipped.
pub fn center_on_canvas(source: &DynamicImage, layout: &CanvasLayout) -> RgbaImage {
    let mut canvas = RgbaImage::new(layout.width, layout.height);
    imageops::replace(&mut canvas, &source.to_rgba8(), layout.offset_x, layout.offset_y);
    canvas
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn solid(width: u32, height: u32) -> DynamicImage {
        DynamicImage::ImageRgba8(RgbaImage::from_pixel(
            width,
            height,
            Rgba([200, 100, 50, 255]),
        ))
    }

    #[test]
    fn test_landscape_gets_taller_canvas() {
        let layout = layout_for(800, 600, RatioMode::Truncating).unwrap();

        assert_eq!(
            layout,
            CanvasLayout {
                width: 800,
                height: 1066,
                offset_x: 0,
                offset_y: 233,
            }
        );
    }

    #[test]
    fn test_three_by_four_keeps_size() {
        for mode in [RatioMode::Truncating, RatioMode::Exact] {
            let layout = layout_for(600, 800, mode).unwrap();
            assert_eq!((layout.width, layout.height), (600, 800));
            assert_eq!((layout.offset_x, layout.offset_y), (0, 0));
        }
    }

    #[test]
    fn test_square_is_treated_as_too_wide() {
        let layout = layout_for(300, 300, RatioMode::Truncating).unwrap();

        assert_eq!((layout.width, layout.height), (300, 400));
        assert_eq!(layout.offset_y, 50);
    }

    #[test]
    fn test_truncating_crops_moderately_narrow_source() {
        // 700/800 truncates to 0, so the canvas narrows to 800 * 3 / 4
        let layout = layout_for(700, 800, RatioMode::Truncating).unwrap();

        assert_eq!((layout.width, layout.height), (600, 800));
        assert_eq!(layout.offset_x, -50);
    }

    #[test]
    fn test_exact_mode_pads_moderately_narrow_source() {
        // 700/800 = 0.875 is wider than 3:4
        let layout = layout_for(700, 800, RatioMode::Exact).unwrap();

        assert_eq!((layout.width, layout.height), (700, 933));
        assert_eq!((layout.offset_x, layout.offset_y), (0, 66));
    }

    #[test]
    fn test_very_narrow_source_gets_wider_canvas() {
        let layout = layout_for(100, 800, RatioMode::Exact).unwrap();

        assert_eq!((layout.width, layout.height), (600, 800));
        assert_eq!((layout.offset_x, layout.offset_y), (250, 0));
    }

    #[test]
    fn test_thin_strip_canvas_is_too_large() {
        let result = layout_for(1_000_000, 1, RatioMode::Truncating);

        assert!(matches!(
            result,
            Err(ResizeError::CanvasTooLarge {
                width: 1_000_000,
                height: 1_333_333
            })
        ));
    }

    #[test]
    fn test_large_canvas_within_limit_is_allowed() {
        // 8192 * (8192 * 4 / 3) * 4 bytes stays under the default 512 MiB limit
        let layout = layout_for(8192, 8192, RatioMode::Truncating).unwrap();

        assert_eq!((layout.width, layout.height), (8192, 10922));
        assert!(u64::from(layout.width) * u64::from(layout.height) * 4 <= max_canvas_bytes());
    }

    #[test]
    fn test_overflowing_canvas_is_too_large() {
        let result = layout_for(u32::MAX, 1, RatioMode::Exact);
        assert!(matches!(result, Err(ResizeError::CanvasTooLarge { .. })));
    }

    #[test]
    fn test_zero_height_fails() {
        let result = layout_for(10, 0, RatioMode::Truncating);
        assert!(matches!(result, Err(ResizeError::ZeroHeight { width: 10 })));
    }

    #[test]
    fn test_center_on_canvas_pads_with_transparency() {
        let source = solid(4, 3);
        let layout = layout_for(4, 3, RatioMode::Truncating).unwrap();

        let canvas = center_on_canvas(&source, &layout);

        assert_eq!(canvas.dimensions(), (4, 5));
        assert_eq!(canvas.get_pixel(0, 0)[3], 0);
        assert_eq!(canvas.get_pixel(3, 4)[3], 0);
        assert_eq!(*canvas.get_pixel(0, 1), Rgba([200, 100, 50, 255]));
        assert_eq!(*canvas.get_pixel(3, 3), Rgba([200, 100, 50, 255]));
    }

    #[test]
    fn test_center_on_canvas_clips_negative_offset() {
        let source = solid(7, 8);
        let layout = layout_for(7, 8, RatioMode::Truncating).unwrap();

        let canvas = center_on_canvas(&source, &layout);

        assert_eq!(canvas.dimensions(), (6, 8));
        assert!(canvas.pixels().all(|pixel| pixel[3] == 255));
    }
}
