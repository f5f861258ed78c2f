//! Small raster helpers on `image::RgbaImage`.
//!
//! Every function returns a new image and leaves its input untouched.

use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};

use crate::color::Color;

/// Filter used by [`scaled`] and [`resized_to_width`].
const RESIZE_FILTER: FilterType = FilterType::Triangle;

/// Creates a `width` x `height` image filled with `color`.
pub fn solid_image(width: u32, height: u32, color: Color) -> RgbaImage {
    RgbaImage::from_pixel(width, height, color.to_rgba8())
}

/// Scales both dimensions by `factor`.
///
/// Returns `None` if `factor` is not a finite positive number, or if either
/// resulting dimension rounds to zero.
pub fn scaled(image: &RgbaImage, factor: f32) -> Option<RgbaImage> {
    if !factor.is_finite() || factor <= 0.0 {
        return None;
    }

    let width = scale_dimension(image.width(), factor)?;
    let height = scale_dimension(image.height(), factor)?;
    Some(imageops::resize(image, width, height, RESIZE_FILTER))
}

/// Resizes to `width`, keeping the aspect ratio.
///
/// Returns `None` for a zero target width, an empty source, or a height that
/// rounds to zero.
pub fn resized_to_width(image: &RgbaImage, width: u32) -> Option<RgbaImage> {
    if width == 0 || image.width() == 0 {
        return None;
    }

    let factor = width as f32 / image.width() as f32;
    let height = scale_dimension(image.height(), factor)?;
    Some(imageops::resize(image, width, height, RESIZE_FILTER))
}

fn scale_dimension(dimension: u32, factor: f32) -> Option<u32> {
    let scaled = (dimension as f32 * factor).round();
    if scaled < 1.0 || scaled > u32::MAX as f32 {
        None
    } else {
        Some(scaled as u32)
    }
}

/// Multiplies every pixel's alpha by `alpha` (clamped to `[0, 1]`).
pub fn with_alpha(image: &RgbaImage, alpha: f32) -> RgbaImage {
    let alpha = if alpha.is_nan() { 0.0 } else { alpha.clamp(0.0, 1.0) };
    let mut result = image.clone();

    for pixel in result.pixels_mut() {
        pixel.0[3] = (pixel.0[3] as f32 * alpha).round() as u8;
    }

    result
}

/// Uses the image as a template: every pixel keeps its alpha (scaled by the
/// tint's alpha) and takes the tint's RGB.
pub fn tinted(image: &RgbaImage, color: Color) -> RgbaImage {
    let Rgba([r, g, b, _]) = color.to_rgba8();
    let tint_alpha = color.alpha();
    let mut result = image.clone();

    for pixel in result.pixels_mut() {
        let a = (pixel.0[3] as f32 * tint_alpha).round() as u8;
        pixel.0 = [r, g, b, a];
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{ColorSpace, parse_hex};

    fn checkerboard(width: u32, height: u32) -> RgbaImage {
        RgbaImage::from_fn(width, height, |x, y| {
            if (x + y) % 2 == 0 {
                Rgba([255, 255, 255, 255])
            } else {
                Rgba([0, 0, 0, 0])
            }
        })
    }

    #[test]
    fn solid_fill() {
        let color = parse_hex("#FF000080", ColorSpace::Srgb).unwrap();
        let img = solid_image(3, 2, color);

        assert_eq!(img.dimensions(), (3, 2));
        assert!(img.pixels().all(|p| p.0 == [255, 0, 0, 128]));
    }

    #[test]
    fn scaled_dimensions() {
        let img = checkerboard(10, 4);

        assert_eq!(scaled(&img, 2.0).unwrap().dimensions(), (20, 8));
        assert_eq!(scaled(&img, 0.5).unwrap().dimensions(), (5, 2));
        assert!(scaled(&img, 0.0).is_none());
        assert!(scaled(&img, -1.0).is_none());
        assert!(scaled(&img, f32::NAN).is_none());
        assert!(scaled(&img, 0.01).is_none());
    }

    #[test]
    fn resize_keeps_aspect() {
        let img = checkerboard(40, 20);

        assert_eq!(resized_to_width(&img, 10).unwrap().dimensions(), (10, 5));
        assert_eq!(resized_to_width(&img, 80).unwrap().dimensions(), (80, 40));
        assert!(resized_to_width(&img, 0).is_none());
        assert!(resized_to_width(&RgbaImage::new(0, 0), 10).is_none());
    }

    #[test]
    fn alpha_is_multiplied() {
        let img = checkerboard(2, 2);
        let faded = with_alpha(&img, 0.5);

        assert_eq!(faded.get_pixel(0, 0).0, [255, 255, 255, 128]);
        assert_eq!(faded.get_pixel(1, 0).0, [0, 0, 0, 0]);
        assert_eq!(with_alpha(&img, 3.0), img);
    }

    #[test]
    fn tint_replaces_rgb_keeps_mask() {
        let img = checkerboard(2, 2);
        let blue = tinted(&img, Color::rgb(0.0, 0.0, 1.0));

        assert_eq!(blue.get_pixel(0, 0).0, [0, 0, 255, 255]);
        assert_eq!(blue.get_pixel(1, 0).0, [0, 0, 255, 0]);

        let half = tinted(&img, Color::rgb(0.0, 1.0, 0.0).with_alpha(0.5));
        assert_eq!(half.get_pixel(0, 0).0, [0, 255, 0, 128]);
    }
}
