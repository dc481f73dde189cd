use ab_glyph::{Font, PxScale};
use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_filled_rect_mut, draw_hollow_rect_mut, draw_text_mut};

use crate::drawing::domain::canvas::Canvas;
use crate::shared::color::Color;
use crate::shared::rect::Rect;

/// Text size used for label banners.
const LABEL_TEXT_SCALE: f32 = 14.0;

/// Canvas implementation rasterizing onto an [`RgbImage`] with
/// `imageproc` primitives and an `ab_glyph` font supplied by the host.
///
/// Channel order is whatever the host put into the buffer; colors are
/// written through unchanged.
pub struct GlyphCanvas<'a, F: Font> {
    image: &'a mut RgbImage,
    font: F,
    scale: PxScale,
}

impl<'a, F: Font> GlyphCanvas<'a, F> {
    pub fn new(image: &'a mut RgbImage, font: F) -> Self {
        Self {
            image,
            font,
            scale: PxScale::from(LABEL_TEXT_SCALE),
        }
    }
}

impl<F: Font> Canvas for GlyphCanvas<'_, F> {
    fn rect_outline(&mut self, rect: Rect, color: Color) {
        draw_outline(self.image, rect, to_pixel(color));
    }

    fn rect_filled(&mut self, rect: Rect, color: Color) {
        draw_filled(self.image, rect, to_pixel(color));
    }

    fn text(&mut self, text: &str, x: i32, y: i32, color: Color) {
        draw_text_mut(self.image, to_pixel(color), x, y, self.scale, &self.font, text);
    }
}

fn to_pixel(color: Color) -> Rgb<u8> {
    Rgb([color.0, color.1, color.2])
}

fn draw_outline(image: &mut RgbImage, rect: Rect, pixel: Rgb<u8>) {
    if let Some(r) = to_imageproc_rect(rect) {
        draw_hollow_rect_mut(image, r, pixel);
    }
}

fn draw_filled(image: &mut RgbImage, rect: Rect, pixel: Rgb<u8>) {
    if let Some(r) = to_imageproc_rect(rect) {
        draw_filled_rect_mut(image, r, pixel);
    }
}

/// Degenerate rectangles are dropped; imageproc requires positive size.
fn to_imageproc_rect(rect: Rect) -> Option<imageproc::rect::Rect> {
    if rect.width <= 0 || rect.height <= 0 {
        return None;
    }
    Some(imageproc::rect::Rect::at(rect.x, rect.y).of_size(rect.width as u32, rect.height as u32))
}
