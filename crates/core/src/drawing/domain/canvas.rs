use crate::shared::color::Color;
use crate::shared::rect::Rect;

/// Domain interface for the drawing surface the annotation helper
/// renders onto. Rectangle and text primitives only; everything else
/// (fonts, rasterization) belongs to the implementation.
pub trait Canvas {
    /// 1-pixel rectangle outline.
    fn rect_outline(&mut self, rect: Rect, color: Color);

    /// Filled rectangle.
    fn rect_filled(&mut self, rect: Rect, color: Color);

    /// Text with its top-left corner at `(x, y)`.
    fn text(&mut self, text: &str, x: i32, y: i32, color: Color);
}
