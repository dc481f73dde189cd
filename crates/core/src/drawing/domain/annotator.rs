use crate::detection::domain::detections::Detections;
use crate::drawing::domain::canvas::Canvas;
use crate::shared::color::Color;
use crate::shared::constants::{
    DEFAULT_BOX_COLOR, DEFAULT_TEXT_COLOR, LABEL_BANNER_HEIGHT, LABEL_CHAR_WIDTH, LABEL_TEXT_INSET,
};
use crate::shared::rect::Rect;

/// What the annotation helper renders, and in which colors.
///
/// Colors are given in BGR order (the reference convention); they are
/// swapped automatically when the target image is RGB.
#[derive(Clone, Copy, Debug)]
pub struct DrawOptions {
    pub names: bool,
    pub locations: bool,
    pub confidences: bool,
    pub box_color: Color,
    pub text_color: Color,
}

impl Default for DrawOptions {
    fn default() -> Self {
        Self {
            names: true,
            locations: true,
            confidences: false,
            box_color: DEFAULT_BOX_COLOR,
            text_color: DEFAULT_TEXT_COLOR,
        }
    }
}

/// Draw detection boxes and label banners onto `canvas`.
///
/// Pure rendering side effect; box geometry is never altered. Each box
/// gets a 1-pixel outline, and a non-empty label (per the `names` and
/// `confidences` flags) gets a filled banner at the box's top-left
/// corner sized 9 px per character by 20 px, with the text overlaid.
pub fn draw_object_info(
    canvas: &mut dyn Canvas,
    detections: &Detections,
    use_bgr: bool,
    options: &DrawOptions,
) {
    let (box_color, text_color) = if use_bgr {
        (options.box_color, options.text_color)
    } else {
        (options.box_color.swapped(), options.text_color.swapped())
    };

    if !options.locations {
        return;
    }

    for (rect, name, confidence) in detections.iter() {
        canvas.rect_outline(*rect, box_color);

        let text = label_text(name, confidence, options.names, options.confidences);
        if text.is_empty() {
            continue;
        }
        let banner = Rect::new(
            rect.x,
            rect.y,
            text.chars().count() as i32 * LABEL_CHAR_WIDTH,
            LABEL_BANNER_HEIGHT,
        );
        canvas.rect_filled(banner, box_color);
        canvas.text(&text, rect.x, rect.y + LABEL_TEXT_INSET, text_color);
    }
}

/// `"<name>: <confidence to two decimals>"`, with either part omitted
/// per the flags.
fn label_text(name: &str, confidence: f32, names: bool, confidences: bool) -> String {
    let mut text = String::new();
    if names {
        text.push_str(name);
        text.push_str(": ");
    }
    if confidences {
        text.push_str(&format!("{confidence:.2}"));
    }
    text
}
