use crate::shared::rect::Rect;

/// The outcome of one detection pass: boxes, resolved label names, and
/// confidences, index-aligned across the three sequences.
///
/// Immutable once built; `Detector::detect` returns a fresh record per
/// call and keeps the latest one for its accessor views.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Detections {
    boxes: Vec<Rect>,
    names: Vec<String>,
    confidences: Vec<f32>,
}

impl Detections {
    pub fn new(boxes: Vec<Rect>, names: Vec<String>, confidences: Vec<f32>) -> Self {
        debug_assert_eq!(boxes.len(), names.len(), "boxes and names must align");
        debug_assert_eq!(
            boxes.len(),
            confidences.len(),
            "boxes and confidences must align"
        );
        Self {
            boxes,
            names,
            confidences,
        }
    }

    pub fn boxes(&self) -> &[Rect] {
        &self.boxes
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn confidences(&self) -> &[f32] {
        &self.confidences
    }

    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    /// Iterate detections as `(box, name, confidence)` triples.
    pub fn iter(&self) -> impl Iterator<Item = (&Rect, &str, f32)> {
        self.boxes
            .iter()
            .zip(&self.names)
            .zip(&self.confidences)
            .map(|((b, n), &c)| (b, n.as_str(), c))
    }
}
