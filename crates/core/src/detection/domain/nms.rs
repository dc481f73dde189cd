use crate::shared::rect::Rect;

/// A thresholded detection awaiting non-max suppression.
#[derive(Clone, Debug)]
pub struct Candidate {
    pub rect: Rect,
    pub class_id: usize,
    pub confidence: f32,
}

/// Greedy non-max suppression over all candidates, class-agnostic.
///
/// Candidates are ranked by confidence descending (ties keep their
/// original order); each selected box suppresses every remaining box
/// whose IoU with it exceeds `iou_threshold`. Returns indices into
/// `candidates` in selection order.
pub fn suppress(candidates: &[Candidate], iou_threshold: f32) -> Vec<usize> {
    let mut order: Vec<usize> = (0..candidates.len()).collect();
    // Stable sort preserves original order among equal confidences.
    order.sort_by(|&a, &b| {
        candidates[b]
            .confidence
            .partial_cmp(&candidates[a].confidence)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut keep = Vec::new();
    let mut suppressed = vec![false; candidates.len()];

    for (rank, &i) in order.iter().enumerate() {
        if suppressed[i] {
            continue;
        }
        keep.push(i);
        for &j in &order[rank + 1..] {
            if suppressed[j] {
                continue;
            }
            if candidates[i].rect.iou(&candidates[j].rect) > iou_threshold as f64 {
                suppressed[j] = true;
            }
        }
    }
    keep
}
