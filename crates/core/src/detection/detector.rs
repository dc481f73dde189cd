/// Object detection adapter over a pretrained network.
///
/// Wraps an [`InferenceEngine`] with label resolution, confidence
/// thresholding, box decoding, and greedy NMS. Holds no algorithmic
/// machinery of its own; the forward pass lives in the engine.
use std::fs;
use std::path::Path;

use image::RgbImage;

use crate::detection::domain::detections::Detections;
use crate::detection::domain::inference_engine::InferenceEngine;
use crate::detection::domain::nms::{self, Candidate};
use crate::detection::domain::tensor::image_tensor;
use crate::detection::infrastructure::ort_engine::OrtEngine;
use crate::drawing::domain::annotator::{self, DrawOptions};
use crate::drawing::domain::canvas::Canvas;
use crate::shared::constants::{
    DEFAULT_CONFIDENCE_THRESHOLD, DEFAULT_NMS_THRESHOLD, NETWORK_INPUT_SIZE,
};
use crate::shared::error::LoadError;
use crate::shared::rect::Rect;

/// Detection thresholds and the channel order of input images.
#[derive(Clone, Copy, Debug)]
pub struct DetectorConfig {
    /// Minimum class score for a detection to be considered at all.
    pub confidence_threshold: f32,
    /// IoU above which a lower-confidence box is suppressed.
    pub nms_threshold: f32,
    /// Input images (and annotation colors) use BGR channel order.
    pub use_bgr: bool,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            confidence_threshold: DEFAULT_CONFIDENCE_THRESHOLD,
            nms_threshold: DEFAULT_NMS_THRESHOLD,
            use_bgr: true,
        }
    }
}

pub struct Detector {
    config: DetectorConfig,
    labels: Vec<String>,
    engine: Box<dyn InferenceEngine>,
    last: Detections,
}

impl Detector {
    /// Build a detector from an injected engine and label table.
    pub fn new(config: DetectorConfig, labels: Vec<String>, engine: Box<dyn InferenceEngine>) -> Self {
        Self {
            config,
            labels,
            engine,
            last: Detections::default(),
        }
    }

    /// Load the label table and network from disk, backing the detector
    /// with an ONNX Runtime session.
    pub fn from_files(
        config: DetectorConfig,
        labels_path: &Path,
        network_config_path: &Path,
        weights_path: &Path,
    ) -> Result<Self, LoadError> {
        let labels = load_labels(labels_path)?;
        let engine = OrtEngine::load(network_config_path, weights_path)?;
        log::info!(
            "Loaded detection network ({} labels, output layers: {:?})",
            labels.len(),
            engine.output_names()
        );
        Ok(Self::new(config, labels, Box::new(engine)))
    }

    /// Run one detection pass. Returns a fresh result record and keeps
    /// it as the detector's current result state.
    pub fn detect(&mut self, image: &RgbImage) -> Result<Detections, Box<dyn std::error::Error>> {
        let (img_w, img_h) = image.dimensions();
        let input = image_tensor(image, NETWORK_INPUT_SIZE, self.config.use_bgr);
        let outputs = self.engine.forward(input)?;

        let mut candidates = Vec::new();
        for output in &outputs {
            for row in output.rows() {
                let row = row.as_slice().unwrap_or(&[]);
                if row.len() < 6 {
                    continue;
                }
                // Elements after box geometry and objectness are
                // per-class scores; argmax picks the class.
                let (class_id, confidence) = argmax(&row[5..]);
                if confidence <= self.config.confidence_threshold {
                    continue;
                }
                candidates.push(Candidate {
                    rect: decode_box(row, img_w, img_h),
                    class_id,
                    confidence,
                });
            }
        }

        let kept = nms::suppress(&candidates, self.config.nms_threshold);
        log::debug!(
            "{} candidates above threshold, {} after NMS",
            candidates.len(),
            kept.len()
        );

        let mut boxes = Vec::with_capacity(kept.len());
        let mut names = Vec::with_capacity(kept.len());
        let mut confidences = Vec::with_capacity(kept.len());
        for i in kept {
            let c = &candidates[i];
            let name = self.labels.get(c.class_id).ok_or_else(|| {
                format!(
                    "network produced class id {} outside label table of {} entries",
                    c.class_id,
                    self.labels.len()
                )
            })?;
            boxes.push(c.rect);
            names.push(name.clone());
            confidences.push(c.confidence);
        }

        self.last = Detections::new(boxes, names, confidences);
        Ok(self.last.clone())
    }

    /// Label names from the last `detect` call. Empty before the first.
    pub fn object_names(&self) -> &[String] {
        self.last.names()
    }

    /// Bounding boxes from the last `detect` call.
    pub fn object_locations(&self) -> &[Rect] {
        self.last.boxes()
    }

    /// Confidences from the last `detect` call.
    pub fn confidences(&self) -> &[f32] {
        self.last.confidences()
    }

    /// Draw the last detection results onto `canvas`.
    pub fn draw_object_info(&self, canvas: &mut dyn Canvas, options: &DrawOptions) {
        annotator::draw_object_info(canvas, &self.last, self.config.use_bgr, options);
    }
}

/// Read a label table: one label per line, line index = class id,
/// surrounding blank lines ignored.
pub fn load_labels(path: &Path) -> Result<Vec<String>, LoadError> {
    let content = fs::read_to_string(path).map_err(|source| LoadError::Labels {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(content.trim().lines().map(str::to_owned).collect())
}

/// Index and value of the maximum score; the first maximum wins.
fn argmax(scores: &[f32]) -> (usize, f32) {
    let mut best = 0;
    let mut best_score = f32::MIN;
    for (i, &s) in scores.iter().enumerate() {
        if s > best_score {
            best = i;
            best_score = s;
        }
    }
    (best, best_score)
}

/// Decode `[cx, cy, w, h]` image-size fractions into a pixel `Rect`.
///
/// Truncation mirrors the reference pipeline: center and size are
/// truncated to integers first, then the corner is derived with float
/// halving and truncated again.
fn decode_box(row: &[f32], img_w: u32, img_h: u32) -> Rect {
    let cx = (row[0] * img_w as f32) as i32;
    let cy = (row[1] * img_h as f32) as i32;
    let w = (row[2] * img_w as f32) as i32;
    let h = (row[3] * img_h as f32) as i32;
    let x = (cx as f32 - w as f32 / 2.0) as i32;
    let y = (cy as f32 - h as f32 / 2.0) as i32;
    Rect::new(x, y, w, h)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{Array2, Array4};
    use std::io::Write;

    /// Engine scripted with fixed per-layer detection matrices.
    struct FakeEngine {
        names: Vec<String>,
        outputs: Vec<Array2<f32>>,
    }

    impl FakeEngine {
        fn new(outputs: Vec<Array2<f32>>) -> Self {
            let names = (0..outputs.len()).map(|i| format!("out_{i}")).collect();
            Self { names, outputs }
        }
    }

    impl InferenceEngine for FakeEngine {
        fn output_names(&self) -> &[String] {
            &self.names
        }

        fn forward(
            &mut self,
            _input: Array4<f32>,
        ) -> Result<Vec<Array2<f32>>, Box<dyn std::error::Error>> {
            Ok(self.outputs.clone())
        }
    }

    /// One detection row: geometry fractions, objectness, class scores.
    fn rows(rows: &[Vec<f32>]) -> Array2<f32> {
        let cols = rows.first().map_or(0, Vec::len);
        let flat: Vec<f32> = rows.iter().flatten().copied().collect();
        Array2::from_shape_vec((rows.len(), cols), flat).unwrap()
    }

    fn detector_with(outputs: Vec<Array2<f32>>, labels: &[&str]) -> Detector {
        Detector::new(
            DetectorConfig::default(),
            labels.iter().map(|s| s.to_string()).collect(),
            Box::new(FakeEngine::new(outputs)),
        )
    }

    fn blank_image() -> RgbImage {
        RgbImage::new(200, 100)
    }

    #[test]
    fn test_accessors_empty_before_first_detect() {
        let det = detector_with(vec![], &["cat"]);
        assert!(det.object_names().is_empty());
        assert!(det.object_locations().is_empty());
        assert!(det.confidences().is_empty());
    }

    #[test]
    fn test_no_candidates_yields_empty_result() {
        // Single detection below the 0.5 confidence threshold.
        let out = rows(&[vec![0.5, 0.5, 0.2, 0.2, 1.0, 0.4]]);
        let mut det = detector_with(vec![out], &["cat"]);
        let result = det.detect(&blank_image()).unwrap();
        assert!(result.is_empty());
        assert!(det.object_names().is_empty());
    }

    #[test]
    fn test_result_sequences_align() {
        let out = rows(&[
            vec![0.25, 0.5, 0.1, 0.2, 1.0, 0.9, 0.1],
            vec![0.75, 0.5, 0.1, 0.2, 1.0, 0.1, 0.8],
        ]);
        let mut det = detector_with(vec![out], &["cat", "dog"]);
        let result = det.detect(&blank_image()).unwrap();
        assert_eq!(result.len(), 2);
        assert_eq!(result.boxes().len(), result.names().len());
        assert_eq!(result.boxes().len(), result.confidences().len());
    }

    #[test]
    fn test_box_geometry_decoded_from_fractions() {
        // 200x100 image: cx=0.5 → 100, cy=0.5 → 50, w=0.2 → 40, h=0.4 → 40.
        let out = rows(&[vec![0.5, 0.5, 0.2, 0.4, 1.0, 0.9]]);
        let mut det = detector_with(vec![out], &["cat"]);
        let result = det.detect(&blank_image()).unwrap();
        assert_eq!(result.boxes()[0], Rect::new(80, 30, 40, 40));
    }

    #[test]
    fn test_argmax_picks_class_and_resolves_label() {
        let out = rows(&[vec![0.5, 0.5, 0.2, 0.2, 1.0, 0.2, 0.9, 0.3]]);
        let mut det = detector_with(vec![out], &["cat", "dog", "bird"]);
        let result = det.detect(&blank_image()).unwrap();
        assert_eq!(result.names(), &["dog".to_string()]);
        assert!((result.confidences()[0] - 0.9).abs() < 1e-6);
    }

    #[test]
    fn test_nms_keeps_highest_confidence_of_overlap() {
        // Two near-identical boxes of the same class; one survivor.
        let out = rows(&[
            vec![0.5, 0.5, 0.2, 0.4, 1.0, 0.7],
            vec![0.5, 0.5, 0.21, 0.41, 1.0, 0.9],
        ]);
        let mut det = detector_with(vec![out], &["cat"]);
        let result = det.detect(&blank_image()).unwrap();
        assert_eq!(result.len(), 1);
        assert!((result.confidences()[0] - 0.9).abs() < 1e-6);
    }

    #[test]
    fn test_detections_gathered_across_output_layers() {
        let a = rows(&[vec![0.25, 0.5, 0.1, 0.2, 1.0, 0.9]]);
        let b = rows(&[vec![0.75, 0.5, 0.1, 0.2, 1.0, 0.8]]);
        let mut det = detector_with(vec![a, b], &["cat"]);
        let result = det.detect(&blank_image()).unwrap();
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn test_new_result_replaces_previous() {
        let out = rows(&[vec![0.5, 0.5, 0.2, 0.2, 1.0, 0.9]]);
        let mut det = detector_with(vec![out], &["cat"]);
        det.detect(&blank_image()).unwrap();
        assert_eq!(det.object_names().len(), 1);

        // Swap in an engine that finds nothing.
        det.engine = Box::new(FakeEngine::new(vec![]));
        det.detect(&blank_image()).unwrap();
        assert!(det.object_names().is_empty());
    }

    #[test]
    fn test_class_id_outside_label_table_is_error() {
        let out = rows(&[vec![0.5, 0.5, 0.2, 0.2, 1.0, 0.1, 0.9]]);
        let mut det = detector_with(vec![out], &["cat"]); // only class 0
        assert!(det.detect(&blank_image()).is_err());
    }

    #[test]
    fn test_short_rows_are_skipped() {
        let out = rows(&[vec![0.5, 0.5, 0.2, 0.2, 1.0]]); // no class scores
        let mut det = detector_with(vec![out], &["cat"]);
        let result = det.detect(&blank_image()).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_load_labels_ignores_surrounding_blank_lines() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        write!(f, "\ncat\ndog\nbird\n\n\n").unwrap();
        let labels = load_labels(f.path()).unwrap();
        assert_eq!(labels, vec!["cat", "dog", "bird"]);
    }

    #[test]
    fn test_load_labels_missing_file_is_load_error() {
        let err = load_labels(Path::new("/nonexistent/coco.names")).unwrap_err();
        assert!(matches!(err, LoadError::Labels { .. }));
    }

    #[test]
    fn test_default_config_matches_reference() {
        let c = DetectorConfig::default();
        assert_eq!(c.confidence_threshold, 0.5);
        assert_eq!(c.nms_threshold, 0.3);
        assert!(c.use_bgr);
    }
}
