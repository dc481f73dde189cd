use ndarray::{Array2, Array4};

/// Domain interface for the wrapped neural network inference engine.
///
/// An implementation owns one loaded network. `output_names` lists the
/// graph's terminal layers (those whose activations no other layer
/// consumes), fixed at load time; `forward` returns one detection matrix
/// per terminal layer, in the same order.
///
/// Each matrix row is one candidate detection:
/// `[cx, cy, w, h, objectness, class_score_0, class_score_1, ...]`,
/// with geometry expressed as fractions of the input image size.
///
/// Implementations may cache run state, hence `&mut self`.
pub trait InferenceEngine: Send {
    fn output_names(&self) -> &[String];

    fn forward(
        &mut self,
        input: Array4<f32>,
    ) -> Result<Vec<Array2<f32>>, Box<dyn std::error::Error>>;
}
