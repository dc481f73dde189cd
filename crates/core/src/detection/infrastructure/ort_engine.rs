use std::path::Path;

use ndarray::{Array2, Array4, ArrayViewD, Axis, Ix2};

use crate::detection::domain::inference_engine::InferenceEngine;
use crate::shared::error::LoadError;

/// Inference engine backed by an ONNX Runtime session.
///
/// `network_config_path` is the ONNX graph; models exported with
/// external tensor data keep their weights in a sidecar file next to
/// the graph, which is what `weights_path` names. Both formats are
/// opaque to this adapter. The graph outputs are the network's
/// unconnected terminal layers; their names are recorded at load time
/// and each forward pass reads exactly those activations.
#[derive(Debug)]
pub struct OrtEngine {
    session: ort::session::Session,
    output_names: Vec<String>,
}

impl OrtEngine {
    pub fn load(network_config_path: &Path, weights_path: &Path) -> Result<Self, LoadError> {
        for path in [network_config_path, weights_path] {
            if !path.exists() {
                return Err(LoadError::Network {
                    path: path.to_path_buf(),
                    message: "file not found".to_string(),
                });
            }
        }

        let session = ort::session::Session::builder()
            .and_then(|mut b| b.commit_from_file(network_config_path))
            .map_err(|e| LoadError::Network {
                path: network_config_path.to_path_buf(),
                message: e.to_string(),
            })?;

        let output_names = session
            .outputs()
            .iter()
            .map(|o| o.name().to_string())
            .collect();

        Ok(Self {
            session,
            output_names,
        })
    }
}

impl InferenceEngine for OrtEngine {
    fn output_names(&self) -> &[String] {
        &self.output_names
    }

    fn forward(
        &mut self,
        input: Array4<f32>,
    ) -> Result<Vec<Array2<f32>>, Box<dyn std::error::Error>> {
        let input_value = ort::value::Tensor::from_array(input)?;
        let outputs = self.session.run(ort::inputs![input_value])?;

        let mut matrices = Vec::with_capacity(self.output_names.len());
        for i in 0..self.output_names.len() {
            let tensor = outputs[i].try_extract_array::<f32>()?;
            matrices.push(to_detection_matrix(tensor)?);
        }
        Ok(matrices)
    }
}

/// Normalize a layer output to `[detections, features]`.
///
/// Accepts `[N, F]` directly and `[1, N, F]` / `[1, F, N]` batched
/// layouts; the transposed variant is recognized by its wider second
/// axis, the convention YOLO exports use.
fn to_detection_matrix(view: ArrayViewD<'_, f32>) -> Result<Array2<f32>, Box<dyn std::error::Error>> {
    let shape = view.shape().to_vec();
    match shape.len() {
        2 => Ok(view.into_dimensionality::<Ix2>()?.to_owned()),
        3 if shape[0] == 1 => {
            let matrix = view.index_axis(Axis(0), 0).into_dimensionality::<Ix2>()?;
            if shape[1] < shape[2] {
                Ok(matrix.t().to_owned())
            } else {
                Ok(matrix.to_owned())
            }
        }
        _ => Err(format!("unexpected detection output shape {shape:?}").into()),
    }
}
