use std::path::PathBuf;
use std::sync::Arc;

use crate::shared::error::LoadError;
use crate::wake::domain::recognizer::{ModelLoader, SpeechModel, StreamingRecognizer};

/// Loads Vosk models from `<models_dir>/<language>` directories.
pub struct VoskModelLoader {
    models_dir: PathBuf,
}

impl VoskModelLoader {
    pub fn new(models_dir: PathBuf) -> Self {
        Self { models_dir }
    }
}

impl ModelLoader for VoskModelLoader {
    fn load(&self, language: &str) -> Result<Arc<dyn SpeechModel>, LoadError> {
        let path = self.models_dir.join(language);
        if !path.is_dir() {
            return Err(LoadError::Model {
                language: language.to_string(),
                message: format!("no model directory at {}", path.display()),
            });
        }
        let model = vosk::Model::new(path.to_string_lossy()).ok_or_else(|| LoadError::Model {
            language: language.to_string(),
            message: format!("vosk could not load the model at {}", path.display()),
        })?;
        Ok(Arc::new(VoskModel {
            model,
            language: language.to_string(),
        }))
    }
}

/// A loaded Vosk model; creates grammar-constrained recognizers.
pub struct VoskModel {
    model: vosk::Model,
    language: String,
}

impl SpeechModel for VoskModel {
    fn recognizer(
        &self,
        sample_rate: u32,
        grammar: &str,
    ) -> Result<Box<dyn StreamingRecognizer>, LoadError> {
        let phrases: Vec<String> =
            serde_json::from_str(grammar).map_err(|e| LoadError::Recognizer {
                language: self.language.clone(),
                message: format!("grammar is not a JSON array of phrases: {e}"),
            })?;
        let inner =
            vosk::Recognizer::new_with_grammar(&self.model, sample_rate as f32, &phrases)
                .ok_or_else(|| LoadError::Recognizer {
                    language: self.language.clone(),
                    message: "vosk rejected the recognizer configuration".to_string(),
                })?;
        Ok(Box::new(VoskRecognizer { inner }))
    }
}

/// Adapter from the Vosk recognizer to the domain's streaming trait.
pub struct VoskRecognizer {
    inner: vosk::Recognizer,
}

impl StreamingRecognizer for VoskRecognizer {
    fn accept(&mut self, audio: &[u8]) -> Result<bool, Box<dyn std::error::Error>> {
        let samples: Vec<i16> = audio
            .chunks_exact(2)
            .map(|b| i16::from_le_bytes([b[0], b[1]]))
            .collect();
        match self.inner.accept_waveform(&samples)? {
            vosk::DecodeState::Finalized => Ok(true),
            vosk::DecodeState::Running => Ok(false),
            vosk::DecodeState::Failed => Err("vosk failed to process waveform".into()),
        }
    }

    fn result(&mut self) -> Result<String, Box<dyn std::error::Error>> {
        let text = self
            .inner
            .result()
            .single()
            .map(|r| r.text.to_string())
            .unwrap_or_default();
        Ok(text)
    }

    fn partial(&mut self) -> Result<String, Box<dyn std::error::Error>> {
        Ok(self.inner.partial_result().partial.to_string())
    }

    fn reset(&mut self) {
        // Finalizing drains buffered audio and pending partial state.
        let _ = self.inner.final_result();
    }
}
