use std::sync::Arc;

use crate::shared::error::LoadError;

/// Domain interface for an incremental speech decoder bound to one
/// (model, sample rate, grammar) triple.
///
/// `accept` feeds raw 16-bit mono PCM and reports whether the decoder
/// finalized an utterance on this chunk; `result` then yields the
/// finalized transcript, `partial` the in-progress one. Transcripts are
/// lowercase token sequences in the recognizer's own vocabulary.
pub trait StreamingRecognizer: Send {
    /// Returns `true` at an utterance boundary.
    fn accept(&mut self, audio: &[u8]) -> Result<bool, Box<dyn std::error::Error>>;

    /// Finalized transcript of the utterance just ended.
    fn result(&mut self) -> Result<String, Box<dyn std::error::Error>>;

    /// In-progress partial transcript.
    fn partial(&mut self) -> Result<String, Box<dyn std::error::Error>>;

    /// Drop any buffered audio and partial decoding state.
    fn reset(&mut self);
}

/// A loaded speech model from which recognizers are created. One model
/// serves any number of recognizers; models are shared via `Arc` from
/// the process-wide cache.
pub trait SpeechModel: Send + Sync {
    /// Create a recognizer constrained to `grammar`, a JSON array of
    /// allowed phrase strings plus the `"[unk]"` catch-all, passed
    /// through verbatim.
    fn recognizer(
        &self,
        sample_rate: u32,
        grammar: &str,
    ) -> Result<Box<dyn StreamingRecognizer>, LoadError>;
}

/// Loads a speech model for a language identifier. Injected into the
/// model cache so the loading backend stays swappable.
pub trait ModelLoader: Send + Sync {
    fn load(&self, language: &str) -> Result<Arc<dyn SpeechModel>, LoadError>;
}
