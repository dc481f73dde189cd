/// Wake-word detection adapter over an incremental speech recognizer.
///
/// Blocks the calling thread in a cooperative polling loop until a wake
/// phrase is recognized, the cancel token is set, or the accumulated
/// audio duration exceeds the timeout.
use crate::shared::error::LoadError;
use crate::wake::domain::audio_source::AudioSource;
use crate::wake::domain::cancel::CancelToken;
use crate::wake::domain::recognizer::StreamingRecognizer;
use crate::wake::domain::wake_phrase::WakePhrase;
use crate::wake::model_cache::ModelCache;

pub struct WakeWordDetector {
    recognizer: Box<dyn StreamingRecognizer>,
    cancel: CancelToken,
}

impl WakeWordDetector {
    /// Create a detector with a dedicated recognizer bound to the
    /// cached model for `language`, the sample rate, and the grammar.
    pub fn new(
        cache: &ModelCache,
        sample_rate: u32,
        language: &str,
        grammar: &str,
    ) -> Result<Self, LoadError> {
        let model = cache.get_or_load(language)?;
        let recognizer = model.recognizer(sample_rate, grammar)?;
        Ok(Self::with_recognizer(recognizer))
    }

    /// Build directly from a recognizer (dependency injection seam).
    pub fn with_recognizer(recognizer: Box<dyn StreamingRecognizer>) -> Self {
        Self {
            recognizer,
            cancel: CancelToken::new(),
        }
    }

    /// A clonable handle for cancelling a running `detect` from another
    /// thread.
    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    /// Request cancellation of the current (or next) `detect` call.
    /// Observed by its next poll iteration; idempotent.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Listen on `source` until a wake phrase is recognized.
    ///
    /// Returns `Ok(None)` on cancellation, or once accumulated audio
    /// duration (not wall-clock time) exceeds `timeout`. A cancellation
    /// requested before the call is observed on the first iteration.
    /// Source and recognizer failures propagate.
    pub fn detect(
        &mut self,
        source: &mut dyn AudioSource,
        timeout: Option<f64>,
    ) -> Result<Option<WakePhrase>, Box<dyn std::error::Error>> {
        self.recognizer.reset();
        let mut elapsed = 0.0f64;

        loop {
            let chunk = source.read()?;
            let text = if self.recognizer.accept(chunk.data())? {
                self.recognizer.result()?
            } else {
                self.recognizer.partial()?
            };

            if let Some(phrase) = WakePhrase::from_transcript(&text) {
                log::debug!("Wake phrase detected: {phrase}");
                return Ok(Some(phrase));
            }
            if self.cancel.take() {
                return Ok(None);
            }
            if let Some(limit) = timeout {
                elapsed += chunk.duration_seconds();
                if elapsed > limit {
                    return Ok(None);
                }
            }
        }
    }
}
