use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::shared::error::LoadError;
use crate::wake::domain::recognizer::{ModelLoader, SpeechModel};

/// Process-wide cache of loaded speech models, keyed by language.
///
/// Entries are created lazily on first use and never evicted. Built
/// once at application start and shared by reference with every
/// `WakeWordDetector` that needs it. The internal mutex is held across
/// a load, so concurrent first requests for one language do the loading
/// work once.
pub struct ModelCache {
    loader: Box<dyn ModelLoader>,
    entries: Mutex<HashMap<String, Arc<dyn SpeechModel>>>,
}

impl ModelCache {
    pub fn new(loader: Box<dyn ModelLoader>) -> Self {
        Self {
            loader,
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Pre-warm the model for `language` so the first detection call
    /// pays no load latency. Idempotent.
    pub fn load(&self, language: &str) -> Result<(), LoadError> {
        self.get_or_load(language).map(|_| ())
    }

    /// The cached model for `language`, loading and caching it if
    /// absent.
    pub fn get_or_load(&self, language: &str) -> Result<Arc<dyn SpeechModel>, LoadError> {
        let mut entries = self.entries.lock().expect("model cache poisoned");
        if let Some(model) = entries.get(language) {
            return Ok(model.clone());
        }
        log::info!("Loading speech model for language '{language}'");
        let model = self.loader.load(language)?;
        entries.insert(language.to_string(), model.clone());
        Ok(model)
    }
}
