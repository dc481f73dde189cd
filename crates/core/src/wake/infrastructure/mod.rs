pub mod model_dirs;
#[cfg(feature = "vosk")]
pub mod vosk_recognizer;
pub mod wav_source;
