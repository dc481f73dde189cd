pub mod audio_source;
pub mod cancel;
pub mod recognizer;
pub mod wake_phrase;
