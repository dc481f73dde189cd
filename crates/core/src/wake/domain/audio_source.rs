/// A chunk of captured audio: raw 16-bit little-endian mono PCM bytes
/// plus the sample rate they were captured at.
#[derive(Clone, Debug)]
pub struct AudioChunk {
    data: Vec<u8>,
    sample_rate: u32,
}

impl AudioChunk {
    pub fn new(data: Vec<u8>, sample_rate: u32) -> Self {
        Self { data, sample_rate }
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Chunk length in seconds of audio (two bytes per sample).
    pub fn duration_seconds(&self) -> f64 {
        self.data.len() as f64 / 2.0 / self.sample_rate as f64
    }
}

/// Domain interface for a blocking stream of audio chunks.
///
/// `read` blocks until a chunk is available; an exhausted or failed
/// source returns an error, which the detection loop propagates.
pub trait AudioSource {
    fn read(&mut self) -> Result<AudioChunk, Box<dyn std::error::Error>>;
}
