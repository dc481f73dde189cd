use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use hound::WavReader;

use crate::wake::domain::audio_source::{AudioChunk, AudioSource};

/// Seconds of audio per chunk handed to the recognizer.
const CHUNK_SECONDS: f64 = 0.25;

/// Audio source reading 16-bit mono PCM from a WAV file in
/// fixed-duration chunks.
///
/// Once the file is exhausted `read` returns an error; a file is a
/// finite stand-in for a microphone, so callers should pass a timeout
/// no longer than the recording.
pub struct WavFileSource {
    reader: WavReader<BufReader<File>>,
    sample_rate: u32,
    samples_per_chunk: usize,
}

impl WavFileSource {
    pub fn open(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let reader = WavReader::open(path)?;
        let spec = reader.spec();
        if spec.channels != 1 || spec.bits_per_sample != 16 {
            return Err(format!(
                "expected 16-bit mono WAV, got {}-bit {} channel(s)",
                spec.bits_per_sample, spec.channels
            )
            .into());
        }
        let sample_rate = spec.sample_rate;
        Ok(Self {
            reader,
            sample_rate,
            samples_per_chunk: (CHUNK_SECONDS * sample_rate as f64) as usize,
        })
    }
}

impl AudioSource for WavFileSource {
    fn read(&mut self) -> Result<AudioChunk, Box<dyn std::error::Error>> {
        let mut data = Vec::with_capacity(self.samples_per_chunk * 2);
        for sample in self.reader.samples::<i16>().take(self.samples_per_chunk) {
            data.extend_from_slice(&sample?.to_le_bytes());
        }
        if data.is_empty() {
            return Err("audio source exhausted".into());
        }
        Ok(AudioChunk::new(data, self.sample_rate))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn write_wav(path: &Path, samples: usize, channels: u16) {
        let spec = hound::WavSpec {
            channels,
            sample_rate: 16000,
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        };
        let mut writer = hound::WavWriter::create(path, spec).unwrap();
        for _ in 0..samples * channels as usize {
            writer.write_sample(0i16).unwrap();
        }
        writer.finalize().unwrap();
    }

    #[test]
    fn test_chunks_cover_whole_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("one_second.wav");
        write_wav(&path, 16000, 1);

        let mut source = WavFileSource::open(&path).unwrap();
        let mut total = 0.0;
        while let Ok(chunk) = source.read() {
            total += chunk.duration_seconds();
        }
        assert_relative_eq!(total, 1.0);
    }

    #[test]
    fn test_chunk_duration_matches_chunk_seconds() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("audio.wav");
        write_wav(&path, 16000, 1);

        let mut source = WavFileSource::open(&path).unwrap();
        let chunk = source.read().unwrap();
        assert_relative_eq!(chunk.duration_seconds(), CHUNK_SECONDS);
    }

    #[test]
    fn test_exhausted_source_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("short.wav");
        write_wav(&path, 100, 1);

        let mut source = WavFileSource::open(&path).unwrap();
        assert!(source.read().is_ok());
        assert!(source.read().is_err());
    }

    #[test]
    fn test_stereo_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stereo.wav");
        write_wav(&path, 100, 2);
        assert!(WavFileSource::open(&path).is_err());
    }

    #[test]
    fn test_missing_file_is_error() {
        assert!(WavFileSource::open(Path::new("/nonexistent/audio.wav")).is_err());
    }
}
