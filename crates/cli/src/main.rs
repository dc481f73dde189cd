use std::fs;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use percept_core::detection::detector::{Detector, DetectorConfig};
use percept_core::drawing::domain::annotator::DrawOptions;
use percept_core::drawing::infrastructure::glyph_canvas::GlyphCanvas;
use percept_core::shared::constants::{DEFAULT_CONFIDENCE_THRESHOLD, DEFAULT_NMS_THRESHOLD};
#[cfg(feature = "vosk")]
use percept_core::shared::constants::{DEFAULT_GRAMMAR, DEFAULT_LANGUAGE, DEFAULT_SAMPLE_RATE};

/// Object detection and wake-word detection over pretrained models.
#[derive(Parser)]
#[command(name = "percept")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Detect objects in an image and write an annotated copy.
    Detect {
        /// Input image file.
        input: PathBuf,

        /// Annotated output image file.
        output: PathBuf,

        /// Label file, one label per line.
        #[arg(long)]
        labels: PathBuf,

        /// Network definition (ONNX graph).
        #[arg(long)]
        network: PathBuf,

        /// Network weights file.
        #[arg(long)]
        weights: PathBuf,

        /// TrueType font used for label text.
        #[arg(long)]
        font: PathBuf,

        /// Detection confidence threshold (0.0-1.0).
        #[arg(long, default_value_t = DEFAULT_CONFIDENCE_THRESHOLD)]
        confidence: f32,

        /// NMS IoU threshold (0.0-1.0).
        #[arg(long, default_value_t = DEFAULT_NMS_THRESHOLD)]
        nms: f32,

        /// Print confidences in the label banners.
        #[arg(long)]
        show_confidences: bool,
    },

    /// Listen on a WAV file until a wake phrase is recognized.
    #[cfg(feature = "vosk")]
    Listen {
        /// 16-bit mono WAV file.
        input: PathBuf,

        /// Directory of speech models, one subdirectory per language.
        #[arg(long)]
        models_dir: Option<PathBuf>,

        /// Recognition language.
        #[arg(long, default_value = DEFAULT_LANGUAGE)]
        language: String,

        /// Audio sample rate.
        #[arg(long, default_value_t = DEFAULT_SAMPLE_RATE)]
        sample_rate: u32,

        /// Give up after this much audio (seconds).
        #[arg(long)]
        timeout: Option<f64>,
    },
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    match Cli::parse().command {
        Command::Detect {
            input,
            output,
            labels,
            network,
            weights,
            font,
            confidence,
            nms,
            show_confidences,
        } => {
            let config = DetectorConfig {
                confidence_threshold: confidence,
                nms_threshold: nms,
                // `image` decodes to RGB, so annotation colors swap.
                use_bgr: false,
            };
            let mut detector = Detector::from_files(config, &labels, &network, &weights)?;

            let mut img = image::open(&input)?.to_rgb8();
            let detections = detector.detect(&img)?;
            for (rect, name, conf) in detections.iter() {
                println!("{name}: {conf:.2} at ({}, {}) {}x{}", rect.x, rect.y, rect.width, rect.height);
            }

            let font_data = fs::read(&font)?;
            let font = ab_glyph::FontVec::try_from_vec(font_data)?;
            let mut canvas = GlyphCanvas::new(&mut img, font);
            let options = DrawOptions {
                confidences: show_confidences,
                ..DrawOptions::default()
            };
            detector.draw_object_info(&mut canvas, &options);
            img.save(&output)?;
            log::info!("Annotated image written to {}", output.display());
        }

        #[cfg(feature = "vosk")]
        Command::Listen {
            input,
            models_dir,
            language,
            sample_rate,
            timeout,
        } => {
            use percept_core::wake::detector::WakeWordDetector;
            use percept_core::wake::infrastructure::model_dirs::default_models_dir;
            use percept_core::wake::infrastructure::vosk_recognizer::VoskModelLoader;
            use percept_core::wake::infrastructure::wav_source::WavFileSource;
            use percept_core::wake::model_cache::ModelCache;

            let models_dir = models_dir
                .or_else(default_models_dir)
                .ok_or("no models directory given and no platform default available")?;
            let cache = ModelCache::new(Box::new(VoskModelLoader::new(models_dir)));
            let mut detector =
                WakeWordDetector::new(&cache, sample_rate, &language, DEFAULT_GRAMMAR)?;

            let mut source = WavFileSource::open(&input)?;
            match detector.detect(&mut source, timeout)? {
                Some(phrase) => println!("{phrase}"),
                None => println!("no wake phrase detected"),
            }
        }
    }
    Ok(())
}
