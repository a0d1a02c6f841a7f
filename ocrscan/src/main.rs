use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ocrscan::config::{Config, LogFormat};
use ocrscan::ocr::{ImageFileLoader, TesseractEngine};
use ocrscan::pipeline::recognize;
use ocrscan::report::{write_report, OutputFormat, ScanReport};

#[derive(Parser)]
#[command(name = "ocrscan")]
#[command(version, about = "Recognize the text in an image and list its words")]
struct Args {
    /// Image to scan (default: ktp.jpeg, or OCR_IMAGE_PATH)
    #[arg(long)]
    image: Option<PathBuf>,

    /// Tesseract language(s), e.g. "eng" or "eng+ind"
    #[arg(long)]
    lang: Option<String>,

    /// Directory containing *.traineddata files
    #[arg(long)]
    tessdata: Option<PathBuf>,

    /// Convert to grayscale and binarize before recognition
    #[arg(long)]
    preprocess: bool,

    /// Binarization threshold (implies --preprocess)
    #[arg(long)]
    threshold: Option<u8>,

    /// Write the preprocessed image to this path (implies --preprocess)
    #[arg(long)]
    debug_image: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Plain)]
    format: OutputFormat,
}

impl Args {
    fn apply(self, mut config: Config) -> Config {
        if let Some(image) = self.image {
            config.image_path = image;
        }
        if let Some(lang) = self.lang {
            config.ocr.languages = lang;
        }
        if let Some(tessdata) = self.tessdata {
            config.ocr.data_path = Some(tessdata);
        }
        if self.preprocess {
            config.preprocessing.enabled = true;
        }
        if let Some(threshold) = self.threshold {
            config.preprocessing.enabled = true;
            config.preprocessing.threshold = threshold;
        }
        if let Some(path) = self.debug_image {
            config.preprocessing.enabled = true;
            config.preprocessing.debug_image = Some(path);
        }
        config
    }
}

fn init_tracing(format: LogFormat) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "ocrscan=warn".into());
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(io::stderr))
            .init(),
        LogFormat::Text => registry
            .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
            .init(),
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let format = args.format;
    let config = args.apply(Config::from_env());

    tracing::info!("Initializing Tesseract: {}...", config.ocr.languages);
    let mut engine = TesseractEngine::new(&config.ocr)?;

    let loader = ImageFileLoader::new(config.preprocessing.clone());
    let recognition = recognize(&loader, &mut engine, &config.image_path)?;

    let report = ScanReport::new(&config.image_path, engine.languages(), &recognition);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_report(&mut out, &report, format).context("Failed to write results")?;
    out.flush().context("Failed to write results")?;

    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    dotenvy::dotenv().ok();

    init_tracing(LogFormat::from_env());

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!("Scan failed: {:?}", e);
            eprintln!("Error: {e:#}");
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ocrscan::config::{OcrConfig, PreprocessConfig};

    fn base_config() -> Config {
        Config {
            image_path: PathBuf::from("ktp.jpeg"),
            ocr: OcrConfig::default(),
            preprocessing: PreprocessConfig::default(),
        }
    }

    fn apply(argv: &[&str]) -> Config {
        let args = Args::try_parse_from(std::iter::once("ocrscan").chain(argv.iter().copied()))
            .unwrap();
        args.apply(base_config())
    }

    #[test]
    fn test_no_flags_keep_defaults() {
        let config = apply(&[]);
        assert_eq!(config.image_path, PathBuf::from("ktp.jpeg"));
        assert_eq!(config.ocr.languages, "eng");
        assert!(!config.preprocessing.enabled);
    }

    #[test]
    fn test_threshold_enables_preprocessing() {
        let config = apply(&["--threshold", "90"]);
        assert!(config.preprocessing.enabled);
        assert_eq!(config.preprocessing.threshold, 90);
    }

    #[test]
    fn test_debug_image_enables_preprocessing() {
        let config = apply(&["--debug-image", "binary.png"]);
        assert!(config.preprocessing.enabled);
        assert_eq!(
            config.preprocessing.debug_image,
            Some(PathBuf::from("binary.png"))
        );
    }

    #[test]
    fn test_overrides_image_and_language() {
        let config = apply(&["--image", "card.png", "--lang", "eng+ind"]);
        assert_eq!(config.image_path, PathBuf::from("card.png"));
        assert_eq!(config.ocr.languages, "eng+ind");
    }
}
