use clap::Parser;
use serde::Serialize;
use snipocr::config::Config;
use snipocr::engine::TesseractEngine;
use snipocr::error::OcrError;
use snipocr::preprocessing::Pipeline;
use snipocr::selection::Roi;
use std::path::PathBuf;
use std::time::Instant;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "snipocr")]
#[command(about = "Extract text from an image (or a region of it) with Tesseract OCR")]
#[command(version)]
struct Args {
    /// Image file to read
    image: PathBuf,

    /// Region of interest as X1,Y1,X2,Y2 in original image pixels
    /// (omit to use the full image)
    #[arg(long, value_name = "X1,Y1,X2,Y2")]
    roi: Option<String>,

    /// OCR language code (por+eng, por, eng, spa, fra, ita, deu)
    #[arg(long, env = "SNIPOCR_LANG", default_value = "por+eng")]
    lang: String,

    /// Explicit path to the tesseract binary (default: search PATH)
    #[arg(long, env = "SNIPOCR_TESSERACT")]
    tesseract: Option<PathBuf>,

    /// Emit the result as JSON instead of plain text
    #[arg(long)]
    json: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "RUST_LOG", default_value = "warn")]
    log_level: String,
}

#[derive(Serialize)]
struct OcrOutput<'a> {
    text: &'a str,
    language: &'a str,
    roi: Option<[u32; 4]>,
    preprocess_ms: u64,
    ocr_ms: u64,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::resolve(args.tesseract.clone(), &args.lang)?;
    tracing::info!(
        tesseract = %config.tesseract_cmd.display(),
        language = %config.language,
        "configuration resolved"
    );

    let image = image::open(&args.image)
        .map_err(|e| OcrError::ImageLoad(format!("{}: {}", args.image.display(), e)))?;
    tracing::info!(
        width = image.width(),
        height = image.height(),
        "image loaded"
    );

    let roi = args
        .roi
        .as_deref()
        .map(|s| parse_roi(s, image.width(), image.height()))
        .transpose()?;

    let image = match &roi {
        Some(region) => region.crop(&image),
        None => image,
    };

    let preprocessed = Pipeline::new().process(image)?;
    tracing::info!(
        time_ms = preprocessed.total_time_ms,
        "preprocessing complete"
    );

    let engine = TesseractEngine::new(&config);
    let ocr_start = Instant::now();
    let text = engine.recognize(&preprocessed.image)?;
    let ocr_ms = ocr_start.elapsed().as_millis() as u64;
    tracing::info!(time_ms = ocr_ms, chars = text.len(), "OCR complete");

    if args.json {
        let output = OcrOutput {
            text: &text,
            language: config.language.code(),
            roi: roi.map(|r| [r.x1, r.y1, r.x2, r.y2]),
            preprocess_ms: preprocessed.total_time_ms,
            ocr_ms,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", text);
    }

    Ok(())
}

/// Parse `X1,Y1,X2,Y2` and validate it against the image bounds.
fn parse_roi(spec: &str, width: u32, height: u32) -> Result<Roi, OcrError> {
    let parts: Vec<u32> = spec
        .split(',')
        .map(|p| p.trim().parse::<u32>())
        .collect::<Result<_, _>>()
        .map_err(|_| OcrError::InvalidRegion(format!("expected X1,Y1,X2,Y2, got {:?}", spec)))?;

    match parts.as_slice() {
        &[x1, y1, x2, y2] => Roi::new(x1, y1, x2, y2, width, height),
        _ => Err(OcrError::InvalidRegion(format!(
            "expected 4 coordinates, got {}",
            parts.len()
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_roi_accepts_spaces() {
        let roi = parse_roi("10, 20, 30, 40", 100, 100).unwrap();
        assert_eq!((roi.x1, roi.y1, roi.x2, roi.y2), (10, 20, 30, 40));
    }

    #[test]
    fn test_parse_roi_rejects_garbage() {
        assert!(parse_roi("10,20,30", 100, 100).is_err());
        assert!(parse_roi("a,b,c,d", 100, 100).is_err());
        assert!(parse_roi("", 100, 100).is_err());
    }

    #[test]
    fn test_parse_roi_rejects_out_of_bounds() {
        assert!(parse_roi("10,20,300,40", 100, 100).is_err());
    }
}
