use std::io::Write;
use std::path::Path;

use serde::Serialize;

use crate::error::Result;
use crate::ocr::LineBand;
use crate::pipeline::Recognition;

pub const TEXT_LABEL: &str = "Detected Text:";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Plain,
    Json,
}

#[derive(Debug, Serialize)]
pub struct ScanReport<'a> {
    pub image: &'a Path,
    pub language: &'a str,
    pub width: u32,
    pub height: u32,
    pub text: &'a str,
    pub words: Vec<&'a str>,
    pub lines: &'a [LineBand],
}

impl<'a> ScanReport<'a> {
    pub fn new(image: &'a Path, language: &'a str, recognition: &'a Recognition) -> Self {
        Self {
            image,
            language,
            width: recognition.width,
            height: recognition.height,
            text: &recognition.text,
            words: recognition.words(),
            lines: &recognition.lines,
        }
    }
}

/// Labelled text, then one word per line, then an empty line.
pub fn write_plain<W: Write>(out: &mut W, report: &ScanReport<'_>) -> Result<()> {
    writeln!(out, "{} {}", TEXT_LABEL, report.text.trim_end())?;
    for word in &report.words {
        writeln!(out, "{word}")?;
    }
    writeln!(out)?;
    Ok(())
}

pub fn write_json<W: Write>(out: &mut W, report: &ScanReport<'_>) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out)?;
    Ok(())
}

pub fn write_report<W: Write>(
    out: &mut W,
    report: &ScanReport<'_>,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Plain => write_plain(out, report),
        OutputFormat::Json => write_json(out, report),
    }
}
