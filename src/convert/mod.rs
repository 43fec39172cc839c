// Image to table conversion: load, decode, export

pub mod batch;

pub use batch::{convert_directory, find_images, BatchSummary, FileReport};

use crate::core::ChannelRecord;
use crate::decoder::detect;
use crate::formats::{export_csv, export_json, load_img, CsvError, ImgError, JsonError};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("Failed to read image: {0}")]
    Img(#[from] ImgError),

    #[error("Failed to write CSV: {0}")]
    Csv(#[from] CsvError),

    #[error("Failed to write JSON: {0}")]
    Json(#[from] JsonError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("No .img files found in {}", .0.display())]
    NoImages(PathBuf),
}

pub type Result<T> = std::result::Result<T, ConvertError>;

/// Output table format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Csv,
    Json,
}

impl OutputFormat {
    /// File extension for this format
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
        }
    }

    /// Write channels to @path in this format
    pub fn export(&self, path: &Path, channels: &[ChannelRecord]) -> Result<()> {
        match self {
            OutputFormat::Csv => export_csv(path, channels)?,
            OutputFormat::Json => export_json(path, channels)?,
        }
        Ok(())
    }
}

/// What happened to one image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConvertOutcome {
    /// This many channels were written
    Exported(usize),
    /// Layout not recognized or no active channels; nothing was written
    NoChannels,
}

/// Output path next to the input, with the format's extension
pub fn default_output_path(input: &Path, format: OutputFormat) -> PathBuf {
    input.with_extension(format.extension())
}

/// Convert one image file
///
/// An image without channels is reported as `NoChannels` and produces no
/// output file.
pub fn convert_file(input: &Path, output: &Path, format: OutputFormat) -> Result<ConvertOutcome> {
    let buffer = load_img(input)?;

    let Some(detection) = detect(&buffer) else {
        tracing::info!("No valid channels found in {}", input.display());
        return Ok(ConvertOutcome::NoChannels);
    };

    tracing::debug!(
        "{}: layout {} (candidate {}, {} blocks)",
        input.display(),
        detection.candidate,
        detection.trial,
        detection.blocks_consumed
    );

    format.export(output, &detection.channels)?;
    tracing::info!(
        "Exported {} channels from {} to {}",
        detection.channels.len(),
        input.display(),
        output.display()
    );

    Ok(ConvertOutcome::Exported(detection.channels.len()))
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// A small unnamed image with three simplex channels at offset 0
    pub(crate) fn sample_image() -> Vec<u8> {
        let mut data = Vec::new();
        for rx in [
            [0x04, 0x62, 0x56, 0x25],
            [0x04, 0x62, 0x58, 0x75],
            [0x01, 0x46, 0x52, 0x00],
        ] {
            let mut block = vec![0xFFu8; 16];
            block[0..4].copy_from_slice(&rx);
            block[8..10].copy_from_slice(&[0x00, 0x00]);
            block[14] = 0x40;
            data.extend(block);
        }
        data
    }

    #[test]
    fn test_default_output_path() {
        assert_eq!(
            default_output_path(Path::new("dir/radio.img"), OutputFormat::Csv),
            PathBuf::from("dir/radio.csv")
        );
        assert_eq!(
            default_output_path(Path::new("radio.img"), OutputFormat::Json),
            PathBuf::from("radio.json")
        );
    }

    #[test]
    fn test_convert_file_csv() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let input = dir.path().join("radio.img");
        std::fs::write(&input, sample_image())?;
        let output = default_output_path(&input, OutputFormat::Csv);

        let outcome = convert_file(&input, &output, OutputFormat::Csv)?;
        assert_eq!(outcome, ConvertOutcome::Exported(3));

        let text = std::fs::read_to_string(&output)?;
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[1], "1,,462.5625,462.5625,Low,0000");
        assert_eq!(lines[3], "3,,146.5200,146.5200,Low,0000");
        Ok(())
    }

    #[test]
    fn test_convert_file_without_channels() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let input = dir.path().join("blank.img");
        std::fs::write(&input, vec![0xFFu8; 512])?;
        let output = dir.path().join("blank.csv");

        let outcome = convert_file(&input, &output, OutputFormat::Csv)?;
        assert_eq!(outcome, ConvertOutcome::NoChannels);
        assert!(!output.exists());
        Ok(())
    }

    #[test]
    fn test_convert_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("missing.img");
        let result = convert_file(&input, &dir.path().join("out.csv"), OutputFormat::Csv);
        assert!(matches!(result, Err(ConvertError::Img(_))));
    }
}
