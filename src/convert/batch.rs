// Batch conversion of every image in a directory

use super::{convert_file, ConvertError, ConvertOutcome, OutputFormat, Result};
use crate::formats::is_img_path;
use std::fs;
use std::path::{Path, PathBuf};

/// Result of converting one file in a batch
#[derive(Debug)]
pub struct FileReport {
    pub input: PathBuf,
    pub output: PathBuf,
    pub result: Result<ConvertOutcome>,
}

/// Per-file results of a batch run, in path order
#[derive(Debug, Default)]
pub struct BatchSummary {
    pub reports: Vec<FileReport>,
}

impl BatchSummary {
    /// Files written with at least one channel
    pub fn exported(&self) -> usize {
        self.reports
            .iter()
            .filter(|r| matches!(r.result, Ok(ConvertOutcome::Exported(_))))
            .count()
    }

    /// Files read successfully but without channels
    pub fn empty(&self) -> usize {
        self.reports
            .iter()
            .filter(|r| matches!(r.result, Ok(ConvertOutcome::NoChannels)))
            .count()
    }

    /// Files that could not be read or written
    pub fn failed(&self) -> usize {
        self.reports.iter().filter(|r| r.result.is_err()).count()
    }
}

/// List the .img files directly inside @dir, sorted by path
pub fn find_images(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut images = Vec::new();

    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && is_img_path(&path) {
            images.push(path);
        }
    }

    images.sort();
    Ok(images)
}

/// Convert every image in @dir into @out_dir/<stem>.<ext>
///
/// A failure on one file is recorded in its report and the batch continues.
pub fn convert_directory(dir: &Path, out_dir: &Path, format: OutputFormat) -> Result<BatchSummary> {
    let images = find_images(dir)?;
    if images.is_empty() {
        return Err(ConvertError::NoImages(dir.to_path_buf()));
    }

    fs::create_dir_all(out_dir)?;
    tracing::info!(
        "Converting {} images from {} into {}",
        images.len(),
        dir.display(),
        out_dir.display()
    );

    let mut summary = BatchSummary::default();
    for input in images {
        let mut file_name = input.file_stem().unwrap_or_default().to_os_string();
        file_name.push(".");
        file_name.push(format.extension());
        let output = out_dir.join(file_name);

        let result = convert_file(&input, &output, format);
        if let Err(e) = &result {
            tracing::warn!("Skipping {}: {}", input.display(), e);
        }

        summary.reports.push(FileReport {
            input,
            output,
            result,
        });
    }

    Ok(summary)
}
