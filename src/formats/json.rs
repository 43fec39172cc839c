//! JSON export of decoded channels

use crate::core::ChannelRecord;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum JsonError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize channels: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, JsonError>;

/// Export channels to a JSON file as an array of objects
pub fn export_json(filename: impl AsRef<Path>, channels: &[ChannelRecord]) -> Result<()> {
    let file = File::create(filename)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, channels)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}
