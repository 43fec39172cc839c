//! CSV export of decoded channels

use crate::core::ChannelRecord;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CsvError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CsvError>;

/// Export channels to a CSV file
pub fn export_csv(filename: impl AsRef<Path>, channels: &[ChannelRecord]) -> Result<()> {
    let file = File::create(filename)?;
    let mut writer = BufWriter::new(file);
    write_csv(&mut writer, channels)?;
    writer.flush()?;
    Ok(())
}

/// Write a header row and one row per channel
pub fn write_csv<W: Write>(writer: &mut W, channels: &[ChannelRecord]) -> Result<()> {
    writeln!(writer, "{}", ChannelRecord::CSV_HEADER.join(","))?;

    for channel in channels {
        let row: Vec<String> = channel.to_csv().into_iter().map(quote_field).collect();
        writeln!(writer, "{}", row.join(","))?;
    }

    Ok(())
}

/// Quote a field containing a delimiter, quote or line break
fn quote_field(field: String) -> String {
    if field.contains(&[',', '"', '\r', '\n'][..]) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field
    }
}
