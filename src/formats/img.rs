// .img radio memory image loader

use crate::memmap::RawBuffer;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImgError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ImgError>;

/// Extension of radio image files
pub const IMG_EXTENSION: &str = "img";

/// Load an entire .img file into memory
pub fn load_img(filename: impl AsRef<Path>) -> Result<RawBuffer> {
    let mut file = File::open(filename.as_ref())?;
    let mut data = Vec::new();
    file.read_to_end(&mut data)?;

    tracing::debug!(
        "Loaded {} bytes from {}",
        data.len(),
        filename.as_ref().display()
    );
    Ok(RawBuffer::new(data))
}

/// Check whether a path names a radio image (extension `img`, any case)
pub fn is_img_path(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(IMG_EXTENSION))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_img() -> Result<()> {
        let mut tempfile = NamedTempFile::new().unwrap();
        tempfile.write_all(&[0x04, 0x62, 0x56, 0x25, 0xFF]).unwrap();
        tempfile.flush().unwrap();

        let buffer = load_img(tempfile.path())?;
        assert_eq!(buffer.as_ref(), &[0x04, 0x62, 0x56, 0x25, 0xFF]);

        Ok(())
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_img(dir.path().join("missing.img"));
        assert!(matches!(result, Err(ImgError::Io(_))));
    }

    #[test]
    fn test_is_img_path() {
        assert!(is_img_path(Path::new("radio.img")));
        assert!(is_img_path(Path::new("dir/UV5R.IMG")));
        assert!(!is_img_path(Path::new("radio.csv")));
        assert!(!is_img_path(Path::new("img")));
    }
}
