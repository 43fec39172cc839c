// File format handlers
pub mod csv;
pub mod img;
pub mod json;

pub use csv::{export_csv, write_csv, CsvError};
pub use img::{is_img_path, load_img, ImgError};
pub use json::{export_json, JsonError};
