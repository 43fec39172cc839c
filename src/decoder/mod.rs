// Heuristic decoding of radio memory images
pub mod channel;
pub mod image;
pub mod layout;

pub use channel::decode_channel;
pub use image::{decode_image, decode_pass, detect, sniff_names, Detection, Pass};
pub use layout::{candidates, Candidate, LayoutConfig};
