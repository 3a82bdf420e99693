//! Output encoders (plain-text PPM).

mod ppm;

pub use ppm::{PpmDecoder, PpmEncoder, MAGIC, MAX_VALUE};
