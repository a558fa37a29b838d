#[cfg(feature = "render")]
mod artwork;
#[cfg(feature = "render")]
mod canvas;
pub mod chunks;
mod color;
mod crc;
mod error;
mod png;
pub mod sets;

#[cfg(feature = "render")]
pub use artwork::launcher_icon;
#[cfg(feature = "render")]
pub use canvas::Canvas;
pub use color::{Rgb, BRAND_BLUE, WHITE};
pub use error::IconError;
pub use png::{parse_signature, Image};
