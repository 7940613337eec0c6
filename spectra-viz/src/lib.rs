//! Colouring and image output for normalised spectrograms.
//!
//! [`save_spectrogram`] quantises a `[frame][bin]` matrix against a
//! [`Palette`], turns it so time runs left to right with low frequencies at
//! the bottom, and writes a PNG. [`render_spectrum`] chains the whole
//! spectrum-to-image pipeline.

pub mod error;
pub mod palette;
pub mod palette_quantizer;
pub mod raster;
pub mod raster_encoder;
pub mod render;

pub use embedded_graphics::pixelcolor::Rgb888;
pub use error::{Result, VizError};
pub use palette::Palette;
pub use palette_quantizer::{quantize, quantize_value, QuantizedSpectrogram};
pub use raster::RasterImage;
pub use raster_encoder::{render_image, save_spectrogram, with_image_extension, IMAGE_EXTENSION};
pub use render::render_spectrum;
