use embedded_graphics::{pixelcolor::Rgb888, prelude::*};

use crate::error::{Result, VizError};
use crate::palette::Palette;
use crate::palette_quantizer::QuantizedSpectrogram;

/// RGB image laid out in write order: one row per frequency bin with the
/// highest bin first, one column per time frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterImage {
    width: u32,
    height: u32,
    /// Flattened `[r, g, b]` triples, row by row.
    data: Vec<u8>,
}

impl RasterImage {
    /// Lays out quantised indices as image rows.
    ///
    /// The `[frame][bin]` matrix is transposed so each row holds one bin
    /// across all frames, then rows are reversed so the lowest bin is the
    /// bottom row. Fails if an index falls outside `palette`, which happens
    /// when the indices were quantised against a larger palette.
    pub fn from_quantized(quantized: &QuantizedSpectrogram, palette: &Palette) -> Result<Self> {
        let frames = quantized.frames();
        let bins = quantized.bins();
        let mut data = Vec::with_capacity(frames * bins * 3);

        for bin in (0..bins).rev() {
            for frame in 0..frames {
                let index = quantized.index(frame, bin);
                let color = palette.get(index).ok_or(VizError::IndexOutsidePalette {
                    index,
                    frame,
                    bin,
                    palette_len: palette.len(),
                })?;
                data.extend_from_slice(&[color.r(), color.g(), color.b()]);
            }
        }

        Ok(Self {
            width: frames as u32,
            height: bins as u32,
            data,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Flattened RGB row `y`, counted from the top of the image.
    pub fn row(&self, y: u32) -> &[u8] {
        let stride = self.width as usize * 3;
        let start = y as usize * stride;
        &self.data[start..start + stride]
    }

    pub fn pixel(&self, x: u32, y: u32) -> Rgb888 {
        let i = (y as usize * self.width as usize + x as usize) * 3;
        Rgb888::new(self.data[i], self.data[i + 1], self.data[i + 2])
    }
}
