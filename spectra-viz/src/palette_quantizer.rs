use spectra_dsp::SpectrogramMatrix;

use crate::error::{Result, VizError};
use crate::palette::Palette;

/// Palette indices laid out like the source matrix, `[frame][bin]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuantizedSpectrogram {
    frames: usize,
    bins: usize,
    indices: Vec<usize>,
}

impl QuantizedSpectrogram {
    pub fn frames(&self) -> usize {
        self.frames
    }

    pub fn bins(&self) -> usize {
        self.bins
    }

    pub fn index(&self, frame: usize, bin: usize) -> usize {
        self.indices[frame * self.bins + bin]
    }

    pub fn indices(&self) -> &[usize] {
        &self.indices
    }
}

/// Palette index of a normalised value, truncating toward zero.
///
/// Values outside `[0, 1]` (and NaN) return `None` rather than being clamped.
pub fn quantize_value(value: f32, max_index: usize) -> Option<usize> {
    if !(0.0..=1.0).contains(&value) {
        return None;
    }
    // Exact for max_index below 2^53
    Some((value as f64 * max_index as f64) as usize)
}

/// Maps every normalised entry to a palette index.
pub fn quantize(matrix: &SpectrogramMatrix, palette: &Palette) -> Result<QuantizedSpectrogram> {
    let max_index = palette.max_index();
    let bins = matrix.bins();
    let indices = matrix
        .iter()
        .enumerate()
        .map(|(i, value)| {
            quantize_value(value, max_index).ok_or_else(|| VizError::ValueOutOfRange {
                value,
                frame: i / bins.max(1),
                bin: i % bins.max(1),
                max_index,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(QuantizedSpectrogram {
        frames: matrix.frames(),
        bins,
        indices,
    })
}
