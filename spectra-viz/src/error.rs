use spectra_dsp::DspError;
use thiserror::Error;

pub type Result<T> = core::result::Result<T, VizError>;

/// Errors raised while quantising, laying out or writing a spectrogram image.
#[derive(Debug, Error)]
pub enum VizError {
    #[error("palette must contain at least one colour")]
    EmptyPalette,

    /// A normalised value that would index outside the palette.
    #[error("normalised value {value} at frame {frame}, bin {bin} is outside [0, 1] (palette max index = {max_index})")]
    ValueOutOfRange {
        value: f32,
        frame: usize,
        bin: usize,
        max_index: usize,
    },

    /// A quantised index laid out against a palette it was not built for.
    #[error("palette index {index} at frame {frame}, bin {bin} is outside a palette of {palette_len} colours")]
    IndexOutsidePalette {
        index: usize,
        frame: usize,
        bin: usize,
        palette_len: usize,
    },

    #[error("spectrogram has no entries to draw ({frames} frames x {bins} bins)")]
    EmptyImage { frames: usize, bins: usize },

    #[error("image of {frames} frames x {bins} bins is too large to encode")]
    ImageTooLarge { frames: usize, bins: usize },

    #[error(transparent)]
    Dsp(#[from] DspError),

    #[error("failed to write image: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode PNG: {0}")]
    Png(#[from] png::EncodingError),
}
