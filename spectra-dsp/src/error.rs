use thiserror::Error;

pub type Result<T> = core::result::Result<T, DspError>;

/// Errors raised by the sample, spectrogram and normalisation stages.
#[derive(Debug, Error)]
pub enum DspError {
    /// A sample does not fit the buffer's bit depth.
    #[error(
        "sample amplitude of {amplitude} is out of range for {bits_per_sample}-bit samples (min = {min}, max = {max})"
    )]
    SampleOutOfRange {
        amplitude: i64,
        bits_per_sample: u8,
        min: i64,
        max: i64,
    },

    #[error("bit depth of {bits_per_sample} is not supported (must be between 1 and {max})")]
    InvalidBitDepth { bits_per_sample: u8, max: u8 },

    #[error("spectrum amplitude {amplitude} is not finite, cannot convert to a sample")]
    NonFiniteAmplitude { amplitude: f64 },

    #[error("spectrum peak amplitude is zero, cannot normalise")]
    ZeroPeakAmplitude,

    #[error("window size must be greater than 0")]
    InvalidWindowSize,

    #[error("window step must be greater than 0")]
    InvalidWindowStep,

    #[error("series of {len} samples is shorter than the window size of {window_size}")]
    SeriesTooShort { len: usize, window_size: usize },

    #[error("spectrogram minimum of {min} is not positive, logarithm is undefined")]
    NonPositiveMinimum { min: f32 },

    #[error("spectrogram is flat (every entry is {value}), cannot contrast-normalise")]
    FlatSpectrogram { value: f32 },

    #[error("spectrogram contains a non-finite magnitude")]
    NonFiniteMagnitude,

    #[error("spectrogram rows must all have the same length (row {row} has {got}, expected {expected})")]
    RaggedRows {
        row: usize,
        got: usize,
        expected: usize,
    },

    #[error("WAV export failed: {0}")]
    Wav(#[from] hound::Error),
}
