use log::debug;

use crate::error::{DspError, Result};
use crate::matrix::SpectrogramMatrix;

/// Rescales magnitudes into `[0, 1]` on a logarithmic scale.
///
/// Each entry becomes `ln(v / min) / ln(max / min)`, so the global minimum
/// maps to exactly 0 and the global maximum to exactly 1. Fails when the
/// minimum is not positive or every entry is equal.
pub fn normalize_log_amplitude(matrix: &SpectrogramMatrix) -> Result<SpectrogramMatrix> {
    if matrix.iter().any(|v| !v.is_finite()) {
        return Err(DspError::NonFiniteMagnitude);
    }
    let (min_a, max_a) = match (matrix.min(), matrix.max()) {
        (Some(min), Some(max)) => (min, max),
        // An empty matrix has no contrast to normalise
        _ => return Err(DspError::FlatSpectrogram { value: 0.0 }),
    };

    if min_a <= 0.0 {
        return Err(DspError::NonPositiveMinimum { min: min_a });
    }
    if max_a == min_a {
        return Err(DspError::FlatSpectrogram { value: min_a });
    }

    debug!(
        "Log-normalising {}x{} spectrogram (min = {}, max = {})",
        matrix.frames(),
        matrix.bins(),
        min_a,
        max_a
    );

    let range = (max_a / min_a).ln();
    Ok(matrix.map(|v| (v / min_a).ln() / range))
}
