use std::path::{Path, PathBuf};

use log::info;
use spectra_dsp::{
    compute_spectrogram, normalize_log_amplitude, SpectralData, SpectrogramConfig,
    SpectrumConverter,
};

use crate::error::Result;
use crate::palette::Palette;
use crate::raster_encoder::save_spectrogram;

/// Runs a spectrum through every stage and saves the spectrogram image.
///
/// The spectrum becomes 16-bit PCM, is framed per `config`, log-normalised
/// and coloured with `palette`. Returns the written path.
pub fn render_spectrum<S, P>(
    spectrum: &S,
    config: &SpectrogramConfig,
    palette: &Palette,
    filename: P,
) -> Result<PathBuf>
where
    S: SpectralData + ?Sized,
    P: AsRef<Path>,
{
    let buffer = SpectrumConverter::new().convert(spectrum)?;
    let raw = compute_spectrogram(buffer.samples(), config)?;
    let normalized = normalize_log_amplitude(&raw)?;
    let path = save_spectrogram(filename, &normalized, palette)?;
    info!(
        "Rendered {} samples into {} frames x {} bins at {}",
        buffer.len(),
        normalized.frames(),
        normalized.bins(),
        path.display()
    );
    Ok(path)
}
