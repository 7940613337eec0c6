use log::{debug, warn};

use crate::error::{DspError, Result};
use crate::pcm_buffer::PcmBuffer;
use crate::spectrum::SpectralData;

/// Turns a spectrum into PCM samples, one sample per point.
///
/// Each amplitude is divided by the spectrum's peak amplitude and scaled to
/// the target buffer's maximum sample value, truncating toward zero.
/// [`convert`] fills a fresh buffer; [`append_into`] extends a buffer the
/// caller keeps hold of, so samples already in it survive a failed append.
///
/// [`convert`]: SpectrumConverter::convert
/// [`append_into`]: SpectrumConverter::append_into
#[derive(Debug, Clone, Default)]
pub struct SpectrumConverter {
    target: PcmBuffer,
}

impl SpectrumConverter {
    /// Converts into a new 16-bit buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Converts into a new, empty buffer of the given bit depth.
    pub fn with_bits_per_sample(bits_per_sample: u8) -> Result<Self> {
        Ok(Self {
            target: PcmBuffer::with_bits_per_sample(bits_per_sample)?,
        })
    }

    pub fn convert<S: SpectralData + ?Sized>(self, spectrum: &S) -> Result<PcmBuffer> {
        let mut out = self.target;
        Self::append_into(spectrum, &mut out)?;
        Ok(out)
    }

    /// Appends the spectrum's samples to `target` and returns how many were added.
    ///
    /// On error, samples for points before the offending one stay appended,
    /// along with everything `target` held beforehand.
    pub fn append_into<S: SpectralData + ?Sized>(
        spectrum: &S,
        target: &mut PcmBuffer,
    ) -> Result<usize> {
        let norm = spectrum.max_amplitude().unwrap_or(0.0);
        if norm == 0.0 {
            return Err(DspError::ZeroPeakAmplitude);
        }
        if !norm.is_finite() {
            return Err(DspError::NonFiniteAmplitude { amplitude: norm });
        }

        let max_val = target.max_possible_sample_val() as f64;
        let start_len = target.len();

        for amplitude in spectrum.amplitudes() {
            let scaled = max_val * (amplitude / norm);
            if !scaled.is_finite() {
                warn!("Rejected non-finite spectrum amplitude {} (peak {})", amplitude, norm);
                return Err(DspError::NonFiniteAmplitude { amplitude });
            }
            // `as` truncates toward zero
            let sample = scaled as i64;
            if let Err(e) = target.add_sample(sample) {
                warn!("Rejected spectrum point with amplitude {} (peak {})", amplitude, norm);
                return Err(e);
            }
        }

        let added = target.len() - start_len;
        debug!(
            "Converted {} spectrum points into {}-bit samples (buffer now holds {})",
            added,
            target.bits_per_sample(),
            target.len()
        );
        Ok(added)
    }
}

/// Converts a spectrum into a new default buffer.
pub fn spectrum_to_pcm<S: SpectralData + ?Sized>(spectrum: &S) -> Result<PcmBuffer> {
    SpectrumConverter::new().convert(spectrum)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spectrum::Spectrum;

    #[test]
    fn test_peak_point_maps_to_max_sample() {
        let spectrum = Spectrum::from_amplitudes(&[0.25, 2.0, 1.0]);
        let buffer = spectrum_to_pcm(&spectrum).unwrap();
        assert_eq!(buffer.samples()[1], 32767);
    }

    #[test]
    fn test_preserves_order_and_count() {
        let spectrum = Spectrum::from_amplitudes(&[1.0, 0.5, 0.0, -0.5, 0.25]);
        let buffer = spectrum_to_pcm(&spectrum).unwrap();
        assert_eq!(buffer.samples(), &[32767, 16383, 0, -16383, 8191]);
    }

    #[test]
    fn test_truncates_instead_of_rounding() {
        let spectrum = Spectrum::from_amplitudes(&[1000.0, 999.0]);
        let buffer = spectrum_to_pcm(&spectrum).unwrap();
        // 32767 * 0.999 = 32734.233
        assert_eq!(buffer.samples()[1], 32734);

        let spectrum = Spectrum::from_amplitudes(&[1.0, -0.99999]);
        let buffer = spectrum_to_pcm(&spectrum).unwrap();
        // -32766.67 truncates toward zero
        assert_eq!(buffer.samples()[1], -32766);
    }

    #[test]
    fn test_zero_peak_is_an_error() {
        let spectrum = Spectrum::from_amplitudes(&[0.0, -1.0, -2.0]);
        assert!(matches!(
            spectrum_to_pcm(&spectrum),
            Err(DspError::ZeroPeakAmplitude)
        ));
        assert!(matches!(
            spectrum_to_pcm(&Spectrum::new(Vec::new())),
            Err(DspError::ZeroPeakAmplitude)
        ));
    }

    #[test]
    fn test_ratio_below_minus_one_is_out_of_range() {
        let spectrum = Spectrum::from_amplitudes(&[1.0, -3.0]);
        assert!(matches!(
            spectrum_to_pcm(&spectrum),
            Err(DspError::SampleOutOfRange { amplitude: -98301, .. })
        ));
    }

    #[test]
    fn test_appends_to_existing_buffer() {
        let mut target = PcmBuffer::new();
        target.add_sample(-7).unwrap();
        target.add_sample(12).unwrap();

        let spectrum = Spectrum::from_amplitudes(&[2.0, 1.0]);
        let added = SpectrumConverter::append_into(&spectrum, &mut target).unwrap();
        assert_eq!(added, 2);
        assert_eq!(target.samples(), &[-7, 12, 32767, 16383]);
    }

    #[test]
    fn test_failed_append_keeps_earlier_samples() {
        let mut target = PcmBuffer::new();
        for s in [10, 20, 30] {
            target.add_sample(s).unwrap();
        }

        let spectrum = Spectrum::from_amplitudes(&[1.0, -3.0]);
        assert!(matches!(
            SpectrumConverter::append_into(&spectrum, &mut target),
            Err(DspError::SampleOutOfRange { amplitude: -98301, .. })
        ));
        assert_eq!(target.samples(), &[10, 20, 30, 32767]);
    }

    #[test]
    fn test_nan_amplitude_is_an_error() {
        let spectrum = Spectrum::from_amplitudes(&[1.0, f64::NAN, 0.5]);
        match spectrum_to_pcm(&spectrum) {
            Err(DspError::NonFiniteAmplitude { amplitude }) => assert!(amplitude.is_nan()),
            other => panic!("expected NonFiniteAmplitude, got {:?}", other),
        }
    }

    #[test]
    fn test_infinite_peak_is_an_error() {
        let spectrum = Spectrum::from_amplitudes(&[1.0, f64::INFINITY, 0.5]);
        assert!(matches!(
            spectrum_to_pcm(&spectrum),
            Err(DspError::NonFiniteAmplitude { amplitude }) if amplitude == f64::INFINITY
        ));

        let mut target = PcmBuffer::new();
        assert!(SpectrumConverter::append_into(&spectrum, &mut target).is_err());
        assert!(target.is_empty());
    }

    #[test]
    fn test_custom_bit_depth() {
        let spectrum = Spectrum::from_amplitudes(&[4.0, 1.0, -4.0]);
        let buffer = SpectrumConverter::with_bits_per_sample(8)
            .unwrap()
            .convert(&spectrum)
            .unwrap();
        assert_eq!(buffer.bits_per_sample(), 8);
        assert_eq!(buffer.samples(), &[127, 31, -127]);
    }
}
