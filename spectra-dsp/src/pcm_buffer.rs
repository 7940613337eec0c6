use std::path::Path;

use log::debug;

use crate::config::{DEFAULT_BITS_PER_SAMPLE, DEFAULT_SAMPLE_RATE, MAX_BITS_PER_SAMPLE};
use crate::error::{DspError, Result};

/// Append-only mono PCM sample store.
///
/// Every sample is kept within the signed range of `bits_per_sample`;
/// out-of-range values are rejected, never clamped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PcmBuffer {
    samples: Vec<i32>,
    bits_per_sample: u8,
    sample_rate: u32,
}

impl PcmBuffer {
    /// Creates an empty 16-bit buffer.
    pub fn new() -> Self {
        Self {
            samples: Vec::new(),
            bits_per_sample: DEFAULT_BITS_PER_SAMPLE,
            sample_rate: DEFAULT_SAMPLE_RATE,
        }
    }

    /// Creates an empty buffer with the given bit depth (1 to 32 bits).
    pub fn with_bits_per_sample(bits_per_sample: u8) -> Result<Self> {
        if bits_per_sample == 0 || bits_per_sample > MAX_BITS_PER_SAMPLE {
            return Err(DspError::InvalidBitDepth {
                bits_per_sample,
                max: MAX_BITS_PER_SAMPLE,
            });
        }
        Ok(Self {
            bits_per_sample,
            ..Self::new()
        })
    }

    pub fn max_possible_sample_val(&self) -> i64 {
        (1i64 << (self.bits_per_sample - 1)) - 1
    }

    pub fn min_possible_sample_val(&self) -> i64 {
        -(1i64 << (self.bits_per_sample - 1))
    }

    /// Appends a sample, failing if it does not fit the bit depth.
    pub fn add_sample(&mut self, amplitude: i64) -> Result<()> {
        let (min, max) = (self.min_possible_sample_val(), self.max_possible_sample_val());
        if amplitude < min || amplitude > max {
            return Err(DspError::SampleOutOfRange {
                amplitude,
                bits_per_sample: self.bits_per_sample,
                min,
                max,
            });
        }
        // Fits in i32 since bits_per_sample <= 32
        self.samples.push(amplitude as i32);
        Ok(())
    }

    pub fn samples(&self) -> &[i32] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn bits_per_sample(&self) -> u8 {
        self.bits_per_sample
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn set_sample_rate(&mut self, sample_rate: u32) {
        self.sample_rate = sample_rate;
    }

    /// Writes the buffer as a single-channel integer WAV file.
    pub fn write_wav<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let spec = hound::WavSpec {
            channels: 1,
            sample_rate: self.sample_rate,
            bits_per_sample: self.bits_per_sample as u16,
            sample_format: hound::SampleFormat::Int,
        };
        debug!(
            "Writing {} samples ({}-bit, {} Hz) to {}",
            self.samples.len(),
            self.bits_per_sample,
            self.sample_rate,
            path.as_ref().display()
        );
        let mut writer = hound::WavWriter::create(path, spec)?;
        for &sample in &self.samples {
            writer.write_sample(sample)?;
        }
        writer.finalize()?;
        Ok(())
    }
}

impl Default for PcmBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_default_buffer() {
        let buffer = PcmBuffer::new();
        assert_eq!(buffer.bits_per_sample(), 16);
        assert_eq!(buffer.sample_rate(), 1);
        assert!(buffer.is_empty());
        assert_eq!(buffer.max_possible_sample_val(), 32767);
        assert_eq!(buffer.min_possible_sample_val(), -32768);
    }

    #[test]
    fn test_bounds_for_every_bit_depth() {
        for bits in 1..=32u8 {
            let mut buffer = PcmBuffer::with_bits_per_sample(bits).unwrap();
            let max = buffer.max_possible_sample_val();
            let min = buffer.min_possible_sample_val();
            assert_eq!(max, 2i64.pow(bits as u32 - 1) - 1);
            assert_eq!(min, -(2i64.pow(bits as u32 - 1)));

            buffer.add_sample(max).unwrap();
            buffer.add_sample(min).unwrap();
            assert!(matches!(
                buffer.add_sample(max + 1),
                Err(DspError::SampleOutOfRange { .. })
            ));
            assert!(matches!(
                buffer.add_sample(min - 1),
                Err(DspError::SampleOutOfRange { .. })
            ));
            assert_eq!(buffer.samples(), &[max as i32, min as i32]);
        }
    }

    #[test]
    fn test_one_bit_buffer_holds_zero_and_minus_one() {
        let buffer = PcmBuffer::with_bits_per_sample(1).unwrap();
        assert_eq!(buffer.max_possible_sample_val(), 0);
        assert_eq!(buffer.min_possible_sample_val(), -1);
    }

    #[test]
    fn test_invalid_bit_depth() {
        assert!(matches!(
            PcmBuffer::with_bits_per_sample(0),
            Err(DspError::InvalidBitDepth { .. })
        ));
        assert!(matches!(
            PcmBuffer::with_bits_per_sample(33),
            Err(DspError::InvalidBitDepth { .. })
        ));
    }

    #[test]
    fn test_rejected_sample_does_not_grow_buffer() {
        let mut buffer = PcmBuffer::with_bits_per_sample(8).unwrap();
        buffer.add_sample(5).unwrap();
        assert!(buffer.add_sample(128).is_err());
        assert_eq!(buffer.len(), 1);
    }

    #[test]
    fn test_random_samples_respect_bounds() {
        let mut rng = rand::rng();
        let mut buffer = PcmBuffer::new();
        let mut accepted = 0;
        for _ in 0..1000 {
            let amplitude: i64 = rng.random_range(-40_000..40_000);
            let in_range = (-32768..=32767).contains(&amplitude);
            assert_eq!(buffer.add_sample(amplitude).is_ok(), in_range);
            if in_range {
                accepted += 1;
            }
        }
        assert_eq!(buffer.len(), accepted);
    }
}
