use std::sync::Arc;

use log::{debug, trace};
use microdsp::common::{apply_window_function, WindowFunctionType::Hann};
use rustfft::{num_complex::Complex32, Fft, FftPlanner};

use crate::config::{SpectrogramConfig, WindowFunction};
use crate::error::{DspError, Result};
use crate::matrix::SpectrogramMatrix;
use crate::pcm_buffer::PcmBuffer;

/// Number of whole frames that fit in `len` samples.
pub fn frame_count(len: usize, window_size: usize, window_step: usize) -> usize {
    if len < window_size {
        0
    } else {
        (len - window_size) / window_step + 1
    }
}

/// Convert a frame of integer samples to f32.
pub fn frame_to_f32(samples: &[i32], out: &mut [f32]) {
    for (o, &s) in out.iter_mut().zip(samples) {
        *o = s as f32;
    }
}

/// Apply the configured window to a frame in place.
pub fn apply_window(window: WindowFunction, frame: &mut [f32]) {
    match window {
        WindowFunction::Rectangular => {}
        WindowFunction::Hann => apply_window_function(Hann, frame),
    }
}

/// Magnitudes of the non-negative-frequency bins, scaled by `1 / bins.len()`.
pub fn compute_magnitude(fft_output: &[Complex32], bins: &mut [f32]) {
    let scale = 1.0 / bins.len() as f32;
    for (bin, component) in bins.iter_mut().zip(fft_output) {
        *bin = component.norm() * scale;
    }
}

/// Short-time magnitude spectrogram of a sample series.
///
/// Frames start every `window_step` samples; a trailing partial frame is
/// dropped. Each frame contributes `window_size / 2 + 1` bins.
pub fn compute_spectrogram(samples: &[i32], config: &SpectrogramConfig) -> Result<SpectrogramMatrix> {
    let SpectrogramConfig {
        window_size,
        window_step,
        window,
    } = *config;

    if window_size == 0 {
        return Err(DspError::InvalidWindowSize);
    }
    if window_step == 0 {
        return Err(DspError::InvalidWindowStep);
    }
    let num_frames = frame_count(samples.len(), window_size, window_step);
    if num_frames == 0 {
        return Err(DspError::SeriesTooShort {
            len: samples.len(),
            window_size,
        });
    }
    let num_bins = config.num_bins();

    debug!(
        "Computing spectrogram: {} samples, window {} step {} ({:?}) -> {} frames x {} bins",
        samples.len(),
        window_size,
        window_step,
        window,
        num_frames,
        num_bins
    );

    let mut planner = FftPlanner::<f32>::new();
    let fft = planner.plan_fft_forward(window_size);
    let mut processor = FrameProcessor::new(fft, window, window_size);

    let mut data = vec![0.0f32; num_frames * num_bins];
    for (frame, out) in data.chunks_exact_mut(num_bins).enumerate() {
        let start = frame * window_step;
        processor.process_frame(&samples[start..start + window_size], out);
        trace!("Frame {} starting at sample {}", frame, start);
    }

    Ok(SpectrogramMatrix::from_raw(num_frames, num_bins, data))
}

/// Spectrogram of a PCM buffer's samples with a rectangular window.
///
/// Neither the buffer's sample rate nor its bit depth is consulted.
pub fn compute(buffer: &PcmBuffer, window_size: usize, window_step: usize) -> Result<SpectrogramMatrix> {
    compute_spectrogram(buffer.samples(), &SpectrogramConfig::new(window_size, window_step))
}

struct FrameProcessor {
    fft: Arc<dyn Fft<f32>>,
    window: WindowFunction,
    real: Vec<f32>,
    spectrum: Vec<Complex32>,
    scratch: Vec<Complex32>,
}

impl FrameProcessor {
    fn new(fft: Arc<dyn Fft<f32>>, window: WindowFunction, len: usize) -> Self {
        let scratch = vec![Complex32::default(); fft.get_inplace_scratch_len()];
        Self {
            fft,
            window,
            real: vec![0.0; len],
            spectrum: vec![Complex32::default(); len],
            scratch,
        }
    }

    fn process_frame(&mut self, samples: &[i32], bins: &mut [f32]) {
        // Step 1: Convert samples
        frame_to_f32(samples, &mut self.real);

        // Step 2: Apply window
        apply_window(self.window, &mut self.real);

        // Step 3: Compute FFT
        for (c, &r) in self.spectrum.iter_mut().zip(&self.real) {
            *c = Complex32::new(r, 0.0);
        }
        self.fft.process_with_scratch(&mut self.spectrum, &mut self.scratch);

        // Step 4: Compute magnitude spectrum
        compute_magnitude(&self.spectrum, bins);
    }
}
