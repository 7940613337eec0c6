// --- Sample Config ---
pub const DEFAULT_BITS_PER_SAMPLE: u8 = 16;
pub const MAX_BITS_PER_SAMPLE: u8 = 32; // Samples are stored as i32
pub const DEFAULT_SAMPLE_RATE: u32 = 1; // Never derived from the spectrum

// --- Spectrogram Config ---
pub const DEFAULT_WINDOW_SIZE: usize = 256;
pub const DEFAULT_WINDOW_STEP: usize = 128;

/// Window applied to every frame before the FFT.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WindowFunction {
    /// Frames are transformed as-is.
    #[default]
    Rectangular,
    Hann,
}

/// Framing parameters for the short-time spectral analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpectrogramConfig {
    pub window_size: usize,
    pub window_step: usize,
    pub window: WindowFunction,
}

impl SpectrogramConfig {
    pub fn new(window_size: usize, window_step: usize) -> Self {
        Self {
            window_size,
            window_step,
            window: WindowFunction::default(),
        }
    }

    pub fn with_window(mut self, window: WindowFunction) -> Self {
        self.window = window;
        self
    }

    /// Number of non-negative-frequency bins each frame yields.
    pub fn num_bins(&self) -> usize {
        self.window_size / 2 + 1
    }
}

impl Default for SpectrogramConfig {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW_SIZE, DEFAULT_WINDOW_STEP)
    }
}
