//! Spectrum to PCM to spectrogram conversion.
//!
//! The stages run in order: [`SpectrumConverter`] turns an amplitude
//! spectrum into a [`PcmBuffer`], [`compute_spectrogram`] frames the samples
//! into a [`SpectrogramMatrix`], and [`normalize_log_amplitude`] rescales it
//! into `[0, 1]` ready for colouring.

pub mod config;
pub mod error;
pub mod log_normalizer;
pub mod matrix;
pub mod pcm_buffer;
pub mod spectrogram;
pub mod spectrum;
pub mod spectrum_converter;

pub use config::{SpectrogramConfig, WindowFunction};
pub use error::{DspError, Result};
pub use log_normalizer::normalize_log_amplitude;
pub use matrix::SpectrogramMatrix;
pub use pcm_buffer::PcmBuffer;
pub use spectrogram::{compute, compute_spectrogram};
pub use spectrum::{SpectralData, Spectrum, SpectrumPoint};
pub use spectrum_converter::{spectrum_to_pcm, SpectrumConverter};
