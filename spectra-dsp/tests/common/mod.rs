#![allow(dead_code)]

use rand::{rngs::StdRng, Rng, SeedableRng};
use spectra_dsp::Spectrum;
use wavegen::{sine, Waveform};

pub const SAMPLE_RATE: f64 = 64.0;

/// A spectrum whose amplitudes trace a unit sine of `frequency` Hz.
pub fn sine_spectrum(frequency: f64, len: usize) -> Spectrum {
    let waveform = Waveform::<f64, f64>::with_components(
        SAMPLE_RATE,
        vec![sine!(frequency: frequency, amplitude: 1.0)],
    );
    let amplitudes: Vec<f64> = waveform.iter().take(len).collect();
    Spectrum::from_amplitudes(&amplitudes)
}

/// A spectrum of seeded random positive amplitudes.
pub fn noisy_spectrum(seed: u64, len: usize) -> Spectrum {
    let mut rng = StdRng::seed_from_u64(seed);
    let amplitudes: Vec<f64> = (0..len).map(|_| rng.random_range(0.05..1.0)).collect();
    Spectrum::from_amplitudes(&amplitudes)
}
