#![allow(dead_code)]

use std::fs::File;
use std::path::{Path, PathBuf};

use rand::{rngs::StdRng, Rng, SeedableRng};
use spectra_dsp::Spectrum;

/// A unique path in the temp directory, without extension.
pub fn temp_image_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("spectra-viz-{}-{}", name, std::process::id()))
}

/// Decodes a PNG into (width, height, rgb bytes).
pub fn read_png(path: &Path) -> (u32, u32, Vec<u8>) {
    let decoder = png::Decoder::new(File::open(path).unwrap());
    let mut reader = decoder.read_info().unwrap();
    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf).unwrap();
    assert_eq!(info.color_type, png::ColorType::Rgb);
    assert_eq!(info.bit_depth, png::BitDepth::Eight);
    buf.truncate(info.buffer_size());
    (info.width, info.height, buf)
}

/// A spectrum of seeded random positive amplitudes.
pub fn noisy_spectrum(seed: u64, len: usize) -> Spectrum {
    let mut rng = StdRng::seed_from_u64(seed);
    let amplitudes: Vec<f64> = (0..len).map(|_| rng.random_range(0.05..1.0)).collect();
    Spectrum::from_amplitudes(&amplitudes)
}
