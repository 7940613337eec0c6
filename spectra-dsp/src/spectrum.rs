/// Read access to an ordered amplitude spectrum.
pub trait SpectralData {
    /// Point amplitudes in spectrum order.
    fn amplitudes(&self) -> Box<dyn Iterator<Item = f64> + '_>;

    /// Amplitude of the peak point, `None` for an empty spectrum.
    fn max_amplitude(&self) -> Option<f64>;
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpectrumPoint {
    pub wave_number: f64,
    pub amplitude: f64,
}

impl SpectrumPoint {
    pub fn new(wave_number: f64, amplitude: f64) -> Self {
        Self {
            wave_number,
            amplitude,
        }
    }
}

/// An ordered list of spectrum points with a cached peak.
#[derive(Debug, Clone, PartialEq)]
pub struct Spectrum {
    points: Vec<SpectrumPoint>,
    max_index: Option<usize>,
}

impl Spectrum {
    pub fn new(points: Vec<SpectrumPoint>) -> Self {
        let max_index = points
            .iter()
            .enumerate()
            .fold(None, |best: Option<(usize, f64)>, (i, p)| match best {
                Some((_, amp)) if amp >= p.amplitude => best,
                _ if p.amplitude.is_nan() => best,
                _ => Some((i, p.amplitude)),
            })
            .map(|(i, _)| i);
        Self { points, max_index }
    }

    /// Builds a spectrum from amplitudes alone, numbering points from 0.
    pub fn from_amplitudes(amplitudes: &[f64]) -> Self {
        Self::new(
            amplitudes
                .iter()
                .enumerate()
                .map(|(i, &amplitude)| SpectrumPoint::new(i as f64, amplitude))
                .collect(),
        )
    }

    pub fn points(&self) -> &[SpectrumPoint] {
        &self.points
    }

    pub fn max_point(&self) -> Option<&SpectrumPoint> {
        self.max_index.map(|i| &self.points[i])
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl SpectralData for Spectrum {
    fn amplitudes(&self) -> Box<dyn Iterator<Item = f64> + '_> {
        Box::new(self.points.iter().map(|p| p.amplitude))
    }

    fn max_amplitude(&self) -> Option<f64> {
        self.max_point().map(|p| p.amplitude)
    }
}
