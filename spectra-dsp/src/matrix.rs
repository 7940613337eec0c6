use crate::error::{DspError, Result};

/// Magnitudes indexed `[frame][bin]`, stored row-major by frame.
///
/// Frame index increases with time and bin index increases with frequency.
#[derive(Debug, Clone, PartialEq)]
pub struct SpectrogramMatrix {
    frames: usize,
    bins: usize,
    data: Vec<f32>,
}

impl SpectrogramMatrix {
    pub(crate) fn from_raw(frames: usize, bins: usize, data: Vec<f32>) -> Self {
        debug_assert_eq!(data.len(), frames * bins);
        Self { frames, bins, data }
    }

    /// Builds a matrix from one row per frame; every row must have the same length.
    pub fn from_rows<R: AsRef<[f32]>>(rows: &[R]) -> Result<Self> {
        let bins = rows.first().map_or(0, |r| r.as_ref().len());
        let mut data = Vec::with_capacity(rows.len() * bins);
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != bins {
                return Err(DspError::RaggedRows {
                    row: i,
                    got: row.len(),
                    expected: bins,
                });
            }
            data.extend_from_slice(row);
        }
        Ok(Self::from_raw(rows.len(), bins, data))
    }

    pub fn frames(&self) -> usize {
        self.frames
    }

    pub fn bins(&self) -> usize {
        self.bins
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn get(&self, frame: usize, bin: usize) -> Option<f32> {
        if frame < self.frames && bin < self.bins {
            Some(self.data[frame * self.bins + bin])
        } else {
            None
        }
    }

    /// All bins of one frame, in ascending frequency.
    pub fn frame(&self, frame: usize) -> &[f32] {
        &self.data[frame * self.bins..(frame + 1) * self.bins]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[f32]> {
        // chunks_exact panics on 0
        self.data.chunks_exact(self.bins.max(1))
    }

    pub fn iter(&self) -> impl Iterator<Item = f32> + '_ {
        self.data.iter().copied()
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    pub fn min(&self) -> Option<f32> {
        self.data.iter().copied().reduce(f32::min)
    }

    pub fn max(&self) -> Option<f32> {
        self.data.iter().copied().reduce(f32::max)
    }

    /// Applies `f` to every entry, keeping the shape.
    pub fn map<F: FnMut(f32) -> f32>(&self, f: F) -> Self {
        Self::from_raw(self.frames, self.bins, self.data.iter().copied().map(f).collect())
    }

    /// Swaps the axes: the result is indexed `[bin][frame]`.
    pub fn transposed(&self) -> Self {
        let mut data = Vec::with_capacity(self.data.len());
        for bin in 0..self.bins {
            for frame in 0..self.frames {
                data.push(self.data[frame * self.bins + bin]);
            }
        }
        Self::from_raw(self.bins, self.frames, data)
    }
}
