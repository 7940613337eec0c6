use embedded_graphics::pixelcolor::Rgb888;

use crate::error::{Result, VizError};

/// Ordered, non-empty list of colours indexed by quantised intensity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Rgb888>,
}

impl Palette {
    pub fn new(colors: Vec<Rgb888>) -> Result<Self> {
        if colors.is_empty() {
            return Err(VizError::EmptyPalette);
        }
        Ok(Self { colors })
    }

    pub fn from_rgb_triples(triples: &[(u8, u8, u8)]) -> Result<Self> {
        Self::new(
            triples
                .iter()
                .map(|&(r, g, b)| Rgb888::new(r, g, b))
                .collect(),
        )
    }

    /// `size` evenly spaced greys from black to white.
    pub fn grayscale(size: usize) -> Result<Self> {
        let last = size.saturating_sub(1).max(1);
        Self::new(
            (0..size)
                .map(|i| {
                    let intensity = (i * 255 / last) as u8;
                    Rgb888::new(intensity, intensity, intensity)
                })
                .collect(),
        )
    }

    /// `size` colours sampled around the RGB colour wheel.
    pub fn color_wheel(size: usize) -> Result<Self> {
        Self::new(
            (0..size)
                .map(|i| map_position_to_rgb_on_wheel(wheel_position(i, size)))
                .collect(),
        )
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Never true for a constructed palette.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn max_index(&self) -> usize {
        self.colors.len() - 1
    }

    pub fn get(&self, index: usize) -> Option<Rgb888> {
        self.colors.get(index).copied()
    }

    pub fn colors(&self) -> &[Rgb888] {
        &self.colors
    }
}

/// Position of entry `i` of `size` on a 255-step wheel.
fn wheel_position(i: usize, size: usize) -> u8 {
    // u64 keeps `i * 255` from overflowing for large palettes
    ((i as u64 * 255 / size as u64) % 255) as u8
}

fn map_position_to_rgb_on_wheel(pos: u8) -> Rgb888 {
    let pos = pos % 255;
    if pos < 85 {
        Rgb888::new(
            pos.saturating_mul(3),
            255u8.saturating_sub(pos.saturating_mul(3)),
            0,
        )
    } else if pos < 170 {
        let pos = pos.saturating_sub(85);
        Rgb888::new(
            255u8.saturating_sub(pos.saturating_mul(3)),
            0,
            pos.saturating_mul(3),
        )
    } else {
        let pos = pos.saturating_sub(170);
        Rgb888::new(
            0,
            pos.saturating_mul(3),
            255u8.saturating_sub(pos.saturating_mul(3)),
        )
    }
}
