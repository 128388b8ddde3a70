//! Gamma lookup table.

use image::RgbImage;

/// A 256-entry table remapping channel values through `255 * (v / 255)^gamma`.
///
/// Results are rounded half-to-even.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GammaLut {
    table: [u8; 256],
}

impl GammaLut {
    /// Build the table for `gamma`.
    ///
    /// Callers are expected to pass a finite gamma greater than zero; other
    /// values saturate at the ends of the range.
    pub fn new(gamma: f64) -> Self {
        let table = std::array::from_fn(|i| {
            let x = i as f64 / 255.0;
            (x.powf(gamma) * 255.0).round_ties_even().clamp(0.0, 255.0) as u8
        });
        Self { table }
    }

    /// The table that maps every value to itself.
    pub fn identity() -> Self {
        Self {
            table: std::array::from_fn(|i| i as u8),
        }
    }

    pub fn is_identity(&self) -> bool {
        self.table.iter().enumerate().all(|(i, &v)| i == v as usize)
    }

    #[inline]
    pub fn map(&self, value: u8) -> u8 {
        self.table[value as usize]
    }

    pub fn as_slice(&self) -> &[u8; 256] {
        &self.table
    }

    /// Remap all three channels of every pixel.
    pub fn apply(&self, rgb: &mut RgbImage) {
        for value in rgb.iter_mut() {
            *value = self.map(*value);
        }
    }
}
