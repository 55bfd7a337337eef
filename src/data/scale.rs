//! Linear value→pixel scales.

use crate::data::field::Field;
use crate::data::record::Dataset;

/// Padding factors applied to the data extent before it becomes a domain.
pub const DOMAIN_LOW_FACTOR: f64 = 0.8;
pub const DOMAIN_HIGH_FACTOR: f64 = 1.2;

/// A linear mapping from a value domain onto a pixel range.
///
/// The range may be inverted (`range.0 > range.1`), which is how the vertical
/// axis maps high values to small pixel offsets.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LinearScale {
    pub domain: (f64, f64),
    pub range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Map a domain value to the range. A zero-width domain maps everything
    /// to the middle of the range.
    pub fn apply(&self, v: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if d1 == d0 {
            return (r0 + r1) * 0.5;
        }
        r0 + (v - d0) / (d1 - d0) * (r1 - r0)
    }

    pub fn invert(&self, px: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if r1 == r0 {
            return (d0 + d1) * 0.5;
        }
        d0 + (px - r0) / (r1 - r0) * (d1 - d0)
    }

    /// Interpolate between two scales. Only the domain moves; the range of
    /// `to` is used throughout.
    pub fn lerp(from: &LinearScale, to: &LinearScale, t: f64) -> LinearScale {
        let mix = |a: f64, b: f64| a + (b - a) * t;
        LinearScale {
            domain: (mix(from.domain.0, to.domain.0), mix(from.domain.1, to.domain.1)),
            range: to.range,
        }
    }
}

fn padded_domain(dataset: &Dataset, field: Field) -> (f64, f64) {
    let (min, max) = dataset.extent(field);
    (min * DOMAIN_LOW_FACTOR, max * DOMAIN_HIGH_FACTOR)
}

/// Horizontal scale: padded extent of `field` onto `[0, width]`.
pub fn x_scale(dataset: &Dataset, field: Field, width: f64) -> LinearScale {
    LinearScale::new(padded_domain(dataset, field), (0.0, width))
}

/// Vertical scale: padded extent of `field` onto `[height, 0]`, so larger
/// values sit higher on screen.
pub fn y_scale(dataset: &Dataset, field: Field, height: f64) -> LinearScale {
    LinearScale::new(padded_domain(dataset, field), (height, 0.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inverted_range_maps_domain_ends() {
        let s = LinearScale::new((10.0, 20.0), (100.0, 0.0));
        assert_eq!(s.apply(10.0), 100.0);
        assert_eq!(s.apply(20.0), 0.0);
        assert_eq!(s.apply(15.0), 50.0);
        assert_eq!(s.invert(50.0), 15.0);
    }

    #[test]
    fn lerp_moves_domain_and_keeps_target_range() {
        let a = LinearScale::new((0.0, 10.0), (0.0, 100.0));
        let b = LinearScale::new((20.0, 40.0), (0.0, 200.0));
        let mid = LinearScale::lerp(&a, &b, 0.5);
        assert_eq!(mid.domain, (10.0, 25.0));
        assert_eq!(mid.range, (0.0, 200.0));
    }

    #[test]
    fn degenerate_domain_maps_to_range_middle() {
        let s = LinearScale::new((5.0, 5.0), (0.0, 200.0));
        assert_eq!(s.apply(5.0), 100.0);
    }
}
