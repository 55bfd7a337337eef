//! Axis ticks for the exported SVG.
//!
//! The window gets its grid marks from `egui_plot`; a static document has no
//! plot widget, so tick positions are computed here. [`format_tick`] is shared
//! by both so labels read the same on screen and in files.

use crate::data::scale::LinearScale;

/// Round tick values covering the scale's domain, roughly `count` of them,
/// spaced by 1, 2 or 5 times a power of ten.
pub fn ticks(scale: &LinearScale, count: usize) -> Vec<f64> {
    let (lo, hi) = ordered(scale.domain);
    let Some(step) = TickStep::for_span(lo, hi, count) else {
        return vec![lo];
    };
    let first = step.index_ceil(lo);
    let last = step.index_floor(hi);
    (first..=last).map(|i| step.value(i)).collect()
}

/// Spacing between consecutive ticks for the given count, if any.
pub fn tick_step(scale: &LinearScale, count: usize) -> Option<f64> {
    let (lo, hi) = ordered(scale.domain);
    TickStep::for_span(lo, hi, count).map(|s| s.size())
}

fn ordered((a, b): (f64, f64)) -> (f64, f64) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Tick spacing kept as an integer ratio so that e.g. `0.3` is produced as
/// `3 / 10` instead of `3 * 0.1`.
#[derive(Copy, Clone, Debug)]
enum TickStep {
    /// Step of `n` units.
    Whole(f64),
    /// Step of `1 / n` units.
    Fraction(f64),
}

impl TickStep {
    fn for_span(lo: f64, hi: f64, count: usize) -> Option<Self> {
        let span = hi - lo;
        if count == 0 || !span.is_finite() || span <= 0.0 {
            return None;
        }
        let raw = span / count as f64;
        let power = raw.log10().floor();
        let error = raw / 10f64.powf(power);
        let factor = if error >= 50f64.sqrt() {
            10.0
        } else if error >= 10f64.sqrt() {
            5.0
        } else if error >= 2f64.sqrt() {
            2.0
        } else {
            1.0
        };
        Some(if power >= 0.0 {
            TickStep::Whole(factor * 10f64.powf(power))
        } else {
            TickStep::Fraction(10f64.powf(-power) / factor)
        })
    }

    fn size(self) -> f64 {
        match self {
            TickStep::Whole(n) => n,
            TickStep::Fraction(n) => 1.0 / n,
        }
    }

    fn index_ceil(self, v: f64) -> i64 {
        match self {
            TickStep::Whole(n) => (v / n).ceil() as i64,
            TickStep::Fraction(n) => (v * n).ceil() as i64,
        }
    }

    fn index_floor(self, v: f64) -> i64 {
        match self {
            TickStep::Whole(n) => (v / n).floor() as i64,
            TickStep::Fraction(n) => (v * n).floor() as i64,
        }
    }

    fn value(self, i: i64) -> f64 {
        match self {
            TickStep::Whole(n) => i as f64 * n,
            TickStep::Fraction(n) => i as f64 / n,
        }
    }
}

/// Format a tick label with just enough decimals for `step` and thousands
/// separators, e.g. `45,000` or `12.5`.
pub fn format_tick(value: f64, step: f64) -> String {
    let decimals = if step > 0.0 && step.is_finite() {
        (-step.log10().floor()).max(0.0) as usize
    } else {
        0
    };
    let s = format!("{:.*}", decimals, value);
    let (sign, rest) = match s.strip_prefix('-') {
        Some(r) => ("-", r),
        None => ("", s.as_str()),
    };
    let (int, frac) = match rest.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (rest, None),
    };
    let mut grouped = String::with_capacity(int.len() + int.len() / 3);
    for (i, ch) in int.chars().enumerate() {
        if i > 0 && (int.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    // "-0" after rounding reads as noise
    let is_zero = grouped.chars().all(|c| c == '0' || c == ',')
        && frac.map_or(true, |f| f.chars().all(|c| c == '0'));
    let sign = if is_zero { "" } else { sign };
    match frac {
        Some(f) => format!("{sign}{grouped}.{f}"),
        None => format!("{sign}{grouped}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degenerate_domain_has_one_tick() {
        let s = LinearScale::new((5.0, 5.0), (0.0, 200.0));
        assert_eq!(ticks(&s, 10), vec![5.0]);
        assert_eq!(tick_step(&s, 10), None);
    }

    #[test]
    fn ticks_use_clean_decimals() {
        let s = LinearScale::new((0.0, 1.0), (0.0, 100.0));
        let t = ticks(&s, 10);
        assert_eq!(t.len(), 11);
        assert_eq!(t[3], 0.3);
    }

    #[test]
    fn ticks_for_income_domain() {
        let s = LinearScale::new((0.8 * 35_000.0, 1.2 * 75_000.0), (0.0, 884.0));
        let t = ticks(&s, 10);
        assert_eq!(tick_step(&s, 10), Some(5_000.0));
        assert_eq!(t.first(), Some(&30_000.0));
        assert_eq!(t.last(), Some(&90_000.0));
    }

    #[test]
    fn tick_labels() {
        assert_eq!(format_tick(45_000.0, 5_000.0), "45,000");
        assert_eq!(format_tick(12.5, 0.5), "12.5");
        assert_eq!(format_tick(1_234_567.0, 1.0), "1,234,567");
        assert_eq!(format_tick(-0.0, 1.0), "0");
        assert_eq!(format_tick(-1500.0, 500.0), "-1,500");
    }
}
