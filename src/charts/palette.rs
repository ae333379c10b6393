//! Chart colors: dashboard theme and continuous color scales.

use egui::Color32;

/// Page background (deep dark blue).
pub const NAVY: Color32 = Color32::from_rgb(13, 27, 42);
/// Sidebar background (slightly lighter navy).
pub const SIDEBAR_NAVY: Color32 = Color32::from_rgb(27, 38, 59);

/// Slice colors for the donut chart
pub const PALETTE: [Color32; 10] = [
    Color32::from_rgb(99, 110, 250),  // Indigo
    Color32::from_rgb(239, 85, 59),   // Red
    Color32::from_rgb(0, 204, 150),   // Green
    Color32::from_rgb(171, 99, 250),  // Purple
    Color32::from_rgb(255, 161, 90),  // Orange
    Color32::from_rgb(25, 211, 243),  // Cyan
    Color32::from_rgb(255, 102, 146), // Pink
    Color32::from_rgb(182, 232, 128), // Lime
    Color32::from_rgb(255, 151, 255), // Magenta
    Color32::from_rgb(254, 203, 82),  // Yellow
];

/// Continuous color scales, sampled at evenly spaced stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorScale {
    Blues,
    Viridis,
    Plasma,
    Magma,
}

impl ColorScale {
    fn stops(self) -> &'static [[u8; 3]] {
        match self {
            ColorScale::Blues => &[[198, 219, 239], [107, 174, 214], [33, 113, 181], [8, 48, 107]],
            ColorScale::Viridis => &[
                [68, 1, 84],
                [59, 82, 139],
                [33, 145, 140],
                [94, 201, 98],
                [253, 231, 37],
            ],
            ColorScale::Plasma => &[
                [13, 8, 135],
                [126, 3, 168],
                [204, 71, 120],
                [248, 149, 64],
                [240, 249, 33],
            ],
            ColorScale::Magma => &[
                [0, 0, 4],
                [81, 18, 124],
                [183, 55, 121],
                [252, 137, 97],
                [252, 253, 191],
            ],
        }
    }

    /// Color at `t` in [0, 1]; out-of-range values are clamped.
    pub fn sample(self, t: f64) -> Color32 {
        let stops = self.stops();
        let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
        let scaled = t * (stops.len() - 1) as f64;
        let lower = scaled.floor() as usize;
        let upper = (lower + 1).min(stops.len() - 1);
        let frac = scaled - lower as f64;

        let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * frac).round() as u8;
        let (a, b) = (stops[lower], stops[upper]);
        Color32::from_rgb(mix(a[0], b[0]), mix(a[1], b[1]), mix(a[2], b[2]))
    }

    /// Color for `value` relative to the `[min, max]` range.
    pub fn sample_range(self, value: f64, min: f64, max: f64) -> Color32 {
        if max > min {
            self.sample((value - min) / (max - min))
        } else {
            self.sample(1.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_match_first_and_last_stop() {
        assert_eq!(ColorScale::Blues.sample(0.0), Color32::from_rgb(198, 219, 239));
        assert_eq!(ColorScale::Blues.sample(1.0), Color32::from_rgb(8, 48, 107));
        assert_eq!(ColorScale::Viridis.sample(7.0), Color32::from_rgb(253, 231, 37));
    }

    #[test]
    fn flat_range_uses_top_color() {
        assert_eq!(
            ColorScale::Magma.sample_range(3.0, 3.0, 3.0),
            ColorScale::Magma.sample(1.0)
        );
    }
}
