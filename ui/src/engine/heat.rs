//! Value-to-color mapping for heatmap cells.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{EngineError, EngineResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses `#rrggbb` (the leading `#` is optional).
    pub fn from_hex(raw: &str) -> Option<Self> {
        let hex = raw.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
        Some(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    fn lerp(self, other: Rgb, t: f64) -> Rgb {
        let mix = |a: u8, b: u8| (f64::from(a) + (f64::from(b) - f64::from(a)) * t).round() as u8;
        Rgb::new(
            mix(self.r, other.r),
            mix(self.g, other.g),
            mix(self.b, other.b),
        )
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Two-point color ramp, `low` at t = 0 and `high` at t = 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorRamp {
    pub low: Rgb,
    pub high: Rgb,
}

impl Default for ColorRamp {
    fn default() -> Self {
        Self {
            low: Rgb::new(0x1e, 0x1b, 0x4b),
            high: Rgb::new(0xa7, 0x8b, 0xfa),
        }
    }
}

/// Position of `value` on `[min, max]`, clamped to `[0, 1]`.
///
/// A constant range (`max == min`) maps everything to 0.
pub fn normalize(value: f64, min: f64, max: f64) -> f64 {
    let range = max - min;
    if range == 0.0 {
        return 0.0;
    }
    let t = (value - min) / range;
    if t.is_finite() {
        t.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

pub fn color_for(value: f64, min: f64, max: f64, ramp: &ColorRamp) -> Rgb {
    ramp.low.lerp(ramp.high, normalize(value, min, max))
}

/// Rectangular grid of values with row and column labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatGrid {
    pub rows: Vec<String>,
    pub columns: Vec<String>,
    pub cells: Vec<Vec<f64>>,
}

impl HeatGrid {
    /// Smallest and largest cell value.
    pub fn bounds(&self) -> EngineResult<(f64, f64)> {
        if self.cells.len() != self.rows.len()
            || self.cells.iter().any(|row| row.len() != self.columns.len())
        {
            return Err(EngineError::degenerate(
                "heat grid shape does not match its labels",
            ));
        }

        let mut values = self.cells.iter().flatten().copied().peekable();
        if values.peek().is_none() {
            return Err(EngineError::degenerate("heat grid has no cells"));
        }

        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for value in values {
            if !value.is_finite() {
                return Err(EngineError::degenerate("heat values must be finite"));
            }
            min = min.min(value);
            max = max.max(value);
        }
        Ok((min, max))
    }

    /// Cell colors in the same row-major layout as `cells`.
    pub fn colors(&self, ramp: &ColorRamp) -> EngineResult<Vec<Vec<Rgb>>> {
        let (min, max) = self.bounds()?;
        Ok(self
            .cells
            .iter()
            .map(|row| {
                row.iter()
                    .map(|value| color_for(*value, min, max, ramp))
                    .collect()
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RAMP: ColorRamp = ColorRamp {
        low: Rgb::new(0, 0, 0),
        high: Rgb::new(200, 100, 50),
    };

    #[test]
    fn endpoints_and_midpoint() {
        assert_eq!(color_for(0.0, 0.0, 10.0, &RAMP), RAMP.low);
        assert_eq!(color_for(10.0, 0.0, 10.0, &RAMP), RAMP.high);
        assert_eq!(color_for(5.0, 0.0, 10.0, &RAMP), Rgb::new(100, 50, 25));
    }

    #[test]
    fn out_of_range_values_clamp() {
        assert_eq!(color_for(-5.0, 0.0, 10.0, &RAMP), RAMP.low);
        assert_eq!(color_for(50.0, 0.0, 10.0, &RAMP), RAMP.high);
    }

    #[test]
    fn constant_range_maps_to_low() {
        assert_eq!(normalize(3.0, 3.0, 3.0), 0.0);
        assert_eq!(color_for(3.0, 3.0, 3.0, &RAMP), RAMP.low);
    }

    #[test]
    fn hex_round_trip_and_rejects_garbage() {
        assert_eq!(Rgb::from_hex("#a78bfa"), Some(Rgb::new(0xa7, 0x8b, 0xfa)));
        assert_eq!(Rgb::new(1, 2, 255).to_string(), "#0102ff");
        assert_eq!(Rgb::from_hex("#fff"), None);
        assert_eq!(Rgb::from_hex("#zzzzzz"), None);
        assert_eq!(Rgb::from_hex("#+1+2+3"), None);
    }

    #[test]
    fn grid_bounds_and_shape_checks() {
        let grid = HeatGrid {
            rows: vec!["Mon".into(), "Tue".into()],
            columns: vec!["AM".into(), "PM".into()],
            cells: vec![vec![2.0, 8.0], vec![4.0, 6.0]],
        };
        assert_eq!(grid.bounds().unwrap(), (2.0, 8.0));
        assert_eq!(grid.colors(&RAMP).unwrap()[0][1], RAMP.high);

        let ragged = HeatGrid {
            cells: vec![vec![1.0], vec![2.0, 3.0]],
            ..grid.clone()
        };
        assert!(ragged.bounds().is_err());

        let empty = HeatGrid {
            rows: Vec::new(),
            columns: Vec::new(),
            cells: Vec::new(),
        };
        assert!(matches!(
            empty.bounds(),
            Err(EngineError::DegenerateDataset { .. })
        ));
    }
}
