//! Chart geometry: donut arc paths and bar heights.

use std::f64::consts::{PI, TAU};

use serde::{Deserialize, Serialize};

use super::{EngineError, EngineResult};

/// Angular gap left in a full-circle slice so its start and end points differ.
pub const FULL_CIRCLE_EPSILON: f64 = 1e-4;

/// One labeled, colored quantity in a proportion chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySegment {
    pub label: String,
    pub value: f64,
    pub color: String,
}

impl CategorySegment {
    pub fn new(label: impl Into<String>, value: f64, color: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value,
            color: color.into(),
        }
    }
}

/// Circle the donut slices are drawn on, in viewBox units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DonutLayout {
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
}

impl Default for DonutLayout {
    fn default() -> Self {
        Self {
            cx: 56.0,
            cy: 56.0,
            radius: 44.0,
        }
    }
}

impl DonutLayout {
    fn point_at(&self, angle: f64) -> (f64, f64) {
        (
            self.cx + self.radius * angle.cos(),
            self.cy + self.radius * angle.sin(),
        )
    }
}

/// Wedge derived from a [`CategorySegment`].
#[derive(Debug, Clone, PartialEq)]
pub struct Arc {
    /// SVG path data, closed back to the center.
    pub path: String,
    pub color: String,
    pub label: String,
    /// Share of the total in percent, unrounded.
    pub percentage: f64,
    pub start_angle: f64,
    pub end_angle: f64,
}

impl Arc {
    pub fn span(&self) -> f64 {
        self.end_angle - self.start_angle
    }

    /// Legend text, one decimal place.
    pub fn percentage_label(&self) -> String {
        format!("{:.1}%", self.percentage)
    }
}

/// Donut arcs on the default 112×112 layout.
pub fn compute_arcs(segments: &[CategorySegment]) -> EngineResult<Vec<Arc>> {
    compute_arcs_with(segments, &DonutLayout::default())
}

/// Lays `segments` out clockwise from angle 0 in input order.
pub fn compute_arcs_with(
    segments: &[CategorySegment],
    layout: &DonutLayout,
) -> EngineResult<Vec<Arc>> {
    if segments
        .iter()
        .any(|segment| !segment.value.is_finite() || segment.value < 0.0)
    {
        return Err(EngineError::degenerate(
            "segment values must be finite and non-negative",
        ));
    }

    let total: f64 = segments.iter().map(|segment| segment.value).sum();
    if total <= 0.0 {
        return Err(EngineError::degenerate("segment total must be positive"));
    }
    if !total.is_finite() {
        return Err(EngineError::degenerate("segment total overflows"));
    }

    let mut cumulative = 0.0;
    let arcs = segments
        .iter()
        .map(|segment| {
            let start_angle = cumulative / total * TAU;
            cumulative += segment.value;
            let end_angle = cumulative / total * TAU;

            Arc {
                path: arc_path(layout, start_angle, end_angle),
                color: segment.color.clone(),
                label: segment.label.clone(),
                percentage: segment.value / total * 100.0,
                start_angle,
                end_angle,
            }
        })
        .collect();

    Ok(arcs)
}

fn arc_path(layout: &DonutLayout, start: f64, end: f64) -> String {
    let span = end - start;
    let drawn_end = if span >= TAU - FULL_CIRCLE_EPSILON {
        start + TAU - FULL_CIRCLE_EPSILON
    } else {
        end
    };
    let large_arc = u8::from(span > PI);

    let (x1, y1) = layout.point_at(start);
    let (x2, y2) = layout.point_at(drawn_end);
    let r = coord(layout.radius);

    format!(
        "M {cx} {cy} L {x1} {y1} A {r} {r} 0 {large_arc} 1 {x2} {y2} Z",
        cx = coord(layout.cx),
        cy = coord(layout.cy),
        x1 = coord(x1),
        y1 = coord(y1),
        x2 = coord(x2),
        y2 = coord(y2),
    )
}

/// Three decimals, trailing zeros trimmed.
fn coord(value: f64) -> String {
    let fixed = format!("{value:.3}");
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Height of each bar as a fraction of the tallest, in input order.
///
/// Negative entries clamp to zero.
pub fn compute_bar_heights(series: &[f64]) -> EngineResult<Vec<f64>> {
    if series.is_empty() {
        return Err(EngineError::degenerate("bar series is empty"));
    }
    if series.iter().any(|value| !value.is_finite()) {
        return Err(EngineError::degenerate("bar values must be finite"));
    }

    let max = series.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if max <= 0.0 {
        return Err(EngineError::degenerate(
            "bar series needs at least one positive value",
        ));
    }

    Ok(series
        .iter()
        .map(|value| (value / max).clamp(0.0, 1.0))
        .collect())
}
