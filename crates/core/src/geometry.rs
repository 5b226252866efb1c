//! Points on the mood plane and the small numeric helpers built on them.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A point on the mood plane.
///
/// `x` is valence (musical positivity) and `y` is energy, both expected in
/// `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Center of the mood plane (neutral valence, medium energy).
    pub const CENTER: Self = Self { x: 0.5, y: 0.5 };

    /// Whether both coordinates are finite and inside `[0, 1]`.
    pub fn in_unit_square(&self) -> bool {
        (0.0..=1.0).contains(&self.x) && (0.0..=1.0).contains(&self.y)
    }

    /// Reject points outside the unit square (NaN included).
    pub fn validate(&self) -> Result<()> {
        if self.in_unit_square() {
            Ok(())
        } else {
            Err(Error::invalid(
                "point",
                format!("({}, {})", self.x, self.y),
                "coordinates must lie in [0, 1]",
            ))
        }
    }

    /// Euclidean distance to another point
    #[inline]
    pub fn dist(&self, other: &Point) -> f64 {
        euclidean_distance(self, other)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Affine remap of `v` from `[in_min, in_max]` onto `[out_min, out_max]`.
///
/// No clamping is applied. Fails when the input range is empty.
pub fn normalize(v: f64, in_min: f64, in_max: f64, out_min: f64, out_max: f64) -> Result<f64> {
    let in_range = in_max - in_min;
    if in_range == 0.0 || !in_range.is_finite() {
        return Err(Error::invalid(
            "in_range",
            format!("[{}, {}]", in_min, in_max),
            "input range must be non-empty and finite",
        ));
    }
    Ok((out_max - out_min) / in_range * (v - in_min) + out_min)
}

/// Euclidean distance between two points.
#[inline]
pub fn euclidean_distance(a: &Point, b: &Point) -> f64 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    (dx * dx + dy * dy).sqrt()
}

/// `Σ(value · weight)` over paired slices.
pub fn weighted_sum(values: &[f64], weights: &[f64]) -> Result<f64> {
    check_lengths(values, weights)?;
    Ok(values.iter().zip(weights).map(|(v, w)| v * w).sum())
}

/// Weighted mean `Σ(value · weight) / Σ(weight)`.
///
/// A weight sum that is zero or not finite cannot be produced by the IDW
/// weights, so it is reported as an [`Error::Invariant`].
pub fn weighted_interpolate(values: &[f64], weights: &[f64]) -> Result<f64> {
    let numerator = weighted_sum(values, weights)?;
    let total: f64 = weights.iter().sum();

    if !(total > 0.0) || !total.is_finite() {
        return Err(Error::Invariant(format!(
            "weight sum must be positive and finite, got {}",
            total
        )));
    }

    Ok(numerator / total)
}

fn check_lengths(values: &[f64], weights: &[f64]) -> Result<()> {
    if values.len() != weights.len() {
        return Err(Error::invalid(
            "weights",
            weights.len(),
            format!("expected {} weights to match the values", values.len()),
        ));
    }
    Ok(())
}
