//! Inverse Distance Weighting (IDW) weights
//!
//! Every sampled profile blends its samples with the same weighting:
//!
//! ```text
//! d_i = |p - p_i| + ε
//! w_i = d_i ^ -(global_weight · local_weight_i)
//! ```
//!
//! A larger exponent sharpens the falloff towards nearest-neighbor behaviour,
//! a smaller one blends more globally.
//!
//! With a large exponent the coincident weight `ε^-exponent` overflows `f64`
//! (from an exponent of about 51). [`relative_inverse_distance_weights`]
//! computes the same weights in log space, scaled so the largest is 1, which
//! leaves any normalized blend unchanged and stays finite. Far samples may
//! underflow to 0.
//!
//! Reference:
//! Shepard, D. (1968). A two-dimensional interpolation function for
//! irregularly-spaced data. ACM National Conference.

use crate::error::{Error, Result};
use crate::geometry::{euclidean_distance, Point};

/// Offset added to every distance so a query that lands exactly on a sample
/// gets a very large but finite weight.
pub const IDW_EPSILON: f64 = 1e-6;

/// IDW weight of a single sample at `distance` from the query point.
#[inline]
pub fn idw_weight(distance: f64, exponent: f64) -> f64 {
    (distance + IDW_EPSILON).powf(-exponent)
}

/// Compute one IDW weight per sample point.
///
/// `local_weights` must pair up with `sample_points`; each weight is raised to
/// `-(global_weight · local_weight)`.
pub fn inverse_distance_weights(
    point: &Point,
    sample_points: &[Point],
    local_weights: &[f64],
    global_weight: f64,
) -> Result<Vec<f64>> {
    if sample_points.len() != local_weights.len() {
        return Err(Error::invalid(
            "local_weights",
            local_weights.len(),
            format!("expected one weight per sample ({})", sample_points.len()),
        ));
    }

    let weights = sample_points
        .iter()
        .zip(local_weights)
        .map(|(p, &w)| idw_weight(euclidean_distance(point, p), global_weight * w))
        .collect();

    Ok(weights)
}

/// [`inverse_distance_weights`] divided by their maximum.
///
/// Each log weight is `-(global_weight · local_weight_i) · ln(d_i + ε)`; the
/// largest is subtracted before exponentiating, so the result lies in `[0, 1]`
/// with at least one weight equal to 1.
pub fn relative_inverse_distance_weights(
    point: &Point,
    sample_points: &[Point],
    local_weights: &[f64],
    global_weight: f64,
) -> Result<Vec<f64>> {
    if sample_points.len() != local_weights.len() {
        return Err(Error::invalid(
            "local_weights",
            local_weights.len(),
            format!("expected one weight per sample ({})", sample_points.len()),
        ));
    }

    let log_weights: Vec<f64> = sample_points
        .iter()
        .zip(local_weights)
        .map(|(p, &w)| -(global_weight * w) * (euclidean_distance(point, p) + IDW_EPSILON).ln())
        .collect();

    let max = log_weights.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if !max.is_finite() {
        return Err(Error::Invariant(format!("IDW log-weight maximum is {}", max)));
    }

    Ok(log_weights.into_iter().map(|lw| (lw - max).exp()).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corners() -> Vec<Point> {
        vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(0.0, 1.0),
            Point::new(1.0, 1.0),
        ]
    }

    #[test]
    fn coincident_sample_is_finite_and_dominant() {
        let pts = corners();
        let w = inverse_distance_weights(&Point::new(0.0, 0.0), &pts, &[1.0; 4], 1.0).unwrap();

        assert!(w[0].is_finite());
        assert!((w[0] - 1e6).abs() < 1.0, "coincident weight should be 1/ε, got {}", w[0]);
        for &other in &w[1..] {
            assert!(w[0] > other * 1e5);
        }
    }

    #[test]
    fn center_weights_are_equal() {
        let pts = corners();
        let w = inverse_distance_weights(&Point::CENTER, &pts, &[1.0; 4], 2.0).unwrap();
        for &x in &w[1..] {
            assert!((x - w[0]).abs() < 1e-9);
        }
    }

    #[test]
    fn exponent_sign_and_epsilon_placement() {
        let pts = [Point::new(0.5, 0.0)];
        let w = inverse_distance_weights(&Point::new(0.0, 0.0), &pts, &[1.5], 2.0).unwrap();
        let expected = (0.5f64 + 1e-6).powf(-3.0);
        assert!((w[0] - expected).abs() < 1e-9);
    }

    #[test]
    fn higher_local_weight_sharpens_falloff() {
        let pts = [Point::new(0.5, 0.0), Point::new(1.0, 0.0)];
        let soft = inverse_distance_weights(&Point::new(0.0, 0.0), &pts, &[1.0, 1.0], 1.0).unwrap();
        let sharp = inverse_distance_weights(&Point::new(0.0, 0.0), &pts, &[1.0, 1.0], 4.0).unwrap();

        let soft_ratio = soft[0] / soft[1];
        let sharp_ratio = sharp[0] / sharp[1];
        assert!(sharp_ratio > soft_ratio);
    }

    #[test]
    fn mismatched_weights_rejected() {
        let pts = corners();
        assert!(inverse_distance_weights(&Point::CENTER, &pts, &[1.0], 1.0).is_err());
        assert!(relative_inverse_distance_weights(&Point::CENTER, &pts, &[1.0], 1.0).is_err());
    }

    #[test]
    fn relative_weights_keep_ratios() {
        let pts = corners();
        let q = Point::new(0.2, 0.7);
        let exact = inverse_distance_weights(&q, &pts, &[1.0, 2.0, 0.5, 1.0], 1.5).unwrap();
        let relative = relative_inverse_distance_weights(&q, &pts, &[1.0, 2.0, 0.5, 1.0], 1.5).unwrap();

        let max = exact.iter().copied().fold(0.0, f64::max);
        for (e, r) in exact.iter().zip(&relative) {
            assert!((e / max - r).abs() < 1e-12, "{} vs {}", e / max, r);
        }
    }

    #[test]
    fn huge_exponent_stays_finite() {
        let pts = corners();
        let origin = Point::new(0.0, 0.0);
        assert!(inverse_distance_weights(&origin, &pts, &[30.0, 1.0, 1.0, 1.0], 2.0).unwrap()[0].is_infinite());

        let w = relative_inverse_distance_weights(&origin, &pts, &[30.0, 1.0, 1.0, 1.0], 2.0).unwrap();
        assert_eq!(w[0], 1.0);
        for &x in &w[1..] {
            assert!((0.0..1e-10).contains(&x), "{}", x);
        }
    }
}
