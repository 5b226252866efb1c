//! RGB ↔ HSV ↔ HS conversions and hue-angle helpers.
//!
//! All conversions work in floating point and truncate only when producing an
//! integer color. [`to_max_brightness`] goes through the integer [`Hs`] form,
//! so it drops brightness and truncates hue and saturation to whole units.
//! Re-applying it is exact for hues on a multiple of 60° and otherwise drifts
//! by at most a few units per channel.

use super::model::{Hs, Hsv, Rgb};

// Absorbs float noise such as 127.99999999 before truncation.
const TRUNCATION_SLACK: f64 = 1e-9;

#[inline]
fn truncate(v: f64, max: f64) -> f64 {
    (v + TRUNCATION_SLACK).clamp(0.0, max).floor()
}

/// HSV from floating-point RGB channels in `[0, 255]`.
pub(crate) fn channels_to_hsv(r: f64, g: f64, b: f64) -> Hsv {
    let r = (r / 255.0).clamp(0.0, 1.0);
    let g = (g / 255.0).clamp(0.0, 1.0);
    let b = (b / 255.0).clamp(0.0, 1.0);

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let s = if max == 0.0 { 0.0 } else { delta / max };

    let h = if delta == 0.0 {
        0.0
    } else if max == r {
        60.0 * ((g - b) / delta).rem_euclid(6.0)
    } else if max == g {
        60.0 * ((b - r) / delta + 2.0)
    } else {
        60.0 * ((r - g) / delta + 4.0)
    };

    Hsv::new(h, s * 100.0, max * 100.0)
}

/// Unit-interval RGB from HSV in natural ranges.
fn hsv_to_unit_rgb(hsv: Hsv) -> (f64, f64, f64) {
    let h = hsv.hue.rem_euclid(360.0);
    let s = (hsv.saturation / 100.0).clamp(0.0, 1.0);
    let v = (hsv.value / 100.0).clamp(0.0, 1.0);

    let c = v * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = v - c;

    let (r, g, b) = if h < 60.0 {
        (c, x, 0.0)
    } else if h < 120.0 {
        (x, c, 0.0)
    } else if h < 180.0 {
        (0.0, c, x)
    } else if h < 240.0 {
        (0.0, x, c)
    } else if h < 300.0 {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };

    (r + m, g + m, b + m)
}

/// RGB → HSV (hue in degrees, saturation and value in percent).
pub fn rgb_to_hsv(rgb: Rgb) -> Hsv {
    channels_to_hsv(rgb.r as f64, rgb.g as f64, rgb.b as f64)
}

/// HSV → RGB, truncating each channel.
pub fn hsv_to_rgb(hsv: Hsv) -> Rgb {
    let (r, g, b) = hsv_to_unit_rgb(hsv);
    Rgb::new(
        truncate(r * 255.0, 255.0) as u8,
        truncate(g * 255.0, 255.0) as u8,
        truncate(b * 255.0, 255.0) as u8,
    )
}

/// HSV → HS: drops the value channel and truncates.
pub fn hsv_to_hs(hsv: Hsv) -> Hs {
    Hs::new(
        truncate(hsv.hue.rem_euclid(360.0), 359.0) as u16,
        truncate(hsv.saturation, 100.0) as u8,
    )
}

/// RGB → HS; whatever brightness the input had is discarded.
pub fn rgb_to_hs(rgb: Rgb) -> Hs {
    hsv_to_hs(rgb_to_hsv(rgb))
}

/// HS → RGB at full value.
pub fn hs_to_rgb(hs: Hs) -> Rgb {
    hsv_to_rgb(Hsv::new(hs.hue as f64, hs.saturation as f64, 100.0))
}

/// Rebuild a color at full value, keeping only hue and saturation.
///
/// Same as `hs_to_rgb(rgb_to_hs(rgb))`.
pub fn to_max_brightness(rgb: Rgb) -> Rgb {
    max_brightness_from_channels(rgb.r as f64, rgb.g as f64, rgb.b as f64)
}

/// [`to_max_brightness`] for un-truncated channels, as produced by
/// interpolation.
pub fn max_brightness_from_channels(r: f64, g: f64, b: f64) -> Rgb {
    hs_to_rgb(hsv_to_hs(channels_to_hsv(r, g, b)))
}

/// Hue angle in degrees as the unit vector `(sin θ, cos θ)`.
#[inline]
pub fn hue_to_vector(hue_deg: f64) -> (f64, f64) {
    let theta = hue_deg.to_radians();
    (theta.sin(), theta.cos())
}

/// Inverse of [`hue_to_vector`]: `atan2(x, y)` in degrees, in `[0, 360)`.
pub fn vector_to_hue(x: f64, y: f64) -> f64 {
    let hue = x.atan2(y).to_degrees();
    if hue < 0.0 {
        hue + 360.0
    } else {
        hue
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PRIMARIES: &[(Rgb, u16)] = &[
        (Rgb::new(255, 0, 0), 0),
        (Rgb::new(255, 255, 0), 60),
        (Rgb::new(0, 255, 0), 120),
        (Rgb::new(0, 255, 255), 180),
        (Rgb::new(0, 0, 255), 240),
        (Rgb::new(255, 0, 255), 300),
    ];

    fn close(a: Rgb, b: Rgb, tol: i16) -> bool {
        a.channels()
            .iter()
            .zip(b.channels().iter())
            .all(|(&x, &y)| (x as i16 - y as i16).abs() <= tol)
    }

    #[test]
    fn primaries_to_hs() {
        for &(rgb, hue) in PRIMARIES {
            assert_eq!(rgb_to_hs(rgb), Hs::new(hue, 100), "{}", rgb);
            assert_eq!(hs_to_rgb(Hs::new(hue, 100)), rgb);
        }
    }

    #[test]
    fn rgb_hsv_known_values() {
        let hsv = rgb_to_hsv(Rgb::new(128, 0, 128));
        assert!((hsv.hue - 300.0).abs() < 1e-9);
        assert!((hsv.saturation - 100.0).abs() < 1e-9);
        assert!((hsv.value - 128.0 / 2.55).abs() < 1e-9);

        let grey = rgb_to_hsv(Rgb::new(100, 100, 100));
        assert_eq!(grey.hue, 0.0);
        assert_eq!(grey.saturation, 0.0);
    }

    #[test]
    fn hsv_round_trip_within_truncation() {
        for rgb in [Rgb::new(12, 200, 77), Rgb::new(255, 165, 0), Rgb::new(3, 4, 5)] {
            let back = hsv_to_rgb(rgb_to_hsv(rgb));
            assert!(close(rgb, back, 1), "{} -> {}", rgb, back);
        }
    }

    #[test]
    fn max_brightness_lifts_dim_colors() {
        assert_eq!(to_max_brightness(Rgb::new(0, 0, 64)), Rgb::new(0, 0, 255));
        assert_eq!(to_max_brightness(Rgb::new(128, 0, 128)), Rgb::new(255, 0, 255));
        assert_eq!(to_max_brightness(Rgb::BLACK), Rgb::WHITE);
    }

    fn lattice(step: usize) -> impl Iterator<Item = Rgb> {
        (0..=255u8).step_by(step).flat_map(move |r| {
            (0..=255u8).step_by(step).flat_map(move |g| {
                (0..=255u8).step_by(step).map(move |b| Rgb::new(r, g, b))
            })
        })
    }

    #[test]
    fn max_brightness_goes_through_hs() {
        for rgb in lattice(5) {
            assert_eq!(to_max_brightness(rgb), hs_to_rgb(rgb_to_hs(rgb)), "{}", rgb);
        }
    }

    #[test]
    fn max_brightness_truncates_hue_and_saturation() {
        // hue 38.8° → 38°
        assert_eq!(to_max_brightness(Rgb::new(255, 165, 0)), Rgb::new(255, 161, 0));
        assert_eq!(to_max_brightness(Rgb::new(0, 10, 5)), Rgb::new(0, 255, 127));
        assert_eq!(to_max_brightness(Rgb::new(0, 0, 255)), Rgb::new(0, 0, 255));
    }

    #[test]
    fn max_brightness_idempotent_on_sextant_hues() {
        for hue in (0..360u16).step_by(60) {
            for saturation in 0..=100u8 {
                let once = hs_to_rgb(Hs::new(hue, saturation));
                assert_eq!(to_max_brightness(once), once, "hs({}, {})", hue, saturation);
            }
        }
        for rgb in [Rgb::new(0, 165, 255), Rgb::new(40, 255, 87)] {
            let once = to_max_brightness(rgb);
            assert_eq!(to_max_brightness(once), once, "{}", rgb);
        }
    }

    #[test]
    fn max_brightness_reapplied_drifts_boundedly() {
        // hue 150 comes back as 149.88 and truncates to 149
        let once = to_max_brightness(Rgb::new(0, 10, 5));
        assert_eq!(to_max_brightness(once), Rgb::new(0, 255, 123));

        for rgb in lattice(15) {
            let once = to_max_brightness(rgb);
            let twice = to_max_brightness(once);
            assert!(close(once, twice, 5), "{} -> {} -> {}", rgb, once, twice);
        }
    }

    #[test]
    fn hs_keeps_only_hue_and_saturation() {
        let dim = rgb_to_hs(Rgb::new(0, 0, 50));
        let bright = rgb_to_hs(Rgb::new(0, 0, 255));
        assert_eq!(dim, bright);
    }

    #[test]
    fn hue_vector_round_trip() {
        for hue in [0.0, 45.0, 179.0, 181.0, 300.0, 359.5] {
            let (x, y) = hue_to_vector(hue);
            let back = vector_to_hue(x, y);
            assert!((back - hue).abs() < 1e-9, "{} -> {}", hue, back);
        }
    }
}
