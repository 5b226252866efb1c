//! Sample-based profiles: IDW over weighted color samples.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::color::{hsv_to_hs, hue_to_vector, max_brightness_from_channels, vector_to_hue, Color, Hs, Hsv, Rgb};
use crate::config::ConfigError;
use crate::error::{Error, Result};
use crate::geometry::{weighted_interpolate, Point};
use crate::idw::relative_inverse_distance_weights;

/// Channel space of a sampled profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    Rgb,
    Hs,
}

impl ColorMode {
    /// IDW exponent used when a configuration does not set one.
    pub const fn default_global_weight(&self) -> f64 {
        match self {
            ColorMode::Rgb => 2.0,
            ColorMode::Hs => 1.5,
        }
    }

    pub const fn name(&self) -> &'static str {
        match self {
            ColorMode::Rgb => "rgb",
            ColorMode::Hs => "hs",
        }
    }
}

/// Color carried by a sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SampleColor {
    Rgb(Rgb),
    Hs(Hs),
}

impl SampleColor {
    pub const fn mode(&self) -> ColorMode {
        match self {
            SampleColor::Rgb(_) => ColorMode::Rgb,
            SampleColor::Hs(_) => ColorMode::Hs,
        }
    }
}

/// A colored point on the mood plane with its own falloff multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorSample {
    pub point: Point,
    pub color: SampleColor,
    pub local_weight: f64,
}

impl ColorSample {
    pub const fn rgb(x: f64, y: f64, r: u8, g: u8, b: u8) -> Self {
        Self {
            point: Point::new(x, y),
            color: SampleColor::Rgb(Rgb::new(r, g, b)),
            local_weight: 1.0,
        }
    }

    pub const fn hs(x: f64, y: f64, hue: u16, saturation: u8) -> Self {
        Self {
            point: Point::new(x, y),
            color: SampleColor::Hs(Hs::new(hue, saturation)),
            local_weight: 1.0,
        }
    }

    pub fn with_local_weight(mut self, local_weight: f64) -> Self {
        self.local_weight = local_weight;
        self
    }
}

/// Profile interpolating between color samples with inverse distance weighting.
///
/// Immutable after construction; the per-channel vectors are laid out once so
/// each query only computes weights and weighted means.
#[derive(Debug, Clone, PartialEq)]
pub struct SampledProfile {
    mode: ColorMode,
    samples: Vec<ColorSample>,
    global_weight: f64,
    points: Vec<Point>,
    local_weights: Vec<f64>,
    /// RGB: `[r, g, b]`. HS: `[sin(hue), cos(hue), saturation]`.
    channels: [Vec<f64>; 3],
}

impl SampledProfile {
    /// Build a profile, checking every sample against `mode`.
    ///
    /// Errors name the first offending sample by index.
    pub fn new(
        mode: ColorMode,
        samples: Vec<ColorSample>,
        global_weight: f64,
    ) -> std::result::Result<Self, ConfigError> {
        if !(global_weight > 0.0) || !global_weight.is_finite() {
            return Err(ConfigError::InvalidGlobalWeight(global_weight.to_string()));
        }
        if samples.is_empty() {
            return Err(ConfigError::EmptySamples);
        }

        for (index, sample) in samples.iter().enumerate() {
            if !sample.point.in_unit_square() {
                return Err(ConfigError::InvalidPoint {
                    index,
                    reason: format!(
                        "({}, {}) is outside [0, 1]x[0, 1]",
                        sample.point.x, sample.point.y
                    ),
                });
            }
            if !(sample.local_weight > 0.0) || !sample.local_weight.is_finite() {
                return Err(ConfigError::InvalidLocalWeight {
                    index,
                    value: sample.local_weight.to_string(),
                });
            }
            match sample.color {
                SampleColor::Hs(hs) if !hs.is_valid() => {
                    return Err(ConfigError::InvalidColor {
                        index,
                        reason: format!("{} is outside hue [0, 360] / saturation [0, 100]", hs),
                    });
                }
                color if color.mode() != mode => {
                    return Err(ConfigError::InvalidColor {
                        index,
                        reason: format!(
                            "{} color in a {} profile",
                            color.mode().name(),
                            mode.name()
                        ),
                    });
                }
                _ => {}
            }
        }

        Ok(Self::assemble(mode, samples, global_weight))
    }

    /// Lay out the channel vectors without validating. Only for tables that
    /// are known to be valid.
    pub(crate) fn assemble(mode: ColorMode, samples: Vec<ColorSample>, global_weight: f64) -> Self {
        let points = samples.iter().map(|s| s.point).collect();
        let local_weights = samples.iter().map(|s| s.local_weight).collect();

        let mut channels: [Vec<f64>; 3] = Default::default();
        for sample in &samples {
            let values = match sample.color {
                SampleColor::Rgb(rgb) => [rgb.r as f64, rgb.g as f64, rgb.b as f64],
                SampleColor::Hs(hs) => {
                    let (x, y) = hue_to_vector(hs.hue as f64);
                    [x, y, hs.saturation as f64]
                }
            };
            for (channel, value) in channels.iter_mut().zip(values) {
                channel.push(value);
            }
        }

        Self {
            mode,
            samples,
            global_weight,
            points,
            local_weights,
            channels,
        }
    }

    pub fn mode(&self) -> ColorMode {
        self.mode
    }

    pub fn samples(&self) -> &[ColorSample] {
        &self.samples
    }

    pub fn global_weight(&self) -> f64 {
        self.global_weight
    }

    /// IDW weights of every sample for `point`, scaled so the largest is 1.
    pub(crate) fn weights(&self, point: &Point) -> Result<Vec<f64>> {
        relative_inverse_distance_weights(point, &self.points, &self.local_weights, self.global_weight)
    }

    /// Interpolated channels before any color-space step.
    ///
    /// RGB profiles yield `[r, g, b]` in `[0, 255]`; HS profiles yield the
    /// blended hue vector and saturation.
    pub(crate) fn raw_channels(&self, point: &Point) -> Result<[f64; 3]> {
        let weights = self.weights(point)?;
        Ok([
            weighted_interpolate(&self.channels[0], &weights)?,
            weighted_interpolate(&self.channels[1], &weights)?,
            weighted_interpolate(&self.channels[2], &weights)?,
        ])
    }

    pub fn color_for_point(&self, point: &Point) -> Result<Color> {
        let [a, b, c] = self.raw_channels(point)?;

        let color = match self.mode {
            ColorMode::Rgb => Color::Rgb(max_brightness_from_channels(a, b, c)),
            ColorMode::Hs => Color::Hs(hs_from_blend(a, b, c)?),
        };

        debug!("{} profile: ({:.3}, {:.3}) -> {}", self.mode.name(), point.x, point.y, color);
        Ok(color)
    }
}

/// Recover hue from the blended unit vector and clamp the IDW overshoot of
/// saturation.
fn hs_from_blend(hue_x: f64, hue_y: f64, saturation: f64) -> Result<Hs> {
    let hue = vector_to_hue(hue_x, hue_y);
    let saturation = saturation.min(100.0);

    if !(0.0..=360.0).contains(&hue) {
        return Err(Error::Invariant(format!("hue {} outside [0, 360]", hue)));
    }
    if !(0.0..=100.0).contains(&saturation) {
        return Err(Error::Invariant(format!(
            "saturation {} outside [0, 100]",
            saturation
        )));
    }

    Ok(hsv_to_hs(Hsv::new(hue, saturation, 100.0)))
}
