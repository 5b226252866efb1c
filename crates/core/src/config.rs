//! Profile configuration: built-in selection and custom profile parsing.
//!
//! A custom profile arrives as loosely-typed JSON in one of three shapes:
//!
//! ```text
//! { "color_mode": "rgb" | "hs", "global_weight": 2.0,
//!   "sample_data": [ { "point": [x, y], "color": [...], "local_weight": 1.0 } ] }
//! { "color_mode": "angular", "mirror_x": false, "mirror_y": true,
//!   "rotation": 105.0, "drop_off": 0.5 }
//! [ { "point": [x, y], "color": [r, g, b] } ]          // legacy, RGB
//! ```
//!
//! Legacy lists use the RGB default global weight and a local weight of 1.0
//! for every sample; a `local_weight` key in a legacy entry is ignored.
//!
//! [`parse_custom_profile`] is strict. [`build_profile`] never fails: any
//! problem falls back to the default profile with exactly one warning.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

use crate::color::{Hs, Rgb};
use crate::geometry::Point;
use crate::profile::{
    AngularProfile, BuiltinProfile, ColorMode, ColorProfile, ColorSample, SampleColor,
    SampledProfile,
};

const CUSTOM: &str = "custom";

/// Why a profile configuration was rejected.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("color profile set to 'custom' but no custom profile given")]
    MissingCustomProfile,

    #[error("unknown color profile '{0}'")]
    UnknownProfile(String),

    #[error("missing key '{0}'")]
    MissingKey(&'static str),

    #[error("unknown color mode '{0}', expected 'rgb', 'hs' or 'angular'")]
    UnknownColorMode(String),

    #[error("profile has no samples")]
    EmptySamples,

    #[error("sample {index}: invalid point ({reason})")]
    InvalidPoint { index: usize, reason: String },

    #[error("sample {index}: invalid color ({reason})")]
    InvalidColor { index: usize, reason: String },

    #[error("sample {index}: local weight must be a positive number, got {value}")]
    InvalidLocalWeight { index: usize, value: String },

    #[error("global weight must be a positive number, got {0}")]
    InvalidGlobalWeight(String),

    #[error("invalid angular parameter {name}: {reason}")]
    InvalidAngular { name: &'static str, reason: String },

    #[error("malformed custom profile: {0}")]
    Malformed(String),
}

/// Which profile to use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileConfig {
    /// Built-in profile name, or `custom`.
    #[serde(default = "default_profile_name")]
    pub color_profile: String,
    /// Required when `color_profile` is `custom`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_profile: Option<Value>,
}

fn default_profile_name() -> String {
    BuiltinProfile::Default.name().to_string()
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            color_profile: default_profile_name(),
            custom_profile: None,
        }
    }
}

impl ProfileConfig {
    pub fn builtin(profile: BuiltinProfile) -> Self {
        Self {
            color_profile: profile.name().to_string(),
            custom_profile: None,
        }
    }

    pub fn custom(custom_profile: Value) -> Self {
        Self {
            color_profile: CUSTOM.to_string(),
            custom_profile: Some(custom_profile),
        }
    }
}

/// A configuration problem that was recovered by falling back to the
/// default profile.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileWarning {
    pub reason: ConfigError,
}

impl fmt::Display for ProfileWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. Falling back to the default profile", self.reason)
    }
}

/// Result of [`build_profile`].
#[derive(Debug, Clone, PartialEq)]
pub struct BuiltProfile {
    pub profile: ColorProfile,
    pub warnings: Vec<ProfileWarning>,
}

impl BuiltProfile {
    pub fn fell_back(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Build the profile a configuration asks for.
///
/// Never fails. Unknown names, missing or malformed custom profiles all yield
/// the default profile plus one [`ProfileWarning`], which is also logged.
pub fn build_profile(config: &ProfileConfig) -> BuiltProfile {
    match resolve(config) {
        Ok(profile) => {
            debug!("using {}", profile.describe());
            BuiltProfile {
                profile,
                warnings: Vec::new(),
            }
        }
        Err(reason) => {
            let warning = ProfileWarning { reason };
            warn!("{}", warning);
            BuiltProfile {
                profile: ColorProfile::default(),
                warnings: vec![warning],
            }
        }
    }
}

fn resolve(config: &ProfileConfig) -> Result<ColorProfile, ConfigError> {
    let name = config.color_profile.trim();
    if name.eq_ignore_ascii_case(CUSTOM) {
        let custom = config
            .custom_profile
            .as_ref()
            .filter(|v| !v.is_null())
            .ok_or(ConfigError::MissingCustomProfile)?;
        return parse_custom_profile(custom);
    }

    BuiltinProfile::from_name(name)
        .map(|p| p.profile().clone())
        .ok_or_else(|| ConfigError::UnknownProfile(name.to_string()))
}

// ─── Custom profile parsing ────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct RawSample {
    point: Vec<f64>,
    color: Vec<f64>,
    #[serde(default)]
    local_weight: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct RawAngular {
    #[serde(default)]
    mirror_x: bool,
    #[serde(default)]
    mirror_y: bool,
    #[serde(default)]
    rotation: f64,
    #[serde(default = "default_drop_off")]
    drop_off: f64,
}

fn default_drop_off() -> f64 {
    1.0
}

/// Strictly parse a custom profile, detecting its shape.
pub fn parse_custom_profile(value: &Value) -> Result<ColorProfile, ConfigError> {
    match value {
        Value::Array(samples) => parse_samples(ColorMode::Rgb, samples, None, true).map(Into::into),
        Value::Object(map) => {
            let mode = match map.get("color_mode") {
                None | Some(Value::Null) => return Err(ConfigError::MissingKey("color_mode")),
                Some(Value::String(s)) => s.trim().to_ascii_lowercase(),
                Some(other) => return Err(ConfigError::UnknownColorMode(other.to_string())),
            };

            let mode = match mode.as_str() {
                "rgb" => ColorMode::Rgb,
                "hs" => ColorMode::Hs,
                "angular" => return parse_angular(value),
                _ => return Err(ConfigError::UnknownColorMode(mode)),
            };

            let global_weight = match map.get("global_weight") {
                None | Some(Value::Null) => None,
                Some(v) => Some(
                    v.as_f64()
                        .ok_or_else(|| ConfigError::InvalidGlobalWeight(v.to_string()))?,
                ),
            };

            let samples = match map.get("sample_data") {
                None | Some(Value::Null) => return Err(ConfigError::MissingKey("sample_data")),
                Some(Value::Array(samples)) => samples,
                Some(_) => {
                    return Err(ConfigError::Malformed("'sample_data' must be a list".into()))
                }
            };

            parse_samples(mode, samples, global_weight, false).map(Into::into)
        }
        other => Err(ConfigError::Malformed(format!(
            "expected a list of samples or a mapping, got {}",
            json_kind(other)
        ))),
    }
}

fn parse_angular(value: &Value) -> Result<ColorProfile, ConfigError> {
    let raw: RawAngular =
        serde_json::from_value(value.clone()).map_err(|e| ConfigError::Malformed(e.to_string()))?;
    AngularProfile::new(raw.mirror_x, raw.mirror_y, raw.rotation, raw.drop_off).map(Into::into)
}

fn parse_samples(
    mode: ColorMode,
    values: &[Value],
    global_weight: Option<f64>,
    legacy: bool,
) -> Result<SampledProfile, ConfigError> {
    if values.is_empty() {
        return Err(ConfigError::EmptySamples);
    }

    let samples = values
        .iter()
        .enumerate()
        .map(|(index, v)| parse_sample(mode, index, v, legacy))
        .collect::<Result<Vec<_>, _>>()?;

    SampledProfile::new(
        mode,
        samples,
        global_weight.unwrap_or_else(|| mode.default_global_weight()),
    )
}

fn parse_sample(
    mode: ColorMode,
    index: usize,
    value: &Value,
    legacy: bool,
) -> Result<ColorSample, ConfigError> {
    let raw: RawSample = serde_json::from_value(value.clone())
        .map_err(|e| ConfigError::Malformed(format!("sample {}: {}", index, e)))?;

    let point = match raw.point[..] {
        [x, y] => Point::new(x, y),
        _ => {
            return Err(ConfigError::InvalidPoint {
                index,
                reason: format!("expected 2 components, got {}", raw.point.len()),
            })
        }
    };
    if !point.in_unit_square() {
        return Err(ConfigError::InvalidPoint {
            index,
            reason: format!("({}, {}) is outside [0, 1]x[0, 1]", point.x, point.y),
        });
    }

    let local_weight = match raw.local_weight {
        Some(w) if legacy => {
            debug!("sample {}: ignoring local_weight {} in legacy list", index, w);
            1.0
        }
        Some(w) => w,
        None => 1.0,
    };
    if !(local_weight > 0.0) || !local_weight.is_finite() {
        return Err(ConfigError::InvalidLocalWeight {
            index,
            value: local_weight.to_string(),
        });
    }

    let color = match mode {
        ColorMode::Rgb => {
            let [r, g, b] = channels::<3>(index, &raw.color, &[255.0, 255.0, 255.0])?;
            SampleColor::Rgb(Rgb::new(r as u8, g as u8, b as u8))
        }
        ColorMode::Hs => {
            let [hue, saturation] = channels::<2>(index, &raw.color, &[360.0, 100.0])?;
            SampleColor::Hs(Hs::new(hue as u16, saturation as u8))
        }
    };

    Ok(ColorSample {
        point,
        color,
        local_weight,
    })
}

/// Check the component count and each component against `[0, max]`.
fn channels<const N: usize>(
    index: usize,
    color: &[f64],
    max: &[f64; N],
) -> Result<[f64; N], ConfigError> {
    let values: [f64; N] = color.try_into().map_err(|_| ConfigError::InvalidColor {
        index,
        reason: format!("expected {} components, got {}", N, color.len()),
    })?;

    for (channel, (&v, &hi)) in values.iter().zip(max).enumerate() {
        if !(0.0..=hi).contains(&v) {
            return Err(ConfigError::InvalidColor {
                index,
                reason: format!("component {} = {} is outside [0, {}]", channel, v, hi),
            });
        }
    }
    Ok(values)
}

fn json_kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "a mapping",
    }
}
