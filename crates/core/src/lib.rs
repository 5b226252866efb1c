//! # moodlight core
//!
//! Maps a mood point (valence, energy) to a light color.
//!
//! This crate provides:
//! - Geometry helpers and the inverse distance weighting core
//! - RGB / HSV / HS color conversions
//! - [`ColorProfile`]: sampled (RGB or HS) and angular profiles
//! - Built-in profiles and the custom profile parser behind [`build_profile`]
//!
//! ## Usage
//!
//! ```ignore
//! use moodlight_core::prelude::*;
//!
//! let built = build_profile(&ProfileConfig::default());
//! let color = built.profile.color_for_point(&Point::new(0.8, 0.9))?;
//! let rgb = color.to_rgb();
//! ```

pub mod color;
pub mod config;
pub mod error;
pub mod geometry;
pub mod idw;
pub mod profile;

pub use color::{Color, Hs, Hsv, Rgb};
pub use config::{build_profile, parse_custom_profile, BuiltProfile, ConfigError, ProfileConfig, ProfileWarning};
pub use error::{Error, Result};
pub use geometry::Point;
pub use profile::{AngularProfile, BuiltinProfile, ColorMode, ColorProfile, ColorSample, SampledProfile};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::color::{Color, Hs, Rgb};
    pub use crate::config::{build_profile, BuiltProfile, ProfileConfig};
    pub use crate::error::{Error, Result};
    pub use crate::geometry::Point;
    pub use crate::profile::{BuiltinProfile, ColorProfile};
}
