//! Color model and color-space conversions
//!
//! - [`Rgb`]: 8-bit RGB, what the lighting actuator consumes
//! - [`Hs`]: hue/saturation with brightness implicitly at 100%
//! - [`Hsv`]: floating-point HSV used between the two
//! - [`Color`]: what a profile returns for a point

mod convert;
mod model;

pub use convert::{
    hs_to_rgb, hsv_to_hs, hsv_to_rgb, hue_to_vector, max_brightness_from_channels, rgb_to_hs,
    rgb_to_hsv, to_max_brightness, vector_to_hue,
};
pub use model::{Color, Hs, Hsv, Rgb};
