use std::fmt;

use serde::{Deserialize, Serialize};

use super::convert::hs_to_rgb;

/// RGB color as (r, g, b) with values in 0..=255.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Channels as `[r, g, b]`.
    pub const fn channels(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// `#rrggbb` hex notation.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// Hue/saturation color.
///
/// `hue` is in degrees `[0, 360]`, `saturation` in percent `[0, 100]`. There is
/// no brightness channel: an `Hs` always renders at full value, leaving
/// brightness to the light itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hs {
    pub hue: u16,
    pub saturation: u8,
}

impl Hs {
    pub const fn new(hue: u16, saturation: u8) -> Self {
        Self { hue, saturation }
    }

    /// Whether both channels are inside their documented ranges.
    pub fn is_valid(&self) -> bool {
        self.hue <= 360 && self.saturation <= 100
    }
}

impl fmt::Display for Hs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hs({}°, {}%)", self.hue, self.saturation)
    }
}

/// Floating-point HSV: hue in degrees, saturation and value in percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsv {
    pub hue: f64,
    pub saturation: f64,
    pub value: f64,
}

impl Hsv {
    pub const fn new(hue: f64, saturation: f64, value: f64) -> Self {
        Self {
            hue,
            saturation,
            value,
        }
    }
}

/// A color produced by a profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum Color {
    Rgb(Rgb),
    Hs(Hs),
}

impl Color {
    /// RGB rendition for the light; HS colors are taken at full value.
    pub fn to_rgb(&self) -> Rgb {
        match *self {
            Color::Rgb(rgb) => rgb,
            Color::Hs(hs) => hs_to_rgb(hs),
        }
    }

    pub fn as_hs(&self) -> Option<Hs> {
        match *self {
            Color::Hs(hs) => Some(hs),
            Color::Rgb(_) => None,
        }
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Color::Rgb(rgb)
    }
}

impl From<Hs> for Color {
    fn from(hs: Hs) -> Self {
        Color::Hs(hs)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Rgb(rgb) => fmt::Display::fmt(rgb, f),
            Color::Hs(hs) => fmt::Display::fmt(hs, f),
        }
    }
}
