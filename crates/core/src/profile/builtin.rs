//! Built-in profiles, built once per process and never mutated.

use std::sync::LazyLock;

use super::{AngularProfile, ColorMode, ColorProfile, ColorSample, SampledProfile};

/// Names accepted by `color_profile` besides `custom`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuiltinProfile {
    /// Seven moods around the edge of the plane
    Default,
    /// Moods pulled towards the center, with a warm neutral in the middle
    Centered,
    /// Hue/saturation version of the default layout
    HsDefault,
    /// Angular hue disc, fully saturated at the edges
    Saturated,
}

impl BuiltinProfile {
    pub const ALL: &[BuiltinProfile] = &[
        Self::Default,
        Self::Centered,
        Self::HsDefault,
        Self::Saturated,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Centered => "centered",
            Self::HsDefault => "hs_default",
            Self::Saturated => "saturated",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Default => "RGB samples on the edges: sad blue, angry red, happy yellow, calm green",
            Self::Centered => "RGB samples pulled inwards around a warm neutral center",
            Self::HsDefault => "hue/saturation samples with circular hue blending",
            Self::Saturated => "angular hue disc, saturation grows with distance from neutral",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|p| p.name().eq_ignore_ascii_case(name.trim()))
    }

    pub fn profile(&self) -> &'static ColorProfile {
        match self {
            Self::Default => &DEFAULT,
            Self::Centered => &CENTERED,
            Self::HsDefault => &HS_DEFAULT,
            Self::Saturated => &SATURATED,
        }
    }
}

// ─── Sample tables ─────────────────────────────────────────────────────

const DEFAULT_SAMPLES: &[ColorSample] = &[
    ColorSample::rgb(0.0, 0.5, 128, 0, 128), // disgust - purple
    ColorSample::rgb(0.0, 1.0, 255, 0, 0),   // angry - red
    ColorSample::rgb(0.5, 1.0, 255, 165, 0), // alert - orange
    ColorSample::rgb(1.0, 1.0, 255, 255, 0), // happy - yellow
    ColorSample::rgb(1.0, 0.0, 0, 205, 0),   // calm - green
    ColorSample::rgb(0.5, 0.0, 0, 165, 255), // relaxed - blue-green
    ColorSample::rgb(0.0, 0.0, 0, 0, 255),   // sad - blue
];

const CENTERED_SAMPLES: &[ColorSample] = &[
    ColorSample::rgb(0.05, 0.5, 128, 0, 128),
    ColorSample::rgb(0.25, 0.75, 255, 0, 0),
    ColorSample::rgb(0.5, 0.8, 255, 165, 0),
    ColorSample::rgb(0.75, 0.75, 255, 255, 0),
    ColorSample::rgb(0.7, 0.3, 0, 205, 0),
    ColorSample::rgb(0.5, 0.2, 0, 165, 255),
    ColorSample::rgb(0.25, 0.25, 0, 0, 255),
    ColorSample::rgb(0.5, 0.5, 255, 241, 224), // neutral
];

const HS_DEFAULT_SAMPLES: &[ColorSample] = &[
    ColorSample::hs(0.0, 0.5, 300, 100),
    ColorSample::hs(0.1, 0.9, 0, 100),
    ColorSample::hs(0.5, 1.0, 40, 100),
    ColorSample::hs(0.9, 0.9, 60, 100),
    ColorSample::hs(1.0, 0.4, 90, 100),
    ColorSample::hs(1.0, 0.0, 120, 100),
    ColorSample::hs(0.5, 0.0, 200, 100),
    ColorSample::hs(0.1, 0.1, 240, 100),
];

fn from_table(mode: ColorMode, table: &[ColorSample]) -> ColorProfile {
    SampledProfile::assemble(mode, table.to_vec(), mode.default_global_weight()).into()
}

static DEFAULT: LazyLock<ColorProfile> =
    LazyLock::new(|| from_table(ColorMode::Rgb, DEFAULT_SAMPLES));
static CENTERED: LazyLock<ColorProfile> =
    LazyLock::new(|| from_table(ColorMode::Rgb, CENTERED_SAMPLES));
static HS_DEFAULT: LazyLock<ColorProfile> =
    LazyLock::new(|| from_table(ColorMode::Hs, HS_DEFAULT_SAMPLES));

static SATURATED: LazyLock<ColorProfile> = LazyLock::new(|| {
    AngularProfile {
        mirror_x: false,
        mirror_y: true,
        rotation: 105.0,
        drop_off: 0.5,
    }
    .into()
});

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{Color, Rgb};
    use crate::geometry::Point;

    #[test]
    fn sample_tables_pass_validation() {
        for (mode, table) in [
            (ColorMode::Rgb, DEFAULT_SAMPLES),
            (ColorMode::Rgb, CENTERED_SAMPLES),
            (ColorMode::Hs, HS_DEFAULT_SAMPLES),
        ] {
            assert!(SampledProfile::new(mode, table.to_vec(), mode.default_global_weight()).is_ok());
        }
        let params = match BuiltinProfile::Saturated.profile() {
            ColorProfile::Angular(p) => *p,
            other => panic!("expected angular profile, got {:?}", other),
        };
        assert!(AngularProfile::new(
            params.mirror_x,
            params.mirror_y,
            params.rotation,
            params.drop_off
        )
        .is_ok());
    }

    #[test]
    fn names_round_trip() {
        for &p in BuiltinProfile::ALL {
            assert_eq!(BuiltinProfile::from_name(p.name()), Some(p));
        }
        assert_eq!(BuiltinProfile::from_name("HS_Default"), Some(BuiltinProfile::HsDefault));
        assert_eq!(BuiltinProfile::from_name("custom"), None);
    }

    #[test]
    fn default_corners_keep_their_mood() {
        let p = BuiltinProfile::Default.profile();
        let sad = p.color_for_point(&Point::new(0.0, 0.0)).unwrap();
        assert_eq!(sad, Color::Rgb(Rgb::new(0, 0, 255)));
        let angry = p.color_for_point(&Point::new(0.0, 1.0)).unwrap();
        assert_eq!(angry, Color::Rgb(Rgb::new(255, 0, 0)));
    }

    #[test]
    fn saturated_places_sad_at_blue_and_happy_at_yellow() {
        let p = BuiltinProfile::Saturated.profile();
        let sad = p.color_for_point(&Point::new(0.0, 0.0)).unwrap().as_hs().unwrap();
        assert_eq!((sad.hue, sad.saturation), (240, 100));
        let happy = p.color_for_point(&Point::new(1.0, 1.0)).unwrap().as_hs().unwrap();
        assert_eq!((happy.hue, happy.saturation), (60, 100));
    }
}
