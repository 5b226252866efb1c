//! Color profiles: strategies mapping a mood point to a color.
//!
//! - [`SampledProfile`]: IDW over RGB or HS color samples
//! - [`AngularProfile`]: purely geometric hue/saturation disc
//!
//! Profiles are immutable once built and can be queried from any number of
//! threads at once.

mod angular;
pub mod builtin;
mod sampled;

use crate::color::Color;
use crate::error::Result;
use crate::geometry::Point;

pub use angular::AngularProfile;
pub use builtin::BuiltinProfile;
pub use sampled::{ColorMode, ColorSample, SampleColor, SampledProfile};

#[derive(Debug, Clone, PartialEq)]
pub enum ColorProfile {
    Sampled(SampledProfile),
    Angular(AngularProfile),
}

impl ColorProfile {
    /// Color for a point on the mood plane.
    ///
    /// Points must lie in `[0, 1]²`. An `Err(Error::Invariant)` means the
    /// profile itself is broken.
    pub fn color_for_point(&self, point: &Point) -> Result<Color> {
        point.validate()?;
        match self {
            ColorProfile::Sampled(p) => p.color_for_point(point),
            ColorProfile::Angular(p) => p.color_for_point(point),
        }
    }

    /// Short summary for logs.
    pub fn describe(&self) -> String {
        match self {
            ColorProfile::Sampled(p) => format!(
                "sampled {} profile ({} samples, global weight {})",
                p.mode().name(),
                p.samples().len(),
                p.global_weight()
            ),
            ColorProfile::Angular(p) => format!(
                "angular profile (mirror x: {}, mirror y: {}, rotation {}°, drop-off {})",
                p.mirror_x, p.mirror_y, p.rotation, p.drop_off
            ),
        }
    }
}

impl Default for ColorProfile {
    fn default() -> Self {
        BuiltinProfile::Default.profile().clone()
    }
}

impl From<SampledProfile> for ColorProfile {
    fn from(p: SampledProfile) -> Self {
        ColorProfile::Sampled(p)
    }
}

impl From<AngularProfile> for ColorProfile {
    fn from(p: AngularProfile) -> Self {
        ColorProfile::Angular(p)
    }
}
