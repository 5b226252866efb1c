//! Parametric hue/saturation profile: angle is the mood category, distance
//! from the neutral center is its intensity.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::color::{hsv_to_hs, Color, Hs, Hsv};
use crate::config::ConfigError;
use crate::error::Result;
use crate::geometry::{euclidean_distance, normalize, Point};

const ORIGIN: Point = Point::new(0.0, 0.0);

/// Maps the unit square onto a hue/saturation disc.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AngularProfile {
    pub mirror_x: bool,
    pub mirror_y: bool,
    /// Degrees added to the polar angle before it becomes the hue.
    pub rotation: f64,
    /// Exponent on the distance before it becomes saturation: 1 is linear,
    /// below 1 saturates quickly near the center, above 1 stays neutral longer.
    pub drop_off: f64,
}

impl Default for AngularProfile {
    fn default() -> Self {
        Self {
            mirror_x: false,
            mirror_y: false,
            rotation: 0.0,
            drop_off: 1.0,
        }
    }
}

impl AngularProfile {
    pub fn new(
        mirror_x: bool,
        mirror_y: bool,
        rotation: f64,
        drop_off: f64,
    ) -> std::result::Result<Self, ConfigError> {
        if !rotation.is_finite() {
            return Err(ConfigError::InvalidAngular {
                name: "rotation",
                reason: format!("must be finite, got {}", rotation),
            });
        }
        if !(drop_off >= 0.0) || !drop_off.is_finite() {
            return Err(ConfigError::InvalidAngular {
                name: "drop_off",
                reason: format!("must be a non-negative number, got {}", drop_off),
            });
        }
        Ok(Self {
            mirror_x,
            mirror_y,
            rotation,
            drop_off,
        })
    }

    /// Hue in degrees `[0, 360)` and saturation in percent `[0, 100]`.
    pub fn hue_saturation(&self, point: &Point) -> Result<(f64, f64)> {
        let mut x = normalize(point.x, 0.0, 1.0, -1.0, 1.0)?;
        let mut y = normalize(point.y, 0.0, 1.0, -1.0, 1.0)?;
        if self.mirror_x {
            x = -x;
        }
        if self.mirror_y {
            y = -y;
        }

        let hue = (y.atan2(x).to_degrees() + self.rotation).rem_euclid(360.0);

        let distance = euclidean_distance(&ORIGIN, &Point::new(x, y)).min(1.0);
        let saturation = normalize(distance.powf(self.drop_off), 0.0, 1.0, 0.0, 100.0)?;

        Ok((hue, saturation))
    }

    pub fn color_for_point(&self, point: &Point) -> Result<Color> {
        let (hue, saturation) = self.hue_saturation(point)?;
        let hs: Hs = hsv_to_hs(Hsv::new(hue, saturation, 100.0));
        debug!("angular profile: ({:.3}, {:.3}) -> {}", point.x, point.y, hs);
        Ok(Color::Hs(hs))
    }
}
