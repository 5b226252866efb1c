//! Profile-to-pixel rendering.

use moodlight_core::geometry::normalize;
use moodlight_core::{Color, ColorProfile, Error, Point, Result};
use tracing::debug;

use crate::strategy::ProcessingMode;

/// Parameters for sampling a profile over a grid.
#[derive(Debug, Clone)]
pub struct SampleGridParams {
    /// Rows (energy axis)
    pub height: usize,
    /// Columns (valence axis)
    pub width: usize,
    pub mode: ProcessingMode,
}

impl SampleGridParams {
    pub fn new(height: usize, width: usize) -> Self {
        Self {
            height,
            width,
            mode: ProcessingMode::default(),
        }
    }

    pub fn with_mode(mut self, mode: ProcessingMode) -> Self {
        self.mode = mode;
        self
    }
}

/// Coordinate in `[0, 1]` of pixel `index` along an axis of `len` pixels.
/// A single pixel sits on the midpoint.
fn axis_coordinate(index: usize, len: usize) -> Result<f64> {
    if len == 1 {
        return Ok(0.5);
    }
    normalize(index as f64, 0.0, (len - 1) as f64, 0.0, 1.0)
}

/// Sample `profile` over a `height` x `width` grid, sequentially.
///
/// See [`sample_grid_with`].
pub fn sample_grid(profile: &ColorProfile, height: usize, width: usize) -> Result<Vec<Color>> {
    sample_grid_with(
        profile,
        &SampleGridParams::new(height, width).with_mode(ProcessingMode::Sequential),
    )
}

/// Sample a profile over a regular grid.
///
/// Returns `height * width` colors in row-major order. The first row is
/// energy 1 and the last energy 0, so the buffer reads as an image with high
/// energy at the top; columns run from valence 0 to 1.
pub fn sample_grid_with(profile: &ColorProfile, params: &SampleGridParams) -> Result<Vec<Color>> {
    let (height, width) = (params.height, params.width);
    if height == 0 || width == 0 {
        return Err(Error::InvalidParameter {
            name: "grid",
            value: format!("{}x{}", height, width),
            reason: "height and width must be at least 1".into(),
        });
    }

    let xs = (0..width)
        .map(|col| axis_coordinate(col, width))
        .collect::<Result<Vec<_>>>()?;

    debug!(
        "sampling {} over {}x{} ({:?})",
        profile.describe(),
        height,
        width,
        params.mode
    );

    let rows = params.mode.map(0..height, |row| -> Result<Vec<Color>> {
        // Top row is the highest energy
        let y = axis_coordinate(height - 1 - row, height)?;
        xs.iter()
            .map(|&x| profile.color_for_point(&Point::new(x, y)))
            .collect()
    });

    let mut colors = Vec::with_capacity(height * width);
    for row in rows {
        colors.extend(row?);
    }
    Ok(colors)
}

/// Flatten colors into an RGB8 buffer (3 bytes per pixel) ready for an image
/// encoder. HS colors are rendered at full value.
pub fn colors_to_rgb8(colors: &[Color]) -> Vec<u8> {
    colors
        .iter()
        .flat_map(|c| c.to_rgb().channels())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use moodlight_core::{AngularProfile, BuiltinProfile, Rgb};

    #[test]
    fn shape_and_row_order() {
        let profile = BuiltinProfile::Default.profile();
        let colors = sample_grid(profile, 3, 4).unwrap();
        assert_eq!(colors.len(), 12);

        // Top-left is (valence 0, energy 1): angry red
        assert_eq!(colors[0], Color::Rgb(Rgb::new(255, 0, 0)));
        // Bottom-left is (0, 0): sad blue
        assert_eq!(colors[8], Color::Rgb(Rgb::new(0, 0, 255)));
        // Bottom-right is (1, 0): calm green
        assert_eq!(colors[11], profile.color_for_point(&Point::new(1.0, 0.0)).unwrap());
    }

    #[test]
    fn single_pixel_samples_center() {
        let profile = ColorProfile::from(AngularProfile::default());
        let colors = sample_grid(&profile, 1, 1).unwrap();
        assert_eq!(colors, vec![profile.color_for_point(&Point::CENTER).unwrap()]);
    }

    #[test]
    fn zero_sized_grid_is_rejected() {
        let profile = ColorProfile::default();
        assert!(sample_grid(&profile, 0, 5).is_err());
        assert!(sample_grid(&profile, 5, 0).is_err());
    }

    #[test]
    fn parallel_matches_sequential() {
        let profile = BuiltinProfile::HsDefault.profile();
        let seq = sample_grid(profile, 16, 9).unwrap();
        let par = sample_grid_with(
            profile,
            &SampleGridParams::new(16, 9).with_mode(ProcessingMode::Parallel),
        )
        .unwrap();
        assert_eq!(seq, par);
    }

    #[test]
    fn rgb8_buffer_layout() {
        let colors = vec![
            Color::Rgb(Rgb::new(1, 2, 3)),
            Color::Hs(moodlight_core::Hs::new(240, 100)),
        ];
        assert_eq!(colors_to_rgb8(&colors), vec![1, 2, 3, 0, 0, 255]);
    }
}
