//! Rasterization of built-in and custom profiles.

use moodlight_colormap::{colors_to_rgb8, sample_grid, sample_grid_with, ProcessingMode, SampleGridParams};
use moodlight_core::geometry::normalize;
use moodlight_core::{build_profile, BuiltinProfile, Color, Point, ProfileConfig};
use serde_json::json;

#[test]
fn grid_has_height_times_width_colors() {
    for &builtin in BuiltinProfile::ALL {
        for (h, w) in [(1, 1), (2, 7), (10, 3), (25, 25)] {
            let colors = sample_grid(builtin.profile(), h, w).unwrap();
            assert_eq!(colors.len(), h * w, "{} {}x{}", builtin.name(), h, w);
            assert_eq!(colors_to_rgb8(&colors).len(), h * w * 3);
        }
    }
}

#[test]
fn first_row_is_maximum_energy() {
    let profile = BuiltinProfile::Saturated.profile();
    let (h, w) = (5, 6);
    let colors = sample_grid(profile, h, w).unwrap();

    for col in 0..w {
        let x = normalize(col as f64, 0.0, (w - 1) as f64, 0.0, 1.0).unwrap();
        let top = profile.color_for_point(&Point::new(x, 1.0)).unwrap();
        let bottom = profile.color_for_point(&Point::new(x, 0.0)).unwrap();
        assert_eq!(colors[col], top, "top row, col {}", col);
        assert_eq!(colors[(h - 1) * w + col], bottom, "bottom row, col {}", col);
    }
}

#[test]
fn custom_hs_profile_rasterizes_in_parallel() {
    let built = build_profile(&ProfileConfig::custom(json!({
        "color_mode": "hs",
        "sample_data": [
            {"point": [0.0, 0.0], "color": [240, 100]},
            {"point": [1.0, 1.0], "color": [60, 100]},
            {"point": [0.5, 0.5], "color": [0, 0], "local_weight": 2.0},
        ]
    })));
    assert!(built.warnings.is_empty());

    let params = SampleGridParams::new(32, 32).with_mode(ProcessingMode::ParallelWith(3));
    let colors = sample_grid_with(&built.profile, &params).unwrap();
    assert_eq!(colors.len(), 32 * 32);
    assert!(colors.iter().all(|c| matches!(c, Color::Hs(hs) if hs.hue < 360 && hs.saturation <= 100)));
}
