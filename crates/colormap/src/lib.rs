//! # moodlight colormap
//!
//! Rasterizes a color profile over the mood plane for visual inspection.
//! The main entry point is [`sample_grid`], which returns one color per pixel
//! with high energy at the top; [`colors_to_rgb8`] flattens the result into a
//! buffer any image encoder accepts.
//!
//! ## Usage
//!
//! ```ignore
//! use moodlight_colormap::{sample_grid, colors_to_rgb8};
//!
//! let colors = sample_grid(&profile, 200, 200)?;
//! let pixels = colors_to_rgb8(&colors);
//! ```

mod render;
mod strategy;

pub use render::{colors_to_rgb8, sample_grid, sample_grid_with, SampleGridParams};
pub use strategy::ProcessingMode;
