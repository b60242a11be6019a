//! chromastep converts colors between the CSS color spaces and generates
//! palettes by interpolating through a list of anchor colors. The
//! [`fractal`] module colors the Mandelbrot set with such a palette.
//!
//! ```rust
//! use chromastep::{steps, Color, Order, Space, StepsOptions};
//!
//! let anchors: Vec<Color> = ["#020369", "#FFFFFF", "#696702"]
//!     .iter()
//!     .map(|text| text.parse().unwrap())
//!     .collect();
//!
//! let options = StepsOptions {
//!     space: Space::Lch,
//!     out_space: Space::Srgb,
//!     steps: 16,
//!     ..Default::default()
//! };
//!
//! let palette = steps(&anchors, &options).unwrap();
//! for color in palette.iter(Order::Reverse) {
//!     println!("{}", color.to_rgb_string());
//! }
//! ```

#![deny(missing_docs)]

mod color;
mod convert;
mod error;
pub mod fractal;
mod gamut;
mod interpolate;
mod math;
pub mod models;
mod palette;
mod parse;
mod serialize;

#[cfg(test)]
mod test;

pub use color::{Color, Component, ComponentDetails, Components, Flags, HasSpace, Space};
pub use error::{Error, Result};
pub use interpolate::{HueInterpolation, Interpolation};
pub use palette::{steps, Gradient, Order, Palette, StepsOptions};
