//! Models are structs that represent a color in a specific color space or
//! notation. They are the type safe path for converting between spaces; the
//! generic [`Color`] dispatches to them in [`Color::to_space`].

use crate::color::{Color, Component};

mod base;
mod hsl;
mod hwb;
mod lab;
mod rgb;
mod xyz;

pub use base::{Base, ToBase};
pub use hsl::Hsl;
pub use hwb::Hwb;
pub use lab::{Lab, Lch, Oklab, Oklch, Polar, Rectangular};
pub use rgb::{
    A98Rgb, A98RgbLinear, DisplayP3, DisplayP3Linear, ProPhotoRgb, ProPhotoRgbLinear, Rec2020,
    Rec2020Linear, Rgb, Srgb, SrgbLinear,
};
pub use xyz::{ToXyz, TransferWhitePoint, WhitePoint, Xyz, XyzD50, XyzD65, D50, D65};

/// A trait implemented for color models that can be converted to a generic
/// [`Color`].
pub trait Model {
    /// Convert a model to a generic [`Color`]. Components holding NaN are
    /// powerless and are marked as missing.
    fn to_color(&self, alpha: Option<Component>) -> Color;
}
