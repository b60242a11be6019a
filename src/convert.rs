//! Each color space/form is modeled with its own type. Conversions are only
//! implemented on relevant models, making conversion paths accurate and
//! performant.
//!
//! Conversions only operate on the 3 color components; alpha is carried
//! over untouched.
//!
//! NOTE: When a conversion yields a NaN value, the component is powerless and
//!       is marked as missing on the resulting [`Color`].
//! NOTE: The reverse is not the same. A missing component is passed to a
//!       model as 0.0.
//!
//! ```rust
//! use chromastep::{Color, Space};
//! let blue = Color::new(Space::Srgb, 0.0, 0.0, 1.0, 1.0);
//! let lch = blue.to_space(Space::Lch);
//! assert_eq!(lch.space, Space::Lch);
//! ```

use crate::{
    color::{Color, Space},
    models::{
        A98Rgb, A98RgbLinear, DisplayP3, DisplayP3Linear, Hsl, Hwb, Lab, Lch, Model, Oklab, Oklch,
        ProPhotoRgb, ProPhotoRgbLinear, Rec2020, Rec2020Linear, Srgb, SrgbLinear, ToBase, XyzD50,
        XyzD65, D50, D65,
    },
};

impl Color {
    /// Convert this color from its current color space/notation to the
    /// specified color space/notation.
    pub fn to_space(&self, space: Space) -> Self {
        use Space as S;

        if self.space == space {
            return self.clone();
        }

        let alpha = self.alpha();

        // Handle direct conversions.
        match (self.space, space) {
            (S::Srgb, S::SrgbLinear) => {
                return self
                    .as_model::<Srgb>()
                    .to_linear_light()
                    .to_color(alpha)
            }
            (S::SrgbLinear, S::Srgb) => {
                return self
                    .as_model::<SrgbLinear>()
                    .to_gamma_encoded()
                    .to_color(alpha)
            }
            (S::Srgb, S::Hsl) => return self.as_model::<Srgb>().to_hsl().to_color(alpha),
            (S::Hsl, S::Srgb) => return self.as_model::<Hsl>().to_srgb().to_color(alpha),
            (S::Srgb, S::Hwb) => return self.as_model::<Srgb>().to_hwb().to_color(alpha),
            (S::Hwb, S::Srgb) => return self.as_model::<Hwb>().to_srgb().to_color(alpha),
            (S::Hsl, S::Hwb) => {
                return self
                    .as_model::<Hsl>()
                    .to_srgb()
                    .to_hwb()
                    .to_color(alpha)
            }
            (S::Hwb, S::Hsl) => {
                return self
                    .as_model::<Hwb>()
                    .to_srgb()
                    .to_hsl()
                    .to_color(alpha)
            }
            (S::XyzD50, S::XyzD65) => {
                return self
                    .as_model::<XyzD50>()
                    .transfer::<D65>()
                    .to_color(alpha)
            }
            (S::XyzD65, S::XyzD50) => {
                return self
                    .as_model::<XyzD65>()
                    .transfer::<D50>()
                    .to_color(alpha)
            }
            (S::Lab, S::Lch) => return self.as_model::<Lab>().to_polar().to_color(alpha),
            (S::Lch, S::Lab) => return self.as_model::<Lch>().to_rectangular().to_color(alpha),
            (S::Oklab, S::Oklch) => return self.as_model::<Oklab>().to_polar().to_color(alpha),
            (S::Oklch, S::Oklab) => {
                return self
                    .as_model::<Oklch>()
                    .to_rectangular()
                    .to_color(alpha)
            }
            _ => {}
        }

        macro_rules! to_base {
            ($m:ident) => {{
                self.as_model::<$m>().to_base()
            }};
        }

        // The rest converts through XyzD50.
        let base = match self.space {
            S::Srgb => to_base!(Srgb),
            S::SrgbLinear => to_base!(SrgbLinear),
            S::Hsl => to_base!(Hsl),
            S::Hwb => to_base!(Hwb),
            S::Lab => to_base!(Lab),
            S::Lch => to_base!(Lch),
            S::Oklab => to_base!(Oklab),
            S::Oklch => to_base!(Oklch),
            S::XyzD50 => to_base!(XyzD50),
            S::XyzD65 => to_base!(XyzD65),
            S::DisplayP3 => to_base!(DisplayP3),
            S::A98Rgb => to_base!(A98Rgb),
            S::ProPhotoRgb => to_base!(ProPhotoRgb),
            S::Rec2020 => to_base!(Rec2020),
        };

        match space {
            S::Srgb => SrgbLinear::from(base.transfer::<D65>())
                .to_gamma_encoded()
                .to_color(alpha),
            S::SrgbLinear => SrgbLinear::from(base.transfer::<D65>()).to_color(alpha),
            S::Hsl => SrgbLinear::from(base.transfer::<D65>())
                .to_gamma_encoded()
                .to_hsl()
                .to_color(alpha),
            S::Hwb => SrgbLinear::from(base.transfer::<D65>())
                .to_gamma_encoded()
                .to_hwb()
                .to_color(alpha),
            S::Lab => Lab::from(base).to_color(alpha),
            S::Lch => Lab::from(base).to_polar().to_color(alpha),
            S::Oklab => Oklab::from(base.transfer::<D65>()).to_color(alpha),
            S::Oklch => Oklab::from(base.transfer::<D65>())
                .to_polar()
                .to_color(alpha),
            S::DisplayP3 => DisplayP3Linear::from(base.transfer::<D65>())
                .to_gamma_encoded()
                .to_color(alpha),
            S::A98Rgb => A98RgbLinear::from(base.transfer::<D65>())
                .to_gamma_encoded()
                .to_color(alpha),
            S::ProPhotoRgb => ProPhotoRgbLinear::from(base)
                .to_gamma_encoded()
                .to_color(alpha),
            S::Rec2020 => Rec2020Linear::from(base.transfer::<D65>())
                .to_gamma_encoded()
                .to_color(alpha),
            S::XyzD50 => base.to_color(alpha),
            S::XyzD65 => base.transfer::<D65>().to_color(alpha),
        }
    }
}

impl Srgb {
    /// Convert a color specified in the sRGB color space to the HSL notation.
    pub fn to_hsl(&self) -> Hsl {
        util::rgb_to_hsl(&self.to_components()).into()
    }

    /// Convert a color specified in the sRGB color space to the HWB notation.
    pub fn to_hwb(&self) -> Hwb {
        util::rgb_to_hwb(&self.to_components()).into()
    }
}

impl Hsl {
    /// Convert this color from the HSL notation to the sRGB color space.
    pub fn to_srgb(&self) -> Srgb {
        util::hsl_to_rgb(&self.to_components()).into()
    }
}

impl Hwb {
    /// Convert this color from the HWB notation to the sRGB color space.
    pub fn to_srgb(&self) -> Srgb {
        util::hwb_to_rgb(&self.to_components()).into()
    }
}

mod util {
    use crate::{
        color::{Component, Components},
        math::{almost_zero, normalize, normalize_hue},
    };

    /// Calculate the hue from RGB components and return it along with the min
    /// and max RGB values.
    fn rgb_to_hue_with_min_max(from: &Components) -> (Component, Component, Component) {
        let Components(red, green, blue) = *from;

        let max = red.max(green).max(blue);
        let min = red.min(green).min(blue);

        let delta = max - min;

        let hue = if delta != 0.0 {
            60.0 * if max == red {
                (green - blue) / delta + if green < blue { 6.0 } else { 0.0 }
            } else if max == green {
                (blue - red) / delta + 2.0
            } else {
                (red - green) / delta + 4.0
            }
        } else {
            Component::NAN
        };

        (hue, min, max)
    }

    /// Convert from RGB notation to HSL notation.
    /// <https://drafts.csswg.org/css-color-4/#rgb-to-hsl>
    pub fn rgb_to_hsl(from: &Components) -> Components {
        let (hue, min, max) = rgb_to_hue_with_min_max(from);

        let lightness = (min + max) / 2.0;
        let delta = max - min;

        let saturation =
            if almost_zero(delta) || almost_zero(lightness) || almost_zero(1.0 - lightness) {
                0.0
            } else {
                (max - lightness) / lightness.min(1.0 - lightness)
            };

        Components(hue, saturation, lightness)
    }

    /// Convert from HSL notation to RGB notation.
    /// <https://drafts.csswg.org/css-color-4/#hsl-to-rgb>
    pub fn hsl_to_rgb(from: &Components) -> Components {
        let Components(hue, saturation, lightness) = from.map(normalize);

        if saturation <= 0.0 {
            return Components(lightness, lightness, lightness);
        }

        let hue = normalize_hue(hue);

        let f = |n: Component| {
            let k = (n + hue / 30.0) % 12.0;
            let a = saturation * lightness.min(1.0 - lightness);
            lightness - a * (k - 3.0).min(9.0 - k).clamp(-1.0, 1.0)
        };

        Components(f(0.0), f(8.0), f(4.0))
    }

    /// Convert from RGB notation to HWB notation.
    /// <https://drafts.csswg.org/css-color-4/#rgb-to-hwb>
    pub fn rgb_to_hwb(from: &Components) -> Components {
        let (hue, min, max) = rgb_to_hue_with_min_max(from);

        Components(hue, min, 1.0 - max)
    }

    /// Convert from HWB notation to RGB notation.
    /// <https://drafts.csswg.org/css-color-4/#hwb-to-rgb>
    pub fn hwb_to_rgb(from: &Components) -> Components {
        let Components(hue, whiteness, blackness) = from.map(normalize);

        if whiteness + blackness >= 1.0 {
            let gray = whiteness / (whiteness + blackness);
            return Components(gray, gray, gray);
        }

        let rgb = hsl_to_rgb(&Components(hue, 1.0, 0.5));
        rgb.map(|v| v * (1.0 - whiteness - blackness) + whiteness)
    }
}
