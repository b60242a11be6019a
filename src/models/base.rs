//! Convert any model to the base color space that all conversions pass
//! through.

use crate::models::{
    A98Rgb, DisplayP3, Hsl, Hwb, Lab, Lch, Oklab, Oklch, ProPhotoRgb, Rec2020, Srgb, SrgbLinear,
    ToXyz, XyzD50, XyzD65, D50,
};

/// Every conversion that has no direct path goes through CIE-XYZ with a D50
/// white point.
pub type Base = XyzD50;

/// Used to convert any model to the base color space.
pub trait ToBase {
    /// Convert the model to the base color space.
    fn to_base(&self) -> Base;
}

macro_rules! gamma_encoded_to_base {
    ($($model:ty),*) => {
        $(
            impl ToBase for $model {
                fn to_base(&self) -> Base {
                    self.to_linear_light().to_xyz().transfer::<D50>()
                }
            }
        )*
    };
}

gamma_encoded_to_base!(Srgb, DisplayP3, A98Rgb, ProPhotoRgb, Rec2020);

impl ToBase for SrgbLinear {
    fn to_base(&self) -> Base {
        self.to_xyz().transfer()
    }
}

impl ToBase for Hsl {
    fn to_base(&self) -> Base {
        self.to_srgb().to_base()
    }
}

impl ToBase for Hwb {
    fn to_base(&self) -> Base {
        self.to_srgb().to_base()
    }
}

impl ToBase for Lab {
    fn to_base(&self) -> Base {
        self.to_xyz()
    }
}

impl ToBase for Lch {
    fn to_base(&self) -> Base {
        self.to_rectangular().to_base()
    }
}

impl ToBase for Oklab {
    fn to_base(&self) -> Base {
        self.to_xyz().transfer()
    }
}

impl ToBase for Oklch {
    fn to_base(&self) -> Base {
        self.to_rectangular().to_base()
    }
}

impl ToBase for XyzD50 {
    fn to_base(&self) -> Base {
        self.clone()
    }
}

impl ToBase for XyzD65 {
    fn to_base(&self) -> Base {
        self.transfer()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_component_eq, models::WhitePoint};

    #[test]
    fn white_reaches_the_d50_white_point() {
        let expected = D50::WHITE_POINT;

        for base in [
            Srgb::new(1.0, 1.0, 1.0).to_base(),
            Hsl::new(0.0, 0.0, 1.0).to_base(),
            Hwb::new(0.0, 1.0, 0.0).to_base(),
            Lab::new(100.0, 0.0, 0.0).to_base(),
            Oklch::new(1.0, 0.0, 0.0).to_base(),
        ] {
            assert_component_eq!(base.x, expected.0, 1.0e-3);
            assert_component_eq!(base.y, expected.1, 1.0e-3);
            assert_component_eq!(base.z, expected.2, 1.0e-3);
        }
    }
}
