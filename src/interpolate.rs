//! Interpolation between two colors.
//! <https://drafts.csswg.org/css-color-4/#interpolation>

use std::str::FromStr;

use num_traits::Float;

use crate::{
    color::{Color, Component, Flags, Space},
    error::Error,
    math::normalize_hue,
};

fn lerp<T: Float>(a: T, b: T, t: T) -> T {
    a + (b - a) * t
}

/// How the hue angle travels between two colors in a polar space.
/// <https://drafts.csswg.org/css-color-4/#hue-interpolation>
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum HueInterpolation {
    /// Take the shorter arc around the hue circle.
    #[default]
    Shorter,
    /// Take the longer arc around the hue circle.
    Longer,
    /// Always move to larger angles.
    Increasing,
    /// Always move to smaller angles.
    Decreasing,
    /// Use the hue angles as given, without wrapping.
    Specified,
}

impl HueInterpolation {
    /// The name of the method as accepted by [`FromStr`].
    pub fn name(&self) -> &'static str {
        match self {
            HueInterpolation::Shorter => "shorter",
            HueInterpolation::Longer => "longer",
            HueInterpolation::Increasing => "increasing",
            HueInterpolation::Decreasing => "decreasing",
            HueInterpolation::Specified => "specified",
        }
    }

    /// Adjust a pair of hue angles so that interpolating linearly between
    /// them follows this method.
    fn fix_up(&self, h1: Component, h2: Component) -> (Component, Component) {
        if *self == HueInterpolation::Specified {
            return (h1, h2);
        }

        let (mut h1, mut h2) = (normalize_hue(h1), normalize_hue(h2));
        let delta = h2 - h1;

        match self {
            HueInterpolation::Shorter => {
                if delta > 180.0 {
                    h1 += 360.0;
                } else if delta < -180.0 {
                    h2 += 360.0;
                }
            }
            HueInterpolation::Longer => {
                if 0.0 < delta && delta < 180.0 {
                    h1 += 360.0;
                } else if -180.0 < delta && delta <= 0.0 {
                    h2 += 360.0;
                }
            }
            HueInterpolation::Increasing => {
                if h2 < h1 {
                    h2 += 360.0;
                }
            }
            HueInterpolation::Decreasing => {
                if h1 < h2 {
                    h1 += 360.0;
                }
            }
            HueInterpolation::Specified => {}
        }

        (h1, h2)
    }
}

impl FromStr for HueInterpolation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "shorter" => Ok(HueInterpolation::Shorter),
            "longer" => Ok(HueInterpolation::Longer),
            "increasing" => Ok(HueInterpolation::Increasing),
            "decreasing" => Ok(HueInterpolation::Decreasing),
            "specified" => Ok(HueInterpolation::Specified),
            _ => Err(Error::UnknownHueMethod(s.to_owned())),
        }
    }
}

/// Two colors converted into a common space, ready to be interpolated.
#[derive(Clone, Debug)]
pub struct Interpolation {
    /// The space in which the interpolation happens and in which the
    /// resulting colors are specified.
    pub space: Space,
    left: Color,
    right: Color,
    hue: HueInterpolation,
}

impl Interpolation {
    /// Set the hue interpolation method. Only relevant in polar spaces.
    pub fn hue(mut self, hue: HueInterpolation) -> Self {
        self.hue = hue;
        self
    }

    /// Return the color at progress `t`, where 0.0 is the left color and 1.0
    /// the right color.
    ///
    /// A component missing on one side takes the value of the other side.
    /// Components other than the hue are interpolated premultiplied by alpha.
    pub fn at(&self, t: Component) -> Color {
        let left_alpha = self.left.alpha().map(|a| a.clamp(0.0, 1.0));
        let right_alpha = self.right.alpha().map(|a| a.clamp(0.0, 1.0));

        let premultiply_left = left_alpha.or(right_alpha).unwrap_or(1.0);
        let premultiply_right = right_alpha.or(left_alpha).unwrap_or(1.0);
        let interpolated_alpha = lerp(premultiply_left, premultiply_right, t);

        let alpha = match (left_alpha, right_alpha) {
            (None, None) => None,
            _ => Some(interpolated_alpha),
        };

        let hue_index = self.space.hue_index();
        let mut result = Color::new(self.space, None, None, None, alpha);

        for index in 0..3 {
            let (left, right) = (self.left.component(index), self.right.component(index));
            let (Some(l), Some(r)) = (left.or(right), right.or(left)) else {
                continue;
            };

            let value = if hue_index == Some(index) {
                let (l, r) = self.hue.fix_up(l, r);
                match self.hue {
                    HueInterpolation::Specified => lerp(l, r, t),
                    _ => normalize_hue(lerp(l, r, t)),
                }
            } else {
                let premultiplied = lerp(l * premultiply_left, r * premultiply_right, t);
                if interpolated_alpha == 0.0 {
                    premultiplied
                } else {
                    premultiplied / interpolated_alpha
                }
            };

            result.components.set(index, value);
            result.flags.remove(Flags::for_component(index));
        }

        result
    }
}

impl Color {
    /// Prepare an interpolation from this color to `other` in the given
    /// space, using the shorter hue arc.
    pub fn interpolate(&self, other: &Self, space: Space) -> Interpolation {
        Interpolation {
            space,
            left: self.to_space(space),
            right: other.to_space(space),
            hue: HueInterpolation::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;

    #[test]
    fn basic() {
        let left = Color::new(Space::Srgb, 0.1, 0.2, 0.3, 1.0);
        let right = Color::new(Space::Srgb, 0.5, 0.6, 0.7, 1.0);
        let mixed = left.interpolate(&right, Space::Srgb).at(0.5);
        assert_component_eq!(mixed.components.0, 0.3);
        assert_component_eq!(mixed.components.1, 0.4);
        assert_component_eq!(mixed.components.2, 0.5);
        assert_eq!(mixed.alpha(), Some(1.0));
        assert_eq!(mixed.space, Space::Srgb);
    }

    #[test]
    fn endpoints_are_the_inputs() {
        let left = Color::new(Space::Srgb, 0.1, 0.2, 0.3, 1.0);
        let right = Color::new(Space::Srgb, 0.5, 0.6, 0.7, 1.0);
        let interp = left.interpolate(&right, Space::Oklch);

        let start = interp.at(0.0).to_space(Space::Srgb);
        let end = interp.at(1.0).to_space(Space::Srgb);
        assert_component_eq!(start.components.0, 0.1, 1.0e-3);
        assert_component_eq!(start.components.2, 0.3, 1.0e-3);
        assert_component_eq!(end.components.0, 0.5, 1.0e-3);
        assert_component_eq!(end.components.2, 0.7, 1.0e-3);
    }

    #[test]
    fn alpha_is_clamped_before_interpolation() {
        // color-mix(in srgb, color(srgb 2 3 4 / 5), color(srgb 4 6 8 / 10))
        let left = Color::new(Space::Srgb, 2.0, 3.0, 4.0, 5.0);
        let right = Color::new(Space::Srgb, 4.0, 6.0, 8.0, 10.0);
        let result = left.interpolate(&right, Space::Srgb).at(0.5);
        // color(srgb 3 4.5 6)
        assert_eq!(result.alpha(), Some(1.0));
        assert_component_eq!(result.components.0, 3.0);
        assert_component_eq!(result.components.1, 4.5);
        assert_component_eq!(result.components.2, 6.0);
    }

    #[test]
    fn premultiplied_alpha() {
        // Mixing opaque red with fully transparent blue keeps the red.
        let red = Color::new(Space::Srgb, 1.0, 0.0, 0.0, 1.0);
        let clear = Color::new(Space::Srgb, 0.0, 0.0, 1.0, 0.0);
        let mixed = red.interpolate(&clear, Space::Srgb).at(0.5);
        assert_component_eq!(mixed.alpha, 0.5);
        assert_component_eq!(mixed.components.0, 1.0);
        assert_component_eq!(mixed.components.2, 0.0);
    }

    #[test]
    fn missing_components_take_the_other_side() {
        let left = Color::new(Space::Lch, 50.0, 20.0, None, 1.0);
        let right = Color::new(Space::Lch, 70.0, 40.0, 120.0, 1.0);
        let mixed = left.interpolate(&right, Space::Lch).at(0.5);
        assert_component_eq!(mixed.components.0, 60.0);
        assert_component_eq!(mixed.components.1, 30.0);
        assert_eq!(mixed.c2(), Some(120.0));

        let both = Color::new(Space::Lch, 50.0, 0.0, None, 1.0);
        let mixed = both.interpolate(&both, Space::Lch).at(0.5);
        assert_eq!(mixed.c2(), None);
    }

    #[test]
    fn hue_methods() {
        let left = Color::new(Space::Oklch, 0.5, 0.1, 350.0, 1.0);
        let right = Color::new(Space::Oklch, 0.5, 0.1, 10.0, 1.0);
        let interp = left.interpolate(&right, Space::Oklch);

        let shorter = interp.clone().at(0.5);
        assert_component_eq!(shorter.components.2, 0.0, 1.0e-3);

        let longer = interp.clone().hue(HueInterpolation::Longer).at(0.5);
        assert_component_eq!(longer.components.2, 180.0, 1.0e-3);

        let increasing = interp.clone().hue(HueInterpolation::Increasing).at(0.5);
        assert_component_eq!(increasing.components.2, 0.0, 1.0e-3);

        let decreasing = interp.clone().hue(HueInterpolation::Decreasing).at(0.5);
        assert_component_eq!(decreasing.components.2, 180.0, 1.0e-3);

        let specified = interp.hue(HueInterpolation::Specified).at(0.5);
        assert_component_eq!(specified.components.2, 180.0, 1.0e-3);
    }

    #[test]
    fn hue_method_names() {
        assert_eq!("Longer".parse(), Ok(HueInterpolation::Longer));
        assert_eq!(
            "sideways".parse::<HueInterpolation>(),
            Err(Error::UnknownHueMethod("sideways".to_owned()))
        );
        assert_eq!(HueInterpolation::Decreasing.name(), "decreasing");
    }
}
