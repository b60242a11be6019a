//! A [`Color`] represents a color that was specified in any of the supported
//! color spaces.

use bitflags::bitflags;

#[cfg(not(feature = "f64"))]
/// A 32-bit floating point value that all components are stored as.
pub type Component = f32;

#[cfg(feature = "f64")]
/// A 64-bit floating point value that all components are stored as.
pub type Component = f64;

/// Represent the three components that describe any color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Components(pub Component, pub Component, pub Component);

impl Components {
    /// Return new components with each component mapped with the given
    /// function.
    pub fn map(&self, f: impl Fn(Component) -> Component) -> Self {
        Self(f(self.0), f(self.1), f(self.2))
    }

    /// Return the component at the given index (0, 1 or 2).
    pub(crate) fn get(&self, index: usize) -> Component {
        match index {
            0 => self.0,
            1 => self.1,
            _ => self.2,
        }
    }

    pub(crate) fn set(&mut self, index: usize, value: Component) {
        match index {
            0 => self.0 = value,
            1 => self.1 = value,
            _ => self.2 = value,
        }
    }
}

impl std::ops::Sub for Components {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0, self.1 - rhs.1, self.2 - rhs.2)
    }
}

impl std::fmt::Display for Components {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.0, self.1, self.2)
    }
}

bitflags! {
    /// Flags to mark any missing components on a [`Color`]
    #[derive(Clone, Copy, Debug, PartialEq)]
    pub struct Flags : u8 {
        /// Set when the first component of a [`Color`] is missing.
        const C0_IS_NONE = 1 << 0;
        /// Set when the second component of a [`Color`] is missing.
        const C1_IS_NONE = 1 << 1;
        /// Set when the third component of a [`Color`] is missing.
        const C2_IS_NONE = 1 << 2;
        /// Set when the alpha component of a [`Color`] is missing.
        const ALPHA_IS_NONE = 1 << 3;
    }
}

impl Flags {
    /// The flag marking the component at `index` (0, 1 or 2) as missing.
    pub(crate) fn for_component(index: usize) -> Self {
        match index {
            0 => Self::C0_IS_NONE,
            1 => Self::C1_IS_NONE,
            _ => Self::C2_IS_NONE,
        }
    }
}

/// Color spaces and notations a [`Color`] can be specified in.
///<https://drafts.csswg.org/css-color-4/#color-type>
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[repr(u8)]
pub enum Space {
    /// The sRGB color space.
    /// <https://drafts.csswg.org/css-color-4/#numeric-srgb>
    Srgb = 0,
    /// The HSL (hue, saturation, lightness) notation of the sRGB color space.
    /// <https://drafts.csswg.org/css-color-4/#the-hsl-notation>
    Hsl = 1,
    /// The HWB (hue, whiteness, blackness) notation of the sRGB color space.
    /// <https://drafts.csswg.org/css-color-4/#the-hwb-notation>
    Hwb = 2,
    /// CIE-Lab.
    Lab = 3,
    /// CIE-LCH, the cylindrical form of CIE-Lab.
    Lch = 4,
    /// Oklab
    Oklab = 5,
    /// Oklch
    Oklch = 6,
    /// The sRGB color space with no gamma encoding.
    /// <https://drafts.csswg.org/css-color-4/#predefined-sRGB-linear>
    SrgbLinear = 7,
    /// display-p3
    DisplayP3 = 8,
    /// a98-rgb
    A98Rgb = 9,
    /// prophoto-rgb
    ProPhotoRgb = 10,
    /// rec2020
    Rec2020 = 11,
    /// xyz-d50
    XyzD50 = 12,
    /// xyz-d65
    XyzD65 = 13,
}

impl Space {
    /// Every supported space, in declaration order.
    pub const ALL: [Space; 14] = [
        Space::Srgb,
        Space::Hsl,
        Space::Hwb,
        Space::Lab,
        Space::Lch,
        Space::Oklab,
        Space::Oklch,
        Space::SrgbLinear,
        Space::DisplayP3,
        Space::A98Rgb,
        Space::ProPhotoRgb,
        Space::Rec2020,
        Space::XyzD50,
        Space::XyzD65,
    ];

    /// The identifier used for this space in `color()` notation and on the
    /// command line.
    pub fn name(&self) -> &'static str {
        match self {
            Space::Srgb => "srgb",
            Space::Hsl => "hsl",
            Space::Hwb => "hwb",
            Space::Lab => "lab",
            Space::Lch => "lch",
            Space::Oklab => "oklab",
            Space::Oklch => "oklch",
            Space::SrgbLinear => "srgb-linear",
            Space::DisplayP3 => "display-p3",
            Space::A98Rgb => "a98-rgb",
            Space::ProPhotoRgb => "prophoto-rgb",
            Space::Rec2020 => "rec2020",
            Space::XyzD50 => "xyz-d50",
            Space::XyzD65 => "xyz-d65",
        }
    }

    /// Index of the hue component for spaces with a polar form.
    pub fn hue_index(&self) -> Option<usize> {
        match self {
            Space::Hsl | Space::Hwb => Some(0),
            Space::Lch | Space::Oklch => Some(2),
            _ => None,
        }
    }

    /// True for the RGB family of spaces, where each component is bound to
    /// [0..1].
    pub fn is_rgb_like(&self) -> bool {
        matches!(
            self,
            Space::Srgb
                | Space::SrgbLinear
                | Space::DisplayP3
                | Space::A98Rgb
                | Space::ProPhotoRgb
                | Space::Rec2020
        )
    }
}

impl std::fmt::Display for Space {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Implemented by models that map to a single [`Space`].
pub trait HasSpace {
    /// The space the model represents.
    const SPACE: Space;
}

/// Struct that can hold a color of any color space.
#[derive(Clone, Debug, PartialEq)]
pub struct Color {
    /// The three components that make up any color.
    pub components: Components,
    /// The alpha component of the color.
    pub alpha: Component,
    /// Holds any flags that might be enabled for this color.
    pub flags: Flags,
    /// The color space in which the components are set.
    pub space: Space,
}

impl Color {
    /// Create a new [`Color`]. Each color or alpha component can take values
    /// that can be converted into a [`ComponentDetails`]. Passing `None`
    /// marks the component as missing:
    /// ```rust
    /// use chromastep::{Color, Space};
    /// let c = Color::new(Space::Srgb, None, None, None, 1.0);
    /// assert_eq!(c.c0(), None);
    /// ```
    pub fn new(
        space: Space,
        c0: impl Into<ComponentDetails>,
        c1: impl Into<ComponentDetails>,
        c2: impl Into<ComponentDetails>,
        alpha: impl Into<ComponentDetails>,
    ) -> Self {
        let mut flags = Flags::empty();

        let c0 = c0.into().value_and_flag(&mut flags, Flags::C0_IS_NONE);
        let c1 = c1.into().value_and_flag(&mut flags, Flags::C1_IS_NONE);
        let c2 = c2.into().value_and_flag(&mut flags, Flags::C2_IS_NONE);
        let alpha = alpha
            .into()
            .value_and_flag(&mut flags, Flags::ALPHA_IS_NONE);

        Self {
            components: Components(c0, c1, c2),
            alpha,
            flags,
            space,
        }
    }

    /// Create an opaque sRGB color from 8-bit channels.
    pub fn from_rgb8(red: u8, green: u8, blue: u8) -> Self {
        Self::new(
            Space::Srgb,
            red as Component / 255.0,
            green as Component / 255.0,
            blue as Component / 255.0,
            1.0,
        )
    }

    /// Return the first component of the color.
    pub fn c0(&self) -> Option<Component> {
        self.component(0)
    }

    /// Return the second component of the color.
    pub fn c1(&self) -> Option<Component> {
        self.component(1)
    }

    /// Return the third component of the color.
    pub fn c2(&self) -> Option<Component> {
        self.component(2)
    }

    /// Return the component at `index` (0, 1 or 2), or `None` if it is
    /// missing.
    pub fn component(&self, index: usize) -> Option<Component> {
        if self.flags.contains(Flags::for_component(index)) {
            None
        } else {
            Some(self.components.get(index))
        }
    }

    /// Return the alpha component of the color.
    pub fn alpha(&self) -> Option<Component> {
        if self.flags.contains(Flags::ALPHA_IS_NONE) {
            None
        } else {
            Some(self.alpha)
        }
    }

    /// Return the components of this color as the given model. Missing
    /// components are passed as 0.0.
    pub fn as_model<T: From<Components>>(&self) -> T {
        T::from(self.components)
    }
}

/// A struct that holds details about a component passed to any of the `new`
/// functions for color models. Any components that can be passed implements
/// a `From<?> for ComponentDetails`.
pub struct ComponentDetails {
    value: Component,
    is_none: bool,
}

impl ComponentDetails {
    /// Extract the value and set the given flag if the component is none.
    pub fn value_and_flag(&self, flags: &mut Flags, flag: Flags) -> Component {
        if self.is_none {
            *flags |= flag;
        }
        self.value
    }
}

impl From<Component> for ComponentDetails {
    fn from(value: Component) -> Self {
        Self {
            value,
            is_none: false,
        }
    }
}

impl From<Option<Component>> for ComponentDetails {
    fn from(value: Option<Component>) -> Self {
        if let Some(value) = value {
            Self::from(value)
        } else {
            Self {
                value: 0.0,
                is_none: true,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_components() {
        let c = Color::new(Space::Lch, 50.0, None, None, 1.0);
        assert_eq!(c.c0(), Some(50.0));
        assert_eq!(c.c1(), None);
        assert_eq!(c.c2(), None);
        assert_eq!(c.alpha(), Some(1.0));
        assert_eq!(c.flags, Flags::C1_IS_NONE | Flags::C2_IS_NONE);
        assert_eq!(c.components.1, 0.0);
    }

    #[test]
    fn missing_alpha() {
        let c = Color::new(Space::Srgb, 0.1, 0.2, 0.3, None);
        assert_eq!(c.alpha(), None);
        assert_eq!(c.alpha, 0.0);
        assert_eq!(c.flags, Flags::ALPHA_IS_NONE);
    }

    #[test]
    fn from_rgb8() {
        let c = Color::from_rgb8(255, 0, 51);
        assert_eq!(c.space, Space::Srgb);
        assert_eq!(c.components.0, 1.0);
        assert_eq!(c.components.1, 0.0);
        assert_eq!(c.components.2, 0.2);
    }

    #[test]
    fn test_component_details() {
        let cd = ComponentDetails::from(10.0);
        assert_eq!(cd.value, 10.0);
        assert!(!cd.is_none);

        let cd = ComponentDetails::from(Component::NAN);
        assert!(cd.value.is_nan());
        assert!(!cd.is_none);

        let cd = ComponentDetails::from(None);
        assert_eq!(cd.value, 0.0);
        assert!(cd.is_none);
    }

    #[test]
    fn hue_index_only_for_polar_spaces() {
        assert_eq!(Space::Lch.hue_index(), Some(2));
        assert_eq!(Space::Oklch.hue_index(), Some(2));
        assert_eq!(Space::Hsl.hue_index(), Some(0));
        assert_eq!(Space::Hwb.hue_index(), Some(0));
        assert_eq!(Space::Lab.hue_index(), None);
        assert_eq!(Space::Srgb.hue_index(), None);
    }
}
