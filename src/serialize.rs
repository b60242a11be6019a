//! Turn colors into text.
//! <https://drafts.csswg.org/css-color-4/#serializing-color-values>

use std::fmt::{self, Write};

use crate::{
    color::{Color, Component, Space},
    math::normalize,
};

/// Write a number with at most 5 decimals, without trailing zeros.
fn write_number(f: &mut impl Write, value: Component) -> fmt::Result {
    let text = format!("{:.5}", value);
    let text = text.trim_end_matches('0').trim_end_matches('.');
    match text {
        "-0" | "" => f.write_char('0'),
        text => f.write_str(text),
    }
}

fn write_component(f: &mut impl Write, value: Option<Component>, scale: Component) -> fmt::Result {
    match value {
        Some(value) => write_number(f, value * scale),
        None => f.write_str("none"),
    }
}

impl Color {
    /// Convert the color to sRGB, map it into the sRGB gamut and return the
    /// 8-bit red, green and blue channels.
    pub fn to_rgb8(&self) -> [u8; 3] {
        let srgb = self.to_space(Space::Srgb).map_into_gamut_limits();
        let channel = |value: Component| (normalize(value).clamp(0.0, 1.0) * 255.0).round() as u8;

        [
            channel(srgb.components.0),
            channel(srgb.components.1),
            channel(srgb.components.2),
        ]
    }

    /// Render the color as `RGB(r, g, b)` with 8-bit channels.
    pub fn to_rgb_string(&self) -> String {
        let [red, green, blue] = self.to_rgb8();
        format!("RGB({red}, {green}, {blue})")
    }

    /// Render the color as `#rrggbb`.
    pub fn to_hex_string(&self) -> String {
        let [red, green, blue] = self.to_rgb8();
        format!("#{red:02x}{green:02x}{blue:02x}")
    }
}

/// Serializes the color in the CSS notation for its space. The result can
/// be parsed back into an equal color, up to rounding.
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (scales, percent) = match self.space {
            Space::Hsl | Space::Hwb => ([1.0, 100.0, 100.0], [false, true, true]),
            _ => ([1.0, 1.0, 1.0], [false, false, false]),
        };

        match self.space {
            Space::Hsl => f.write_str("hsl(")?,
            Space::Hwb => f.write_str("hwb(")?,
            Space::Lab => f.write_str("lab(")?,
            Space::Lch => f.write_str("lch(")?,
            Space::Oklab => f.write_str("oklab(")?,
            Space::Oklch => f.write_str("oklch(")?,
            space => write!(f, "color({} ", space)?,
        }

        for index in 0..3 {
            if index > 0 {
                f.write_char(' ')?;
            }
            let value = self.component(index);
            write_component(f, value, scales[index])?;
            if percent[index] && value.is_some() {
                f.write_char('%')?;
            }
        }

        match self.alpha() {
            Some(alpha) if alpha == 1.0 => {}
            alpha => {
                f.write_str(" / ")?;
                write_component(f, alpha, 1.0)?;
            }
        }

        f.write_char(')')
    }
}
