//! Parse colors written in CSS notation, and the names of color spaces.
//! <https://drafts.csswg.org/css-color-4/#color-syntax>
//!
//! ```rust
//! use chromastep::{Color, Space};
//! let color: Color = "lch(52% 40 none / 50%)".parse().unwrap();
//! assert_eq!(color.space, Space::Lch);
//! assert_eq!(color.c2(), None);
//! assert_eq!(color.alpha(), Some(0.5));
//! ```

use std::str::FromStr;

use nom::{
    branch::alt,
    bytes::complete::{tag_no_case, take_while1, take_while_m_n},
    character::complete::{char, multispace0, multispace1},
    combinator::{all_consuming, map, map_res, opt, value},
    multi::{many_m_n, separated_list1},
    number::complete::double,
    sequence::{delimited, pair, preceded, terminated},
    IResult,
};

use crate::{
    color::{Color, Component, Space},
    error::{Error, Result},
};

/// A single argument of a color function.
#[derive(Clone, Copy, Debug, PartialEq)]
enum Argument {
    Number(f64),
    Percentage(f64),
    /// An angle with a unit, already converted to degrees.
    Degrees(f64),
    None,
}

impl Argument {
    /// Resolve a number or percentage argument. The outer `None` means the
    /// argument is not allowed here, the inner `None` is the `none` keyword.
    fn scaled(self, number: f64, percentage: f64) -> Option<Option<Component>> {
        let value = match self {
            Argument::Number(n) => n * number,
            Argument::Percentage(p) => p * percentage,
            Argument::Degrees(_) => return None,
            Argument::None => return Some(None),
        };
        value.is_finite().then_some(Some(value as Component))
    }

    fn hue(self) -> Option<Option<Component>> {
        match self {
            Argument::Number(degrees) | Argument::Degrees(degrees) => degrees
                .is_finite()
                .then_some(Some(degrees as Component)),
            Argument::None => Some(None),
            Argument::Percentage(_) => None,
        }
    }
}

enum Notation<'a> {
    Hex(Vec<u8>),
    Function {
        name: &'a str,
        arguments: Vec<Argument>,
        alpha: Option<Argument>,
    },
    Predefined {
        space: &'a str,
        arguments: Vec<Argument>,
        alpha: Option<Argument>,
    },
}

fn is_hex_digit(c: char) -> bool {
    c.is_ascii_hexdigit()
}

fn hex_pair(input: &str) -> IResult<&str, u8> {
    map_res(take_while_m_n(2, 2, is_hex_digit), |s: &str| {
        u8::from_str_radix(s, 16)
    })(input)
}

/// A single hex digit, expanded the way `#f00` means `#ff0000`.
fn hex_digit(input: &str) -> IResult<&str, u8> {
    map_res(take_while_m_n(1, 1, is_hex_digit), |s: &str| {
        u8::from_str_radix(s, 16).map(|v| v * 17)
    })(input)
}

fn hex(input: &str) -> IResult<&str, Notation<'_>> {
    map(
        preceded(
            char('#'),
            alt((many_m_n(3, 4, hex_pair), many_m_n(3, 4, hex_digit))),
        ),
        Notation::Hex,
    )(input)
}

/// Returns the factor to convert an angle in the unit to degrees.
fn angle_unit(input: &str) -> IResult<&str, f64> {
    alt((
        value(1.0, tag_no_case("deg")),
        value(0.9, tag_no_case("grad")),
        value(180.0 / std::f64::consts::PI, tag_no_case("rad")),
        value(360.0, tag_no_case("turn")),
    ))(input)
}

fn number_argument(input: &str) -> IResult<&str, Argument> {
    let (input, number) = double(input)?;

    let (input, percent) = opt(char('%'))(input)?;
    if percent.is_some() {
        return Ok((input, Argument::Percentage(number)));
    }

    let (input, unit) = opt(angle_unit)(input)?;
    let argument = match unit {
        Some(factor) => Argument::Degrees(number * factor),
        None => Argument::Number(number),
    };

    Ok((input, argument))
}

fn argument(input: &str) -> IResult<&str, Argument> {
    alt((value(Argument::None, tag_no_case("none")), number_argument))(input)
}

/// Arguments are separated by a comma (legacy syntax) or whitespace.
fn separator(input: &str) -> IResult<&str, ()> {
    alt((
        value((), delimited(multispace0, char(','), multispace0)),
        value((), multispace1),
    ))(input)
}

fn arguments(input: &str) -> IResult<&str, (Vec<Argument>, Option<Argument>)> {
    pair(
        separated_list1(separator, argument),
        opt(preceded(
            delimited(multispace0, char('/'), multispace0),
            argument,
        )),
    )(input)
}

fn ident(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_ascii_alphanumeric() || c == '-')(input)
}

fn close(input: &str) -> IResult<&str, ()> {
    value((), pair(multispace0, char(')')))(input)
}

fn function(input: &str) -> IResult<&str, Notation<'_>> {
    let (input, name) = terminated(ident, pair(char('('), multispace0))(input)?;

    if name.eq_ignore_ascii_case("color") {
        let (input, space) = terminated(ident, multispace1)(input)?;
        let (input, (arguments, alpha)) = terminated(arguments, close)(input)?;
        return Ok((
            input,
            Notation::Predefined {
                space,
                arguments,
                alpha,
            },
        ));
    }

    let (input, (arguments, alpha)) = terminated(arguments, close)(input)?;
    Ok((
        input,
        Notation::Function {
            name,
            arguments,
            alpha,
        },
    ))
}

fn notation(input: &str) -> IResult<&str, Notation<'_>> {
    all_consuming(delimited(multispace0, alt((hex, function)), multispace0))(input)
}

fn alpha_value(alpha: Option<Argument>) -> Option<Option<Component>> {
    match alpha {
        Some(alpha) => alpha.scaled(1.0, 0.01),
        None => Some(Some(1.0)),
    }
}

fn from_hex(channels: &[u8]) -> Option<Color> {
    let channel = |index: usize| channels.get(index).map(|&v| v as Component / 255.0);

    Some(Color::new(
        Space::Srgb,
        channel(0)?,
        channel(1)?,
        channel(2)?,
        channel(3).unwrap_or(1.0),
    ))
}

fn from_function(
    name: &str,
    mut arguments: Vec<Argument>,
    alpha: Option<Argument>,
) -> Option<Color> {
    // The legacy comma syntax passes alpha as a fourth argument.
    let alpha = match (arguments.len(), alpha) {
        (4, None) => arguments.pop(),
        (3, alpha) => alpha,
        _ => return None,
    };
    let alpha = alpha_value(alpha)?;
    let [c0, c1, c2] = <[Argument; 3]>::try_from(arguments).ok()?;

    let (space, c0, c1, c2) = match name.to_ascii_lowercase().as_str() {
        "rgb" | "rgba" => (
            Space::Srgb,
            c0.scaled(1.0 / 255.0, 0.01)?,
            c1.scaled(1.0 / 255.0, 0.01)?,
            c2.scaled(1.0 / 255.0, 0.01)?,
        ),
        "hsl" | "hsla" => (
            Space::Hsl,
            c0.hue()?,
            c1.scaled(0.01, 0.01)?,
            c2.scaled(0.01, 0.01)?,
        ),
        "hwb" => (
            Space::Hwb,
            c0.hue()?,
            c1.scaled(0.01, 0.01)?,
            c2.scaled(0.01, 0.01)?,
        ),
        "lab" => (
            Space::Lab,
            c0.scaled(1.0, 1.0)?,
            c1.scaled(1.0, 1.25)?,
            c2.scaled(1.0, 1.25)?,
        ),
        "lch" => (
            Space::Lch,
            c0.scaled(1.0, 1.0)?,
            c1.scaled(1.0, 1.5)?,
            c2.hue()?,
        ),
        "oklab" => (
            Space::Oklab,
            c0.scaled(1.0, 0.01)?,
            c1.scaled(1.0, 0.004)?,
            c2.scaled(1.0, 0.004)?,
        ),
        "oklch" => (
            Space::Oklch,
            c0.scaled(1.0, 0.01)?,
            c1.scaled(1.0, 0.004)?,
            c2.hue()?,
        ),
        _ => return None,
    };

    Some(Color::new(space, c0, c1, c2, alpha))
}

/// `color()` only takes the predefined RGB and XYZ spaces.
fn from_predefined(
    space: &str,
    arguments: Vec<Argument>,
    alpha: Option<Argument>,
) -> Option<Color> {
    let space = space.parse::<Space>().ok()?;
    if !space.is_rgb_like() && !matches!(space, Space::XyzD50 | Space::XyzD65) {
        return None;
    }

    let [c0, c1, c2] = <[Argument; 3]>::try_from(arguments).ok()?;

    Some(Color::new(
        space,
        c0.scaled(1.0, 0.01)?,
        c1.scaled(1.0, 0.01)?,
        c2.scaled(1.0, 0.01)?,
        alpha_value(alpha)?,
    ))
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidColor(s.to_owned());

        let (_, notation) = notation(s).map_err(|_| invalid())?;

        match notation {
            Notation::Hex(channels) => from_hex(&channels),
            Notation::Function {
                name,
                arguments,
                alpha,
            } => from_function(name, arguments, alpha),
            Notation::Predefined {
                space,
                arguments,
                alpha,
            } => from_predefined(space, arguments, alpha),
        }
        .ok_or_else(invalid)
    }
}

impl FromStr for Space {
    type Err = Error;

    /// Parse the identifier of a space, as used in `color()`. `xyz` is an
    /// alias for `xyz-d65`.
    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim().to_ascii_lowercase();
        if name == "xyz" {
            return Ok(Space::XyzD65);
        }

        Space::ALL
            .into_iter()
            .find(|space| space.name() == name)
            .ok_or_else(|| Error::UnknownSpace(s.to_owned()))
    }
}
