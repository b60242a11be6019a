//! Generate a palette of evenly spaced colors through a list of anchors.

use log::{debug, trace};

use crate::{
    color::{Color, Component, Space},
    error::{Error, Result},
    interpolate::{HueInterpolation, Interpolation},
};

/// Limit on how many times the palette is subdivided when a maximum
/// distance between neighbours is requested.
const MAX_REFINEMENT_DEPTH: usize = 10;

/// A piecewise interpolation through two or more anchors, placed at even
/// intervals over [0..1].
#[derive(Clone, Debug)]
pub struct Gradient {
    segments: Vec<Interpolation>,
}

impl Gradient {
    /// Create a gradient through `anchors`, interpolating in `space`.
    pub fn new(anchors: &[Color], space: Space, hue: HueInterpolation) -> Result<Self> {
        if anchors.len() < 2 {
            return Err(Error::TooFewAnchors {
                count: anchors.len(),
            });
        }

        let segments = anchors
            .windows(2)
            .map(|pair| pair[0].interpolate(&pair[1], space).hue(hue))
            .collect();

        Ok(Self { segments })
    }

    /// The space the colors returned by [`Gradient::at`] are in.
    pub fn space(&self) -> Space {
        // There is always at least one segment.
        self.segments[0].space
    }

    /// Return the color at `position`, which is clamped to [0..1].
    pub fn at(&self, position: Component) -> Color {
        let position = position.clamp(0.0, 1.0);
        let scaled = position * self.segments.len() as Component;
        let index = (scaled.floor() as usize).min(self.segments.len() - 1);

        self.segments[index].at(scaled - index as Component)
    }
}

/// Options for [`steps`].
#[derive(Clone, Debug, PartialEq)]
pub struct StepsOptions {
    /// The space in which the anchors are interpolated.
    pub space: Space,
    /// The space the resulting colors are converted to.
    pub out_space: Space,
    /// The number of colors to generate.
    pub steps: usize,
    /// How hues are interpolated in polar spaces.
    pub hue: HueInterpolation,
    /// When set, more colors are inserted until no two neighbours are
    /// further apart than this deltaE OK distance.
    pub max_delta_e: Option<Component>,
}

impl Default for StepsOptions {
    fn default() -> Self {
        Self {
            space: Space::Oklab,
            out_space: Space::Srgb,
            steps: 2,
            hue: HueInterpolation::Shorter,
            max_delta_e: None,
        }
    }
}

/// The order in which the colors of a [`Palette`] are visited.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Order {
    /// From the first anchor to the last.
    #[default]
    Forward,
    /// From the last anchor to the first.
    Reverse,
}

/// An ordered list of generated colors.
#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    /// The colors, from the first anchor to the last.
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Number of colors in the palette.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// True if the palette holds no colors.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Iterate over the colors in the given order.
    pub fn iter(&self, order: Order) -> Box<dyn Iterator<Item = &Color> + '_> {
        match order {
            Order::Forward => Box::new(self.colors.iter()),
            Order::Reverse => Box::new(self.colors.iter().rev()),
        }
    }

    /// Take the colors out of the palette.
    pub fn into_colors(self) -> Vec<Color> {
        self.colors
    }
}

/// Generate `options.steps` colors spread evenly through `anchors`.
///
/// The first color is the first anchor and the last color the last anchor,
/// both converted to `options.out_space`. A single step yields only the
/// first anchor.
pub fn steps(anchors: &[Color], options: &StepsOptions) -> Result<Palette> {
    if options.steps == 0 {
        return Err(Error::ZeroSteps);
    }

    let gradient = Gradient::new(anchors, options.space, options.hue)?;

    let mut entries: Vec<(Component, Color)> = if options.steps == 1 {
        vec![(0.0, gradient.at(0.0))]
    } else {
        let last = (options.steps - 1) as Component;
        (0..options.steps)
            .map(|i| {
                let position = i as Component / last;
                (position, gradient.at(position))
            })
            .collect()
    };

    if let Some(max_delta_e) = options.max_delta_e {
        refine(&gradient, &mut entries, max_delta_e);
    }

    let colors: Vec<Color> = entries
        .into_iter()
        .map(|(position, color)| {
            let color = color.to_space(options.out_space);
            trace!("step at {position:.4}: {} {}", color.space, color.components);
            color
        })
        .collect();

    debug!(
        "generated {} colors through {} anchors in {} (out: {})",
        colors.len(),
        anchors.len(),
        options.space,
        options.out_space
    );

    Ok(Palette { colors })
}

/// Insert midpoints between neighbours that are further apart than
/// `max_delta_e` until none are, or the depth limit is reached.
fn refine(gradient: &Gradient, entries: &mut Vec<(Component, Color)>, max_delta_e: Component) {
    if max_delta_e <= 0.0 || max_delta_e.is_nan() {
        return;
    }

    for depth in 0..MAX_REFINEMENT_DEPTH {
        let mut refined = Vec::with_capacity(entries.len() * 2);
        let mut inserted = 0;

        for (index, entry) in entries.iter().enumerate() {
            if let Some(previous) = index.checked_sub(1).map(|i| &entries[i]) {
                if previous.1.delta_e_ok(&entry.1) > max_delta_e {
                    let position = (previous.0 + entry.0) / 2.0;
                    refined.push((position, gradient.at(position)));
                    inserted += 1;
                }
            }
            refined.push(entry.clone());
        }

        *entries = refined;

        trace!("refinement pass {depth} inserted {inserted} colors");
        if inserted == 0 {
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hex(text: &str) -> Color {
        match text.parse() {
            Ok(color) => color,
            Err(err) => panic!("{text}: {err}"),
        }
    }

    fn navy_olive() -> Vec<Color> {
        vec![hex("#020369"), hex("#FFFFFF"), hex("#696702")]
    }

    fn magenta_mint() -> Vec<Color> {
        vec![
            hex("#640C35"),
            hex("#E31C79"),
            hex("#EC67A5"),
            hex("#1CE386"),
            hex("#13995B"),
        ]
    }

    fn assert_rgb_near(color: &Color, expected: [u8; 3]) {
        let actual = color.to_rgb8();
        for (a, e) in actual.iter().zip(expected.iter()) {
            assert!(
                (*a as i32 - *e as i32).abs() <= 1,
                "{actual:?} is not close to {expected:?}"
            );
        }
    }

    #[test]
    fn length_matches_steps() {
        for steps in [1, 2, 5, 16] {
            let options = StepsOptions {
                steps,
                ..Default::default()
            };
            let palette = super::steps(&navy_olive(), &options).unwrap();
            assert_eq!(palette.len(), steps);
            assert!(palette.colors().iter().all(|c| c.space == Space::Srgb));
        }
    }

    #[test]
    fn single_step_is_the_first_anchor() {
        let options = StepsOptions {
            steps: 1,
            ..Default::default()
        };
        let palette = steps(&navy_olive(), &options).unwrap();
        assert_rgb_near(&palette.colors()[0], [2, 3, 105]);
    }

    #[test]
    fn endpoints_are_the_anchors() {
        let options = StepsOptions {
            space: Space::Lch,
            steps: 7,
            ..Default::default()
        };
        let palette = steps(&magenta_mint(), &options).unwrap();
        assert_rgb_near(&palette.colors()[0], [100, 12, 53]);
        assert_rgb_near(&palette.colors()[6], [19, 153, 91]);
    }

    #[test]
    fn navy_olive_reversed() {
        let options = StepsOptions {
            space: Space::Lch,
            out_space: Space::Srgb,
            steps: 16,
            ..Default::default()
        };
        let palette = steps(&navy_olive(), &options).unwrap();
        let lines: Vec<_> = palette.iter(Order::Reverse).collect();

        assert_eq!(lines.len(), 16);
        assert_rgb_near(lines[0], [105, 103, 2]);
        assert_rgb_near(lines[15], [2, 3, 105]);

        // The middle of the palette is close to the white anchor.
        let [r, g, b] = lines[8].to_rgb8();
        assert!(r > 200 && g > 200 && b > 200);
    }

    #[test]
    fn magenta_mint_forward() {
        let options = StepsOptions {
            space: Space::Srgb,
            out_space: Space::Srgb,
            steps: 16,
            ..Default::default()
        };
        let palette = steps(&magenta_mint(), &options).unwrap();
        let lines: Vec<_> = palette.iter(Order::Forward).collect();

        assert_eq!(lines.len(), 16);
        assert_rgb_near(lines[0], [100, 12, 53]);
        assert_rgb_near(lines[15], [19, 153, 91]);
    }

    #[test]
    fn reversed_anchors_give_the_reversed_palette() {
        let options = StepsOptions {
            space: Space::Srgb,
            steps: 9,
            ..Default::default()
        };
        let mut anchors = magenta_mint();
        let forward = steps(&anchors, &options).unwrap();
        anchors.reverse();
        let backward = steps(&anchors, &options).unwrap();

        for (a, b) in forward.iter(Order::Forward).zip(backward.iter(Order::Reverse)) {
            assert_rgb_near(a, b.to_rgb8());
        }
    }

    #[test]
    fn gradient_hits_every_anchor() {
        let anchors = magenta_mint();
        let gradient = Gradient::new(&anchors, Space::Srgb, HueInterpolation::Shorter).unwrap();
        assert_eq!(gradient.space(), Space::Srgb);

        for (k, anchor) in anchors.iter().enumerate() {
            let position = k as Component / 4.0;
            assert_rgb_near(&gradient.at(position), anchor.to_rgb8());
        }

        // Out of range positions are clamped.
        assert_rgb_near(&gradient.at(-1.0), [100, 12, 53]);
        assert_rgb_near(&gradient.at(2.0), [19, 153, 91]);
    }

    #[test]
    fn errors() {
        let options = StepsOptions::default();
        assert_eq!(
            steps(&[hex("#fff")], &options),
            Err(Error::TooFewAnchors { count: 1 })
        );
        assert_eq!(steps(&[], &options), Err(Error::TooFewAnchors { count: 0 }));

        let zero = StepsOptions {
            steps: 0,
            ..Default::default()
        };
        assert_eq!(steps(&navy_olive(), &zero), Err(Error::ZeroSteps));
    }

    #[test]
    fn max_delta_e_inserts_colors() {
        let options = StepsOptions {
            space: Space::Oklab,
            steps: 3,
            max_delta_e: Some(0.05),
            ..Default::default()
        };
        let palette = steps(&navy_olive(), &options).unwrap();
        assert!(palette.len() > 3);

        for pair in palette.colors().windows(2) {
            assert!(pair[0].delta_e_ok(&pair[1]) <= 0.05 + 1.0e-4);
        }

        // Endpoints are unchanged by the refinement.
        assert_rgb_near(&palette.colors()[0], [2, 3, 105]);
        assert_rgb_near(&palette.colors()[palette.len() - 1], [105, 103, 2]);
    }

    #[test]
    fn max_delta_e_is_a_no_op_for_close_colors() {
        let options = StepsOptions {
            steps: 16,
            max_delta_e: Some(1.0),
            ..Default::default()
        };
        let palette = steps(&navy_olive(), &options).unwrap();
        assert_eq!(palette.len(), 16);
    }
}
