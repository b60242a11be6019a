use chromastep::{Order, Space};
use clap::ValueEnum;

/// The palettes that can be printed without naming any anchors.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum Preset {
    /// Navy through white to olive, interpolated in LCH and printed from
    /// olive back to navy.
    #[default]
    NavyOlive,
    /// Magenta through pink to mint, interpolated in sRGB.
    MagentaMint,
}

/// Everything a preset decides about a palette.
#[derive(Clone, Debug, PartialEq)]
pub struct Recipe {
    pub anchors: &'static [&'static str],
    pub space: Space,
    pub out_space: Space,
    pub steps: usize,
    pub order: Order,
}

impl Preset {
    pub fn recipe(self) -> Recipe {
        match self {
            Preset::NavyOlive => Recipe {
                anchors: &["#020369", "#FFFFFF", "#696702"],
                space: Space::Lch,
                out_space: Space::Srgb,
                steps: 16,
                order: Order::Reverse,
            },
            Preset::MagentaMint => Recipe {
                anchors: &["#640C35", "#E31C79", "#EC67A5", "#1CE386", "#13995B"],
                space: Space::Srgb,
                out_space: Space::Srgb,
                steps: 16,
                order: Order::Forward,
            },
        }
    }
}
