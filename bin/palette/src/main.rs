//! Print a palette of colors interpolated through a list of anchor colors,
//! one color per line, or color a zoom into the Mandelbrot set with it.

mod commands;
mod preset;
mod swatch;

use std::{
    io::{self, BufWriter, Write},
    path::PathBuf,
};

use anyhow::{Context, Result};
use chromastep::{steps, Color, Component, HueInterpolation, Order, Space, StepsOptions};
use clap::{ArgAction, Parser, ValueEnum};
use log::{info, LevelFilter};

use crate::{commands::Commands, preset::Preset};

/// Print a palette interpolated through anchor colors.
///
/// Without any options the navy-olive preset is printed.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Named palette to start from. The options below override its settings.
    #[arg(short, long, value_enum, default_value_t = Preset::NavyOlive)]
    preset: Preset,

    /// Anchor color in CSS notation, e.g. "#020369" or "oklch(0.6 0.1 120)".
    /// Repeat for each anchor; replaces the anchors of the preset.
    #[arg(short, long = "anchor", value_name = "COLOR")]
    anchors: Vec<Color>,

    /// Color space to interpolate in.
    #[arg(long, value_name = "SPACE")]
    space: Option<Space>,

    /// Color space of the generated colors.
    #[arg(long, value_name = "SPACE")]
    out_space: Option<Space>,

    /// Number of colors to generate.
    #[arg(short = 'n', long)]
    steps: Option<usize>,

    /// Order in which the colors are printed.
    #[arg(long, value_enum)]
    order: Option<Direction>,

    /// How hues are interpolated in polar spaces (shorter, longer,
    /// increasing, decreasing or specified).
    #[arg(long, value_name = "METHOD")]
    hue: Option<HueInterpolation>,

    /// Insert colors until no two neighbours are further apart than this
    /// deltaE OK distance.
    #[arg(long, value_name = "DISTANCE")]
    max_delta_e: Option<Component>,

    /// How each color is printed.
    #[arg(short, long, value_enum, default_value_t = Format::Rgb)]
    format: Format,

    /// Also write the palette as a strip of swatches to this PNG file.
    #[arg(long, value_name = "PNG")]
    swatch: Option<PathBuf>,

    /// Write a comparison of the anchors interpolated in every color space to
    /// this PNG file.
    #[arg(long, value_name = "PNG")]
    compare: Option<PathBuf>,

    /// Log more to stderr: -v for info, -vv for debug, -vvv for trace.
    /// RUST_LOG takes precedence.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
enum Direction {
    Forward,
    Reverse,
}

impl From<Direction> for Order {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Forward => Order::Forward,
            Direction::Reverse => Order::Reverse,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
enum Format {
    /// RGB(r, g, b)
    Rgb,
    /// #rrggbb
    Hex,
    /// CSS notation in the output space.
    Css,
}

impl Format {
    fn render(self, color: &Color) -> String {
        match self {
            Format::Rgb => color.to_rgb_string(),
            Format::Hex => color.to_hex_string(),
            Format::Css => color.to_string(),
        }
    }
}

/// The preset with the command line overrides applied.
#[derive(Debug)]
struct Settings {
    anchors: Vec<Color>,
    options: StepsOptions,
    order: Order,
}

impl Cli {
    fn settings(&self) -> Result<Settings> {
        let recipe = self.preset.recipe();

        let anchors = if self.anchors.is_empty() {
            recipe
                .anchors
                .iter()
                .map(|text| {
                    text.parse::<Color>()
                        .with_context(|| format!("bad anchor in preset {:?}", self.preset))
                })
                .collect::<Result<Vec<_>>>()?
        } else {
            self.anchors.clone()
        };

        let options = StepsOptions {
            space: self.space.unwrap_or(recipe.space),
            out_space: self.out_space.unwrap_or(recipe.out_space),
            steps: self.steps.unwrap_or(recipe.steps),
            hue: self.hue.unwrap_or_default(),
            max_delta_e: self.max_delta_e,
        };

        let order = self.order.map(Order::from).unwrap_or(recipe.order);

        Ok(Settings {
            anchors,
            options,
            order,
        })
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let settings = cli.settings()?;
    info!(
        "{} anchors, {} steps in {} (out: {}), {:?}",
        settings.anchors.len(),
        settings.options.steps,
        settings.options.space,
        settings.options.out_space,
        settings.order
    );

    let palette =
        steps(&settings.anchors, &settings.options).context("could not generate the palette")?;

    let mut out = BufWriter::new(io::stdout().lock());
    match &cli.command {
        Some(Commands::Mandelbrot(command)) => command.run(&palette, &mut out)?,
        None => {
            for color in palette.iter(settings.order) {
                writeln!(out, "{}", cli.format.render(color))?;
            }
        }
    }
    out.flush()?;

    if let Some(path) = &cli.swatch {
        swatch::palette_strip(&palette, settings.order)?
            .save(path)
            .with_context(|| format!("could not write swatch to {}", path.display()))?;
        info!("wrote swatch to {}", path.display());
    }

    if let Some(path) = &cli.compare {
        swatch::compare_spaces(&settings.anchors, settings.options.hue)?
            .save(path)
            .with_context(|| format!("could not write comparison to {}", path.display()))?;
        info!("wrote comparison to {}", path.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn settings(args: &[&str]) -> Settings {
        let cli = Cli::try_parse_from(std::iter::once("palette").chain(args.iter().copied()))
            .unwrap();
        cli.settings().unwrap()
    }

    #[test]
    fn command_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults_to_navy_olive() {
        let settings = settings(&[]);
        assert_eq!(settings.anchors.len(), 3);
        assert_eq!(settings.options.space, Space::Lch);
        assert_eq!(settings.options.out_space, Space::Srgb);
        assert_eq!(settings.options.steps, 16);
        assert_eq!(settings.order, Order::Reverse);

        let palette = steps(&settings.anchors, &settings.options).unwrap();
        let lines: Vec<String> = palette
            .iter(settings.order)
            .map(|c| Format::Rgb.render(c))
            .collect();
        assert_eq!(lines.len(), 16);
        assert_eq!(lines[0], "RGB(105, 103, 2)");
        assert_eq!(lines[15], "RGB(2, 3, 105)");

        for line in &lines {
            let channels = parse_rgb_line(line);
            assert_eq!(format!("RGB({}, {}, {})", channels[0], channels[1], channels[2]), *line);
        }
    }

    fn parse_rgb_line(line: &str) -> [u8; 3] {
        let inner = line
            .strip_prefix("RGB(")
            .and_then(|rest| rest.strip_suffix(')'))
            .unwrap_or_else(|| panic!("not an RGB line: {line:?}"));
        let channels: Vec<u8> = inner
            .split(", ")
            .map(|channel| channel.parse().unwrap())
            .collect();
        channels.try_into().unwrap()
    }

    #[test]
    fn mandelbrot_subcommand_keeps_the_palette_options() {
        let cli = Cli::try_parse_from([
            "palette",
            "--preset",
            "magenta-mint",
            "mandelbrot",
            "--frames",
            "3",
        ])
        .unwrap();
        assert_eq!(cli.preset, Preset::MagentaMint);
        match cli.command {
            Some(Commands::Mandelbrot(command)) => assert_eq!(command.frames, 3),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn magenta_mint_preset() {
        let settings = settings(&["--preset", "magenta-mint"]);
        assert_eq!(settings.anchors.len(), 5);
        assert_eq!(settings.options.space, Space::Srgb);
        assert_eq!(settings.order, Order::Forward);
    }

    #[test]
    fn overrides() {
        let settings = settings(&[
            "--anchor",
            "#f00",
            "--anchor",
            "oklch(0.45 0.3 264)",
            "--space",
            "oklch",
            "--out-space",
            "display-p3",
            "-n",
            "5",
            "--order",
            "reverse",
            "--hue",
            "longer",
            "--max-delta-e",
            "0.1",
        ]);
        assert_eq!(settings.anchors.len(), 2);
        assert_eq!(settings.anchors[1].space, Space::Oklch);
        assert_eq!(
            settings.options,
            StepsOptions {
                space: Space::Oklch,
                out_space: Space::DisplayP3,
                steps: 5,
                hue: HueInterpolation::Longer,
                max_delta_e: Some(0.1),
            }
        );
        assert_eq!(settings.order, Order::Reverse);
    }

    #[test]
    fn zero_steps_is_reported() {
        let settings = settings(&["-n", "0"]);
        assert!(steps(&settings.anchors, &settings.options).is_err());
    }

    #[test]
    fn rejects_bad_values() {
        for args in [
            &["palette", "--space", "cmyk"][..],
            &["palette", "--anchor", "not-a-color"][..],
            &["palette", "--hue", "sideways"][..],
            &["palette", "--preset", "sunset"][..],
            &["palette", "--format", "yaml"][..],
        ] {
            assert!(Cli::try_parse_from(args).is_err(), "{args:?}");
        }
    }

    #[test]
    fn formats() {
        let color = Color::from_rgb8(105, 103, 2);
        assert_eq!(Format::Rgb.render(&color), "RGB(105, 103, 2)");
        assert_eq!(Format::Hex.render(&color), "#696702");
        assert!(Format::Css.render(&color).starts_with("color(srgb "));
    }
}
