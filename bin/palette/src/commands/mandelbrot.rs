use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use chromastep::{
    fractal::{ascii_preview, color_index, escape_time, Viewport, Zoom, MAX_ITERATIONS},
    Color, Palette,
};
use clap::Parser;
use image::{Rgb, RgbImage};
use log::{debug, info};

const BLACK: Rgb<u8> = Rgb([0, 0, 0]);

#[derive(Parser, Debug)]
pub struct MandelbrotCommand {
    /// Directory the frames are written to, as frame001.png, frame002.png...
    #[arg(short, long, default_value = "images")]
    pub out_dir: PathBuf,

    /// Number of frames in the zoom.
    #[arg(long, default_value_t = 10)]
    pub frames: usize,

    /// Frame width in pixels.
    #[arg(long, default_value_t = 1000, value_parser = clap::value_parser!(u32).range(1..=16384))]
    pub width: u32,

    /// Frame height in pixels.
    #[arg(long, default_value_t = 1000, value_parser = clap::value_parser!(u32).range(1..=16384))]
    pub height: u32,

    /// Iterations before a point is taken to be inside the set.
    #[arg(long, default_value_t = MAX_ITERATIONS, value_parser = clap::value_parser!(u32).range(1..))]
    pub max_iterations: u32,

    /// Window the zoom closes in on. Defaults to a spiral near
    /// -1.2576 + 0.3781i.
    #[arg(
        long,
        num_args = 4,
        value_names = ["MIN_X", "MIN_Y", "MAX_X", "MAX_Y"],
        allow_negative_numbers = true
    )]
    pub target: Option<Vec<f64>>,

    /// Print a text preview of the set before rendering.
    #[arg(long)]
    pub preview: bool,
}

impl MandelbrotCommand {
    fn target(&self) -> Viewport {
        match self.target.as_deref() {
            Some(&[min_x, min_y, max_x, max_y]) => Viewport {
                min_x,
                min_y,
                max_x,
                max_y,
            },
            _ => Viewport::SPIRAL,
        }
    }

    pub fn run(&self, palette: &Palette, out: &mut impl Write) -> Result<()> {
        if self.preview {
            write!(out, "{}", ascii_preview(self.max_iterations))?;
        }

        fs::create_dir_all(&self.out_dir)
            .with_context(|| format!("could not create {}", self.out_dir.display()))?;

        let colors: Vec<[u8; 3]> = palette.colors().iter().map(Color::to_rgb8).collect();
        let zoom = Zoom::new(Viewport::FULL, self.target(), self.frames);

        for (index, viewport) in zoom.enumerate() {
            let img = render(&viewport, self.width, self.height, self.max_iterations, &colors);
            let path = frame_path(&self.out_dir, index + 1);
            img.save(&path)
                .with_context(|| format!("could not write frame to {}", path.display()))?;

            info!("saved frame {} as {}", index + 1, path.display());
            writeln!(out, "{}", path.display())?;
        }

        Ok(())
    }
}

/// The file name of the frame with the given 1-based number.
pub fn frame_path(dir: &Path, number: usize) -> PathBuf {
    dir.join(format!("frame{number:03}.png"))
}

/// Color each pixel of `viewport` by how many iterations it takes to escape.
/// Points inside the set are black.
pub fn render(
    viewport: &Viewport,
    width: u32,
    height: u32,
    max_iterations: u32,
    colors: &[[u8; 3]],
) -> RgbImage {
    debug!("rendering {width}x{height} over {viewport:?}");

    RgbImage::from_fn(width, height, |x, y| {
        let iterations = escape_time(viewport.point(x, y, width, height), max_iterations);
        color_index(iterations, max_iterations, colors.len())
            .map(|index| Rgb(colors[index]))
            .unwrap_or(BLACK)
    })
}
