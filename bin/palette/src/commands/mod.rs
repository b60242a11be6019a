use clap::Subcommand;

use self::mandelbrot::MandelbrotCommand;

pub mod mandelbrot;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render a zoom into the Mandelbrot set colored with the palette.
    ///
    /// Escape counts index into the palette in generation order, so the
    /// first anchor colors the points that escape after one iteration.
    Mandelbrot(MandelbrotCommand),
}
