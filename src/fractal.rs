//! Escape-time iteration of the Mandelbrot set. A point is colored by
//! indexing into a palette with the number of iterations it took to escape.

use std::ops::{Add, Mul};

use log::trace;

/// Iterations after which a point is considered to be inside the set.
pub const MAX_ITERATIONS: u32 = 1000;

/// Once the orbit reaches this magnitude it can not come back.
const ESCAPE_RADIUS: f64 = 2.0;

/// Each frame of a [`Zoom`] moves this fraction of the previous frame's
/// step.
pub const ZOOM_DECAY: f64 = 0.9;

/// A complex number in rectangular form.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Complex {
    /// The real part.
    pub re: f64,
    /// The imaginary part.
    pub im: f64,
}

impl Complex {
    /// Create a complex number from its real and imaginary parts.
    pub fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    /// The square of this number.
    pub fn pow2(self) -> Self {
        Self {
            re: self.re * self.re - self.im * self.im,
            im: 2.0 * self.re * self.im,
        }
    }

    /// The squared magnitude, without the square root.
    pub fn norm_sq(self) -> f64 {
        self.re * self.re + self.im * self.im
    }

    /// The distance from the origin.
    pub fn magnitude(self) -> f64 {
        self.norm_sq().sqrt()
    }
}

impl Add for Complex {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            re: self.re + rhs.re,
            im: self.im + rhs.im,
        }
    }
}

impl Mul for Complex {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self {
            re: self.re * rhs.re - self.im * rhs.im,
            im: self.re * rhs.im + self.im * rhs.re,
        }
    }
}

/// Count the iterations of `z = z² + c`, starting at `z = 0`, before the
/// magnitude of `z` reaches 2.
///
/// Returns `max_iterations` for points that never escape, which are taken to
/// be inside the set.
pub fn escape_time(c: Complex, max_iterations: u32) -> u32 {
    let mut z = Complex::default();
    let mut iterations = 0;

    while z.magnitude() < ESCAPE_RADIUS && iterations < max_iterations {
        z = z.pow2() + c;
        iterations += 1;
    }

    iterations
}

/// Map a pixel offset along an axis of `size` pixels onto [min..max].
pub fn map_to_plane(pixel: u32, size: u32, min: f64, max: f64) -> f64 {
    pixel as f64 * (max - min) / size as f64 + min
}

/// The index into a palette of `len` colors for a point that took
/// `iterations` to escape.
///
/// Points inside the set (`iterations == max_iterations`) and points that
/// escape before the first iteration have no color and are drawn black.
pub fn color_index(iterations: u32, max_iterations: u32, len: usize) -> Option<usize> {
    if iterations == 0 || iterations >= max_iterations || len == 0 {
        return None;
    }

    Some(iterations as usize % len)
}

/// A rectangle on the complex plane.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    /// Smallest real part.
    pub min_x: f64,
    /// Smallest imaginary part.
    pub min_y: f64,
    /// Largest real part.
    pub max_x: f64,
    /// Largest imaginary part.
    pub max_y: f64,
}

impl Viewport {
    /// [-2..2] on both axes, which holds the whole set.
    pub const FULL: Viewport = Viewport {
        min_x: -2.0,
        min_y: -2.0,
        max_x: 2.0,
        max_y: 2.0,
    };

    /// A spiral on the edge of the set, about 4e-13 across.
    pub const SPIRAL: Viewport = Viewport {
        min_x: -1.2576470439078538,
        min_y: 0.3780652779236957,
        max_x: -1.2576470439074896,
        max_y: 0.3780652779240597,
    };

    /// The point of the plane under pixel (`column`, `row`) of an image of
    /// `width` by `height` pixels. Columns run along the real axis and rows
    /// along the imaginary axis, both from the minimum.
    pub fn point(&self, column: u32, row: u32, width: u32, height: u32) -> Complex {
        Complex::new(
            map_to_plane(column, width, self.min_x, self.max_x),
            map_to_plane(row, height, self.min_y, self.max_y),
        )
    }

    fn offset(&self, by: &Viewport) -> Viewport {
        Viewport {
            min_x: self.min_x + by.min_x,
            min_y: self.min_y + by.min_y,
            max_x: self.max_x + by.max_x,
            max_y: self.max_y + by.max_y,
        }
    }

    fn scale(&self, factor: f64) -> Viewport {
        Viewport {
            min_x: self.min_x * factor,
            min_y: self.min_y * factor,
            max_x: self.max_x * factor,
            max_y: self.max_y * factor,
        }
    }
}

/// The viewports of a zoom animation from `start` toward `target`.
///
/// The first frame is `start`. Every edge then moves by a step that starts
/// at a `frames`th of the distance to the target and shrinks by
/// [`ZOOM_DECAY`] after each frame, so the zoom slows down as it closes in.
#[derive(Clone, Debug)]
pub struct Zoom {
    current: Viewport,
    step: Viewport,
    remaining: usize,
}

impl Zoom {
    /// A zoom of `frames` frames.
    pub fn new(start: Viewport, target: Viewport, frames: usize) -> Self {
        let step = if frames == 0 {
            Viewport {
                min_x: 0.0,
                min_y: 0.0,
                max_x: 0.0,
                max_y: 0.0,
            }
        } else {
            let n = frames as f64;
            Viewport {
                min_x: (target.min_x - start.min_x) / n,
                min_y: (target.min_y - start.min_y) / n,
                max_x: (target.max_x - start.max_x) / n,
                max_y: (target.max_y - start.max_y) / n,
            }
        };

        Self {
            current: start,
            step,
            remaining: frames,
        }
    }
}

impl Iterator for Zoom {
    type Item = Viewport;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        let frame = self.current;
        self.current = self.current.offset(&self.step);
        self.step = self.step.scale(ZOOM_DECAY);

        trace!("zoom frame {frame:?}");
        Some(frame)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Zoom {}

/// A rough picture of the set in text: `*` for points inside it and a space
/// for points outside, over [-2..0.5] by [-1..1] with the positive imaginary
/// axis on top.
pub fn ascii_preview(max_iterations: u32) -> String {
    const ROWS: u32 = 41;
    const COLUMNS: u32 = 101;

    let mut out = String::with_capacity(((COLUMNS + 1) * ROWS) as usize);
    for row in 0..ROWS {
        let im = (20.0 - row as f64) * 0.05;
        for column in 0..COLUMNS {
            let re = (column as f64 - 80.0) * 0.025;
            let inside = escape_time(Complex::new(re, im), max_iterations) == max_iterations;
            out.push(if inside { '*' } else { ' ' });
        }
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complex_arithmetic() {
        let z = Complex::new(3.0, 4.0);
        assert_eq!(z.magnitude(), 5.0);
        assert_eq!(z.pow2(), Complex::new(-7.0, 24.0));
        assert_eq!(z.pow2(), z * z);
        assert_eq!(z + Complex::new(-1.0, 0.5), Complex::new(2.0, 4.5));
    }

    #[test]
    fn points_inside_the_set_never_escape() {
        for c in [
            Complex::new(0.0, 0.0),
            Complex::new(-1.0, 0.0),
            Complex::new(0.0, 1.0),
            Complex::new(0.25, 0.0),
        ] {
            assert_eq!(escape_time(c, MAX_ITERATIONS), MAX_ITERATIONS, "{c:?}");
        }
    }

    #[test]
    fn escape_counts() {
        assert_eq!(escape_time(Complex::new(2.0, 0.0), MAX_ITERATIONS), 1);
        assert_eq!(escape_time(Complex::new(1.0, 0.0), MAX_ITERATIONS), 2);
        // 0.5, 0.75, 1.0625, 1.6289, 3.1533
        assert_eq!(escape_time(Complex::new(0.5, 0.0), MAX_ITERATIONS), 5);
        // The orbit of -2 sits on the escape radius after one step.
        assert_eq!(escape_time(Complex::new(-2.0, 0.0), MAX_ITERATIONS), 1);
    }

    #[test]
    fn escape_stops_at_the_limit() {
        assert_eq!(escape_time(Complex::new(0.0, 0.0), 7), 7);
        assert_eq!(escape_time(Complex::new(0.0, 0.0), 0), 0);
    }

    #[test]
    fn pixels_map_onto_the_plane() {
        assert_eq!(map_to_plane(0, 1000, -2.0, 2.0), -2.0);
        assert_eq!(map_to_plane(500, 1000, -2.0, 2.0), 0.0);
        assert_eq!(map_to_plane(250, 1000, -2.0, 2.0), -1.0);

        let point = Viewport::FULL.point(750, 0, 1000, 500);
        assert_eq!(point, Complex::new(1.0, -2.0));
    }

    #[test]
    fn color_index_cycles_through_the_palette() {
        assert_eq!(color_index(1, MAX_ITERATIONS, 16), Some(1));
        assert_eq!(color_index(15, MAX_ITERATIONS, 16), Some(15));
        assert_eq!(color_index(16, MAX_ITERATIONS, 16), Some(0));
        assert_eq!(color_index(999, MAX_ITERATIONS, 16), Some(7));
    }

    #[test]
    fn color_index_is_black_at_the_ends() {
        assert_eq!(color_index(0, MAX_ITERATIONS, 16), None);
        assert_eq!(color_index(MAX_ITERATIONS, MAX_ITERATIONS, 16), None);
        assert_eq!(color_index(5, MAX_ITERATIONS, 0), None);
    }

    #[test]
    fn zoom_starts_full_and_closes_in() {
        let frames: Vec<Viewport> = Zoom::new(Viewport::FULL, Viewport::SPIRAL, 10).collect();
        assert_eq!(frames.len(), 10);
        assert_eq!(frames[0], Viewport::FULL);

        // Second frame moves a full tenth, the third 0.9 of that.
        let first_step = (Viewport::SPIRAL.min_x - Viewport::FULL.min_x) / 10.0;
        approx::assert_abs_diff_eq!(frames[1].min_x, -2.0 + first_step, epsilon = 1e-12);
        approx::assert_abs_diff_eq!(
            frames[2].min_x,
            -2.0 + first_step * 1.9,
            epsilon = 1e-12
        );

        for pair in frames.windows(2) {
            let width = |v: &Viewport| v.max_x - v.min_x;
            assert!(width(&pair[1]) < width(&pair[0]));
            assert!(pair[1].min_x <= Viewport::SPIRAL.min_x);
            assert!(pair[1].max_x >= Viewport::SPIRAL.max_x);
        }
    }

    #[test]
    fn empty_zoom() {
        assert_eq!(Zoom::new(Viewport::FULL, Viewport::SPIRAL, 0).count(), 0);
    }

    #[test]
    fn ascii_preview_shape() {
        let preview = ascii_preview(100);
        let lines: Vec<&str> = preview.lines().collect();
        assert_eq!(lines.len(), 41);
        assert!(lines.iter().all(|line| line.chars().count() == 101));

        // The set is symmetric about the real axis, which is the middle row.
        for row in 0..20 {
            assert_eq!(lines[row], lines[40 - row], "row {row}");
        }

        // On the real axis -1.9 and 0 are inside, 0.5 is outside.
        let axis: Vec<char> = lines[20].chars().collect();
        assert_eq!(axis[4], '*');
        assert_eq!(axis[80], '*');
        assert_eq!(axis[100], ' ');
    }
}
