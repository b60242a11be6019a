//! Render palettes and gradients to images for a quick visual check.

use anyhow::{bail, Context, Result};
use chromastep::{Color, Component, Gradient, HueInterpolation, Order, Palette, Space};
use image::{Rgb, RgbImage};
use log::debug;

const CELL_WIDTH: u32 = 64;
const CELL_HEIGHT: u32 = 64;

/// Widest strip that is written, which holds 1023 cells.
const MAX_STRIP_WIDTH: u32 = u16::MAX as u32;

const WIDTH: u32 = 1000;
const HEIGHT_PER_SPACE: u32 = 48;

/// A horizontal strip with one cell per color of the palette.
pub fn palette_strip(palette: &Palette, order: Order) -> Result<RgbImage> {
    let width = u32::try_from(palette.len())
        .ok()
        .and_then(|len| len.checked_mul(CELL_WIDTH))
        .filter(|&width| width <= MAX_STRIP_WIDTH)
        .with_context(|| {
            format!(
                "a palette of {} colors is too wide for a swatch strip (at most {})",
                palette.len(),
                MAX_STRIP_WIDTH / CELL_WIDTH
            )
        })?;
    if width == 0 {
        bail!("the palette is empty");
    }

    let colors: Vec<[u8; 3]> = palette.iter(order).map(Color::to_rgb8).collect();

    Ok(RgbImage::from_fn(width, CELL_HEIGHT, |x, _| {
        Rgb(colors[(x / CELL_WIDTH) as usize])
    }))
}

/// One continuous band per color space, each interpolating through the same
/// anchors, stacked in the order of [`Space::ALL`].
pub fn compare_spaces(anchors: &[Color], hue: HueInterpolation) -> chromastep::Result<RgbImage> {
    let gradients = Space::ALL
        .iter()
        .map(|&space| Gradient::new(anchors, space, hue))
        .collect::<chromastep::Result<Vec<_>>>()?;

    let height = gradients.len() as u32 * HEIGHT_PER_SPACE;
    let mut img = RgbImage::new(WIDTH, height);

    for (row, gradient) in gradients.iter().enumerate() {
        debug!("rendering band for {}", gradient.space());

        let top = row as u32 * HEIGHT_PER_SPACE;
        for x in 0..WIDTH {
            let t = x as Component / (WIDTH - 1) as Component;
            let pixel = Rgb(gradient.at(t).to_rgb8());

            for y in top..top + HEIGHT_PER_SPACE {
                img.put_pixel(x, y, pixel);
            }
        }
    }

    Ok(img)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chromastep::{steps, StepsOptions};

    fn anchors() -> Vec<Color> {
        vec![Color::from_rgb8(255, 0, 0), Color::from_rgb8(0, 0, 255)]
    }

    #[test]
    fn strip_has_a_cell_per_color() {
        let options = StepsOptions {
            space: Space::Srgb,
            steps: 3,
            ..Default::default()
        };
        let palette = steps(&anchors(), &options).unwrap();

        let forward = palette_strip(&palette, Order::Forward).unwrap();
        assert_eq!(forward.dimensions(), (3 * CELL_WIDTH, CELL_HEIGHT));
        assert_eq!(forward.get_pixel(0, 0), &Rgb([255, 0, 0]));
        assert_eq!(forward.get_pixel(3 * CELL_WIDTH - 1, 0), &Rgb([0, 0, 255]));

        let reverse = palette_strip(&palette, Order::Reverse).unwrap();
        assert_eq!(reverse.get_pixel(0, CELL_HEIGHT - 1), &Rgb([0, 0, 255]));
    }

    #[test]
    fn strip_refuses_huge_palettes() {
        let options = |count| StepsOptions {
            space: Space::Srgb,
            steps: count,
            ..Default::default()
        };

        let widest = steps(&anchors(), &options(1023)).unwrap();
        assert_eq!(
            palette_strip(&widest, Order::Forward).unwrap().width(),
            1023 * CELL_WIDTH
        );

        let too_wide = steps(&anchors(), &options(1024)).unwrap();
        let err = palette_strip(&too_wide, Order::Forward).unwrap_err();
        assert!(err.to_string().contains("1024 colors"), "{err}");
    }

    #[test]
    fn comparison_has_a_band_per_space() {
        let img = compare_spaces(&anchors(), HueInterpolation::Shorter).unwrap();
        assert_eq!(
            img.dimensions(),
            (WIDTH, Space::ALL.len() as u32 * HEIGHT_PER_SPACE)
        );

        // Every band starts at the first anchor and ends at the last one.
        for row in 0..Space::ALL.len() as u32 {
            let y = row * HEIGHT_PER_SPACE;
            let start = img.get_pixel(0, y).0;
            let end = img.get_pixel(WIDTH - 1, y).0;
            assert!(start[0] >= 254 && start[2] <= 1, "{start:?}");
            assert!(end[2] >= 254 && end[0] <= 1, "{end:?}");
        }
    }

    #[test]
    fn comparison_needs_two_anchors() {
        assert!(compare_spaces(&anchors()[..1], HueInterpolation::Shorter).is_err());
    }
}
