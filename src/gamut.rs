//! Gamut mapping functions.
//! <https://drafts.csswg.org/css-color-4/#gamut-mapping>

use log::trace;

use crate::color::{Color, Component, Space};

#[allow(clippy::manual_range_contains)]
fn in_zero_to_one(value: Component) -> bool {
    value >= 0.0 && value <= 1.0
}

impl Color {
    /// Calculate deltaE OK (simple root sum of squares in Oklab) between this
    /// color and `other`.
    /// <https://drafts.csswg.org/css-color-4/#color-difference-OK>
    pub fn delta_e_ok(&self, other: &Color) -> Component {
        let reference = self.to_space(Space::Oklab);
        let sample = other.to_space(Space::Oklab);

        let d = sample.components - reference.components;
        (d.0 * d.0 + d.1 * d.1 + d.2 * d.2).sqrt()
    }

    /// If this color is not within gamut limits of its color space, then a
    /// gamut mapping is applied to map the components into range.
    /// <https://drafts.csswg.org/css-color-4/#binsearch>
    pub fn map_into_gamut_limits(&self) -> Self {
        // 1. if destination has no gamut limits (XYZ-D65, XYZ-D50, Lab, LCH,
        //    Oklab, Oklch) return origin.
        if !self.space.is_rgb_like() && !matches!(self.space, Space::Hsl | Space::Hwb) {
            return self.clone();
        }

        // Local optimization: If the color is already in gamut, then we can
        // skip the binary search and return the color.
        if self.in_gamut() {
            return self.clone();
        }

        // HSL and HWB share the gamut of sRGB, so they are mapped there.
        if matches!(self.space, Space::Hsl | Space::Hwb) {
            return self
                .to_space(Space::Srgb)
                .map_into_gamut_limits()
                .to_space(self.space);
        }

        // 2. let origin_Oklch be origin converted from origin color space to
        //    the Oklch color space.
        let origin_oklch = self.to_space(Space::Oklch);

        // 3. if the Lightness of origin_Oklch is greater than or equal to
        //    100%, return { 1 1 1 origin.alpha } in destination.
        if origin_oklch.components.0 >= 1.0 {
            return Color::new(self.space, 1.0, 1.0, 1.0, self.alpha());
        }

        // 4. if the Lightness of origin_Oklch is less than than or equal to
        //    0%, return { 0 0 0 origin.alpha } in destination.
        if origin_oklch.components.0 <= 0.0 {
            return Color::new(self.space, 0.0, 0.0, 0.0, self.alpha());
        }

        // 8. let JND be 0.02
        const JND: Component = 0.02;

        // 9. let epsilon be 0.0001
        const EPSILON: Component = 1.0e-4;

        // 11. set min to zero
        let mut min = 0.0;

        // 12. set max to the Oklch chroma of origin_Oklch.
        let mut max = origin_oklch.components.1;

        // 13. let min_inGamut be a boolean that represents when min is still
        //     in gamut, and set it to true
        let mut min_in_gamut = true;

        let mut current = origin_oklch.clone();
        let mut current_in_space = self.clone();

        // If the clipped color is already indistinguishable, skip the search.
        let clipped = current_in_space.clip();
        if current.delta_e_ok(&clipped) < JND {
            return clipped;
        }

        // 14. while (max - min is greater than epsilon) repeat the following
        //     steps.
        while max - min > EPSILON {
            // 14.1. set chroma to (min + max) / 2
            let chroma = (min + max) / 2.0;

            // 14.2. set current to origin_Oklch and then set the chroma
            //       component to chroma
            current.components.1 = chroma;

            current_in_space = current.to_space(self.space);

            // 14.3. if min_inGamut is true and also if inGamut(current) is
            //       true, set min to chroma and continue to repeat these steps.
            if min_in_gamut && current_in_space.in_gamut() {
                min = chroma;
                continue;
            }

            // 14.4.1. set clipped to clip(current)
            let clipped = current_in_space.clip();

            // 14.4.2. set E to delta(clipped, current)
            let e = clipped.delta_e_ok(&current);

            // 14.4.3. if E < JND
            if e < JND {
                // 14.4.3.1. if (JND - E < epsilon) return clipped as the gamut
                //           mapped color
                if JND - e < EPSILON {
                    return clipped;
                }

                // 14.4.3.2.1. set min_inGamut to false
                min_in_gamut = false;

                // 14.4.3.2.2. set min to chroma
                min = chroma;
            } else {
                // 14.4.4. otherwise, set max to chroma and continue to repeat
                //         these steps
                max = chroma;
            }
        }

        trace!(
            "gamut mapped {} {} to chroma {}",
            self.space,
            self.components,
            current.components.1
        );

        // 15. return current as the gamut mapped color. It may still be a
        //     hair outside the gamut, so clip it.
        current_in_space.clip()
    }

    /// Return a color with each of the components clipped (clamped to [0..1]).
    /// NOTE: This is a lossy operation and only meaningful for RGB spaces.
    pub fn clip(&self) -> Color {
        let mut clipped = self.clone();
        clipped.components = self.components.map(|v| v.clamp(0.0, 1.0));
        clipped
    }

    /// Returns true if the color is within its gamut limits.
    ///
    /// Mainly for RGB based colors, checking components to be inside [0..1].
    /// `Hsl` and `Hwb` are converted to [`Space::Srgb`] before being checked.
    pub fn in_gamut(&self) -> bool {
        match self.space {
            Space::Hsl | Space::Hwb => self.to_space(Space::Srgb).in_gamut(),
            space if space.is_rgb_like() => {
                in_zero_to_one(self.components.0)
                    && in_zero_to_one(self.components.1)
                    && in_zero_to_one(self.components.2)
            }
            _ => true,
        }
    }
}
