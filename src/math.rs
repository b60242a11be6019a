//! Math utility functions.

use euclid::default::{Transform3D, Vector3D};

use crate::color::{Component, Components};

/// A 3x3 matrix stored in a 4x4 transform; the translation part is unused.
pub type Transform = Transform3D<Component>;

type Vector = Vector3D<Component>;

/// Build a [`Transform`] from a 3x3 matrix. The arguments are given column
/// by column, so each group of three is the contribution of one input
/// component to the three output components.
#[allow(clippy::too_many_arguments)]
pub const fn transform_3x3(
    m11: Component,
    m12: Component,
    m13: Component,
    m21: Component,
    m22: Component,
    m23: Component,
    m31: Component,
    m32: Component,
    m33: Component,
) -> Transform {
    Transform::new(
        m11, m12, m13, 0.0, //
        m21, m22, m23, 0.0, //
        m31, m32, m33, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    )
}

/// Multiply the given matrix in `transform` with the 3 components.
pub fn transform(transform: &Transform, components: Components) -> Components {
    let Components(x, y, z) = components;
    let Vector { x, y, z, .. } = transform.transform_vector3d(Vector::new(x, y, z));
    Components(x, y, z)
}

/// True if `value` is close enough to zero to be treated as zero.
pub fn almost_zero(value: Component) -> bool {
    value.abs() < Component::EPSILON
}

/// Replace NaN (a missing component) with 0.0.
pub fn normalize(value: Component) -> Component {
    if value.is_nan() {
        0.0
    } else {
        value
    }
}

/// Bring a hue angle in degrees into [0..360).
pub fn normalize_hue(value: Component) -> Component {
    value.rem_euclid(360.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transform_is_column_major() {
        #[rustfmt::skip]
        const M: Transform = transform_3x3(
            1.0, 0.0, 0.0,
            2.0, 1.0, 0.0,
            0.0, 0.0, 3.0,
        );

        // The second input contributes 2.0 to the first output.
        let result = transform(&M, Components(1.0, 1.0, 1.0));
        assert_eq!(result, Components(3.0, 1.0, 3.0));
    }

    #[test]
    fn hue_wraps() {
        assert_eq!(normalize_hue(370.0), 10.0);
        assert_eq!(normalize_hue(-10.0), 350.0);
        assert_eq!(normalize_hue(0.0), 0.0);
    }

    #[test]
    fn nan_normalizes_to_zero() {
        assert_eq!(normalize(Component::NAN), 0.0);
        assert_eq!(normalize(0.5), 0.5);
    }
}
