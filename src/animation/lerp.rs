use crate::foundation::core::{TransformState, Vec2};

/// Linear interpolation between two values.
///
/// `t` is never clamped: values below 0 or above 1 extrapolate along the same line.
pub trait Lerp: Sized {
    /// Interpolate from `a` (at `t = 0`) to `b` (at `t = 1`).
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

impl Lerp for Vec2 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Vec2::new(a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t)
    }
}

impl Lerp for TransformState {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        let translate = <Vec2 as Lerp>::lerp(&a.translate(), &b.translate(), t);
        Self {
            x: translate.x,
            y: translate.y,
            depth: interpolate(a.depth, b.depth, t),
            scale: interpolate(a.scale, b.scale, t),
        }
    }
}

/// Scalar shorthand for [`Lerp::lerp`].
#[inline]
pub fn interpolate(start: f64, end: f64, t: f64) -> f64 {
    <f64 as Lerp>::lerp(&start, &end, t)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/lerp.rs"]
mod tests;
