use crate::foundation::error::{SpotlightError, SpotlightResult};

pub use kurbo::Vec2;

/// Host viewport size in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
}

impl Viewport {
    /// Create a validated viewport.
    ///
    /// Zero-sized viewports are accepted; they collapse all scatter travel to zero.
    pub fn new(width: f64, height: f64) -> SpotlightResult<Self> {
        if !width.is_finite() || !height.is_finite() {
            return Err(SpotlightError::validation(
                "Viewport width and height must be finite",
            ));
        }
        if width < 0.0 || height < 0.0 {
            return Err(SpotlightError::validation(
                "Viewport width and height must be >= 0",
            ));
        }
        Ok(Self { width, height })
    }

    /// Return `true` when the viewport is narrower than `breakpoint_px`.
    pub fn is_mobile(self, breakpoint_px: f64) -> bool {
        self.width < breakpoint_px
    }
}

/// Rendered placement of one visual element: translation, depth and uniform scale.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TransformState {
    /// Horizontal translation in pixels.
    pub x: f64,
    /// Vertical translation in pixels.
    pub y: f64,
    /// Depth along the camera axis (negative is further away).
    pub depth: f64,
    /// Uniform scale factor.
    pub scale: f64,
}

impl TransformState {
    /// Collapsed state: centered, pushed back and scaled to nothing.
    pub const COLLAPSED: Self = Self {
        x: 0.0,
        y: 0.0,
        depth: -1000.0,
        scale: 0.0,
    };

    /// Build a state from its four components.
    pub const fn new(x: f64, y: f64, depth: f64, scale: f64) -> Self {
        Self { x, y, depth, scale }
    }

    /// Translation component as a vector.
    pub fn translate(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

impl Default for TransformState {
    fn default() -> Self {
        Self::COLLAPSED
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
