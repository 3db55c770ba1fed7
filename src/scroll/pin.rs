use crate::{foundation::core::Viewport, schedule::config::SpotlightConfig};

/// Scroll span during which the spotlight section stays pinned.
///
/// Starts when the section's top reaches the viewport's top and lasts
/// `viewport.height * pin_length_factor` pixels.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PinRegion {
    /// Scroll offset at which pinning starts.
    pub start_px: f64,
    /// Length of the pinned span in pixels.
    pub length_px: f64,
}

impl PinRegion {
    /// Pinned region starting at `start_px` sized for `viewport`.
    pub fn new(start_px: f64, viewport: Viewport, cfg: &SpotlightConfig) -> Self {
        Self {
            start_px,
            length_px: viewport.height * cfg.pin_length_factor,
        }
    }

    /// Scroll offset at which pinning ends.
    pub fn end_px(self) -> f64 {
        self.start_px + self.length_px
    }

    /// Normalized progress for a scroll offset, clamped to `[0, 1]`.
    ///
    /// A NaN offset maps to 0.
    pub fn progress_at(self, scroll_px: f64) -> f64 {
        if scroll_px.is_nan() {
            return 0.0;
        }
        if self.length_px <= 0.0 {
            return if scroll_px >= self.start_px { 1.0 } else { 0.0 };
        }
        ((scroll_px - self.start_px) / self.length_px).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/pin.rs"]
mod tests;
