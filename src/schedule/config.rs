use std::path::Path;

use anyhow::Context as _;

use crate::{
    animation::ease::Ease,
    foundation::error::{SpotlightError, SpotlightResult},
};

/// Every constant the spotlight sequence depends on.
///
/// Defaults reproduce the Campus Connect spotlight section. All fields fall back to their
/// default when missing from a JSON document, so a config file only needs to name the
/// values it overrides.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SpotlightConfig {
    /// Viewports narrower than this are treated as mobile.
    pub mobile_breakpoint_px: f64,
    /// Nominal scatter distance on mobile (informational).
    pub scatter_distance_mobile: f64,
    /// Nominal scatter distance on desktop (informational).
    pub scatter_distance_desktop: f64,
    /// Fraction of the viewport each element travels along its diagonal.
    pub scatter_multiplier: f64,
    /// Progress offset between consecutive elements.
    pub stagger_step: f64,
    /// Factor applied to delayed progress before interpolation.
    pub acceleration: f64,
    /// Depth of the collapsed state.
    pub start_depth: f64,
    /// Depth of the scattered state.
    pub end_depth: f64,
    /// End-scale amplification on mobile.
    pub scale_multiplier_mobile: f64,
    /// End-scale amplification on desktop.
    pub scale_multiplier_desktop: f64,
    /// Overall progress at which the covering element starts moving.
    pub cover_threshold: f64,
    /// Depth travelled by the covering element per unit of cover progress.
    pub cover_depth_travel: f64,
    /// Pinned region length as a multiple of the viewport height.
    pub pin_length_factor: f64,
    /// Seconds the host-side smoother takes to catch up with the scroll position.
    ///
    /// Only used by [`crate::Spotlight::on_scroll`]; direct progress updates are unsmoothed.
    pub scrub_lag_secs: f64,
    /// Curve used for the smoother's catch-up.
    pub scrub_ease: Ease,
}

impl Default for SpotlightConfig {
    fn default() -> Self {
        Self {
            mobile_breakpoint_px: 1000.0,
            scatter_distance_mobile: 50.0,
            scatter_distance_desktop: 100.0,
            scatter_multiplier: 0.5,
            stagger_step: 0.03,
            acceleration: 4.0,
            start_depth: -1000.0,
            end_depth: 2000.0,
            scale_multiplier_mobile: 4.0,
            scale_multiplier_desktop: 2.0,
            cover_threshold: 0.7,
            cover_depth_travel: 1000.0,
            pin_length_factor: 1.51,
            scrub_lag_secs: 1.0,
            scrub_ease: Ease::OutQuart,
        }
    }
}

impl SpotlightConfig {
    /// Load a JSON config file.
    pub fn from_path(path: &Path) -> SpotlightResult<Self> {
        let bytes = std::fs::read(path)
            .with_context(|| format!("read spotlight config '{}'", path.display()))?;
        Self::from_json_slice(&bytes)
    }

    /// Parse and validate a JSON config document.
    pub fn from_json_slice(bytes: &[u8]) -> SpotlightResult<Self> {
        let cfg: Self = serde_json::from_slice(bytes)
            .map_err(|e| SpotlightError::serde(format!("parse spotlight config: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Check every field against its accepted domain.
    pub fn validate(&self) -> SpotlightResult<()> {
        let fields = [
            ("mobile_breakpoint_px", self.mobile_breakpoint_px),
            ("scatter_distance_mobile", self.scatter_distance_mobile),
            ("scatter_distance_desktop", self.scatter_distance_desktop),
            ("scatter_multiplier", self.scatter_multiplier),
            ("stagger_step", self.stagger_step),
            ("acceleration", self.acceleration),
            ("start_depth", self.start_depth),
            ("end_depth", self.end_depth),
            ("scale_multiplier_mobile", self.scale_multiplier_mobile),
            ("scale_multiplier_desktop", self.scale_multiplier_desktop),
            ("cover_threshold", self.cover_threshold),
            ("cover_depth_travel", self.cover_depth_travel),
            ("pin_length_factor", self.pin_length_factor),
            ("scrub_lag_secs", self.scrub_lag_secs),
        ];
        if let Some((name, _)) = fields.iter().find(|(_, v)| !v.is_finite()) {
            return Err(SpotlightError::config(format!("{name} must be finite")));
        }

        if self.mobile_breakpoint_px <= 0.0 {
            return Err(SpotlightError::config("mobile_breakpoint_px must be > 0"));
        }
        if self.acceleration <= 0.0 {
            return Err(SpotlightError::config("acceleration must be > 0"));
        }
        if self.pin_length_factor <= 0.0 {
            return Err(SpotlightError::config("pin_length_factor must be > 0"));
        }
        if self.stagger_step < 0.0 {
            return Err(SpotlightError::config("stagger_step must be >= 0"));
        }
        if self.scrub_lag_secs < 0.0 {
            return Err(SpotlightError::config("scrub_lag_secs must be >= 0"));
        }
        if self.cover_depth_travel < 0.0 {
            return Err(SpotlightError::config("cover_depth_travel must be >= 0"));
        }
        if !(0.0..=1.0).contains(&self.cover_threshold) {
            return Err(SpotlightError::config("cover_threshold must be in [0, 1]"));
        }
        Ok(())
    }

    /// Scatter distance for the given device class.
    pub fn scatter_distance(&self, is_mobile: bool) -> f64 {
        if is_mobile {
            self.scatter_distance_mobile
        } else {
            self.scatter_distance_desktop
        }
    }

    /// End-scale amplification for the given device class.
    pub fn scale_multiplier(&self, is_mobile: bool) -> f64 {
        if is_mobile {
            self.scale_multiplier_mobile
        } else {
            self.scale_multiplier_desktop
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/schedule/config.rs"]
mod tests;
