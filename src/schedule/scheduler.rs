use crate::{
    animation::lerp::{Lerp, interpolate},
    foundation::core::{TransformState, Viewport},
    foundation::error::SpotlightResult,
    schedule::config::SpotlightConfig,
    schedule::endpoints::EndpointTable,
};

/// Evaluated state of one element at a given progress.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct ElementFrame {
    /// Element index.
    pub index: usize,
    /// Delayed, accelerated progress (floored at 0, unbounded above).
    pub element_progress: f64,
    /// Interpolated transform.
    pub transform: TransformState,
}

/// Everything the render target needs for one progress value.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct SpotlightFrame {
    /// Overall progress the frame was evaluated at.
    pub progress: f64,
    /// Element states in element order.
    pub elements: Vec<ElementFrame>,
    /// Covering element progress (floored at 0, unbounded above).
    pub cover_progress: f64,
    /// Covering element state.
    pub cover: TransformState,
}

/// Pure mapping from scroll progress to per-element transforms.
///
/// Holds the config and the endpoint table of the current viewport. Every call to
/// [`Scheduler::on_progress`] recomputes from scratch, so scrubbing backward exactly undoes
/// forward motion.
#[derive(Clone, Debug)]
pub struct Scheduler {
    cfg: SpotlightConfig,
    table: EndpointTable,
}

impl Scheduler {
    /// Build a scheduler for `element_count` elements in `viewport`.
    ///
    /// Rejects configs that fail [`SpotlightConfig::validate`].
    #[tracing::instrument(skip(cfg))]
    pub fn configure(
        cfg: SpotlightConfig,
        viewport: Viewport,
        element_count: usize,
    ) -> SpotlightResult<Self> {
        cfg.validate()?;
        Ok(Self::configure_unchecked(cfg, viewport, element_count))
    }

    /// Build a scheduler from a config the caller has already validated.
    pub(crate) fn configure_unchecked(
        cfg: SpotlightConfig,
        viewport: Viewport,
        element_count: usize,
    ) -> Self {
        let table = EndpointTable::build(&cfg, viewport, element_count);
        Self { cfg, table }
    }

    /// Rebuild the endpoint table for a new viewport, keeping the element count.
    ///
    /// The new table is computed before it replaces the old one.
    pub fn reconfigure(&mut self, viewport: Viewport) {
        let table = EndpointTable::build(&self.cfg, viewport, self.table.len());
        self.table = table;
    }

    /// Active configuration.
    pub fn config(&self) -> &SpotlightConfig {
        &self.cfg
    }

    /// Endpoint table of the current viewport.
    pub fn table(&self) -> &EndpointTable {
        &self.table
    }

    /// Progress offset before element `index` starts moving.
    pub fn stagger_delay(&self, index: usize) -> f64 {
        index as f64 * self.cfg.stagger_step
    }

    /// Interpolation fraction of element `index` at `progress`.
    pub fn element_progress(&self, progress: f64, index: usize) -> f64 {
        ((progress - self.stagger_delay(index)) * self.cfg.acceleration).max(0.0)
    }

    /// Interpolation fraction of the covering element at `progress`.
    pub fn cover_progress(&self, progress: f64) -> f64 {
        ((progress - self.cfg.cover_threshold) * self.cfg.acceleration).max(0.0)
    }

    /// Transform of element `index` at `progress`, or `None` for an unknown index.
    pub fn element_transform(&self, progress: f64, index: usize) -> Option<TransformState> {
        let pair = self.table.pairs.get(index)?;
        let end = self.table.amplified_end(index)?;
        let t = self.element_progress(progress, index);
        Some(TransformState::lerp(&pair.start, &end, t))
    }

    /// Transform of the covering element at `progress`.
    pub fn cover_transform(&self, progress: f64) -> TransformState {
        let t = self.cover_progress(progress);
        TransformState {
            x: 0.0,
            y: 0.0,
            depth: self.table.cover_base.depth + self.cfg.cover_depth_travel * t,
            scale: interpolate(0.0, 1.0, t),
        }
    }

    /// Evaluate every element and the cover at `progress`.
    pub fn on_progress(&self, progress: f64) -> SpotlightFrame {
        let elements = (0..self.table.len())
            .filter_map(|index| {
                Some(ElementFrame {
                    index,
                    element_progress: self.element_progress(progress, index),
                    transform: self.element_transform(progress, index)?,
                })
            })
            .collect();

        SpotlightFrame {
            progress,
            elements,
            cover_progress: self.cover_progress(progress),
            cover: self.cover_transform(progress),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/schedule/scheduler.rs"]
mod tests;
