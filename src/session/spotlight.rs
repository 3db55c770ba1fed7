use crate::{
    foundation::core::Viewport,
    foundation::error::SpotlightResult,
    schedule::config::SpotlightConfig,
    schedule::scheduler::{Scheduler, SpotlightFrame},
    scroll::pin::PinRegion,
    scroll::scrub::Scrub,
    session::target::RenderTarget,
};

/// State that only exists while the pinned region is mounted.
#[derive(Clone, Debug)]
struct Bound<H> {
    scheduler: Scheduler,
    elements: Vec<H>,
    covering: Option<H>,
    pin: PinRegion,
    scrub: Scrub,
    last_progress: f64,
}

/// Host-facing driver for one spotlight section.
///
/// The host owns the element handles and passes them to [`Spotlight::configure`]; the session
/// never discovers elements itself. Progress can be fed directly ([`Spotlight::on_progress`])
/// or derived from raw scroll offsets through the pinned region and scrub smoother
/// ([`Spotlight::on_scroll`] / [`Spotlight::tick`]).
#[derive(Clone, Debug)]
pub struct Spotlight<H> {
    cfg: SpotlightConfig,
    pin_start_px: f64,
    bound: Option<Bound<H>>,
}

impl<H> Spotlight<H> {
    /// Create an unconfigured session.
    pub fn new(cfg: SpotlightConfig) -> SpotlightResult<Self> {
        cfg.validate()?;
        Ok(Self {
            cfg,
            pin_start_px: 0.0,
            bound: None,
        })
    }

    /// Scroll offset at which the section pins. Takes effect on the next (re)configure.
    pub fn with_pin_start(mut self, start_px: f64) -> Self {
        self.pin_start_px = start_px;
        self
    }

    /// Active configuration.
    pub fn config(&self) -> &SpotlightConfig {
        &self.cfg
    }

    /// Return `true` between `configure` and `teardown`.
    pub fn is_configured(&self) -> bool {
        self.bound.is_some()
    }

    /// Scheduler of the current viewport, if configured.
    pub fn scheduler(&self) -> Option<&Scheduler> {
        self.bound.as_ref().map(|b| &b.scheduler)
    }

    /// Pinned scroll region of the current viewport, if configured.
    pub fn pin_region(&self) -> Option<PinRegion> {
        self.bound.as_ref().map(|b| b.pin)
    }

    /// Last progress applied to the render target, if configured.
    pub fn last_progress(&self) -> Option<f64> {
        self.bound.as_ref().map(|b| b.last_progress)
    }

    /// Bind handles for `viewport` and place everything at its base state.
    ///
    /// Replaces any previous binding.
    #[tracing::instrument(skip(self, elements, covering, target), fields(elements = elements.len()))]
    pub fn configure(
        &mut self,
        viewport: Viewport,
        elements: Vec<H>,
        covering: Option<H>,
        target: &mut impl RenderTarget<H>,
    ) {
        let scheduler = Scheduler::configure_unchecked(self.cfg.clone(), viewport, elements.len());
        let table = scheduler.table();
        for (handle, pair) in elements.iter().zip(&table.pairs) {
            target.apply(handle, pair.start);
        }
        if let Some(handle) = &covering {
            target.apply(handle, table.cover_base);
        }

        self.bound = Some(Bound {
            pin: PinRegion::new(self.pin_start_px, viewport, &self.cfg),
            scrub: Scrub::new(self.cfg.scrub_lag_secs, self.cfg.scrub_ease, 0.0),
            scheduler,
            elements,
            covering,
            last_progress: 0.0,
        });
    }

    /// Rebuild endpoints for a new viewport and re-apply the last progress.
    ///
    /// Returns the re-applied frame, or `None` when not configured.
    pub fn on_resize(
        &mut self,
        viewport: Viewport,
        target: &mut impl RenderTarget<H>,
    ) -> Option<SpotlightFrame> {
        let bound = self.bound.as_mut()?;
        bound.scheduler.reconfigure(viewport);
        bound.pin = PinRegion::new(self.pin_start_px, viewport, &self.cfg);
        tracing::debug!(
            width = viewport.width,
            height = viewport.height,
            is_mobile = bound.scheduler.table().is_mobile,
            "spotlight endpoints rebuilt"
        );
        let progress = bound.last_progress;
        self.on_progress(progress, target)
    }

    /// Evaluate `progress` and apply it to every bound handle.
    ///
    /// Returns `None` (and applies nothing) when not configured.
    pub fn on_progress(
        &mut self,
        progress: f64,
        target: &mut impl RenderTarget<H>,
    ) -> Option<SpotlightFrame> {
        let bound = self.bound.as_mut()?;
        let frame = bound.scheduler.on_progress(progress);
        for (handle, element) in bound.elements.iter().zip(&frame.elements) {
            target.apply(handle, element.transform);
        }
        if let Some(handle) = &bound.covering {
            target.apply(handle, frame.cover);
        }
        bound.last_progress = progress;
        Some(frame)
    }

    /// Feed a raw scroll offset observed at `now_secs`.
    ///
    /// The offset is mapped through the pinned region, the scrub smoother is retargeted, and
    /// the smoothed progress is applied.
    pub fn on_scroll(
        &mut self,
        scroll_px: f64,
        now_secs: f64,
        target: &mut impl RenderTarget<H>,
    ) -> Option<SpotlightFrame> {
        let bound = self.bound.as_mut()?;
        let raw = bound.pin.progress_at(scroll_px);
        bound.scrub.set_target(raw, now_secs);
        self.tick(now_secs, target)
    }

    /// Apply the smoothed progress at `now_secs`. Call once per rendered frame.
    pub fn tick(
        &mut self,
        now_secs: f64,
        target: &mut impl RenderTarget<H>,
    ) -> Option<SpotlightFrame> {
        let progress = self.bound.as_ref()?.scrub.sample(now_secs);
        self.on_progress(progress, target)
    }

    /// Return `true` when the scrubbed progress has caught up with the scroll position.
    pub fn is_settled(&self, now_secs: f64) -> bool {
        self.bound
            .as_ref()
            .is_none_or(|b| b.scrub.is_settled(now_secs))
    }

    /// Unbind handles; later updates are no-ops until the next `configure`.
    pub fn teardown(&mut self) {
        if self.bound.take().is_some() {
            tracing::debug!("spotlight torn down");
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/spotlight.rs"]
mod tests;
