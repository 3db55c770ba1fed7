use crate::animation::ease::Ease;

/// Host-side lagged smoothing of progress toward the latest scroll-derived target.
///
/// Each new target starts a fresh catch-up tween from the currently displayed value, so
/// interrupting a tween never makes the output jump. Time is supplied by the caller.
/// Non-finite targets and times are ignored; the smoother keeps its current tween.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Scrub {
    lag_secs: f64,
    ease: Ease,
    from: f64,
    to: f64,
    start_secs: f64,
}

impl Scrub {
    /// Create a settled smoother resting at `initial`.
    pub fn new(lag_secs: f64, ease: Ease, initial: f64) -> Self {
        Self {
            lag_secs: lag_secs.max(0.0),
            ease,
            from: initial,
            to: initial,
            start_secs: 0.0,
        }
    }

    /// Latest requested target.
    pub fn target(&self) -> f64 {
        self.to
    }

    /// Retarget toward `target`, starting from the value shown at `now_secs`.
    pub fn set_target(&mut self, target: f64, now_secs: f64) {
        if !target.is_finite() || !now_secs.is_finite() {
            return;
        }
        let current = self.sample(now_secs);
        self.from = current;
        self.to = target;
        self.start_secs = now_secs;
    }

    /// Smoothed value at `now_secs`.
    pub fn sample(&self, now_secs: f64) -> f64 {
        if self.lag_secs == 0.0 {
            return self.to;
        }
        let elapsed = (now_secs - self.start_secs).max(0.0);
        let t = self.ease.apply(elapsed / self.lag_secs);
        self.from + (self.to - self.from) * t
    }

    /// Return `true` once the value has caught up with the target.
    pub fn is_settled(&self, now_secs: f64) -> bool {
        self.lag_secs == 0.0 || self.from == self.to || now_secs - self.start_secs >= self.lag_secs
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/scrub.rs"]
mod tests;
