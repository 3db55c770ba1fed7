use crate::schedule::scheduler::{Scheduler, SpotlightFrame};

/// Evaluate `steps + 1` evenly spaced progress values from 0 to 1 inclusive.
///
/// `steps == 0` yields a single frame at progress 0.
pub fn sample_sweep(scheduler: &Scheduler, steps: u32) -> Vec<SpotlightFrame> {
    if steps == 0 {
        return vec![scheduler.on_progress(0.0)];
    }
    (0..=steps)
        .map(|i| scheduler.on_progress(f64::from(i) / f64::from(steps)))
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/schedule/sample.rs"]
mod tests;
