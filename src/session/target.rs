use std::collections::BTreeMap;

use crate::foundation::core::TransformState;

/// Render layer that places host elements.
///
/// Implementations apply the state immediately; failures such as detached elements are the
/// implementation's concern.
pub trait RenderTarget<H> {
    /// Place `handle` at `state`.
    fn apply(&mut self, handle: &H, state: TransformState);
}

/// In-memory render target for tests and debugging.
///
/// Keeps the latest state per handle.
#[derive(Clone, Debug)]
pub struct RecordingTarget<H: Ord> {
    states: BTreeMap<H, TransformState>,
    applied: u64,
}

impl<H: Ord> Default for RecordingTarget<H> {
    fn default() -> Self {
        Self {
            states: BTreeMap::new(),
            applied: 0,
        }
    }
}

impl<H: Ord> RecordingTarget<H> {
    /// Create an empty target.
    pub fn new() -> Self {
        Self::default()
    }

    /// Latest state applied to `handle`, if any.
    pub fn state(&self, handle: &H) -> Option<TransformState> {
        self.states.get(handle).copied()
    }

    /// Total number of `apply` calls.
    pub fn applied(&self) -> u64 {
        self.applied
    }

    /// Borrow all recorded states.
    pub fn states(&self) -> &BTreeMap<H, TransformState> {
        &self.states
    }
}

impl<H: Ord + Clone> RenderTarget<H> for RecordingTarget<H> {
    fn apply(&mut self, handle: &H, state: TransformState) {
        self.states.insert(handle.clone(), state);
        self.applied += 1;
    }
}
