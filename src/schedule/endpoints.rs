use crate::{
    foundation::core::{TransformState, Vec2, Viewport},
    schedule::config::SpotlightConfig,
};

/// Diagonal an element travels along while scattering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScatterDirection {
    /// Toward the top-left corner.
    UpLeft,
    /// Toward the top-right corner.
    UpRight,
    /// Toward the bottom-left corner.
    DownLeft,
    /// Toward the bottom-right corner.
    DownRight,
}

impl ScatterDirection {
    /// Assignment order; element `i` takes `ORDER[i % 4]`.
    pub const ORDER: [Self; 4] = [Self::UpLeft, Self::UpRight, Self::DownLeft, Self::DownRight];

    /// Direction assigned to the element at `index`.
    pub fn for_index(index: usize) -> Self {
        Self::ORDER[index % Self::ORDER.len()]
    }

    /// Unit-per-axis direction vector (screen space, +y is down).
    pub fn vector(self) -> Vec2 {
        match self {
            Self::UpLeft => Vec2::new(-1.0, -1.0),
            Self::UpRight => Vec2::new(1.0, -1.0),
            Self::DownLeft => Vec2::new(-1.0, 1.0),
            Self::DownRight => Vec2::new(1.0, 1.0),
        }
    }
}

/// Collapsed and scattered states of one element.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct EndpointPair {
    /// Fully collapsed, hidden state.
    pub start: TransformState,
    /// Fully scattered state before device-class scale amplification.
    pub end: TransformState,
    /// Direction used to build `end`.
    pub direction: ScatterDirection,
}

/// Endpoints for every element, fixed for one viewport size.
///
/// Built in full by [`EndpointTable::build`] and never mutated; a resize builds a new table.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct EndpointTable {
    /// Viewport the table was built for.
    pub viewport: Viewport,
    /// `viewport.width < mobile_breakpoint_px`.
    pub is_mobile: bool,
    /// Nominal scatter distance for the device class.
    pub scatter_distance: f64,
    /// Amplification applied to `end.scale` during interpolation.
    pub scale_multiplier: f64,
    /// Baseline of the covering element.
    pub cover_base: TransformState,
    /// One pair per element, in element order.
    pub pairs: Vec<EndpointPair>,
}

impl EndpointTable {
    /// Compute endpoints for `element_count` elements in `viewport`.
    #[tracing::instrument(skip(cfg))]
    pub fn build(cfg: &SpotlightConfig, viewport: Viewport, element_count: usize) -> Self {
        let is_mobile = viewport.is_mobile(cfg.mobile_breakpoint_px);
        let start = TransformState::new(0.0, 0.0, cfg.start_depth, 0.0);

        let pairs = (0..element_count)
            .map(|index| {
                let direction = ScatterDirection::for_index(index);
                let dir = direction.vector();
                let end = TransformState::new(
                    dir.x * viewport.width * cfg.scatter_multiplier,
                    dir.y * viewport.height * cfg.scatter_multiplier,
                    cfg.end_depth,
                    1.0,
                );
                EndpointPair {
                    start,
                    end,
                    direction,
                }
            })
            .collect();

        Self {
            viewport,
            is_mobile,
            scatter_distance: cfg.scatter_distance(is_mobile),
            scale_multiplier: cfg.scale_multiplier(is_mobile),
            cover_base: TransformState::new(0.0, 0.0, cfg.start_depth, 0.0),
            pairs,
        }
    }

    /// Number of elements covered by the table.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Return `true` when the table has no elements.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// End state of element `index` with the device-class scale applied.
    pub fn amplified_end(&self, index: usize) -> Option<TransformState> {
        self.pairs.get(index).map(|p| TransformState {
            scale: p.end.scale * self.scale_multiplier,
            ..p.end
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/schedule/endpoints.rs"]
mod tests;
