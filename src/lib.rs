//! Spotlight is a scroll-progress driven animation scheduler.
//!
//! A pinned scroll region reports a normalized progress in `[0, 1]`. The scheduler maps that
//! progress to a transform (`x`, `y`, depth, scale) for each of N elements scattering toward
//! the viewport diagonals with a per-element stagger, and for one covering element revealed
//! during the last part of the region.
//!
//! # Pipeline overview
//!
//! 1. **Configure**: `SpotlightConfig + Viewport + element count -> EndpointTable`
//! 2. **Couple** (optional): raw scroll offset `-> PinRegion -> Scrub -> progress`
//! 3. **Evaluate**: `progress -> SpotlightFrame` (pure, recomputed from scratch)
//! 4. **Apply**: `SpotlightFrame -> RenderTarget`
//!
//! The mapping only floors the interpolation fraction at zero. Above one it keeps
//! extrapolating, so elements fly past their nominal end state late in the region.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod foundation;
mod schedule;
mod scroll;
mod session;

pub use animation::ease::Ease;
pub use animation::lerp::{Lerp, interpolate};
pub use foundation::core::{TransformState, Vec2, Viewport};
pub use foundation::error::{SpotlightError, SpotlightResult};
pub use schedule::config::SpotlightConfig;
pub use schedule::endpoints::{EndpointPair, EndpointTable, ScatterDirection};
pub use schedule::sample::sample_sweep;
pub use schedule::scheduler::{ElementFrame, Scheduler, SpotlightFrame};
pub use scroll::pin::PinRegion;
pub use scroll::scrub::Scrub;
pub use session::spotlight::Spotlight;
pub use session::target::{RecordingTarget, RenderTarget};
