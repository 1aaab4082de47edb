pub mod scale;
pub mod types;

pub use scale::{DEFAULT_TICK_COUNT, Domain, compute_domain, compute_ticks, normalize};
pub use types::{PlotArea, RenderState, SurfaceSize};
