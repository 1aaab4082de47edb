//! chart-lite: a minimal line and horizontal-bar charting engine.
//!
//! Charts are drawn through a small set of immediate-mode surface primitives
//! (clear, stroke path, fill path, fill rect, text). The configuration shape is
//! compatible with the subset of the Chart.js contract used by existing call
//! sites, so a `ChartConfig` can be parsed straight from that JSON.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{Chart, ChartConfig, ChartKind, ChartOptions, Dataset};
pub use error::{ChartError, ChartResult};
