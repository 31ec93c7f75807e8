//! rowchart-rs: row-oriented time-series chart layout engine.
//!
//! Each chart row ("group") owns a vertical slice of the canvas and its own
//! value scale. The crate computes, per redraw pass, where every visible data
//! point lands in screen space: windowing and sampling of the visible data,
//! X/Y coordinate conversion per group, cumulative stacking, value-axis width
//! stabilization with abort-and-retry, and overlap-free label placement.
//! Drawing backends consume the resulting primitive batches through the
//! [`render::Renderer`] trait.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{ChartEngine, ChartEngineConfig};
pub use error::{ChartError, ChartResult};
