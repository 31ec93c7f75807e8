mod axis_stabilizer;
mod engine;
mod engine_config;
mod events;
mod frame_builder;
mod invalidation;

pub use axis_stabilizer::{AxisRelayoutDecision, AxisWidths, resolve_axis_relayout};
pub use engine::{ChartEngine, RedrawOutcome};
pub use engine_config::ChartEngineConfig;
pub use events::{ChartEvent, EventHandler};
pub use invalidation::{PendingRedraw, RedrawTopic};
