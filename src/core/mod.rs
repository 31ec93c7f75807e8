pub mod conversions;
pub mod group;
pub mod labels;
pub mod projection;
pub mod range;
pub mod rows;
pub mod sampling;
pub mod scale;
pub mod shading;
pub mod stacking;
pub mod time_scale;
pub mod types;
pub mod value_axis;
pub mod windowing;

pub use group::{AxisSide, Group, GroupStyle, SamplingOptions, ShadeOptions, ShadeOrientation};
pub use labels::{PlacedLabel, PlacedLabels, place_group_labels};
pub use projection::{ProjectedSeries, ROW_PADDING_PX, project_band_series, project_scalar_series};
pub use range::{GroupScaleValues, ValueRange, aggregate_group_values};
pub use rows::{RowBand, band_at_y, resolve_row_bands, total_rows_height};
pub use sampling::{sample_series, sample_to_target};
pub use scale::LinearScale;
pub use shading::{ShadeTarget, initial_shade_links, resolve_shade_target};
pub use stacking::{apply_stacking, stack_onto};
pub use time_scale::{TimeScale, TimeScaleTuning};
pub use types::{DataPoint, ScreenPoint, Viewport};
pub use value_axis::{AxisState, ValueAxis, estimate_label_text_width_px, format_label_value};
pub use windowing::points_in_time_window;
