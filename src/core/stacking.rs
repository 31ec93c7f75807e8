use indexmap::IndexMap;

use crate::core::shading::ShadeTarget;
use crate::core::{DataPoint, Group, ShadeOrientation};

/// Adds the "below" series onto `current`, elementwise by index.
///
/// Only scalar points accumulate; a point without a counterpart in the
/// shorter series keeps its raw value.
pub fn stack_onto(current: &mut [DataPoint], below: &[DataPoint]) {
    for (point, below_point) in current.iter_mut().zip(below) {
        if let (Some(y), Some(below_y)) = (point.y, below_point.y) {
            point.y = Some(y + below_y);
        }
    }
}

/// Runs the cumulative stacking chain over visible groups in display order.
///
/// Eligible groups (line/trend style, not excluded) are summed onto the
/// previous eligible group's already-stacked series; ineligible groups do
/// not participate and do not break the chain. Shading orientation `top` is
/// resolved against the same below relationship: the below group inherits a
/// link to the current group when it is not already group-linked, otherwise
/// the current group links down to the below group.
pub fn apply_stacking(
    groups: &[Group],
    series: &mut IndexMap<String, Vec<DataPoint>>,
    stack_enabled: bool,
    links: &mut IndexMap<String, ShadeTarget>,
) {
    if !stack_enabled {
        return;
    }

    let mut below: Option<&Group> = None;
    for group in groups {
        if !group.style.is_stackable() || group.exclude_from_stacking {
            continue;
        }

        if let Some(below_group) = below {
            let below_series = series.get(&below_group.id).cloned().unwrap_or_default();
            if let Some(current) = series.get_mut(&group.id) {
                stack_onto(current, &below_series);
            }

            if group.shaded.enabled && group.shaded.orientation != ShadeOrientation::Group {
                let below_is_group_linked =
                    matches!(links.get(&below_group.id), Some(ShadeTarget::Group(_)));
                if group.shaded.orientation == ShadeOrientation::Top && !below_is_group_linked {
                    links.insert(
                        below_group.id.clone(),
                        ShadeTarget::Group(group.id.clone()),
                    );
                } else {
                    links.insert(
                        group.id.clone(),
                        ShadeTarget::Group(below_group.id.clone()),
                    );
                }
            }
        }

        below = Some(group);
    }
}
