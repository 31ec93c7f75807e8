use indexmap::IndexMap;
use tracing::warn;

use crate::core::{Group, ShadeOrientation};

/// What a shaded group's fill is drawn against, resolved for one pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShadeTarget {
    /// The group's own zero baseline.
    OwnBaseline,
    /// Another group's path, identified by group id.
    Group(String),
}

/// Initial per-pass shade links derived from group configuration alone.
///
/// `Top`-oriented groups stay unlinked here; the stacking accumulator
/// resolves them against the "below" chain.
#[must_use]
pub fn initial_shade_links<'a>(
    groups: impl IntoIterator<Item = &'a Group>,
) -> IndexMap<String, ShadeTarget> {
    let mut links = IndexMap::new();
    for group in groups {
        match group.shaded.orientation {
            ShadeOrientation::Own => {
                links.insert(group.id.clone(), ShadeTarget::OwnBaseline);
            }
            ShadeOrientation::Group => {
                if let Some(target) = &group.shaded.group_id {
                    links.insert(group.id.clone(), ShadeTarget::Group(target.clone()));
                }
            }
            ShadeOrientation::Top => {}
        }
    }
    links
}

/// Validates a group's resolved shade target against the visible group set.
///
/// An unknown target is a configuration error: the group's shading is
/// skipped for this pass and a diagnostic is emitted, but the pass continues.
#[must_use]
pub fn resolve_shade_target(
    group: &Group,
    links: &IndexMap<String, ShadeTarget>,
    visible_ids: &[String],
) -> Option<ShadeTarget> {
    if !group.shaded.enabled {
        return None;
    }

    let target = links
        .get(&group.id)
        .cloned()
        .unwrap_or(ShadeTarget::OwnBaseline);
    if let ShadeTarget::Group(target_id) = &target {
        if !visible_ids.iter().any(|id| id == target_id) {
            warn!(
                group = %group.id,
                target = %target_id,
                "unknown shading group target, skipping shading"
            );
            return None;
        }
    }
    Some(target)
}
