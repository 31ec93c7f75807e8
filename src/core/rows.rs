use crate::core::Group;

/// Vertical band `[top, bottom)` one group owns on the canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct RowBand {
    pub group_id: String,
    pub top: f64,
    pub bottom: f64,
}

impl RowBand {
    #[must_use]
    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    #[must_use]
    pub fn midpoint(&self) -> f64 {
        self.top + self.height() / 2.0
    }

    #[must_use]
    pub fn contains_y(&self, y: f64) -> bool {
        y >= self.top && y < self.bottom
    }
}

/// Folds row heights of visible groups, in display order, into their bands.
///
/// Rebuilt every redraw pass; the band list is the single source of vertical
/// placement for projection, labels and hit testing.
#[must_use]
pub fn resolve_row_bands<'a>(groups: impl IntoIterator<Item = &'a Group>) -> Vec<RowBand> {
    let mut bands = Vec::new();
    let mut cursor = 0.0;
    for group in groups {
        if !group.visible {
            continue;
        }
        let top = cursor;
        cursor += group.row_height;
        bands.push(RowBand {
            group_id: group.id.clone(),
            top,
            bottom: cursor,
        });
    }
    bands
}

/// Total canvas height required by the visible rows.
#[must_use]
pub fn total_rows_height(bands: &[RowBand]) -> f64 {
    bands.last().map_or(0.0, |band| band.bottom)
}

/// Maps a canvas Y coordinate to the row band under it, if any.
#[must_use]
pub fn band_at_y(bands: &[RowBand], y: f64) -> Option<&RowBand> {
    bands.iter().find(|band| band.contains_y(y))
}
