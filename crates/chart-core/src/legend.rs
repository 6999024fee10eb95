// File: crates/chart-core/src/legend.rs
// Summary: Legend box sizing and placement inside the plot area.

use crate::geometry::RectI32;

/// Plot corner where the legend box is anchored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Corner {
    UpperRight,
    UpperLeft,
    LowerLeft,
    LowerRight,
}

impl Corner {
    /// Preference order used to break ties.
    pub const ALL: [Corner; 4] = [Corner::UpperRight, Corner::UpperLeft, Corner::LowerLeft, Corner::LowerRight];
}

/// Gap between the legend box and the plot edges, in pixels.
pub const LEGEND_PAD: f32 = 8.0;
/// Height of one legend entry.
pub const LEGEND_ROW: f32 = 18.0;
/// Length of the line sample drawn in front of each label.
pub const LEGEND_SAMPLE: f32 = 28.0;

/// Box size for `rows` entries whose widest label measures `text_width`.
pub fn legend_box_size(text_width: f32, rows: usize) -> (f32, f32) {
    let width = 8.0 + LEGEND_SAMPLE + 8.0 + text_width + 8.0;
    let height = 6.0 + LEGEND_ROW * rows as f32 + 2.0;
    (width, height)
}

/// Center of the line sample (and its marker) for entry `row` of a box at `(left, top)`.
pub fn sample_center(left: f32, top: f32, row: usize) -> (f32, f32) {
    (left + 8.0 + LEGEND_SAMPLE * 0.5, top + 6.0 + LEGEND_ROW * (row as f32 + 0.5))
}

/// Legend box of `width` x `height` anchored at `corner` of `plot`.
pub fn legend_rect(plot: &RectI32, corner: Corner, width: f32, height: f32) -> (f32, f32, f32, f32) {
    let (l, t, r, b) = (plot.left as f32, plot.top as f32, plot.right as f32, plot.bottom as f32);
    let left = match corner {
        Corner::UpperLeft | Corner::LowerLeft => l + LEGEND_PAD,
        Corner::UpperRight | Corner::LowerRight => r - LEGEND_PAD - width,
    };
    let top = match corner {
        Corner::UpperLeft | Corner::UpperRight => t + LEGEND_PAD,
        Corner::LowerLeft | Corner::LowerRight => b - LEGEND_PAD - height,
    };
    (left, top, left + width, top + height)
}

/// Pick the corner whose legend box covers the fewest screen points.
pub fn best_corner(plot: &RectI32, width: f32, height: f32, points: &[(f32, f32)]) -> Corner {
    let mut best = Corner::UpperRight;
    let mut best_hits = usize::MAX;
    for corner in Corner::ALL {
        let (l, t, r, b) = legend_rect(plot, corner, width, height);
        let hits = points
            .iter()
            .filter(|&&(x, y)| x >= l && x <= r && y >= t && y <= b)
            .count();
        if hits < best_hits {
            best = corner;
            best_hits = hits;
        }
    }
    best
}
