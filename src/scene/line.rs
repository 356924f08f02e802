//! Rolling-average overlay.

use crate::data_types::RowSet;
use crate::scales::Scales;
use crate::theme::ChartTheme;

use super::{Animated, LineNode, REFRESH_DURATION};

/// Leading rows excluded while the rolling statistic warms up.
pub const WARMUP_ROWS: usize = 2;

/// Rebuilds the line wholesale: one point per row past the warm-up
/// window, or None when fewer than three rows are present.
pub(super) fn build_line(
    rows: &RowSet,
    scales: &Scales,
    margin_top: f32,
    theme: &ChartTheme,
    animate: bool,
) -> Option<LineNode> {
    if rows.len() <= WARMUP_ROWS {
        return None;
    }
    let points: Vec<(f32, f32)> = rows
        .iter()
        .skip(WARMUP_ROWS)
        .filter_map(|row| {
            let x = scales.category.center(row.key())?;
            Some((x, margin_top + scales.value.map(row.rolling.numeric)))
        })
        .collect();
    if points.is_empty() {
        return None;
    }
    let length = path_length(&points);
    let dash_offset = if animate {
        Animated::transition(length, 0.0, REFRESH_DURATION)
    } else {
        Animated::at_rest(0.0)
    };
    Some(LineNode {
        points,
        stroke: theme.line_stroke,
        width: theme.line_width,
        dash_offset,
    })
}

fn path_length(points: &[(f32, f32)]) -> f32 {
    points
        .windows(2)
        .map(|w| {
            let (x0, y0) = w[0];
            let (x1, y1) = w[1];
            ((x1 - x0).powi(2) + (y1 - y0).powi(2)).sqrt()
        })
        .sum()
}
