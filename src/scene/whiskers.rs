//! Min/max error whisker layer.

use crate::data_types::RowSet;
use crate::scales::Scales;
use crate::theme::ChartTheme;

use super::{Animated, WhiskerNode, REFRESH_DURATION};

pub const CAP_HALF_WIDTH: f32 = 5.0;

/// Replaced wholesale each pass: one glyph per row, keyed by array
/// order, with a grow-in from zero size.
pub(super) fn build_whiskers(
    rows: &RowSet,
    scales: &Scales,
    margin_top: f32,
    theme: &ChartTheme,
    animate: bool,
) -> Vec<WhiskerNode> {
    rows.iter()
        .filter_map(|row| {
            let x = scales.category.center(row.key())?;
            let anchor = scales.value.map(row.avg.numeric);
            let grow = if animate {
                Animated::transition(0.0, 1.0, REFRESH_DURATION)
            } else {
                Animated::at_rest(1.0)
            };
            Some(WhiskerNode {
                x,
                y: margin_top + anchor,
                low_dy: scales.value.map(row.low.numeric) - anchor,
                high_dy: scales.value.map(row.high.numeric) - anchor,
                cap_half_width: CAP_HALF_WIDTH,
                stroke: theme.whisker_stroke,
                stroke_width: theme.whisker_width,
                grow,
            })
        })
        .collect()
}
