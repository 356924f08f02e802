//! Fixed legend entries, reconciled by label key.

use crate::theme::ChartTheme;

use super::LegendEntry;

pub const LABELS: [&str; 3] = ["Average balance", "3 month rolling average", "Min/max"];

/// Updates entries in place by key and inserts missing ones, so
/// repeated renders never accumulate duplicate swatches.
pub(super) fn reconcile(legend: &mut Vec<LegendEntry>, margin_top: f32, theme: &ChartTheme) {
    let targets = [
        LegendEntry {
            label: LABELS[0].to_string(),
            swatch_x: 50.0,
            swatch_y: margin_top - 40.0,
            swatch_width: 10.0,
            swatch_height: 10.0,
            swatch_fill: theme.bar_fill,
            text_x: 70.0,
            text_y: 50.0,
        },
        LegendEntry {
            label: LABELS[1].to_string(),
            swatch_x: 205.0,
            swatch_y: margin_top - 37.0,
            swatch_width: 15.0,
            swatch_height: 3.0,
            swatch_fill: theme.line_stroke,
            text_x: 225.0,
            text_y: 50.0,
        },
        LegendEntry {
            label: LABELS[2].to_string(),
            swatch_x: 410.0,
            swatch_y: margin_top - 37.0,
            swatch_width: 15.0,
            swatch_height: 3.0,
            swatch_fill: theme.whisker_stroke,
            text_x: 430.0,
            text_y: 50.0,
        },
    ];

    for target in targets {
        match legend.iter_mut().find(|e| e.label == target.label) {
            Some(existing) => *existing = target,
            None => legend.push(target),
        }
    }
    legend.retain(|e| LABELS.contains(&e.label.as_str()));
}
