//! Axis tick construction and label rules.

use crate::data_types::ChartMetadata;
use crate::layout::{Margins, PlotArea};
use crate::scales::Scales;

use super::{CategoryTick, TextNode, ValueTick};

/// Tick density requested from the value scale.
pub const VALUE_TICK_COUNT: usize = 5;

/// Formats a value tick as thousands with a `K` suffix.
pub fn format_value_tick(value: f64) -> String {
    let k = value / 1000.0;
    if k == k.trunc() {
        format!("{}K", k as i64)
    } else {
        format!("{k}K")
    }
}

/// Fixed truncation for the known category label format: the first four
/// characters plus everything after the sixth.
pub fn truncate_label(label: &str) -> String {
    let head: String = label.chars().take(4).collect();
    let tail: String = label.chars().skip(6).collect();
    format!("{head}{tail}")
}

pub(super) fn build_value_axis(scales: &Scales, margins: Margins, plot: PlotArea) -> Vec<ValueTick> {
    scales
        .value
        .ticks(VALUE_TICK_COUNT)
        .into_iter()
        .map(|value| ValueTick {
            y: margins.top + scales.value.map(value),
            label: format_value_tick(value),
            grid_from: margins.left,
            grid_to: plot.width,
        })
        .collect()
}

pub(super) fn build_category_axis(
    scales: &Scales,
    margins: Margins,
    plot: PlotArea,
) -> Vec<CategoryTick> {
    let baseline = margins.top + plot.height;
    scales
        .category
        .domain()
        .iter()
        .filter_map(|label| {
            let x = scales.category.center(label)?;
            Some(CategoryTick {
                x,
                y: baseline,
                label: truncate_label(label),
            })
        })
        .collect()
}

pub(super) fn build_titles(
    metadata: &ChartMetadata,
    margins: Margins,
    plot: PlotArea,
) -> (TextNode, TextNode) {
    let category = TextNode {
        x: plot.width / 2.0,
        y: plot.height + margins.bottom - 10.0,
        text: metadata.dimension_title.clone(),
        rotation: 0.0,
    };
    let value = TextNode {
        x: -plot.height / 1.4,
        y: margins.left / 3.0,
        text: metadata.measure_title.clone(),
        rotation: -90.0,
    };
    (category, value)
}
