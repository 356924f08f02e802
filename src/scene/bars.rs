//! Keyed enter/update/exit reconciliation for the bar group.

use std::collections::{HashMap, HashSet};

use crate::data_types::RowSet;
use crate::scales::Scales;
use crate::theme::ChartTheme;

use super::{Animated, BarNode, BarState, REFRESH_DURATION};

/// Diffs the keyed bar map against the new rows. Bars enter at the
/// value baseline with zero height; updates snap band geometry and
/// animate value geometry; missing keys collapse toward the baseline
/// and stay in the map as `Exiting` until released.
pub(super) fn reconcile(
    bars: &mut HashMap<String, BarNode>,
    rows: &RowSet,
    scales: &Scales,
    margin_top: f32,
    theme: &ChartTheme,
) {
    let baseline = margin_top + scales.value.map(0.0);

    let live: HashSet<&str> = rows.iter().map(|r| r.key()).collect();
    for (key, bar) in bars.iter_mut() {
        if !live.contains(key.as_str()) && bar.state != BarState::Exiting {
            bar.state = BarState::Exiting;
            bar.y = Animated::transition(bar.y.to, baseline, REFRESH_DURATION);
            bar.height = Animated::transition(bar.height.to, 0.0, REFRESH_DURATION);
        }
    }

    for row in rows.iter() {
        let Some(x) = scales.category.map(row.key()) else {
            continue;
        };
        let width = scales.category.bandwidth();
        let y_target = margin_top + scales.value.map(row.avg.numeric);
        let height_target = (scales.value.map(row.avg.numeric) - scales.value.map(0.0)).abs();

        match bars.get_mut(row.key()) {
            Some(bar) => {
                bar.x = x;
                bar.width = width;
                bar.y = Animated::transition(bar.y.to, y_target, REFRESH_DURATION);
                bar.height = Animated::transition(bar.height.to, height_target, REFRESH_DURATION);
                if bar.state == BarState::Exiting {
                    // A key that reappears mid-exit resumes as live.
                    bar.state = BarState::Steady;
                }
            }
            None => {
                bars.insert(
                    row.key().to_string(),
                    BarNode {
                        key: row.key().to_string(),
                        x,
                        width,
                        y: Animated::transition(baseline, y_target, REFRESH_DURATION),
                        height: Animated::transition(0.0, height_target, REFRESH_DURATION),
                        fill: theme.bar_fill,
                        state: BarState::Entering,
                    },
                );
            }
        }
    }
}
