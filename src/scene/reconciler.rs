//! Keyed scene reconciliation.

use std::collections::HashMap;

use tracing::debug;

use crate::data_types::{ChartMetadata, RowSet};
use crate::layout::{Margins, PlotArea, Viewport};
use crate::scales::Scales;
use crate::theme::ChartTheme;

use super::{axes, bars, legend, line, whiskers};
use super::{BarNode, BarState, RenderReason, Scene};

/// Owns the persistent scene and reconciles it against new data.
///
/// Touched from a single render-triggering control flow only; the bar
/// map is the one piece of mutable state that survives across passes.
pub struct SceneReconciler {
    margins: Margins,
    theme: ChartTheme,
    bars: HashMap<String, BarNode>,
    scene: Scene,
}

impl SceneReconciler {
    pub fn new(margins: Margins, theme: ChartTheme) -> Self {
        Self {
            margins,
            theme,
            bars: HashMap::new(),
            scene: Scene::default(),
        }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn margins(&self) -> Margins {
        self.margins
    }

    pub fn render(
        &mut self,
        rows: &RowSet,
        metadata: &ChartMetadata,
        scales: &Scales,
        viewport: Viewport,
        reason: RenderReason,
    ) {
        // Settle whatever the previous pass left animating before
        // diffing again, so exiting bars never outlive two passes.
        self.settle_bars();

        let plot = PlotArea::new(viewport, self.margins);
        let animate = reason != RenderReason::ViewportChanged;
        debug!(rows = rows.len(), ?reason, "render pass");

        bars::reconcile(&mut self.bars, rows, scales, self.margins.top, &self.theme);
        self.scene.bars = self.ordered_bars(rows);

        self.scene.value_axis = axes::build_value_axis(scales, self.margins, plot);
        self.scene.category_axis = axes::build_category_axis(scales, self.margins, plot);
        self.scene.line = line::build_line(rows, scales, self.margins.top, &self.theme, animate);
        self.scene.whiskers =
            whiskers::build_whiskers(rows, scales, self.margins.top, &self.theme, animate);
        legend::reconcile(&mut self.scene.legend, self.margins.top, &self.theme);

        let (category_title, value_title) = axes::build_titles(metadata, self.margins, plot);
        self.scene.category_title = Some(category_title);
        self.scene.value_title = Some(value_title);
    }

    /// Advances the logical lifecycle once the host finishes the current
    /// animations: entering bars become steady, exited bars are released.
    pub fn complete_transitions(&mut self) {
        self.settle_bars();
        let bars = &self.bars;
        self.scene.bars.retain(|node| bars.contains_key(&node.key));
        for node in self.scene.bars.iter_mut() {
            if let Some(bar) = bars.get(&node.key) {
                *node = bar.clone();
            }
        }
        if let Some(line) = self.scene.line.as_mut() {
            line.dash_offset.settle();
        }
        for whisker in self.scene.whiskers.iter_mut() {
            whisker.grow.settle();
        }
    }

    fn settle_bars(&mut self) {
        self.bars.retain(|_, bar| bar.state != BarState::Exiting);
        for bar in self.bars.values_mut() {
            if bar.state == BarState::Entering {
                bar.state = BarState::Steady;
            }
            bar.y.settle();
            bar.height.settle();
        }
    }

    /// Display order: live rows first, then exiting bars.
    fn ordered_bars(&self, rows: &RowSet) -> Vec<BarNode> {
        let mut ordered: Vec<BarNode> = rows
            .iter()
            .filter_map(|row| self.bars.get(row.key()).cloned())
            .collect();
        let mut exiting: Vec<BarNode> = self
            .bars
            .values()
            .filter(|bar| bar.state == BarState::Exiting)
            .cloned()
            .collect();
        exiting.sort_by(|a, b| a.key.cmp(&b.key));
        ordered.extend(exiting);
        ordered
    }
}
