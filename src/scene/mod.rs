//! Persistent chart scene: named groups reconciled against row data.
//!
//! The scene is the render boundary. Hosts read it and draw; only the
//! reconciler mutates it. Animated properties are described as
//! from/to transitions so the host can tween them; logical lifecycle
//! advances via [`SceneReconciler::complete_transitions`].

pub mod axes;
pub mod bars;
pub mod legend;
pub mod line;
pub mod reconciler;
pub mod whiskers;

pub use reconciler::SceneReconciler;

use std::time::Duration;

use crate::theme::Color;

/// Duration of the value-driven refresh transitions.
pub const REFRESH_DURATION: Duration = Duration::from_millis(1000);

/// Why a render pass was triggered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderReason {
    Initial,
    DataChanged,
    ViewportChanged,
}

/// A property transitioning from one value to another. `from == to`
/// means the property is at rest.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Animated<T> {
    pub from: T,
    pub to: T,
    pub duration: Duration,
}

impl<T: Copy + PartialEq> Animated<T> {
    pub fn at_rest(value: T) -> Self {
        Self {
            from: value,
            to: value,
            duration: Duration::ZERO,
        }
    }

    pub fn transition(from: T, to: T, duration: Duration) -> Self {
        Self { from, to, duration }
    }

    pub fn is_resting(&self) -> bool {
        self.from == self.to
    }

    /// Collapses the transition to its end value.
    pub fn settle(&mut self) {
        self.from = self.to;
        self.duration = Duration::ZERO;
    }
}

/// Lifecycle of a keyed bar element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BarState {
    Entering,
    Steady,
    Exiting,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BarNode {
    pub key: String,
    /// Band geometry, snapped on every pass.
    pub x: f32,
    pub width: f32,
    /// Value-driven geometry, animated.
    pub y: Animated<f32>,
    pub height: Animated<f32>,
    pub fill: Color,
    pub state: BarState,
}

/// One labeled tick on the value axis; the grid line spans the plot.
#[derive(Clone, Debug, PartialEq)]
pub struct ValueTick {
    pub y: f32,
    pub label: String,
    pub grid_from: f32,
    pub grid_to: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CategoryTick {
    pub x: f32,
    pub y: f32,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TextNode {
    pub x: f32,
    pub y: f32,
    pub text: String,
    /// Degrees, counter-clockwise.
    pub rotation: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LineNode {
    pub points: Vec<(f32, f32)>,
    pub stroke: Color,
    pub width: f32,
    /// Entrance reveal: the dash offset interpolates from the full path
    /// length down to zero.
    pub dash_offset: Animated<f32>,
}

/// Min/max range glyph anchored at the value image of the average.
#[derive(Clone, Debug, PartialEq)]
pub struct WhiskerNode {
    pub x: f32,
    pub y: f32,
    /// Cap offsets relative to the anchor.
    pub low_dy: f32,
    pub high_dy: f32,
    pub cap_half_width: f32,
    pub stroke: Color,
    pub stroke_width: f32,
    /// Grow-in from zero size to full size.
    pub grow: Animated<f32>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LegendEntry {
    pub label: String,
    pub swatch_x: f32,
    pub swatch_y: f32,
    pub swatch_width: f32,
    pub swatch_height: f32,
    pub swatch_fill: Color,
    pub text_x: f32,
    pub text_y: f32,
}

/// Named, independently addressable groups, owned and mutated only by
/// the reconciler.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    pub bars: Vec<BarNode>,
    pub value_axis: Vec<ValueTick>,
    pub category_axis: Vec<CategoryTick>,
    pub line: Option<LineNode>,
    pub whiskers: Vec<WhiskerNode>,
    pub legend: Vec<LegendEntry>,
    pub category_title: Option<TextNode>,
    pub value_title: Option<TextNode>,
}
