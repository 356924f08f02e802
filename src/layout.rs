//! Viewport and plot-area arithmetic.

/// Upper bounds applied to ambient resize notifications before they
/// reach scale computation.
pub const MAX_VIEWPORT_WIDTH: f32 = 1200.0;
pub const MAX_VIEWPORT_HEIGHT: f32 = 600.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Clamps a raw window size to the supported maximum.
    pub fn clamped(width: f32, height: f32) -> Self {
        Self {
            width: width.min(MAX_VIEWPORT_WIDTH),
            height: height.min(MAX_VIEWPORT_HEIGHT),
        }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: MAX_VIEWPORT_WIDTH,
            height: MAX_VIEWPORT_HEIGHT,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Margins {
    pub right: f32,
    pub bottom: f32,
    pub top: f32,
    pub left: f32,
}

impl Default for Margins {
    fn default() -> Self {
        Self {
            right: 10.0,
            bottom: 150.0,
            top: 80.0,
            left: 140.0,
        }
    }
}

/// Drawing area left inside the margins.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotArea {
    pub width: f32,
    pub height: f32,
}

impl PlotArea {
    pub fn new(viewport: Viewport, margins: Margins) -> Self {
        Self {
            width: (viewport.width - margins.left - margins.right).max(0.0),
            height: (viewport.height - margins.top - margins.bottom).max(0.0),
        }
    }
}
