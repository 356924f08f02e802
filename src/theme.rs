use serde::{Deserialize, Serialize};

/// Straight-alpha RGBA color, components in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xff) as f32 / 255.0,
            g: ((hex >> 8) & 0xff) as f32 / 255.0,
            b: (hex & 0xff) as f32 / 255.0,
            a: 1.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChartTheme {
    pub bar_fill: Color,
    pub line_stroke: Color,
    pub line_width: f32,
    pub whisker_stroke: Color,
    pub whisker_width: f32,
    pub grid_opacity: f32,
    pub axis_font_size: f32,
    pub title_font_size: f32,
}

impl Default for ChartTheme {
    fn default() -> Self {
        Self {
            bar_fill: Color::from_hex(0x6d8ea6),
            line_stroke: Color::from_hex(0xdb0a0a),
            line_width: 3.0,
            whisker_stroke: Color::from_hex(0x000000),
            whisker_width: 2.0,
            grid_opacity: 0.2,
            axis_font_size: 14.0,
            title_font_size: 19.2,
        }
    }
}
