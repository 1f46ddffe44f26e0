use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::ShapeKind;

pub const DEFAULT_COLOR: &str = "#000000";
pub const DEFAULT_STROKE_WIDTH: f64 = 6.0;
/// Shapes ignore the pen size and always stroke at this width.
pub const SHAPE_LINE_WIDTH: f64 = 5.0;
/// Side of the square cleared around the pointer while erasing.
pub const ERASER_SIZE: f64 = 20.0;

const MAX_COLOR_LEN: usize = 32;
const MIN_STROKE_WIDTH: f64 = 1.0;
const MAX_STROKE_WIDTH: f64 = 60.0;

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum DrawMode {
    #[default]
    Freehand,
    Rectangle,
    Circle,
    Line,
}

impl DrawMode {
    pub fn shape_kind(self) -> Option<ShapeKind> {
        match self {
            DrawMode::Freehand => None,
            DrawMode::Rectangle => Some(ShapeKind::Rectangle),
            DrawMode::Circle => Some(ShapeKind::Circle),
            DrawMode::Line => Some(ShapeKind::Line),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DrawMode::Freehand => "freehand",
            DrawMode::Rectangle => "rectangle",
            DrawMode::Circle => "circle",
            DrawMode::Line => "line",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseModeError(String);

impl fmt::Display for ParseModeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown drawing mode: {:?}", self.0)
    }
}

impl std::error::Error for ParseModeError {}

impl FromStr for DrawMode {
    type Err = ParseModeError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "freehand" => Ok(DrawMode::Freehand),
            "rectangle" => Ok(DrawMode::Rectangle),
            "circle" => Ok(DrawMode::Circle),
            "line" => Ok(DrawMode::Line),
            other => Err(ParseModeError(other.to_string())),
        }
    }
}

/// Snapshot of the toolbar state. Core operations only ever read it.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct DrawConfig {
    pub color: String,
    pub stroke_width: f64,
    pub mode: DrawMode,
    pub ruler_assist: bool,
    pub eraser: bool,
}

impl Default for DrawConfig {
    fn default() -> Self {
        Self {
            color: DEFAULT_COLOR.to_string(),
            stroke_width: DEFAULT_STROKE_WIDTH,
            mode: DrawMode::Freehand,
            ruler_assist: false,
            eraser: false,
        }
    }
}

impl DrawConfig {
    pub fn with_color(&self, color: String) -> Self {
        Self {
            color: sanitize_color(color),
            ..self.clone()
        }
    }

    pub fn with_stroke_width(&self, width: f64) -> Self {
        Self {
            stroke_width: sanitize_size(width),
            ..self.clone()
        }
    }

    /// Switching back to freehand drops ruler assist.
    pub fn with_mode(&self, mode: DrawMode) -> Self {
        Self {
            mode,
            ruler_assist: self.ruler_assist && mode != DrawMode::Freehand,
            ..self.clone()
        }
    }

    pub fn with_ruler_toggled(&self) -> Self {
        Self {
            ruler_assist: !self.ruler_assist,
            ..self.clone()
        }
    }

    pub fn with_eraser_toggled(&self) -> Self {
        Self {
            eraser: !self.eraser,
            ..self.clone()
        }
    }

    pub fn ruler_active(&self) -> bool {
        self.ruler_assist && self.mode == DrawMode::Freehand
    }
}

pub fn sanitize_color(mut color: String) -> String {
    if color.is_empty() {
        return DEFAULT_COLOR.to_string();
    }
    if color.len() > MAX_COLOR_LEN {
        let mut end = MAX_COLOR_LEN;
        while !color.is_char_boundary(end) {
            end -= 1;
        }
        color.truncate(end);
    }
    color
}

pub fn sanitize_size(size: f64) -> f64 {
    let size = if size.is_finite() {
        size
    } else {
        DEFAULT_STROKE_WIDTH
    };
    size.max(MIN_STROKE_WIDTH).min(MAX_STROKE_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_selector_values() {
        assert_eq!("circle".parse::<DrawMode>(), Ok(DrawMode::Circle));
        assert_eq!("freehand".parse::<DrawMode>(), Ok(DrawMode::Freehand));
        assert!("triangle".parse::<DrawMode>().is_err());
        for mode in [
            DrawMode::Freehand,
            DrawMode::Rectangle,
            DrawMode::Circle,
            DrawMode::Line,
        ] {
            assert_eq!(mode.as_str().parse::<DrawMode>(), Ok(mode));
        }
    }

    #[test]
    fn selecting_freehand_turns_ruler_off() {
        let config = DrawConfig::default()
            .with_mode(DrawMode::Line)
            .with_ruler_toggled();
        assert!(config.ruler_assist);
        assert!(!config.ruler_active());

        let config = config.with_mode(DrawMode::Freehand);
        assert!(!config.ruler_assist);

        let config = config.with_ruler_toggled();
        assert!(config.ruler_active());
    }

    #[test]
    fn sanitizers_fall_back_and_clamp() {
        assert_eq!(sanitize_color(String::new()), DEFAULT_COLOR);
        assert_eq!(sanitize_color("#ff00aa".to_string()), "#ff00aa");
        assert_eq!(sanitize_color("x".repeat(40)).len(), 32);
        assert_eq!(sanitize_size(f64::NAN), DEFAULT_STROKE_WIDTH);
        assert_eq!(sanitize_size(0.2), 1.0);
        assert_eq!(sanitize_size(500.0), 60.0);
    }

    #[test]
    fn snapshots_are_independent() {
        let base = DrawConfig::default();
        let eraser = base.with_eraser_toggled();
        assert!(!base.eraser);
        assert!(eraser.eraser);
        assert_eq!(base.with_color("#123456".to_string()).color, "#123456");
        assert_eq!(base.color, DEFAULT_COLOR);
    }
}
