use serde::Serialize;

mod board;
mod canvas;
mod config;
mod distinct;
mod history;
mod recorder;
mod render;
mod stroke;

pub use board::{Board, GestureOutcome};
pub use canvas::Canvas;
pub use config::{
    sanitize_color, sanitize_size, DrawConfig, DrawMode, ParseModeError, DEFAULT_COLOR,
    DEFAULT_STROKE_WIDTH, ERASER_SIZE, SHAPE_LINE_WIDTH,
};
pub use distinct::{should_record_freehand, should_record_shape};
pub use history::{History, Undone};
pub use recorder::{Candidate, Gesture, Recorder, Sample};
pub use render::{draw_freehand, draw_path, draw_shape, render};
pub use stroke::{FreehandStroke, Layer, ShapeKind, ShapeStroke};

/// Canvas-local pixel coordinates.
#[derive(Serialize, Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    pub fn distance_to(self, other: Point) -> f64 {
        let dx = other.x as f64 - self.x as f64;
        let dy = other.y as f64 - self.y as f64;
        (dx * dx + dy * dy).sqrt()
    }
}
