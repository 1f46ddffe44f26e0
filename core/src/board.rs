use crate::recorder::{Candidate, Gesture, Recorder, Sample};
use crate::render::{draw_path, draw_shape, render};
use crate::{
    Canvas, DrawConfig, FreehandStroke, History, Layer, Point, ShapeKind, ShapeStroke, ERASER_SIZE,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GestureOutcome {
    Recorded(Layer),
    Duplicate(Layer),
    Erased,
    /// Pointer-up without a gesture in progress.
    Ignored,
}

/// Owns the committed history and the gesture in progress. Every operation
/// takes the configuration snapshot it should use.
#[derive(Debug, Default)]
pub struct Board {
    history: History,
    recorder: Recorder,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn gesture_start<C: Canvas + ?Sized>(
        &mut self,
        canvas: &mut C,
        point: Point,
        config: &DrawConfig,
    ) {
        self.recorder.begin(point, config);
        match self.recorder.gesture() {
            Gesture::Drawing { points } => {
                draw_path(canvas, points, &config.color, config.stroke_width);
            }
            Gesture::Shaping {
                kind,
                anchor,
                terminus,
            } => {
                let (kind, anchor, terminus) = (*kind, *anchor, *terminus);
                self.preview(canvas, kind, anchor, terminus, config);
            }
            Gesture::Idle | Gesture::Erasing => {}
        }
    }

    pub fn gesture_sample<C: Canvas + ?Sized>(
        &mut self,
        canvas: &mut C,
        point: Point,
        config: &DrawConfig,
    ) {
        match self.recorder.sample(point) {
            Sample::Ignored => {}
            Sample::Segment { from, to } => {
                canvas.stroke_line(from, to, &config.color, config.stroke_width);
            }
            Sample::Preview {
                kind,
                anchor,
                terminus,
            } => self.preview(canvas, kind, anchor, terminus, config),
            Sample::Erase(center) => {
                let half = (ERASER_SIZE / 2.0) as f32;
                canvas.clear_rect(
                    Point::new(center.x - half, center.y - half),
                    ERASER_SIZE,
                    ERASER_SIZE,
                );
            }
        }
    }

    pub fn gesture_end(&mut self, config: &DrawConfig) -> GestureOutcome {
        let Some(candidate) = self.recorder.finish() else {
            return GestureOutcome::Ignored;
        };
        match candidate {
            Candidate::Freehand(points) => {
                let stroke = FreehandStroke {
                    color: config.color.clone(),
                    points,
                };
                if self.history.commit_freehand(stroke) {
                    GestureOutcome::Recorded(Layer::Freehand)
                } else {
                    GestureOutcome::Duplicate(Layer::Freehand)
                }
            }
            Candidate::Shape {
                kind,
                anchor,
                terminus,
            } => {
                let shape = ShapeStroke {
                    kind,
                    anchor,
                    terminus,
                    color: config.color.clone(),
                };
                if self.history.commit_shape(shape) {
                    GestureOutcome::Recorded(Layer::Shape)
                } else {
                    GestureOutcome::Duplicate(Layer::Shape)
                }
            }
            Candidate::Erased => GestureOutcome::Erased,
        }
    }

    /// Removes one stroke and repaints. Nothing happens on an empty history.
    pub fn undo<C: Canvas + ?Sized>(
        &mut self,
        canvas: &mut C,
        config: &DrawConfig,
    ) -> Option<Layer> {
        let undone = self.history.pop_most_recent()?;
        self.repaint(canvas, config);
        Some(undone.layer())
    }

    pub fn clear<C: Canvas + ?Sized>(&mut self, canvas: &mut C, config: &DrawConfig) {
        self.history.clear();
        self.recorder.cancel();
        render(canvas, &self.history, config);
    }

    pub fn redraw<C: Canvas + ?Sized>(&self, canvas: &mut C, config: &DrawConfig) {
        self.repaint(canvas, config);
    }

    /// Full repaint of history, with a freehand path still being drawn laid on top.
    fn repaint<C: Canvas + ?Sized>(&self, canvas: &mut C, config: &DrawConfig) {
        render(canvas, &self.history, config);
        if let Gesture::Drawing { points } = self.recorder.gesture() {
            draw_path(canvas, points, &config.color, config.stroke_width);
        }
    }

    fn preview<C: Canvas + ?Sized>(
        &self,
        canvas: &mut C,
        kind: ShapeKind,
        anchor: Point,
        terminus: Point,
        config: &DrawConfig,
    ) {
        // The previous preview frame is only gone after a full repaint.
        self.repaint(canvas, config);
        let preview = ShapeStroke {
            kind,
            anchor,
            terminus,
            color: config.color.clone(),
        };
        draw_shape(canvas, &preview, &config.color);
    }
}
