use serde::Serialize;

use crate::distinct::{should_record_freehand, should_record_shape};
use crate::{FreehandStroke, Layer, ShapeStroke};

/// Committed strokes, one stack per layer. Both stacks only grow at the end
/// and only shrink from the end.
#[derive(Serialize, Clone, Debug, Default, PartialEq)]
pub struct History {
    shapes: Vec<ShapeStroke>,
    freehand: Vec<FreehandStroke>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Undone {
    Shape(ShapeStroke),
    Freehand(FreehandStroke),
}

impl Undone {
    pub fn layer(&self) -> Layer {
        match self {
            Undone::Shape(_) => Layer::Shape,
            Undone::Freehand(_) => Layer::Freehand,
        }
    }
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shapes(&self) -> &[ShapeStroke] {
        &self.shapes
    }

    pub fn freehand(&self) -> &[FreehandStroke] {
        &self.freehand
    }

    pub fn len(&self) -> usize {
        self.shapes.len() + self.freehand.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty() && self.freehand.is_empty()
    }

    pub fn push_shape(&mut self, shape: ShapeStroke) {
        self.shapes.push(shape);
    }

    pub fn push_freehand(&mut self, stroke: FreehandStroke) {
        self.freehand.push(stroke);
    }

    /// Pushes the shape unless it repeats the last one. Returns whether it was kept.
    pub fn commit_shape(&mut self, shape: ShapeStroke) -> bool {
        if !should_record_shape(&self.shapes, &shape) {
            return false;
        }
        self.push_shape(shape);
        true
    }

    pub fn commit_freehand(&mut self, stroke: FreehandStroke) -> bool {
        if !should_record_freehand(&self.freehand, &stroke.points) {
            return false;
        }
        self.push_freehand(stroke);
        true
    }

    /// Freehand ink is always undone before any shape, whatever order they were drawn in.
    pub fn pop_most_recent(&mut self) -> Option<Undone> {
        if let Some(stroke) = self.freehand.pop() {
            return Some(Undone::Freehand(stroke));
        }
        self.shapes.pop().map(Undone::Shape)
    }

    pub fn clear(&mut self) {
        self.shapes.clear();
        self.freehand.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Point, ShapeKind};

    fn ink(id: f32) -> FreehandStroke {
        FreehandStroke {
            color: "#000000".to_string(),
            points: vec![Point::new(id, id), Point::new(id + 1.0, id + 1.0)],
        }
    }

    fn rect(id: f32) -> ShapeStroke {
        ShapeStroke {
            kind: ShapeKind::Rectangle,
            anchor: Point::new(id, id),
            terminus: Point::new(id + 10.0, id + 10.0),
            color: "#00ff00".to_string(),
        }
    }

    #[test]
    fn pushes_then_pops_return_to_empty() {
        let mut history = History::new();
        history.push_shape(rect(0.0));
        for id in 0..5 {
            history.push_freehand(ink(id as f32));
        }
        for id in (0..5).rev() {
            assert_eq!(
                history.pop_most_recent(),
                Some(Undone::Freehand(ink(id as f32)))
            );
        }
        assert!(history.freehand().is_empty());
        assert_eq!(history.shapes(), &[rect(0.0)]);
    }

    #[test]
    fn shape_stack_pops_in_reverse_order() {
        let mut history = History::new();
        for id in 0..5 {
            history.push_shape(rect(id as f32));
        }
        for id in (0..5).rev() {
            assert_eq!(
                history.pop_most_recent(),
                Some(Undone::Shape(rect(id as f32)))
            );
        }
        assert!(history.shapes().is_empty());
        assert!(history.is_empty());
        assert_eq!(history.pop_most_recent(), None);
    }

    #[test]
    fn freehand_is_undone_before_shapes() {
        let mut history = History::new();
        history.push_freehand(ink(1.0));
        history.push_shape(rect(2.0));

        let first = history.pop_most_recent().map(|undone| undone.layer());
        assert_eq!(first, Some(Layer::Freehand));
        assert_eq!(history.shapes(), &[rect(2.0)]);

        assert_eq!(history.pop_most_recent(), Some(Undone::Shape(rect(2.0))));
        assert!(history.is_empty());
    }

    #[test]
    fn pop_on_empty_history_is_a_no_op() {
        let mut history = History::new();
        assert_eq!(history.pop_most_recent(), None);
        assert!(history.is_empty());
    }

    #[test]
    fn clear_is_idempotent() {
        let mut history = History::new();
        history.clear();
        history.clear();
        assert!(history.is_empty());

        history.push_shape(rect(0.0));
        history.push_freehand(ink(0.0));
        assert_eq!(history.len(), 2);
        history.clear();
        history.clear();
        assert!(history.shapes().is_empty());
        assert!(history.freehand().is_empty());
    }

    #[test]
    fn commit_filters_duplicates() {
        let mut history = History::new();
        assert!(history.commit_freehand(ink(0.0)));
        assert!(!history.commit_freehand(ink(0.0)));
        assert!(history.commit_shape(rect(0.0)));
        assert!(!history.commit_shape(rect(0.0)));
        assert!(history.commit_shape(rect(1.0)));
        assert_eq!(history.freehand().len(), 1);
        assert_eq!(history.shapes().len(), 2);
    }
}
