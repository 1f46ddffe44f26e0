use crate::{DrawConfig, Point, ShapeKind};

/// The in-progress gesture. Nothing here is history until the gesture ends.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Gesture {
    #[default]
    Idle,
    Drawing {
        points: Vec<Point>,
    },
    Shaping {
        kind: ShapeKind,
        anchor: Point,
        terminus: Point,
    },
    Erasing,
}

/// What a single pointer sample asks the surface to show.
#[derive(Clone, Debug, PartialEq)]
pub enum Sample {
    Ignored,
    Segment {
        from: Point,
        to: Point,
    },
    Preview {
        kind: ShapeKind,
        anchor: Point,
        terminus: Point,
    },
    Erase(Point),
}

/// A closed gesture, ready for the distinctness check.
#[derive(Clone, Debug, PartialEq)]
pub enum Candidate {
    Freehand(Vec<Point>),
    Shape {
        kind: ShapeKind,
        anchor: Point,
        terminus: Point,
    },
    Erased,
}

#[derive(Debug, Default)]
pub struct Recorder {
    gesture: Gesture,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn gesture(&self) -> &Gesture {
        &self.gesture
    }

    pub fn is_active(&self) -> bool {
        !matches!(self.gesture, Gesture::Idle)
    }

    /// Opens a gesture at `point`. A gesture that was still open is dropped.
    pub fn begin(&mut self, point: Point, config: &DrawConfig) {
        if !point.is_finite() {
            return;
        }
        self.gesture = if config.eraser {
            Gesture::Erasing
        } else {
            match config.mode.shape_kind() {
                Some(kind) => Gesture::Shaping {
                    kind,
                    anchor: point,
                    terminus: point,
                },
                None => Gesture::Drawing {
                    points: vec![point],
                },
            }
        };
    }

    pub fn sample(&mut self, point: Point) -> Sample {
        if !point.is_finite() {
            return Sample::Ignored;
        }
        match &mut self.gesture {
            Gesture::Idle => Sample::Ignored,
            Gesture::Drawing { points } => {
                let from = points.last().copied().unwrap_or(point);
                points.push(point);
                Sample::Segment { from, to: point }
            }
            Gesture::Shaping {
                kind,
                anchor,
                terminus,
            } => {
                *terminus = point;
                Sample::Preview {
                    kind: *kind,
                    anchor: *anchor,
                    terminus: point,
                }
            }
            Gesture::Erasing => Sample::Erase(point),
        }
    }

    /// Closes the gesture. `None` when no gesture was open.
    pub fn finish(&mut self) -> Option<Candidate> {
        match std::mem::take(&mut self.gesture) {
            Gesture::Idle => None,
            Gesture::Drawing { points } => Some(Candidate::Freehand(points)),
            Gesture::Shaping {
                kind,
                anchor,
                terminus,
            } => Some(Candidate::Shape {
                kind,
                anchor,
                terminus,
            }),
            Gesture::Erasing => Some(Candidate::Erased),
        }
    }

    pub fn cancel(&mut self) {
        self.gesture = Gesture::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DrawMode;

    fn mode(mode: DrawMode) -> DrawConfig {
        DrawConfig::default().with_mode(mode)
    }

    #[test]
    fn freehand_gesture_accumulates_samples() {
        let mut recorder = Recorder::new();
        recorder.begin(Point::new(0.0, 0.0), &mode(DrawMode::Freehand));
        assert!(recorder.is_active());
        assert_eq!(
            recorder.sample(Point::new(5.0, 5.0)),
            Sample::Segment {
                from: Point::new(0.0, 0.0),
                to: Point::new(5.0, 5.0),
            }
        );
        recorder.sample(Point::new(10.0, 10.0));
        assert_eq!(
            recorder.finish(),
            Some(Candidate::Freehand(vec![
                Point::new(0.0, 0.0),
                Point::new(5.0, 5.0),
                Point::new(10.0, 10.0),
            ]))
        );
        assert!(!recorder.is_active());
    }

    #[test]
    fn shape_gesture_tracks_only_the_latest_terminus() {
        let mut recorder = Recorder::new();
        recorder.begin(Point::new(2.0, 2.0), &mode(DrawMode::Circle));
        recorder.sample(Point::new(8.0, 8.0));
        let preview = recorder.sample(Point::new(5.0, 6.0));
        assert_eq!(
            preview,
            Sample::Preview {
                kind: ShapeKind::Circle,
                anchor: Point::new(2.0, 2.0),
                terminus: Point::new(5.0, 6.0),
            }
        );
        assert_eq!(
            recorder.finish(),
            Some(Candidate::Shape {
                kind: ShapeKind::Circle,
                anchor: Point::new(2.0, 2.0),
                terminus: Point::new(5.0, 6.0),
            })
        );
    }

    #[test]
    fn shape_without_movement_ends_on_its_anchor() {
        let mut recorder = Recorder::new();
        recorder.begin(Point::new(4.0, 4.0), &mode(DrawMode::Rectangle));
        assert_eq!(
            recorder.finish(),
            Some(Candidate::Shape {
                kind: ShapeKind::Rectangle,
                anchor: Point::new(4.0, 4.0),
                terminus: Point::new(4.0, 4.0),
            })
        );
    }

    #[test]
    fn eraser_overrides_the_drawing_mode() {
        let mut recorder = Recorder::new();
        let config = mode(DrawMode::Line).with_eraser_toggled();
        recorder.begin(Point::new(1.0, 1.0), &config);
        assert_eq!(
            recorder.sample(Point::new(3.0, 3.0)),
            Sample::Erase(Point::new(3.0, 3.0))
        );
        assert_eq!(recorder.finish(), Some(Candidate::Erased));
    }

    #[test]
    fn finishing_while_idle_is_a_no_op() {
        let mut recorder = Recorder::new();
        assert_eq!(recorder.finish(), None);
        assert_eq!(recorder.sample(Point::new(1.0, 1.0)), Sample::Ignored);
        assert_eq!(recorder.gesture(), &Gesture::Idle);
    }

    #[test]
    fn non_finite_points_are_skipped() {
        let mut recorder = Recorder::new();
        recorder.begin(Point::new(f32::NAN, 0.0), &mode(DrawMode::Freehand));
        assert!(!recorder.is_active());

        recorder.begin(Point::new(0.0, 0.0), &mode(DrawMode::Freehand));
        assert_eq!(
            recorder.sample(Point::new(f32::INFINITY, 1.0)),
            Sample::Ignored
        );
        assert_eq!(
            recorder.finish(),
            Some(Candidate::Freehand(vec![Point::new(0.0, 0.0)]))
        );
    }

    #[test]
    fn new_gesture_replaces_an_open_one() {
        let mut recorder = Recorder::new();
        recorder.begin(Point::new(0.0, 0.0), &mode(DrawMode::Freehand));
        recorder.sample(Point::new(1.0, 1.0));
        recorder.begin(Point::new(9.0, 9.0), &mode(DrawMode::Freehand));
        assert_eq!(
            recorder.finish(),
            Some(Candidate::Freehand(vec![Point::new(9.0, 9.0)]))
        );
    }
}
