use crate::Point;

/// Raster primitives the engine draws with. The engine never reads pixels back.
pub trait Canvas {
    fn stroke_line(&mut self, from: Point, to: Point, color: &str, width: f64);

    fn stroke_rectangle(
        &mut self,
        corner: Point,
        width: f64,
        height: f64,
        color: &str,
        line_width: f64,
    );

    fn stroke_circle(&mut self, center: Point, radius: f64, color: &str, line_width: f64);

    fn clear_rect(&mut self, corner: Point, width: f64, height: f64);

    fn clear_all(&mut self);
}
