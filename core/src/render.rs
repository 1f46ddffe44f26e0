use crate::{
    Canvas, DrawConfig, FreehandStroke, History, Point, ShapeKind, ShapeStroke, SHAPE_LINE_WIDTH,
};

fn resolve_color<'a>(color: &'a str, fallback: &'a str) -> &'a str {
    if color.is_empty() {
        fallback
    } else {
        color
    }
}

pub fn draw_shape<C: Canvas + ?Sized>(canvas: &mut C, shape: &ShapeStroke, default_color: &str) {
    let color = resolve_color(&shape.color, default_color);
    match shape.kind {
        ShapeKind::Rectangle => canvas.stroke_rectangle(
            shape.anchor,
            shape.width(),
            shape.height(),
            color,
            SHAPE_LINE_WIDTH,
        ),
        ShapeKind::Circle => {
            canvas.stroke_circle(shape.anchor, shape.radius(), color, SHAPE_LINE_WIDTH)
        }
        ShapeKind::Line => {
            canvas.stroke_line(shape.anchor, shape.terminus, color, SHAPE_LINE_WIDTH)
        }
    }
}

pub fn draw_freehand<C: Canvas + ?Sized>(
    canvas: &mut C,
    stroke: &FreehandStroke,
    default_color: &str,
    width: f64,
) {
    let color = resolve_color(&stroke.color, default_color);
    draw_path(canvas, &stroke.points, color, width);
}

/// Connected segments; a lone point becomes a zero-length segment.
pub fn draw_path<C: Canvas + ?Sized>(canvas: &mut C, points: &[Point], color: &str, width: f64) {
    match points {
        [] => {}
        [point] => canvas.stroke_line(*point, *point, color, width),
        points => {
            for pair in points.windows(2) {
                canvas.stroke_line(pair[0], pair[1], color, width);
            }
        }
    }
}

/// Repaints the whole surface from history: shapes first, then freehand ink on top.
pub fn render<C: Canvas + ?Sized>(canvas: &mut C, history: &History, config: &DrawConfig) {
    canvas.clear_all();
    for shape in history.shapes() {
        draw_shape(canvas, shape, &config.color);
    }
    for stroke in history.freehand() {
        draw_freehand(canvas, stroke, &config.color, config.stroke_width);
    }
}
