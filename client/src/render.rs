use web_sys::CanvasRenderingContext2d;

use sketchboard_core::{Canvas, Point};

use crate::state::State;

/// `Canvas` over a 2d context, sized in CSS pixels.
pub struct ContextCanvas<'a> {
    ctx: &'a CanvasRenderingContext2d,
    width: f64,
    height: f64,
}

impl<'a> ContextCanvas<'a> {
    pub fn new(ctx: &'a CanvasRenderingContext2d, width: f64, height: f64) -> Self {
        Self { ctx, width, height }
    }
}

impl Canvas for ContextCanvas<'_> {
    fn stroke_line(&mut self, from: Point, to: Point, color: &str, width: f64) {
        self.ctx.set_stroke_style_str(color);
        self.ctx.set_line_width(width);
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.stroke();
    }

    fn stroke_rectangle(
        &mut self,
        corner: Point,
        width: f64,
        height: f64,
        color: &str,
        line_width: f64,
    ) {
        self.ctx.set_stroke_style_str(color);
        self.ctx.set_line_width(line_width);
        self.ctx
            .stroke_rect(corner.x as f64, corner.y as f64, width, height);
    }

    fn stroke_circle(&mut self, center: Point, radius: f64, color: &str, line_width: f64) {
        self.ctx.set_stroke_style_str(color);
        self.ctx.set_line_width(line_width);
        self.ctx.begin_path();
        let _ = self.ctx.arc(
            center.x as f64,
            center.y as f64,
            radius,
            0.0,
            std::f64::consts::PI * 2.0,
        );
        self.ctx.stroke();
    }

    fn clear_rect(&mut self, corner: Point, width: f64, height: f64) {
        self.ctx
            .clear_rect(corner.x as f64, corner.y as f64, width, height);
    }

    fn clear_all(&mut self) {
        self.ctx.clear_rect(0.0, 0.0, self.width, self.height);
    }
}

pub fn redraw(state: &State) {
    let mut canvas = ContextCanvas::new(&state.ctx, state.board_width, state.board_height);
    state.board.redraw(&mut canvas, &state.config);
}
