use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use sketchboard_core::{Board, DrawConfig};

pub struct State {
    pub canvas: HtmlCanvasElement,
    pub ctx: CanvasRenderingContext2d,
    pub board: Board,
    pub config: DrawConfig,
    pub board_width: f64,
    pub board_height: f64,
    pub active_pointer: Option<i32>,
    pub debug: bool,
}

impl State {
    pub fn new(canvas: HtmlCanvasElement, ctx: CanvasRenderingContext2d, debug: bool) -> Self {
        Self {
            canvas,
            ctx,
            board: Board::new(),
            config: DrawConfig::default(),
            board_width: 0.0,
            board_height: 0.0,
            active_pointer: None,
            debug,
        }
    }
}
