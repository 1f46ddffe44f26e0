use sketchboard_core::{DrawMode, GestureOutcome, Point};

use crate::render::ContextCanvas;
use crate::state::State;
use crate::util::log_snapshot;

pub fn begin_gesture(state: &mut State, pointer_id: i32, point: Point) {
    if state.active_pointer.is_some() {
        return;
    }
    state.active_pointer = Some(pointer_id);
    let mut canvas = ContextCanvas::new(&state.ctx, state.board_width, state.board_height);
    state.board.gesture_start(&mut canvas, point, &state.config);
}

pub fn extend_gesture(state: &mut State, pointer_id: i32, point: Point) {
    if state.active_pointer != Some(pointer_id) {
        return;
    }
    let mut canvas = ContextCanvas::new(&state.ctx, state.board_width, state.board_height);
    state.board.gesture_sample(&mut canvas, point, &state.config);
}

/// Returns false when `pointer_id` was not the pointer drawing.
pub fn end_gesture(state: &mut State, pointer_id: i32) -> bool {
    if state.active_pointer != Some(pointer_id) {
        return false;
    }
    state.active_pointer = None;
    let outcome = state.board.gesture_end(&state.config);
    if state.debug {
        web_sys::console::log_1(&format!("gesture end outcome={outcome:?}").into());
        if matches!(outcome, GestureOutcome::Recorded(_)) {
            log_snapshot(&state.config, state.board.history());
        }
    }
    true
}

pub fn undo(state: &mut State) {
    let mut canvas = ContextCanvas::new(&state.ctx, state.board_width, state.board_height);
    let undone = state.board.undo(&mut canvas, &state.config);
    if state.debug {
        web_sys::console::log_1(&format!("undo layer={undone:?}").into());
        log_snapshot(&state.config, state.board.history());
    }
}

pub fn clear(state: &mut State) {
    let mut canvas = ContextCanvas::new(&state.ctx, state.board_width, state.board_height);
    state.board.clear(&mut canvas, &state.config);
    state.active_pointer = None;
    if state.debug {
        web_sys::console::log_1(&"clear".into());
    }
}

pub fn set_color(state: &mut State, color: String) {
    state.config = state.config.with_color(color);
}

pub fn set_stroke_width(state: &mut State, value: &str) {
    if let Ok(width) = value.parse::<f64>() {
        state.config = state.config.with_stroke_width(width);
    }
}

pub fn set_mode(state: &mut State, value: &str) {
    match value.parse::<DrawMode>() {
        Ok(mode) => state.config = state.config.with_mode(mode),
        Err(error) => web_sys::console::warn_1(&format!("{error}").into()),
    }
}

pub fn toggle_ruler(state: &mut State) -> bool {
    state.config = state.config.with_ruler_toggled();
    state.config.ruler_assist
}

pub fn toggle_eraser(state: &mut State) -> bool {
    state.config = state.config.with_eraser_toggled();
    state.config.eraser
}
