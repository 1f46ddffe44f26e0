use std::cell::{Cell, RefCell};
use std::rc::Rc;

use js_sys::Reflect;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    CanvasRenderingContext2d, Event, HtmlButtonElement, HtmlCanvasElement, HtmlInputElement,
    HtmlSelectElement, HtmlSpanElement, KeyboardEvent, PointerEvent,
};

use crate::actions::{
    begin_gesture, clear, end_gesture, extend_gesture, set_color, set_mode, set_stroke_width,
    toggle_eraser, toggle_ruler, undo,
};
use crate::dom::{
    event_to_point, get_element, resize_canvas, set_canvas_mode, set_tool_button,
    update_size_label,
};
use crate::state::State;
use crate::util::debug_enabled;

fn document_ready_state(document: &web_sys::Document) -> Option<String> {
    Reflect::get(document.as_ref(), &JsValue::from_str("readyState"))
        .ok()?
        .as_string()
}

#[wasm_bindgen(start)]
pub fn run() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("Missing window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("Missing document"))?;
    let started = Rc::new(Cell::new(false));

    if document_ready_state(&document).as_deref() == Some("complete") {
        started.set(true);
        return start_app();
    }

    let onload_started = started.clone();
    let onload = Closure::<dyn FnMut(Event)>::new(move |_| {
        if onload_started.replace(true) {
            return;
        }
        if let Err(err) = start_app() {
            web_sys::console::error_1(&err);
        }
    });
    window.add_event_listener_with_callback("load", onload.as_ref().unchecked_ref())?;
    onload.forget();

    Ok(())
}

fn start_app() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("Missing window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("Missing document"))?;
    let debug = debug_enabled(&window);

    let canvas: HtmlCanvasElement = get_element(&document, "board")?;
    let ctx = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("Missing canvas context"))?
        .dyn_into::<CanvasRenderingContext2d>()?;

    let color_input: HtmlInputElement = get_element(&document, "color")?;
    let size_input: HtmlInputElement = get_element(&document, "size")?;
    let size_value: HtmlSpanElement = get_element(&document, "sizeValue")?;
    let shape_select: HtmlSelectElement = get_element(&document, "shape")?;
    let ruler_button: HtmlButtonElement = get_element(&document, "ruler")?;
    let eraser_button: HtmlButtonElement = get_element(&document, "eraser")?;
    let undo_button: HtmlButtonElement = get_element(&document, "undo")?;
    let clear_button: HtmlButtonElement = get_element(&document, "clear")?;

    let state = Rc::new(RefCell::new(State::new(canvas.clone(), ctx, debug)));

    {
        let mut state = state.borrow_mut();
        set_color(&mut state, color_input.value());
        set_stroke_width(&mut state, &size_input.value());
        set_mode(&mut state, &shape_select.value());
        set_tool_button(&ruler_button, state.config.ruler_assist);
        set_tool_button(&eraser_button, state.config.eraser);
        set_canvas_mode(&canvas, &state.config);
        if debug {
            web_sys::console::log_1(
                &format!("Sketchboard debug enabled config={:?}", state.config).into(),
            );
        }
    }
    update_size_label(&size_input, &size_value);

    {
        let resize_state = state.clone();
        let window_cb = window.clone();
        let onresize = Closure::<dyn FnMut()>::new(move || {
            let mut state = resize_state.borrow_mut();
            resize_canvas(&window_cb, &mut state);
        });
        window.add_event_listener_with_callback("resize", onresize.as_ref().unchecked_ref())?;
        onresize.forget();
    }

    {
        let mut state = state.borrow_mut();
        resize_canvas(&window, &mut state);
    }

    {
        let key_state = state.clone();
        let onkeydown = Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
            let modifier = event.meta_key() || event.ctrl_key();
            if modifier && !event.shift_key() && event.key().eq_ignore_ascii_case("z") {
                event.prevent_default();
                undo(&mut key_state.borrow_mut());
            }
        });
        window.add_event_listener_with_callback("keydown", onkeydown.as_ref().unchecked_ref())?;
        onkeydown.forget();
    }

    {
        let color_state = state.clone();
        let color_input_cb = color_input.clone();
        let oninput = Closure::<dyn FnMut(Event)>::new(move |_| {
            set_color(&mut color_state.borrow_mut(), color_input_cb.value());
        });
        color_input.add_event_listener_with_callback("input", oninput.as_ref().unchecked_ref())?;
        oninput.forget();
    }

    {
        let size_state = state.clone();
        let size_input_cb = size_input.clone();
        let size_value_cb = size_value.clone();
        let oninput = Closure::<dyn FnMut(Event)>::new(move |_| {
            set_stroke_width(&mut size_state.borrow_mut(), &size_input_cb.value());
            update_size_label(&size_input_cb, &size_value_cb);
        });
        size_input.add_event_listener_with_callback("input", oninput.as_ref().unchecked_ref())?;
        oninput.forget();
    }

    {
        let shape_state = state.clone();
        let shape_select_cb = shape_select.clone();
        let ruler_button_cb = ruler_button.clone();
        let onchange = Closure::<dyn FnMut(Event)>::new(move |_| {
            let mut state = shape_state.borrow_mut();
            set_mode(&mut state, &shape_select_cb.value());
            set_tool_button(&ruler_button_cb, state.config.ruler_assist);
        });
        shape_select
            .add_event_listener_with_callback("change", onchange.as_ref().unchecked_ref())?;
        onchange.forget();
    }

    {
        let ruler_state = state.clone();
        let ruler_button_cb = ruler_button.clone();
        let onclick = Closure::<dyn FnMut(Event)>::new(move |_| {
            let active = toggle_ruler(&mut ruler_state.borrow_mut());
            set_tool_button(&ruler_button_cb, active);
        });
        ruler_button.add_event_listener_with_callback("click", onclick.as_ref().unchecked_ref())?;
        onclick.forget();
    }

    {
        let eraser_state = state.clone();
        let eraser_button_cb = eraser_button.clone();
        let onclick = Closure::<dyn FnMut(Event)>::new(move |_| {
            let mut state = eraser_state.borrow_mut();
            let active = toggle_eraser(&mut state);
            set_tool_button(&eraser_button_cb, active);
            set_canvas_mode(&state.canvas, &state.config);
        });
        eraser_button
            .add_event_listener_with_callback("click", onclick.as_ref().unchecked_ref())?;
        onclick.forget();
    }

    {
        let undo_state = state.clone();
        let onclick = Closure::<dyn FnMut(Event)>::new(move |_| {
            undo(&mut undo_state.borrow_mut());
        });
        undo_button.add_event_listener_with_callback("click", onclick.as_ref().unchecked_ref())?;
        onclick.forget();
    }

    {
        let clear_state = state.clone();
        let onclick = Closure::<dyn FnMut(Event)>::new(move |_| {
            clear(&mut clear_state.borrow_mut());
        });
        clear_button.add_event_listener_with_callback("click", onclick.as_ref().unchecked_ref())?;
        onclick.forget();
    }

    {
        let down_state = state.clone();
        let down_canvas = canvas.clone();
        let ondown = Closure::<dyn FnMut(PointerEvent)>::new(move |event: PointerEvent| {
            if event.button() != 0 {
                return;
            }
            event.prevent_default();
            let Some(point) = event_to_point(&down_canvas, &event) else {
                return;
            };
            let _ = down_canvas.set_pointer_capture(event.pointer_id());
            begin_gesture(&mut down_state.borrow_mut(), event.pointer_id(), point);
        });
        canvas.add_event_listener_with_callback("pointerdown", ondown.as_ref().unchecked_ref())?;
        ondown.forget();
    }

    {
        let move_state = state.clone();
        let move_canvas = canvas.clone();
        let onmove = Closure::<dyn FnMut(PointerEvent)>::new(move |event: PointerEvent| {
            let mut state = move_state.borrow_mut();
            if state.active_pointer != Some(event.pointer_id()) {
                return;
            }
            event.prevent_default();
            if let Some(point) = event_to_point(&move_canvas, &event) {
                extend_gesture(&mut state, event.pointer_id(), point);
            }
        });
        canvas.add_event_listener_with_callback("pointermove", onmove.as_ref().unchecked_ref())?;
        onmove.forget();
    }

    {
        let stop_state = state.clone();
        let stop_canvas = canvas.clone();
        let onstop = Closure::<dyn FnMut(PointerEvent)>::new(move |event: PointerEvent| {
            let ended = end_gesture(&mut stop_state.borrow_mut(), event.pointer_id());
            if !ended {
                return;
            }
            event.prevent_default();
            if stop_canvas.has_pointer_capture(event.pointer_id()) {
                let _ = stop_canvas.release_pointer_capture(event.pointer_id());
            }
        });
        canvas.add_event_listener_with_callback("pointerup", onstop.as_ref().unchecked_ref())?;
        canvas
            .add_event_listener_with_callback("pointercancel", onstop.as_ref().unchecked_ref())?;
        canvas.add_event_listener_with_callback(
            "lostpointercapture",
            onstop.as_ref().unchecked_ref(),
        )?;
        onstop.forget();
    }

    Ok(())
}
