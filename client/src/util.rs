use serde::Serialize;
use web_sys::Window;

use sketchboard_core::{DrawConfig, History};

#[derive(Serialize)]
struct Snapshot<'a> {
    config: &'a DrawConfig,
    history: &'a History,
}

pub fn debug_enabled(window: &Window) -> bool {
    let search = window.location().search().ok().unwrap_or_default();
    search.contains("debug=1")
        || search.contains("debug=true")
        || search.contains("log=1")
        || search.contains("log=true")
}

pub fn log_snapshot(config: &DrawConfig, history: &History) {
    match serde_json::to_string(&Snapshot { config, history }) {
        Ok(json) => web_sys::console::log_1(
            &format!(
                "history shapes={} freehand={} {json}",
                history.shapes().len(),
                history.freehand().len()
            )
            .into(),
        ),
        Err(error) => {
            web_sys::console::warn_1(&format!("history snapshot failed: {error}").into())
        }
    }
}
