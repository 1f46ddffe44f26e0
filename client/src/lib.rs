mod actions;
mod app;
mod dom;
mod render;
mod state;
mod util;

pub use app::run;
