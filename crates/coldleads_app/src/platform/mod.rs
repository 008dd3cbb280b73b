mod app;
mod effects;
pub(crate) mod logging;
mod settings;
mod ui;

pub use app::run_app;
