mod app;
mod config;
mod draw;

pub use app::App;
pub use config::Config;
