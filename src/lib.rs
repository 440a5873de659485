mod engine;
mod error;
mod grid;
mod gui;
mod session;

pub use engine::step;
pub use error::LifeError;
pub use grid::Grid;
pub use gui::{App, Config};
pub use session::{
    Mode, Session, DEFAULT_SIZE, DEFAULT_SPEED_MS, SPEED_MAX_MS, SPEED_MIN_MS, SPEED_STEP_MS,
};
