pub mod agent;
pub mod error;
pub mod game_repr;
pub mod orchestrator;

pub use error::{Error, Result};
