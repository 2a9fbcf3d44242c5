//! Error types for the isolation agent crate.
//!
//! The search itself is infallible. Errors only come from the layers around it:
//! validating actions against the engine, configuring matches and starting the
//! threads that run players under a time limit.

use thiserror::Error;

use crate::game_repr::Action;

/// Main error type for the crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("illegal action {action} at ply {ply}")]
    IllegalAction { action: Action, ply: u32 },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("failed to spawn player thread: {source}")]
    Spawn {
        #[source]
        source: std::io::Error,
    },

    #[error("failed to build match thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

pub type Result<T> = std::result::Result<T, Error>;
