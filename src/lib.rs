// Allow uppercase acronyms for standard names like DoD, GOST, VSITR
#![allow(clippy::upper_case_acronyms)]

pub mod crypto;
pub mod engine;
pub mod io;
pub mod policies;
pub mod report;
pub mod ui;

// Re-export the main session driver for convenience
pub use engine::session::{SessionState, WipeSession};
pub use policies::{OverwriteRule, WipePolicy, CATALOG};

use thiserror::Error;

/// Errors produced by the wipe engine.
///
/// Every variant is fatal to the running session: the engine never retries
/// a failed pass and never rolls back bytes already written.
#[derive(Error, Debug)]
pub enum WipeError {
    #[error("invalid target size: {0} resolves to 0 bytes")]
    InvalidTargetSize(String),

    #[error("write failed at offset {offset}: {source}")]
    WriteFailure {
        offset: u64,
        #[source]
        source: std::io::Error,
    },

    #[error("random source failure: {0}")]
    RandomSourceFailure(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type WipeResult<T> = Result<T, WipeError>;
