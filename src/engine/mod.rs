// Wipe engine
//
// Translates an ordered list of pass rules into exact byte streams across
// the target: the filler materializes one block, the executor streams it
// over the full device extent, and the session orchestrates the passes
// and the audit trail.

pub mod executor;
pub mod filler;
pub mod session;


pub use executor::run_pass;
pub use filler::fill_block;
pub use session::{SessionState, WipeSession};

/// Write block size in bytes (3 * 1024 * 32). A multiple of three keeps
/// the 3-byte patterns used by several schemes aligned to the block
/// boundary.
pub const BLOCK_SIZE: usize = 98_304;
