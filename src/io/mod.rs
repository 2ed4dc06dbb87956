pub mod target;

#[cfg(test)]
mod target_test;

pub use target::{resolve_target_size, WipeTarget};
