pub mod secure_rng;

#[cfg(test)]
mod secure_rng_test;

pub use secure_rng::{secure_random_bytes, SecureRng};
