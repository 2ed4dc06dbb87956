// US Department of Defense DoD 5220.22-M (3 passes)
//
// Three pass overwriting algorithm: first pass with zeros, second pass
// with ones, last pass with random bytes.

use super::OverwriteRule;

/// DoD 5220.22-M pass 1 pattern (all zeros)
pub const PASS_1_PATTERN: u8 = 0x00;

/// DoD 5220.22-M pass 2 pattern (all ones)
pub const PASS_2_PATTERN: u8 = 0xFF;

pub static RULES: [OverwriteRule; 3] = [
    OverwriteRule::Fixed(&[PASS_1_PATTERN]),
    OverwriteRule::Fixed(&[PASS_2_PATTERN]),
    OverwriteRule::Random,
];
