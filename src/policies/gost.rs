// Russian GOST P50739-95 (2 passes)
//
// GOST P50739-95 calls for a single pass of zeros followed by a single
// pass of random bytes.

use super::OverwriteRule;

pub static RULES: [OverwriteRule; 2] = [
    OverwriteRule::Fixed(&[0x00]),
    OverwriteRule::Random,
];
