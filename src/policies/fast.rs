// Fast scheme - single pass of zeros
//
// The quickest sanitization option: one pass overwriting everything with
// 0x00. Not suitable for high-security requirements but useful for drive
// testing and preparing media for reuse inside the same organization.

use super::OverwriteRule;

pub static RULES: [OverwriteRule; 1] = [OverwriteRule::Fixed(&[0x00])];
