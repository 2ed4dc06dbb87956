// German VSITR (7 passes)
//
// The German standard overwrites each sector with three alternating
// rounds of zeros and ones, then a final pass of 10101010.

use super::OverwriteRule;

pub static RULES: [OverwriteRule; 7] = [
    OverwriteRule::Fixed(&[0x00]),
    OverwriteRule::Fixed(&[0xFF]),
    OverwriteRule::Fixed(&[0x00]),
    OverwriteRule::Fixed(&[0xFF]),
    OverwriteRule::Fixed(&[0x00]),
    OverwriteRule::Fixed(&[0xFF]),
    OverwriteRule::Fixed(&[0xAA]), // 10101010
];
