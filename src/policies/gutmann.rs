// Peter Gutmann method (35 passes)
//
// "Secure Deletion of Data from Magnetic and Solid-State Memory",
// Peter Gutmann, 1996. Passes 1-4 and 32-35 are random data; passes 5-31
// are fixed patterns targeting MFM and RLL (2,7) encoding schemes,
// including the sixteen walking-nibble bytes 0x00..0xFF.
//
// The byte sequence below reproduces the published table bit for bit.

use super::OverwriteRule;

pub static RULES: [OverwriteRule; 35] = [
    // Passes 1-4: random data
    OverwriteRule::Random,
    OverwriteRule::Random,
    OverwriteRule::Random,
    OverwriteRule::Random,
    // Passes 5-9: MFM/RLL patterns
    OverwriteRule::Fixed(&[0x55]), // 01010101
    OverwriteRule::Fixed(&[0xAA]), // 10101010
    OverwriteRule::Fixed(&[0x92, 0x49, 0x24]), // 10010010 01001001 00100100
    OverwriteRule::Fixed(&[0x49, 0x24, 0x92]), // 01001001 00100100 10010010
    OverwriteRule::Fixed(&[0x24, 0x92, 0x49]), // 00100100 10010010 01001001
    // Passes 10-25: walking nibbles 0x00..0xFF
    OverwriteRule::Fixed(&[0x00]),
    OverwriteRule::Fixed(&[0x11]),
    OverwriteRule::Fixed(&[0x22]),
    OverwriteRule::Fixed(&[0x33]),
    OverwriteRule::Fixed(&[0x44]),
    OverwriteRule::Fixed(&[0x55]),
    OverwriteRule::Fixed(&[0x66]),
    OverwriteRule::Fixed(&[0x77]),
    OverwriteRule::Fixed(&[0x88]),
    OverwriteRule::Fixed(&[0x99]),
    OverwriteRule::Fixed(&[0xAA]),
    OverwriteRule::Fixed(&[0xBB]),
    OverwriteRule::Fixed(&[0xCC]),
    OverwriteRule::Fixed(&[0xDD]),
    OverwriteRule::Fixed(&[0xEE]),
    OverwriteRule::Fixed(&[0xFF]),
    // Passes 26-31: RLL (2,7) patterns
    OverwriteRule::Fixed(&[0x92, 0x49, 0x24]), // 10010010 01001001 00100100
    OverwriteRule::Fixed(&[0x49, 0x24, 0x92]), // 01001001 00100100 10010010
    OverwriteRule::Fixed(&[0x24, 0x92, 0x49]), // 00100100 10010010 01001001
    OverwriteRule::Fixed(&[0x6D, 0xB6, 0xDB]), // 01101101 10110110 11011011
    OverwriteRule::Fixed(&[0xB6, 0xDB, 0x6D]), // 10110110 11011011 01101101
    OverwriteRule::Fixed(&[0xDB, 0x6D, 0xB6]), // 11011011 01101101 10110110
    // Passes 32-35: random data
    OverwriteRule::Random,
    OverwriteRule::Random,
    OverwriteRule::Random,
    OverwriteRule::Random,
];
