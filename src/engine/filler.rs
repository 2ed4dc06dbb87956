use crate::crypto::secure_random_bytes;
use crate::policies::OverwriteRule;
use crate::{WipeError, WipeResult};

/// Populate `block` according to `rule`.
///
/// Fixed patterns are tiled cyclically from offset 0, truncating the
/// final repeat at the buffer end. Random rules re-source the entire
/// buffer on every invocation; randomness is never cached between write
/// cycles. On return every byte of the buffer is defined.
pub fn fill_block(block: &mut [u8], rule: &OverwriteRule) -> WipeResult<()> {
    match rule {
        OverwriteRule::Random => secure_random_bytes(block)
            .map_err(|e| WipeError::RandomSourceFailure(e.to_string())),
        OverwriteRule::Fixed(pattern) => {
            debug_assert!(!pattern.is_empty(), "fixed rules carry a non-empty pattern");
            if pattern.len() == 1 {
                block.fill(pattern[0]);
            } else {
                for (i, byte) in block.iter_mut().enumerate() {
                    *byte = pattern[i % pattern.len()];
                }
            }
            Ok(())
        }
    }
}
