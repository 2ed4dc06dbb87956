use super::filler::fill_block;
use crate::policies::OverwriteRule;
use crate::{WipeError, WipeResult};
use std::io::{Seek, SeekFrom, Write};

/// Stream one overwrite pass across the full target extent.
///
/// Writes `size / block.len()` full blocks followed by `size mod
/// block.len()` single bytes from the start of the buffer, so exactly
/// `size` bytes land on the target with nothing skipped or doubled.
/// Random rules re-fill the buffer before every write cycle after the
/// first; fixed rules fill once and reuse the block unchanged.
///
/// `on_advance` receives the running byte total after every write, for
/// progress rendering.
///
/// Any write failure is fatal: the pass stops where it is, bytes already
/// written stay written.
pub fn run_pass<W, F>(
    dev: &mut W,
    size: u64,
    rule: &OverwriteRule,
    block: &mut [u8],
    mut on_advance: F,
) -> WipeResult<()>
where
    W: Write + Seek,
    F: FnMut(u64),
{
    let capacity = block.len() as u64;
    let full_blocks = size / capacity;
    let remainder = size % capacity;

    log::debug!(
        "pass geometry: {} full blocks of {} bytes, {} remainder bytes",
        full_blocks,
        capacity,
        remainder
    );

    dev.seek(SeekFrom::Start(0))?;

    // Fill once up front; deterministic passes reuse this block for every
    // write cycle of the pass.
    fill_block(block, rule)?;

    let mut written = 0u64;

    for cycle in 0..full_blocks {
        if cycle > 0 && rule.is_random() {
            fill_block(block, rule)?;
        }
        dev.write_all(block)
            .map_err(|source| WipeError::WriteFailure {
                offset: written,
                source,
            })?;
        written += capacity;
        on_advance(written);
    }

    for _ in 0..remainder {
        if rule.is_random() {
            fill_block(block, rule)?;
        }
        dev.write_all(&block[..1])
            .map_err(|source| WipeError::WriteFailure {
                offset: written,
                source,
            })?;
        written += 1;
        on_advance(written);
    }

    Ok(())
}
