/// Policy compliance integration tests
///
/// Drive individual passes against real files and check the bytes each
/// published standard requires at every stage.
use lethe_wipe::engine::{run_pass, BLOCK_SIZE};
use lethe_wipe::policies::{by_index, OverwriteRule};
use rand::RngCore;
use std::fs::OpenOptions;
use std::io::Write;
use tempfile::NamedTempFile;

fn junk_file(len: usize) -> NamedTempFile {
    let mut temp = NamedTempFile::new().expect("Failed to create temp target");
    let mut junk = vec![0u8; len];
    rand::thread_rng().fill_bytes(&mut junk);
    temp.write_all(&junk).expect("Failed to seed target");
    temp.flush().expect("Failed to flush target");
    temp
}

#[test]
fn test_dod_5220_22m_intermediate_states() {
    let temp = junk_file(100_000);
    let dod = by_index(3).expect("DoD policy");
    let mut block = vec![0u8; BLOCK_SIZE];

    let mut dev = OpenOptions::new()
        .write(true)
        .open(temp.path())
        .expect("Failed to open target");

    // Pass 1: zeros.
    run_pass(&mut dev, 100_000, &dod.rules[0], &mut block, |_| {}).unwrap();
    dev.sync_all().unwrap();
    let data = std::fs::read(temp.path()).unwrap();
    assert!(data.iter().all(|&b| b == 0x00), "after pass 1: all zeros");

    // Pass 2: ones.
    run_pass(&mut dev, 100_000, &dod.rules[1], &mut block, |_| {}).unwrap();
    dev.sync_all().unwrap();
    let data = std::fs::read(temp.path()).unwrap();
    assert!(data.iter().all(|&b| b == 0xFF), "after pass 2: all ones");

    // Pass 3: random.
    run_pass(&mut dev, 100_000, &dod.rules[2], &mut block, |_| {}).unwrap();
    dev.sync_all().unwrap();
    let data = std::fs::read(temp.path()).unwrap();
    assert_eq!(data.len(), 100_000);
    assert!(
        data.iter().any(|&b| b != 0x00),
        "after pass 3: not the zero fill"
    );
    assert!(
        data.iter().any(|&b| b != 0xFF),
        "after pass 3: not the ones fill"
    );
}

#[test]
fn test_gutmann_three_byte_pattern_tiles_across_blocks() {
    // Pass 7 of the Gutmann table is the 3-byte rotation 92 49 24. With a
    // block size that is a multiple of three, the tile must continue
    // unbroken across block boundaries for the full-block extent.
    let gutmann = by_index(5).expect("Gutmann policy");
    let rule = &gutmann.rules[6];
    assert_eq!(*rule, OverwriteRule::Fixed(&[0x92, 0x49, 0x24]));

    let size = BLOCK_SIZE * 2;
    let temp = junk_file(size);
    let mut block = vec![0u8; BLOCK_SIZE];

    let mut dev = OpenOptions::new()
        .write(true)
        .open(temp.path())
        .expect("Failed to open target");

    run_pass(&mut dev, size as u64, rule, &mut block, |_| {}).unwrap();
    dev.sync_all().unwrap();

    let data = std::fs::read(temp.path()).unwrap();
    let pattern = [0x92u8, 0x49, 0x24];
    for (k, &byte) in data.iter().enumerate() {
        assert_eq!(byte, pattern[k % 3], "byte {}", k);
    }
}

#[test]
fn test_walking_nibble_pass_fills_uniformly() {
    let gutmann = by_index(5).expect("Gutmann policy");

    // Pass 13 is 0x33.
    let rule = &gutmann.rules[12];
    assert_eq!(*rule, OverwriteRule::Fixed(&[0x33]));

    let temp = junk_file(10_000);
    let mut block = vec![0u8; BLOCK_SIZE];

    let mut dev = OpenOptions::new()
        .write(true)
        .open(temp.path())
        .expect("Failed to open target");

    run_pass(&mut dev, 10_000, rule, &mut block, |_| {}).unwrap();
    dev.sync_all().unwrap();

    let data = std::fs::read(temp.path()).unwrap();
    assert!(data.iter().all(|&b| b == 0x33));
}

#[test]
fn test_consecutive_random_passes_produce_different_images() {
    let temp = junk_file(20_000);
    let mut block = vec![0u8; BLOCK_SIZE];

    let mut dev = OpenOptions::new()
        .write(true)
        .open(temp.path())
        .expect("Failed to open target");

    run_pass(&mut dev, 20_000, &OverwriteRule::Random, &mut block, |_| {}).unwrap();
    dev.sync_all().unwrap();
    let first = std::fs::read(temp.path()).unwrap();

    run_pass(&mut dev, 20_000, &OverwriteRule::Random, &mut block, |_| {}).unwrap();
    dev.sync_all().unwrap();
    let second = std::fs::read(temp.path()).unwrap();

    assert_ne!(first, second, "random passes must not repeat an image");
}
