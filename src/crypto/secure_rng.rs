use anyhow::{anyhow, Result};
use ring::rand::{SecureRandom, SystemRandom};
use std::fs::File;
use std::io::Read;

/// Trait for entropy sources
pub trait EntropySource: Send + Sync {
    /// Fill buffer with random bytes
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<()>;
    /// Check if source is available
    fn is_available(&self) -> bool;
    /// Get source name for logging
    fn name(&self) -> &str;
}

/// Ring-based system random (uses OS facilities)
pub struct RingSystemRandom {
    rng: SystemRandom,
}

impl Default for RingSystemRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl RingSystemRandom {
    pub fn new() -> Self {
        Self {
            rng: SystemRandom::new(),
        }
    }
}

impl EntropySource for RingSystemRandom {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<()> {
        self.rng
            .fill(dest)
            .map_err(|_| anyhow!("ring SystemRandom failed"))?;
        Ok(())
    }

    fn is_available(&self) -> bool {
        true
    }

    fn name(&self) -> &str {
        "RingSystemRandom"
    }
}

/// OS urandom entropy source, used when the primary source fails
pub struct URandom {
    available: bool,
}

impl Default for URandom {
    fn default() -> Self {
        Self::new()
    }
}

impl URandom {
    pub fn new() -> Self {
        let available = std::path::Path::new("/dev/urandom").exists();
        Self { available }
    }
}

impl EntropySource for URandom {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<()> {
        if !self.available {
            return Err(anyhow!("/dev/urandom not available"));
        }

        let mut file = File::open("/dev/urandom")
            .map_err(|e| anyhow!("Failed to open /dev/urandom: {}", e))?;

        file.read_exact(dest)
            .map_err(|e| anyhow!("Failed to read from /dev/urandom: {}", e))?;

        Ok(())
    }

    fn is_available(&self) -> bool {
        self.available
    }

    fn name(&self) -> &str {
        "URandom"
    }
}

/// Random byte provider backed by an ordered chain of entropy sources.
///
/// Each request is served by the first source that succeeds; nothing is
/// cached between requests, so consecutive fills always draw fresh bytes.
pub struct SecureRng {
    sources: Vec<Box<dyn EntropySource>>,
}

impl SecureRng {
    pub fn new() -> Result<Self> {
        let sources: Vec<Box<dyn EntropySource>> = vec![
            Box::new(RingSystemRandom::new()),
            Box::new(URandom::new()),
        ];

        if !sources.iter().any(|s| s.is_available()) {
            return Err(anyhow!("No entropy sources available"));
        }

        Ok(Self { sources })
    }

    /// Fill buffer with cryptographically secure random bytes
    pub fn fill_bytes(&self, dest: &mut [u8]) -> Result<()> {
        for source in &self.sources {
            if !source.is_available() {
                continue;
            }
            match source.fill_bytes(dest) {
                Ok(()) => return Ok(()),
                Err(e) => log::warn!("entropy source {} failed: {}", source.name(), e),
            }
        }

        Err(anyhow!("All entropy sources failed"))
    }
}

lazy_static::lazy_static! {
    static ref GLOBAL_RNG: SecureRng = SecureRng::new()
        .expect("Failed to initialize global secure RNG");
}

/// Convenience function to fill bytes using the global RNG
pub fn secure_random_bytes(dest: &mut [u8]) -> Result<()> {
    GLOBAL_RNG.fill_bytes(dest)
}
