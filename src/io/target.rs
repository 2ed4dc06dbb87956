// Target device access
//
// Owns the open handle to the device or file being wiped, plus the byte
// length resolved once at open time and held fixed for the session.

use crate::WipeResult;
use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};

#[cfg(target_os = "linux")]
mod sys {
    // BLKGETSIZE64 returns the device length in bytes.
    nix::ioctl_read!(blkgetsize64, 0x12, 114, u64);
}

#[cfg(target_os = "linux")]
fn block_device_size(file: &File) -> Option<u64> {
    use std::os::unix::io::AsRawFd;

    let mut size: u64 = 0;
    // SAFETY: the fd is a valid open descriptor and the ioctl writes one u64.
    match unsafe { sys::blkgetsize64(file.as_raw_fd(), &mut size) } {
        Ok(_) => Some(size),
        Err(e) => {
            log::debug!("BLKGETSIZE64 failed: {}", e);
            None
        }
    }
}

/// Resolve the wipeable length of an open target in bytes.
///
/// Block devices report their full extent via ioctl; regular files report
/// their metadata length. Returns 0 when the size cannot be determined;
/// the session treats 0 as a fatal precondition failure before writing.
pub fn resolve_target_size(file: &File) -> u64 {
    let metadata = match file.metadata() {
        Ok(m) => m,
        Err(e) => {
            log::debug!("metadata query failed: {}", e);
            return 0;
        }
    };

    #[cfg(target_os = "linux")]
    {
        use std::os::unix::fs::FileTypeExt;
        if metadata.file_type().is_block_device() {
            return block_device_size(file).unwrap_or(0);
        }
    }

    metadata.len()
}

/// The device or file being wiped.
pub struct WipeTarget {
    path: PathBuf,
    size: u64,
    file: File,
}

impl WipeTarget {
    /// Open a device or file for wiping.
    ///
    /// A target that resolves to 0 bytes still opens successfully; the
    /// session logs the invalid size and aborts before any write.
    pub fn open<P: AsRef<Path>>(path: P) -> WipeResult<Self> {
        let path = path.as_ref().to_path_buf();
        let file = OpenOptions::new().write(true).open(&path)?;
        let size = resolve_target_size(&file);
        log::debug!("{}: resolved size {} bytes", path.display(), size);

        Ok(Self { path, size, file })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    /// Writable handle for the pass executor.
    pub fn device_mut(&mut self) -> &mut File {
        &mut self.file
    }

    /// Flush all written data down to the device.
    pub fn sync(&self) -> WipeResult<()> {
        self.file.sync_all()?;
        Ok(())
    }
}
