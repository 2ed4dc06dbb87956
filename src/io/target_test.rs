#[cfg(test)]
mod target_tests {
    use crate::io::{resolve_target_size, WipeTarget};
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_regular_file_size_from_metadata() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(&[0xAB; 12345]).unwrap();
        temp.flush().unwrap();

        let target = WipeTarget::open(temp.path()).unwrap();
        assert_eq!(target.size(), 12345);
        assert_eq!(target.path(), temp.path());
    }

    #[test]
    fn test_empty_file_resolves_to_zero() {
        let temp = NamedTempFile::new().unwrap();

        let target = WipeTarget::open(temp.path()).unwrap();
        assert_eq!(target.size(), 0, "empty target must resolve to 0 bytes");
    }

    #[test]
    fn test_missing_path_fails_to_open() {
        let result = WipeTarget::open("/nonexistent/path/to/device");
        assert!(result.is_err());
    }

    #[test]
    fn test_resolve_size_on_open_handle() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(&[0u8; 4096]).unwrap();
        temp.flush().unwrap();

        let file = temp.reopen().unwrap();
        assert_eq!(resolve_target_size(&file), 4096);
    }

    #[test]
    fn test_sync_succeeds_on_regular_file() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(b"data").unwrap();

        let target = WipeTarget::open(temp.path()).unwrap();
        target.sync().unwrap();
    }
}
