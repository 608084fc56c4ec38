#[cfg(test)]
mod tests {
    use crate::{Arena, LoadError, Loader};
    use std::fs;
    use tempfile::TempDir;

    fn write_fixture(dir: &TempDir, name: &str, data: &[u8]) -> std::path::PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, data).unwrap();
        path
    }

    #[test]
    fn test_load_matches_file_bytes() {
        let dir = TempDir::new().unwrap();
        let path = write_fixture(&dir, "hello.txt", b"Hello\n");
        let arena = Arena::new();

        let content = Loader::new().load(&arena, &path).unwrap();
        assert_eq!(content.as_bytes(), b"Hello\n");
        assert_eq!(content.len(), 6);
        assert_eq!(content.path(), path.as_path());
    }

    #[test]
    fn test_load_uses_arena() {
        let dir = TempDir::new().unwrap();
        let path = write_fixture(&dir, "a.txt", b"arena-backed");
        let arena = Arena::new();

        Loader::new().load(&arena, &path).unwrap();
        assert_eq!(arena.allocation_count(), 1);
        assert!(arena.allocated_bytes() >= 12);
    }

    #[test]
    fn test_load_binary_content_untouched() {
        let dir = TempDir::new().unwrap();
        let data: Vec<u8> = (0..=255u8).collect();
        let path = write_fixture(&dir, "bin.dat", &data);
        let arena = Arena::new();

        let content = Loader::new().load(&arena, &path).unwrap();
        assert_eq!(content.as_bytes(), data.as_slice());
    }

    #[test]
    fn test_load_empty_file() {
        let dir = TempDir::new().unwrap();
        let path = write_fixture(&dir, "empty.txt", b"");
        let arena = Arena::new();

        let content = Loader::new().load(&arena, &path).unwrap();
        assert!(content.is_empty());
    }

    #[test]
    fn test_load_missing_file_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.txt");
        let arena = Arena::new();

        let result = Loader::new().load(&arena, &path);
        assert!(matches!(result, Err(LoadError::Open { .. })));
        assert_eq!(arena.allocation_count(), 0);
    }

    #[test]
    fn test_load_directory_fails() {
        let dir = TempDir::new().unwrap();
        let arena = Arena::new();

        let result = Loader::new().load(&arena, dir.path());
        // Some platforms refuse to open a directory at all
        assert!(matches!(
            result,
            Err(LoadError::NotAFile(_)) | Err(LoadError::Open { .. })
        ));
    }

    #[test]
    fn test_load_rejects_oversized_file() {
        let dir = TempDir::new().unwrap();
        let path = write_fixture(&dir, "big.txt", &[b'x'; 100]);
        let arena = Arena::new();

        let result = Loader::new().max_size(10).load(&arena, &path);
        match result {
            Err(LoadError::FileTooLarge { size, max, .. }) => {
                assert_eq!(size, 100);
                assert_eq!(max, 10);
            }
            other => panic!("expected FileTooLarge, got {:?}", other),
        }
        assert_eq!(arena.allocated_bytes(), 0);
    }

    #[test]
    fn test_load_at_size_limit_succeeds() {
        let dir = TempDir::new().unwrap();
        let path = write_fixture(&dir, "edge.txt", &[b'x'; 10]);
        let arena = Arena::new();

        let content = Loader::new().max_size(10).load(&arena, &path).unwrap();
        assert_eq!(content.len(), 10);
    }

    #[test]
    fn test_digest_is_stable() {
        let dir = TempDir::new().unwrap();
        let path = write_fixture(&dir, "hello.txt", b"Hello\n");
        let arena = Arena::new();

        let first = Loader::new().load(&arena, &path).unwrap().digest();
        let second = Loader::new().load(&arena, &path).unwrap().digest();
        assert_eq!(first, second);
        assert_eq!(first.len(), 64);
    }

    #[test]
    fn test_error_message_names_path() {
        let arena = Arena::new();
        let path = std::path::Path::new("definitely/not/here.txt");
        let err = Loader::new().load(&arena, path).unwrap_err();
        assert!(err.to_string().contains("definitely/not/here.txt"));
    }

    #[test]
    fn test_default_loader_has_no_size_cap() {
        let dir = TempDir::new().unwrap();
        let data = vec![b'x'; 100 * 1024];
        let path = write_fixture(&dir, "big.txt", &data);
        let arena = Arena::new();

        let content = Loader::new().load(&arena, &path).unwrap();
        assert_eq!(content.len(), 100 * 1024);
        assert_eq!(content.as_bytes(), data.as_slice());
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_file_growing_past_reported_size_is_changed() {
        // procfs reports 0 bytes but a read returns data
        let path = std::path::Path::new("/proc/self/status");
        let arena = Arena::new();

        let result = Loader::new().load(&arena, path);
        match result {
            Err(LoadError::Changed { expected, .. }) => assert_eq!(expected, 0),
            other => panic!("expected Changed, got {:?}", other),
        }
        // The exact-size buffer was handed out but never exposed
        assert_eq!(arena.allocation_count(), 1);
    }

    #[test]
    fn test_open_error_does_not_repeat_cause() {
        use std::error::Error;

        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.txt");
        let arena = Arena::new();

        let err = Loader::new().load(&arena, &path).unwrap_err();
        assert!(!err.to_string().contains("os error"));
        assert!(err.source().is_some());
    }
}
