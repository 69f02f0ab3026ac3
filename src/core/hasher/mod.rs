//! # Hasher Module
//!
//! Whole-file content digests for run-scoped duplicate detection.
//!
//! Uses streaming XXH3-128 - fast, and collision-free in practice for
//! this non-adversarial use. Digests live only for the duration of one
//! organize run; nothing is persisted.

use std::fs::File;
use std::io::Read;
use std::path::Path;
use xxhash_rust::xxh3::Xxh3;

const READ_BUFFER_SIZE: usize = 64 * 1024;

/// Compute the XXH3-128 digest of a file's full byte content
pub fn hash_file(path: &Path) -> std::io::Result<u128> {
    let mut file = File::open(path)?;
    let mut hasher = Xxh3::new();
    let mut buffer = [0u8; READ_BUFFER_SIZE];

    loop {
        let bytes_read = file.read(&mut buffer)?;
        if bytes_read == 0 {
            break;
        }
        hasher.update(&buffer[..bytes_read]);
    }

    Ok(hasher.digest128())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_file(dir: &TempDir, name: &str, content: &[u8]) -> std::path::PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn identical_content_yields_identical_digest() {
        let dir = TempDir::new().unwrap();
        let a = write_file(&dir, "a.jpg", b"same bytes");
        let b = write_file(&dir, "b.jpg", b"same bytes");

        assert_eq!(hash_file(&a).unwrap(), hash_file(&b).unwrap());
    }

    #[test]
    fn different_content_yields_different_digest() {
        let dir = TempDir::new().unwrap();
        let a = write_file(&dir, "a.jpg", b"some bytes");
        let b = write_file(&dir, "b.jpg", b"other bytes");

        assert_ne!(hash_file(&a).unwrap(), hash_file(&b).unwrap());
    }

    #[test]
    fn digest_covers_content_past_one_buffer() {
        let dir = TempDir::new().unwrap();
        // Two files that agree for the first buffer but differ at the tail
        let mut content_a = vec![0xAB; READ_BUFFER_SIZE + 16];
        let mut content_b = content_a.clone();
        content_a.push(1);
        content_b.push(2);

        let a = write_file(&dir, "a.bin", &content_a);
        let b = write_file(&dir, "b.bin", &content_b);

        assert_ne!(hash_file(&a).unwrap(), hash_file(&b).unwrap());
    }

    #[test]
    fn hash_of_missing_file_is_an_error() {
        assert!(hash_file(Path::new("/nonexistent/file.jpg")).is_err());
    }
}
