use anyhow::{Context, Result};
use std::fs::{self, File};
use std::io::{BufReader, Read};
use std::path::Path;

const BUFFER_SIZE: usize = 1024 * 1024;

fn blake3_digest(path: &Path) -> Result<blake3::Hash> {
    let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    let mut reader = BufReader::with_capacity(BUFFER_SIZE, file);
    let mut hasher = blake3::Hasher::new();
    let mut buffer = vec![0u8; BUFFER_SIZE];

    loop {
        let bytes_read = reader
            .read(&mut buffer)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        if bytes_read == 0 {
            break;
        }
        hasher.update(&buffer[..bytes_read]);
    }

    Ok(hasher.finalize())
}

/// 兩個檔案內容是否完全相同（先比大小，再比 BLAKE3）
pub fn files_identical(a: &Path, b: &Path) -> Result<bool> {
    let size_a = fs::metadata(a)?.len();
    let size_b = fs::metadata(b)?.len();
    if size_a != size_b {
        return Ok(false);
    }

    Ok(blake3_digest(a)? == blake3_digest(b)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_identical_content() {
        let temp_dir = TempDir::new().unwrap();
        let a = temp_dir.path().join("a.jpg");
        let b = temp_dir.path().join("b.jpg");
        fs::write(&a, "same bytes").unwrap();
        fs::write(&b, "same bytes").unwrap();

        assert!(files_identical(&a, &b).unwrap());
    }

    #[test]
    fn test_same_size_different_content() {
        let temp_dir = TempDir::new().unwrap();
        let a = temp_dir.path().join("a.jpg");
        let b = temp_dir.path().join("b.jpg");
        fs::write(&a, "content A").unwrap();
        fs::write(&b, "content B").unwrap();

        assert!(!files_identical(&a, &b).unwrap());
    }

    #[test]
    fn test_missing_file_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let a = temp_dir.path().join("a.jpg");
        fs::write(&a, "x").unwrap();

        assert!(files_identical(&a, &temp_dir.path().join("missing.jpg")).is_err());
    }
}
