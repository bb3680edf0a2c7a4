use filetime::FileTime;
use log::debug;
use std::fs;
use std::io;
use std::path::Path;

/// 複製檔案並保留存取與修改時間
pub fn copy_preserving_times(source: &Path, target: &Path) -> io::Result<()> {
    fs::copy(source, target)?;

    let metadata = fs::metadata(source)?;
    let atime = FileTime::from_last_access_time(&metadata);
    let mtime = FileTime::from_last_modification_time(&metadata);
    filetime::set_file_times(target, atime, mtime)
}

/// 移動檔案；rename 失敗（例如跨檔案系統）時改為複製後刪除
pub fn move_file(source: &Path, target: &Path) -> io::Result<()> {
    match fs::rename(source, target) {
        Ok(()) => Ok(()),
        Err(e) => {
            debug!(
                "rename 失敗，改用複製後刪除 {}: {e}",
                source.display()
            );
            copy_preserving_times(source, target)?;
            fs::remove_file(source)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_copy_keeps_source_and_mtime() {
        let temp_dir = TempDir::new().unwrap();
        let source = temp_dir.path().join("IMG_0001.JPG");
        let target = temp_dir.path().join("copy.JPG");
        fs::write(&source, "photo").unwrap();

        let old = FileTime::from_unix_time(1_500_000_000, 0);
        filetime::set_file_mtime(&source, old).unwrap();

        copy_preserving_times(&source, &target).unwrap();

        assert!(source.exists());
        assert_eq!(fs::read_to_string(&target).unwrap(), "photo");
        let copied = FileTime::from_last_modification_time(&fs::metadata(&target).unwrap());
        assert_eq!(copied.unix_seconds(), old.unix_seconds());
    }

    #[test]
    fn test_move_removes_source() {
        let temp_dir = TempDir::new().unwrap();
        let source = temp_dir.path().join("IMG_0002.JPG");
        let target = temp_dir.path().join("moved.JPG");
        fs::write(&source, "photo").unwrap();

        move_file(&source, &target).unwrap();

        assert!(!source.exists());
        assert_eq!(fs::read_to_string(&target).unwrap(), "photo");
    }

    #[test]
    fn test_move_missing_source_fails() {
        let temp_dir = TempDir::new().unwrap();
        let result = move_file(
            &temp_dir.path().join("missing.JPG"),
            &temp_dir.path().join("target.JPG"),
        );
        assert!(result.is_err());
    }
}
