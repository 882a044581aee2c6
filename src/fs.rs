//! File system utilities.

use std::fs;
use std::path::Path;

use crate::error::{MozhiError, Result};

/// Permissions for written output: owner read/write, everyone else read.
#[cfg(unix)]
const OUTPUT_MODE: u32 = 0o644;

/// Writes content to a file atomically using a temp file and rename.
///
/// The temp file lives next to the target so the rename stays on one
/// filesystem. An existing file is replaced; on Unix the result has mode
/// `0644` regardless of the previous file's mode.
pub fn atomic_write(file_path: &str, content: &str) -> Result<()> {
    let path = Path::new(file_path);
    let parent = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let file_name = path.file_name().unwrap_or_default().to_string_lossy();
    let temp_path = parent.join(format!(".{file_name}.tmp"));

    let write = || -> std::io::Result<()> {
        fs::write(&temp_path, content)?;
        set_output_permissions(&temp_path)?;
        fs::rename(&temp_path, path)
    };

    write().map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        MozhiError::file(file_path, e)
    })
}

#[cfg(unix)]
fn set_output_permissions(path: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(OUTPUT_MODE))
}

#[cfg(not(unix))]
#[allow(clippy::unnecessary_wraps)]
fn set_output_permissions(_path: &Path) -> std::io::Result<()> {
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_atomic_write_creates_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("test.txt");
        let file_path_str = file_path.to_str().unwrap();

        atomic_write(file_path_str, "Bonjour").unwrap();

        let content = fs::read_to_string(&file_path).unwrap();
        assert_eq!(content, "Bonjour");
    }

    #[test]
    fn test_atomic_write_overwrites_existing() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("test.txt");
        let file_path_str = file_path.to_str().unwrap();

        fs::write(&file_path, "Original content that is longer").unwrap();
        atomic_write(file_path_str, "New").unwrap();

        let content = fs::read_to_string(&file_path).unwrap();
        assert_eq!(content, "New");
    }

    #[test]
    fn test_atomic_write_no_temp_file_remains() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("test.txt");

        atomic_write(file_path.to_str().unwrap(), "content").unwrap();

        let temp_path = temp_dir.path().join(".test.txt.tmp");
        assert!(!temp_path.exists());
    }

    #[test]
    fn test_atomic_write_unicode_content_is_byte_exact() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("test.txt");

        let content = "こんにちは世界！🌍\r\n\tçà";
        atomic_write(file_path.to_str().unwrap(), content).unwrap();

        let bytes = fs::read(&file_path).unwrap();
        assert_eq!(bytes, content.as_bytes());
    }

    #[test]
    fn test_atomic_write_missing_directory_is_file_error() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("missing").join("out.txt");

        let err = atomic_write(file_path.to_str().unwrap(), "content").unwrap_err();
        assert_eq!(err.stage(), "file");
    }

    #[cfg(unix)]
    #[test]
    fn test_atomic_write_sets_mode_0644() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("test.txt");
        fs::write(&file_path, "old").unwrap();
        fs::set_permissions(&file_path, fs::Permissions::from_mode(0o600)).unwrap();

        atomic_write(file_path.to_str().unwrap(), "new").unwrap();

        let mode = fs::metadata(&file_path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o644);
    }
}
