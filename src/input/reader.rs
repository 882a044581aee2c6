use std::fs;
use std::io::{self, Read};

use crate::error::{MozhiError, Result};

/// The text travels in a URL query string, so inputs are kept small.
pub const MAX_INPUT_SIZE: usize = 1024 * 1024; // 1MB

/// Path that selects stdin instead of a file.
pub const STDIN_PATH: &str = "-";

pub struct InputReader;

impl InputReader {
    /// Reads UTF-8 text from `path`, or from stdin when `path` is `-`.
    pub fn read(path: &str) -> Result<String> {
        if path == STDIN_PATH {
            Self::read_stdin()
        } else {
            Self::read_file(path)
        }
    }

    fn read_file(path: &str) -> Result<String> {
        let metadata = fs::metadata(path).map_err(|e| MozhiError::file(path, e))?;

        let size = metadata.len() as usize;
        if size > MAX_INPUT_SIZE {
            return Err(too_large(path, size));
        }

        fs::read_to_string(path).map_err(|e| MozhiError::file(path, e))
    }

    #[allow(clippy::significant_drop_tightening)]
    fn read_stdin() -> Result<String> {
        let mut buffer = Vec::new();
        let mut chunk = [0u8; 8192];
        let mut stdin = io::stdin().lock();

        loop {
            let bytes_read = stdin
                .read(&mut chunk)
                .map_err(|e| MozhiError::file("<stdin>", e))?;

            if bytes_read == 0 {
                break;
            }

            buffer.extend_from_slice(&chunk[..bytes_read]);

            if buffer.len() > MAX_INPUT_SIZE {
                return Err(too_large("<stdin>", buffer.len()));
            }
        }

        String::from_utf8(buffer).map_err(|e| {
            MozhiError::file("<stdin>", io::Error::new(io::ErrorKind::InvalidData, e))
        })
    }
}

fn too_large(path: &str, size: usize) -> MozhiError {
    MozhiError::file(
        path,
        io::Error::other(format!(
            "input size ({:.1} MB) exceeds maximum allowed size (1 MB)",
            size as f64 / 1024.0 / 1024.0
        )),
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    #[test]
    fn test_read_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "Hello, World!").unwrap();

        let content = InputReader::read(temp_file.path().to_str().unwrap()).unwrap();
        assert_eq!(content, "Hello, World!\n");
    }

    #[test]
    fn test_read_nonexistent_file() {
        let err = InputReader::read("/nonexistent/path/to/file.txt").unwrap_err();
        assert_eq!(err.stage(), "file");
        assert_eq!(err.exit_code(), exitcode::NOINPUT);
        assert!(err.to_string().contains("/nonexistent/path/to/file.txt"));
    }

    #[test]
    fn test_read_file_unicode() {
        let mut temp_file = NamedTempFile::new().unwrap();
        let content = "こんにちは世界！🌍\n日本語テスト";
        write!(temp_file, "{content}").unwrap();

        let result = InputReader::read(temp_file.path().to_str().unwrap()).unwrap();
        assert_eq!(result, content);
    }

    #[test]
    fn test_read_invalid_utf8_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(&[0xff, 0xfe, 0xfd]).unwrap();

        let err = InputReader::read(temp_file.path().to_str().unwrap()).unwrap_err();
        assert_eq!(err.stage(), "file");
    }

    #[test]
    fn test_read_file_exceeds_max_size() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("large_file.txt");

        fs::write(&file_path, "x".repeat(MAX_INPUT_SIZE + 1)).unwrap();

        let err = InputReader::read(file_path.to_str().unwrap()).unwrap_err();
        assert!(err.to_string().contains("exceeds maximum"));
    }

    #[test]
    fn test_read_file_at_max_size() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("max_file.txt");

        fs::write(&file_path, "x".repeat(MAX_INPUT_SIZE)).unwrap();

        let result = InputReader::read(file_path.to_str().unwrap()).unwrap();
        assert_eq!(result.len(), MAX_INPUT_SIZE);
    }
}
