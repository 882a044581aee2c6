//! XDG-style path utilities for the configuration directory.
//!
//! XDG Base Directory conventions are preferred over OS-specific locations
//! so the config file lives in the same place on every platform.

use std::path::PathBuf;

use crate::error::{MozhiError, Result};

const APP_DIR: &str = "mozhi";

/// Returns the configuration directory for mozhi.
///
/// Resolution order:
/// 1. `$XDG_CONFIG_HOME/mozhi` if `XDG_CONFIG_HOME` is set and non-empty
/// 2. `~/.config/mozhi` otherwise
pub fn config_dir() -> Result<PathBuf> {
    match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) if !xdg.is_empty() => Ok(PathBuf::from(xdg).join(APP_DIR)),
        _ => Ok(home_dir()?.join(".config").join(APP_DIR)),
    }
}

/// Returns the path of `config.toml` inside [`config_dir`].
pub fn config_file() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.toml"))
}

fn home_dir() -> Result<PathBuf> {
    dirs::home_dir().ok_or_else(|| {
        MozhiError::InvalidConfig("failed to determine home directory".to_string())
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn with_xdg_config_home<F: FnOnce()>(value: Option<&str>, f: F) {
        let original = std::env::var("XDG_CONFIG_HOME").ok();
        // SAFETY: tests touching the environment are serialized.
        unsafe {
            match value {
                Some(v) => std::env::set_var("XDG_CONFIG_HOME", v),
                None => std::env::remove_var("XDG_CONFIG_HOME"),
            }
        }

        f();

        // SAFETY: as above.
        unsafe {
            match original {
                Some(v) => std::env::set_var("XDG_CONFIG_HOME", v),
                None => std::env::remove_var("XDG_CONFIG_HOME"),
            }
        }
    }

    #[test]
    #[serial]
    fn test_config_dir_default() {
        with_xdg_config_home(None, || {
            let dir = config_dir().unwrap();
            assert!(dir.ends_with(".config/mozhi"));
        });
    }

    #[test]
    #[serial]
    fn test_config_dir_empty_xdg_falls_back() {
        with_xdg_config_home(Some(""), || {
            let dir = config_dir().unwrap();
            assert!(dir.ends_with(".config/mozhi"));
        });
    }

    #[test]
    #[serial]
    fn test_config_dir_xdg_override() {
        with_xdg_config_home(Some("/custom/config"), || {
            assert_eq!(config_dir().unwrap(), PathBuf::from("/custom/config/mozhi"));
            assert_eq!(
                config_file().unwrap(),
                PathBuf::from("/custom/config/mozhi/config.toml")
            );
        });
    }
}
