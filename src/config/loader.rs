use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use super::core::LazypipeConfig;
use crate::errors::{Error, Result};

/// File name searched for by [`load_config`].
pub const CONFIG_FILE_NAME: &str = ".lazypipe.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Read the raw contents of a config file
pub(crate) fn read_config_file(path: &Path) -> std::result::Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Pure function to parse and validate config from TOML string
pub fn parse_config(contents: &str) -> Result<LazypipeConfig> {
    let config = toml::from_str::<LazypipeConfig>(contents)
        .map_err(|e| Error::config(format!("Failed to parse {}: {}", CONFIG_FILE_NAME, e)))?;

    if config.pipeline.max_buffered == Some(0) {
        return Err(Error::config(
            "pipeline.max_buffered must be at least 1 when set",
        ));
    }

    Ok(config)
}

/// Load and parse a config file at an explicit path.
pub fn load_config_from_path(config_path: &Path) -> Result<LazypipeConfig> {
    let contents = read_config_file(config_path)?;
    let config = parse_config(&contents)?;
    tracing::debug!(path = %config_path.display(), "Loaded config");
    Ok(config)
}

/// Try loading a config from `config_path`, logging rather than failing.
pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<LazypipeConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_config(&contents) {
        Ok(config) => {
            tracing::debug!(path = %config_path.display(), "Loaded config");
            Some(config)
        }
        Err(e) => {
            tracing::warn!("{}. Using defaults.", e);
            None
        }
    }
}

/// Handle file read errors with appropriate logging
pub(crate) fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    // Only log actual errors, not "file not found"
    if error.kind() != std::io::ErrorKind::NotFound {
        tracing::warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

/// Pure function to generate directory ancestors up to a depth limit
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Search `start` and its ancestors for `.lazypipe.toml`.
pub fn find_config(start: PathBuf) -> Option<LazypipeConfig> {
    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
}

/// Load the nearest config above the current directory, or defaults.
pub fn load_config() -> LazypipeConfig {
    let current = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            tracing::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            return LazypipeConfig::default();
        }
    };

    find_config(current).unwrap_or_else(|| {
        tracing::debug!(
            "No config found after checking {} directories. Using default config.",
            MAX_TRAVERSAL_DEPTH
        );
        LazypipeConfig::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directory_ancestors_depth() {
        let dirs: Vec<_> = directory_ancestors(PathBuf::from("/a/b/c"), 2).collect();
        assert_eq!(dirs, vec![PathBuf::from("/a/b/c"), PathBuf::from("/a/b")]);
    }

    #[test]
    fn test_parse_empty_config() {
        let config = parse_config("").unwrap();
        assert_eq!(config, LazypipeConfig::default());
    }

    #[test]
    fn test_parse_rejects_zero_buffer() {
        let err = parse_config("[pipeline]\nmax_buffered = 0\n").unwrap_err();
        assert_eq!(err.category(), "Config");
    }

    #[test]
    fn test_parse_invalid_toml() {
        assert!(parse_config("pipeline = [").is_err());
    }
}
