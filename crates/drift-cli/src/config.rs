//! Layout configuration lookup for the CLI
//!
//! A configuration file is taken from the first of:
//!
//! 1. the path given with `--config`,
//! 2. `drift/config.toml` relative to the working directory,
//! 3. `config.toml` in the platform config directory (via `directories`).
//!
//! If none exists the built-in defaults are used. A file that is found is
//! parsed and validated before it is handed to the layout.

use std::{
    fmt, fs,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info};
use thiserror::Error;

use drift::{DriftError, config::LayoutConfig};

const LOCAL_CONFIG: &str = "drift/config.toml";

/// Errors raised while reading a layout configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("configuration file {} does not exist", .0.display())]
    MissingFile(PathBuf),

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },

    #[error("invalid configuration in {}: {reason}", path.display())]
    Invalid { path: PathBuf, reason: String },
}

impl From<ConfigError> for DriftError {
    fn from(err: ConfigError) -> Self {
        DriftError::Config(err.to_string())
    }
}

/// Where the active configuration came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    Explicit(PathBuf),
    Local(PathBuf),
    System(PathBuf),
    Default,
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Explicit(path) => write!(f, "explicit path {}", path.display()),
            Self::Local(path) => write!(f, "local path {}", path.display()),
            Self::System(path) => write!(f, "system path {}", path.display()),
            Self::Default => f.write_str("built-in defaults"),
        }
    }
}

impl ConfigSource {
    fn path(&self) -> Option<&Path> {
        match self {
            Self::Explicit(path) | Self::Local(path) | Self::System(path) => Some(path),
            Self::Default => None,
        }
    }
}

/// Picks the configuration source without reading it.
///
/// An explicit path always wins, even if it does not exist, so that a typo
/// on the command line is reported instead of silently falling back.
fn locate(explicit_path: Option<&Path>, system_dir: Option<&Path>) -> ConfigSource {
    if let Some(path) = explicit_path {
        return ConfigSource::Explicit(path.to_path_buf());
    }

    let local = Path::new(LOCAL_CONFIG);
    if local.exists() {
        return ConfigSource::Local(local.to_path_buf());
    }

    match system_dir {
        Some(dir) => {
            let system = dir.join("config.toml");
            if system.exists() {
                return ConfigSource::System(system);
            }
            debug!(path = system.display().to_string(); "System configuration file not found");
        }
        None => debug!("Could not determine platform-specific config directory"),
    }

    ConfigSource::Default
}

/// Find and load the layout configuration.
///
/// # Errors
///
/// Returns [`DriftError::Config`] if an explicit path does not exist, or if
/// the selected file cannot be read, parsed, or validated.
pub fn load_config(explicit_path: Option<impl AsRef<Path>>) -> Result<LayoutConfig, DriftError> {
    let project_dirs = ProjectDirs::from("com", "drift", "drift");
    let source = locate(
        explicit_path.as_ref().map(|path| path.as_ref()),
        project_dirs.as_ref().map(ProjectDirs::config_dir),
    );

    match source.path() {
        Some(path) => {
            info!(source:% = source; "Loading configuration");
            Ok(read_config_file(path)?)
        }
        None => {
            debug!("No configuration file found, using default configuration");
            Ok(LayoutConfig::default())
        }
    }
}

fn read_config_file(path: &Path) -> Result<LayoutConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::MissingFile(path.to_path_buf()));
    }

    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let config: LayoutConfig = toml::from_str(&content).map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    config.validate().map_err(|e| ConfigError::Invalid {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_explicit_path_wins_even_if_missing() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("absent.toml");
        let system = tempdir().unwrap();
        fs::write(system.path().join("config.toml"), "").unwrap();

        assert_eq!(
            locate(Some(missing.as_path()), Some(system.path())),
            ConfigSource::Explicit(missing)
        );
    }

    #[test]
    fn test_system_dir_used_when_present() {
        let system = tempdir().unwrap();
        let expected = system.path().join("config.toml");

        // Only meaningful when the working directory has no local override.
        if Path::new(LOCAL_CONFIG).exists() {
            return;
        }
        assert_eq!(locate(None, Some(system.path())), ConfigSource::Default);

        fs::write(&expected, "[canvas]\nwidth = 10.0\n").unwrap();
        assert_eq!(
            locate(None, Some(system.path())),
            ConfigSource::System(expected)
        );
        assert_eq!(locate(None, None), ConfigSource::Default);
    }

    #[test]
    fn test_read_partial_file_keeps_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[generator]\nvertices = 7\n").unwrap();

        let config = read_config_file(&path).unwrap();
        assert_eq!(config.generator().vertices(), 7);
        assert_eq!(config.canvas().width(), 800.0);
    }

    #[test]
    fn test_read_errors_name_the_file() {
        let dir = tempdir().unwrap();

        let missing = dir.path().join("absent.toml");
        assert!(matches!(
            read_config_file(&missing),
            Err(ConfigError::MissingFile(_))
        ));

        let broken = dir.path().join("broken.toml");
        fs::write(&broken, "[cooling\n").unwrap();
        let err = read_config_file(&broken).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("broken.toml"));

        let invalid = dir.path().join("invalid.toml");
        fs::write(&invalid, "[cooling]\ndecay = 1.5\n").unwrap();
        let err = read_config_file(&invalid).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { .. }));
        assert!(DriftError::from(err).to_string().contains("decay"));
    }
}
