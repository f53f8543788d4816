use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use icsagenda_core::agenda::AgendaOptions;
use icsagenda_core::timestamp::ClockStyle;
use serde::Deserialize;

/// Optional settings at ~/.config/icsagenda/config.toml
#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Right-align clock hours (" 9:00 AM")
    pub align_hours: bool,

    /// Upper limit on events, generated occurrences included
    pub max_events: Option<usize>,

    /// Drop events that end before they start
    pub reject_inverted: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            align_hours: false,
            max_events: None,
            reject_inverted: true,
        }
    }
}

impl Config {
    pub fn agenda_options(&self) -> AgendaOptions {
        AgendaOptions {
            clock: if self.align_hours {
                ClockStyle::Aligned
            } else {
                ClockStyle::Compact
            },
            reject_inverted: self.reject_inverted,
        }
    }
}

/// Get the config file path (~/.config/icsagenda/config.toml)
pub fn config_path() -> Result<PathBuf> {
    let config_dir = dirs::config_dir()
        .context("Could not determine config directory")?
        .join("icsagenda");
    Ok(config_dir.join("config.toml"))
}

/// Load config from `path`, or from the default location when no path is given.
///
/// A missing default file yields the defaults; a missing explicit file is an error.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => match config_path() {
            Ok(p) if p.exists() => p,
            _ => return Ok(Config::default()),
        },
    };

    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    let config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file {}", path.display()))?;

    tracing::debug!(path = %path.display(), ?config, "loaded config");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_file_gives_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert!(!config.align_hours);
        assert!(config.reject_inverted);
        assert_eq!(config.max_events, None);
    }

    #[test]
    fn reads_all_keys() {
        let config: Config = toml::from_str(
            "align_hours = true\nmax_events = 500\nreject_inverted = false\n",
        )
        .unwrap();

        let options = config.agenda_options();
        assert_eq!(options.clock, ClockStyle::Aligned);
        assert!(!options.reject_inverted);
        assert_eq!(config.max_events, Some(500));
    }

    #[test]
    fn rejects_unknown_keys() {
        assert!(toml::from_str::<Config>("colour = true\n").is_err());
    }

    #[test]
    fn loads_explicit_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "max_events = 3").unwrap();

        let config = load_config(Some(file.path())).unwrap();
        assert_eq!(config.max_events, Some(3));
    }

    #[test]
    fn missing_explicit_path_is_an_error() {
        let err = load_config(Some(Path::new("/nonexistent/icsagenda.toml"))).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
