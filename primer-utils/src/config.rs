// Primer configuration
//
// Optional KDL file controlling timing and presentation. Every key has a
// default; a missing default config file is not an error.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use kdl::{KdlDocument, KdlNode, KdlValue};
use log::{debug, info, warn};
use strum_macros::{Display, EnumString};

use crate::errors::{PrimerError, PrimerResult};

const CONFIG_FILE_NAME: &str = "config.kdl";
const MAX_FRAME_RATE: i64 = 120;

/// Which view the interactive app opens on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum StartView {
    #[default]
    Catalog,
    Pipeline,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Redraw rate for shimmer indicators and the entrance reveal
    pub frame_rate: u32,
    /// Overrides every concept animation's own step interval when set
    pub concept_step: Option<Duration>,
    pub pipeline_step: Duration,
    pub token_cycle: Duration,
    /// Delay before the modal forgets the closed concept
    pub close_delay: Duration,
    pub color: bool,
    pub start_view: StartView,
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            frame_rate: 20,
            concept_step: None,
            pipeline_step: Duration::from_millis(4500),
            token_cycle: Duration::from_millis(800),
            close_delay: Duration::from_millis(300),
            color: true,
            start_view: StartView::Catalog,
            log_file: None,
        }
    }
}

impl Config {
    /// Load config from an explicit path, or from the default location.
    ///
    /// An explicit path must exist; the default location is optional.
    pub fn load(path: Option<&Path>) -> PrimerResult<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => match default_config_path() {
                Some(path) if path.exists() => Self::from_file(&path),
                Some(path) => {
                    debug!("No config at {}, using defaults", path.display());
                    Ok(Self::default())
                }
                None => Ok(Self::default()),
            },
        }
    }

    pub fn from_file(path: &Path) -> PrimerResult<Self> {
        let text = fs::read_to_string(path).map_err(|source| PrimerError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        info!("Loading config from {}", path.display());
        Self::from_kdl(&text)
    }

    pub fn from_kdl(text: &str) -> PrimerResult<Self> {
        let doc: KdlDocument = text.parse()?;
        let mut config = Self::default();

        for node in doc.nodes() {
            let key = node.name().value();
            match key {
                "frame_rate" => {
                    let rate = integer_arg(node)?;
                    if !(1..=MAX_FRAME_RATE).contains(&rate) {
                        return Err(PrimerError::invalid_setting(
                            key,
                            format!("must be between 1 and {MAX_FRAME_RATE}"),
                        ));
                    }
                    config.frame_rate = rate as u32;
                }
                "concept_step" => config.concept_step = Some(duration_arg(node)?),
                "pipeline_step" => config.pipeline_step = duration_arg(node)?,
                "token_cycle" => config.token_cycle = duration_arg(node)?,
                "close_delay" => config.close_delay = duration_arg(node)?,
                "color" => config.color = bool_arg(node)?,
                "start_view" => {
                    let view = string_arg(node)?;
                    config.start_view = view.parse().map_err(|_| {
                        PrimerError::invalid_setting(key, "expected \"catalog\" or \"pipeline\"")
                    })?;
                }
                "log_file" => config.log_file = Some(PathBuf::from(string_arg(node)?)),
                other => warn!("Ignoring unknown config key `{other}`"),
            }
        }

        Ok(config)
    }

    /// Interval between frame ticks
    pub fn frame_interval(&self) -> Duration {
        Duration::from_nanos(1_000_000_000 / self.frame_rate.max(1) as u64)
    }
}

/// `$XDG_CONFIG_HOME/primer/config.kdl`, falling back to `~/.config/primer/`
pub fn default_config_path() -> Option<PathBuf> {
    let base = env::var_os("XDG_CONFIG_HOME")
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(|| env::var_os("HOME").map(|home| PathBuf::from(home).join(".config")))?;
    Some(base.join("primer").join(CONFIG_FILE_NAME))
}

fn first_arg<'a>(node: &'a KdlNode) -> PrimerResult<&'a KdlValue> {
    node.entries()
        .iter()
        .find(|entry| entry.name().is_none())
        .map(|entry| entry.value())
        .ok_or_else(|| PrimerError::invalid_setting(node.name().value(), "missing value"))
}

fn integer_arg(node: &KdlNode) -> PrimerResult<i64> {
    first_arg(node)?
        .as_i64()
        .ok_or_else(|| PrimerError::invalid_setting(node.name().value(), "expected an integer"))
}

fn bool_arg(node: &KdlNode) -> PrimerResult<bool> {
    first_arg(node)?
        .as_bool()
        .ok_or_else(|| PrimerError::invalid_setting(node.name().value(), "expected true or false"))
}

fn string_arg(node: &KdlNode) -> PrimerResult<String> {
    first_arg(node)?
        .as_string()
        .map(str::to_string)
        .ok_or_else(|| PrimerError::invalid_setting(node.name().value(), "expected a string"))
}

/// Durations are humantime strings ("4s", "800ms") or bare milliseconds
fn duration_arg(node: &KdlNode) -> PrimerResult<Duration> {
    let key = node.name().value();
    let value = first_arg(node)?;
    let duration = if let Some(ms) = value.as_i64() {
        if ms < 0 {
            return Err(PrimerError::invalid_setting(key, "must not be negative"));
        }
        Duration::from_millis(ms as u64)
    } else if let Some(text) = value.as_string() {
        humantime::parse_duration(text)
            .map_err(|e| PrimerError::invalid_setting(key, e.to_string()))?
    } else {
        return Err(PrimerError::invalid_setting(
            key,
            "expected a duration such as \"4s\" or a number of milliseconds",
        ));
    };

    if duration.is_zero() {
        return Err(PrimerError::invalid_setting(key, "must be greater than zero"));
    }
    Ok(duration)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::from_kdl("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.pipeline_step, Duration::from_millis(4500));
        assert_eq!(config.token_cycle, Duration::from_millis(800));
        assert_eq!(config.close_delay, Duration::from_millis(300));
        assert_eq!(config.concept_step, None);
        assert_eq!(config.start_view, StartView::Catalog);
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_kdl(
            r#"
            frame_rate 30
            concept_step "2s"
            pipeline_step 1500
            token_cycle "400ms"
            color false
            start_view "pipeline"
            log_file "/tmp/primer.log"
            "#,
        )
        .unwrap();

        assert_eq!(config.frame_rate, 30);
        assert_eq!(config.concept_step, Some(Duration::from_secs(2)));
        assert_eq!(config.pipeline_step, Duration::from_millis(1500));
        assert_eq!(config.token_cycle, Duration::from_millis(400));
        assert!(!config.color);
        assert_eq!(config.start_view, StartView::Pipeline);
        assert_eq!(config.log_file, Some(PathBuf::from("/tmp/primer.log")));
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let config = Config::from_kdl("theme \"dark\"\nframe_rate 10").unwrap();
        assert_eq!(config.frame_rate, 10);
    }

    #[test]
    fn test_invalid_frame_rate() {
        let err = Config::from_kdl("frame_rate 0").unwrap_err();
        assert!(matches!(err, PrimerError::InvalidSetting { ref key, .. } if key == "frame_rate"));

        let err = Config::from_kdl("frame_rate \"fast\"").unwrap_err();
        assert!(err.to_string().contains("expected an integer"));
    }

    #[test]
    fn test_invalid_durations() {
        assert!(Config::from_kdl("close_delay \"soon\"").is_err());
        assert!(Config::from_kdl("pipeline_step 0").is_err());
        assert!(Config::from_kdl("token_cycle -5").is_err());
        assert!(Config::from_kdl("concept_step true").is_err());
    }

    #[test]
    fn test_invalid_start_view() {
        let err = Config::from_kdl("start_view \"settings\"").unwrap_err();
        assert!(err.to_string().contains("start_view"));
    }

    #[test]
    fn test_missing_value() {
        let err = Config::from_kdl("color").unwrap_err();
        assert!(err.to_string().contains("missing value"));
    }

    #[test]
    fn test_parse_error_is_reported() {
        let err = Config::from_kdl("frame_rate {").unwrap_err();
        assert!(matches!(err, PrimerError::ConfigParse(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "frame_rate 12").unwrap();
        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.frame_rate, 12);
    }

    #[test]
    fn test_explicit_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(Some(&dir.path().join("nope.kdl"))).unwrap_err();
        assert!(matches!(err, PrimerError::ConfigRead { .. }));
    }

    #[test]
    fn test_frame_interval() {
        let config = Config {
            frame_rate: 20,
            ..Config::default()
        };
        assert_eq!(config.frame_interval(), Duration::from_millis(50));
    }

    #[test]
    fn test_start_view_parsing() {
        assert_eq!("Pipeline".parse::<StartView>().unwrap(), StartView::Pipeline);
        assert_eq!(StartView::Catalog.to_string(), "catalog");
    }
}
