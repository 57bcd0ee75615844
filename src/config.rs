use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::{debug, info};

/// Config file read when `--config` is not given, if it exists.
pub const DEFAULT_CONFIG_PATH: &str = "planificador.toml";

/// Top-level planner configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlannerConfig {
    /// Board window settings.
    #[serde(default)]
    pub board: BoardToml,

    /// Report settings.
    #[serde(default)]
    pub report: ReportToml,

    /// Single-day holidays.
    #[serde(default)]
    pub holidays: Vec<HolidayToml>,

    /// Holiday plans (bridges).
    #[serde(default)]
    pub plans: Vec<PlanToml>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BoardToml {
    /// Offset of the default first column from today.
    #[serde(default = "default_lead_days")]
    pub lead_days: i64,
    /// Offset of the default last column from today.
    #[serde(default = "default_span_days")]
    pub span_days: i64,
}

impl Default for BoardToml {
    fn default() -> Self {
        Self {
            lead_days: default_lead_days(),
            span_days: default_span_days(),
        }
    }
}

fn default_lead_days() -> i64 {
    -2
}
fn default_span_days() -> i64 {
    12
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReportToml {
    /// Known carriers; other `--transport` values still work but are warned about.
    #[serde(default = "default_carriers")]
    pub carriers: Vec<String>,
}

impl Default for ReportToml {
    fn default() -> Self {
        Self {
            carriers: default_carriers(),
        }
    }
}

fn default_carriers() -> Vec<String> {
    ["Innova", "Primafrío", "Disfrimur", "Otros"]
        .into_iter()
        .map(String::from)
        .collect()
}

/// A holiday entry. Dates are quoted `YYYY-MM-DD` strings.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HolidayToml {
    #[serde(default)]
    pub id: Option<String>,
    pub date: String,
    pub name: String,
}

/// A holiday plan entry.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlanToml {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    pub start_date: String,
    pub end_date: String,
}

/// Loads the configuration.
///
/// With an explicit path the file must exist. Without one,
/// [`DEFAULT_CONFIG_PATH`] is read if present and defaults are used
/// otherwise.
pub fn load(path: Option<&Path>) -> Result<PlannerConfig> {
    let path: PathBuf = match path {
        Some(p) => p.to_path_buf(),
        None => {
            let default = PathBuf::from(DEFAULT_CONFIG_PATH);
            if !default.exists() {
                debug!("no config file, using defaults");
                return Ok(PlannerConfig::default());
            }
            default
        }
    };
    let toml_str = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    let config: PlannerConfig = toml::from_str(&toml_str)
        .with_context(|| format!("failed to parse TOML config: {}", path.display()))?;
    info!(
        path = %path.display(),
        n_holidays = config.holidays.len(),
        n_plans = config.plans.len(),
        "config loaded"
    );
    Ok(config)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("create temp file");
        file.write_all(contents.as_bytes()).expect("write config");
        file
    }

    #[test]
    fn empty_file_uses_defaults() {
        let file = write_config("");
        let config = load(Some(file.path())).unwrap();
        assert_eq!(config.board.lead_days, -2);
        assert_eq!(config.board.span_days, 12);
        assert_eq!(config.report.carriers.len(), 4);
        assert!(config.holidays.is_empty());
    }

    #[test]
    fn full_file() {
        let file = write_config(
            r#"
            [board]
            lead_days = 0
            span_days = 6

            [[holidays]]
            date = "2024-12-25"
            name = "Navidad"

            [[plans]]
            id = "dic"
            name = "Puente Diciembre"
            start_date = "2024-12-06"
            end_date = "2024-12-09"
            "#,
        );
        let config = load(Some(file.path())).unwrap();
        assert_eq!(config.board.span_days, 6);
        assert_eq!(config.holidays[0].name, "Navidad");
        assert_eq!(config.plans[0].id.as_deref(), Some("dic"));
    }

    #[test]
    fn unknown_field_rejected() {
        let file = write_config("[board]\nlead = 3\n");
        let err = load(Some(file.path())).unwrap_err();
        assert!(format!("{err:#}").contains("unknown field"), "{err:#}");
    }

    #[test]
    fn missing_explicit_file_fails() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let err = load(Some(dir.path().join("nope.toml").as_path())).unwrap_err();
        assert!(err.to_string().contains("failed to read config file"));
    }
}
