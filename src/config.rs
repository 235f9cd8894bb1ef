use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// Country filter applied when the configuration leaves `country` empty.
const DEFAULT_COUNTRY: &str = "LT";

/// Run configuration, deserialized from a `config.json` document.
#[derive(Clone, Debug, Deserialize)]
pub struct Config {
    pub input: InputConfig,
    pub output: OutputConfig,
}

/// Where the source CSV sets live and how to process them.
#[derive(Clone, Debug, Deserialize)]
pub struct InputConfig {
    /// Directory holding the click-event CSV files.
    pub input_clicks: PathBuf,
    /// Directory holding the user-record CSV files.
    pub input_users: PathBuf,
    /// Worker count; absent, empty, or zero means one per available CPU.
    #[serde(default, deserialize_with = "de_parallelism")]
    pub parallelism_number: Option<usize>,
    /// Country filter for the detailed report; empty or absent means "LT".
    #[serde(default)]
    pub country: String,
}

/// Where the reports are written. Both directories must already exist.
#[derive(Clone, Debug, Deserialize)]
pub struct OutputConfig {
    /// Directory receiving `total_clicks.csv`.
    pub output_total_clicks: PathBuf,
    /// Directory receiving `{country}_clicks.csv`.
    pub output_filtered_clicks: PathBuf,
}

impl Config {
    /// Load and parse a configuration document.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file =
            File::open(path).with_context(|| format!("opening config {}", path.display()))?;
        let config = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("parsing config {}", path.display()))?;
        Ok(config)
    }

    /// The effective country filter: the configured value verbatim, or the
    /// default when the field is empty. Case is preserved; it feeds both the
    /// comparison and the output file name.
    pub fn country(&self) -> &str {
        if self.input.country.is_empty() {
            DEFAULT_COUNTRY
        } else {
            &self.input.country
        }
    }
}

/// Configuration documents in the wild store `parallelism_number` as a
/// string, so accept a number, a numeric string, or an empty string meaning
/// "unset".
fn de_parallelism<'de, D>(deserializer: D) -> std::result::Result<Option<usize>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Null => Ok(None),
        serde_json::Value::Number(n) => match n.as_u64() {
            Some(0) => Ok(None),
            Some(n) => Ok(Some(n as usize)),
            None => Err(D::Error::custom(format!(
                "parallelism_number must be a non-negative integer, got {n}"
            ))),
        },
        serde_json::Value::String(s) if s.trim().is_empty() => Ok(None),
        serde_json::Value::String(s) => match s.trim().parse::<usize>() {
            Ok(0) => Ok(None),
            Ok(n) => Ok(Some(n)),
            Err(_) => Err(D::Error::custom(format!(
                "parallelism_number must be a non-negative integer, got `{s}`"
            ))),
        },
        other => Err(D::Error::custom(format!(
            "parallelism_number must be a number or string, got {other}"
        ))),
    }
}
