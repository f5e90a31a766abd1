use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use chance_locale::Nationality;

use crate::error::{ChanceError, Result};

/// Engine configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChanceOptions {
    /// Seed for the random source. `None` seeds from entropy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Nationality used by `first_name` when the caller leaves it open.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_nationality: Option<Nationality>,
}

impl ChanceOptions {
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Load options from a `.json` or `.toml` file, chosen by extension.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).inspect_err(|err| {
            warn!(path = %path.display(), error = %err, "failed to read chance options");
        })?;
        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let parsed = if is_json {
            Self::from_json_str(&content)
        } else {
            Self::from_toml_str(&content)
        };
        parsed.inspect_err(|err: &ChanceError| {
            warn!(path = %path.display(), error = %err, "invalid chance options");
        })
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}
