//! Configuration for land/sea fraction weighting.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::fx::FxVariable;
use crate::weighting::AreaType;

/// Configuration for [`LandSeaWeighter`](crate::LandSeaWeighter).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeightingConfig {
    /// Fail if no fraction can be resolved instead of skipping weighting.
    pub strict: bool,

    /// Area type used by `weight_default`.
    pub area_type: AreaType,

    /// Fx variables to try first, in this order. Empty keeps the order in
    /// which the caller supplied the fx files.
    pub fx_priority: Vec<String>,
}

impl Default for WeightingConfig {
    fn default() -> Self {
        Self {
            strict: true,
            area_type: AreaType::Land,
            fx_priority: Vec::new(),
        }
    }
}

impl WeightingConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(val) = std::env::var("LANDSEA_STRICT") {
            config.strict = val.to_lowercase() == "true" || val == "1";
        }

        if let Ok(val) = std::env::var("LANDSEA_AREA_TYPE") {
            match val.to_lowercase().parse::<AreaType>() {
                Ok(area_type) => config.area_type = area_type,
                Err(e) => warn!(value = %val, error = %e, "Ignoring invalid LANDSEA_AREA_TYPE"),
            }
        }

        if let Ok(val) = std::env::var("LANDSEA_FX_PRIORITY") {
            config.fx_priority = parse_priority(&val);
        }

        config
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), String> {
        let mut seen = HashSet::new();

        for name in &self.fx_priority {
            if FxVariable::parse(name).is_none() {
                return Err(format!(
                    "fx_priority entry '{}' must be 'sftlf' or 'sftof'",
                    name
                ));
            }
            if !seen.insert(name.as_str()) {
                return Err(format!("fx_priority entry '{}' is duplicated", name));
            }
        }

        Ok(())
    }
}

fn parse_priority(val: &str) -> Vec<String> {
    val.split(',')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
        .collect()
}
