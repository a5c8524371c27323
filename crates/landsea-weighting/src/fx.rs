//! Fx (fixed auxiliary) variable references.

use std::fmt;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Fx variables a land fraction can be derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FxVariable {
    /// Land area fraction, in percent.
    Sftlf,
    /// Sea area fraction, in percent.
    Sftof,
}

impl FxVariable {
    /// Parse an fx identifier. Returns `None` for anything but `sftlf`/`sftof`.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "sftlf" => Some(Self::Sftlf),
            "sftof" => Some(Self::Sftof),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sftlf => "sftlf",
            Self::Sftof => "sftof",
        }
    }
}

impl fmt::Display for FxVariable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Ordered mapping from fx identifiers to their sources.
///
/// Iteration follows insertion order; the first usable entry wins during
/// land fraction resolution. A `None` or empty path marks an fx variable
/// whose file was not found.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FxFiles {
    entries: IndexMap<String, Option<PathBuf>>,
}

impl FxFiles {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an fx variable with an available source.
    pub fn with(mut self, fx_var: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        self.insert(fx_var, Some(path.into()));
        self
    }

    /// Add an fx variable whose source is unavailable.
    pub fn with_missing(mut self, fx_var: impl Into<String>) -> Self {
        self.insert(fx_var, None);
        self
    }

    /// Insert or replace an entry. Replacing keeps the original position.
    pub fn insert(&mut self, fx_var: impl Into<String>, path: Option<PathBuf>) {
        self.entries.insert(fx_var.into(), path);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in order. Empty paths are reported as `None`.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&Path>)> {
        self.entries.iter().map(|(var, path)| {
            let path = path
                .as_deref()
                .filter(|p| !p.as_os_str().is_empty());
            (var.as_str(), path)
        })
    }

    /// Reorder so that identifiers in `priority` come first, in priority
    /// order, followed by the remaining entries in their original order.
    pub fn prioritized<S: AsRef<str>>(&self, priority: &[S]) -> Self {
        let mut entries = IndexMap::with_capacity(self.entries.len());

        for name in priority {
            if let Some((var, path)) = self.entries.get_key_value(name.as_ref()) {
                entries.insert(var.clone(), path.clone());
            }
        }
        for (var, path) in &self.entries {
            if !entries.contains_key(var) {
                entries.insert(var.clone(), path.clone());
            }
        }

        Self { entries }
    }
}

impl<K: Into<String>> FromIterator<(K, Option<PathBuf>)> for FxFiles {
    fn from_iter<I: IntoIterator<Item = (K, Option<PathBuf>)>>(iter: I) -> Self {
        let mut files = Self::new();
        for (var, path) in iter {
            files.insert(var, path);
        }
        files
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fx_variable_parse() {
        assert_eq!(FxVariable::parse("sftlf"), Some(FxVariable::Sftlf));
        assert_eq!(FxVariable::parse("sftof"), Some(FxVariable::Sftof));
        assert_eq!(FxVariable::parse("areacella"), None);
        assert_eq!(FxVariable::parse("SFTLF"), None);
    }

    #[test]
    fn test_iteration_keeps_insertion_order() {
        let files = FxFiles::new()
            .with("sftof", "/fx/sftof.nc")
            .with_missing("sftgif")
            .with("sftlf", "/fx/sftlf.nc");

        let vars: Vec<&str> = files.iter().map(|(var, _)| var).collect();
        assert_eq!(vars, vec!["sftof", "sftgif", "sftlf"]);
    }

    #[test]
    fn test_empty_path_is_missing() {
        let files = FxFiles::new().with("sftlf", "");
        let (_, path) = files.iter().next().unwrap();
        assert!(path.is_none());
    }

    #[test]
    fn test_prioritized() {
        let files = FxFiles::new()
            .with("areacella", "/fx/areacella.nc")
            .with("sftof", "/fx/sftof.nc")
            .with("sftlf", "/fx/sftlf.nc");

        let ordered = files.prioritized(&["sftlf", "sftof", "sftgif"]);
        let vars: Vec<&str> = ordered.iter().map(|(var, _)| var).collect();
        assert_eq!(vars, vec!["sftlf", "sftof", "areacella"]);
        assert_eq!(ordered.len(), files.len());
    }

    #[test]
    fn test_collect_from_pairs() {
        let files: FxFiles = vec![
            ("sftlf", None),
            ("sftof", Some(PathBuf::from("/fx/sftof.nc"))),
        ]
        .into_iter()
        .collect();

        assert_eq!(files, FxFiles::new().with_missing("sftlf").with("sftof", "/fx/sftof.nc"));
    }

    #[test]
    fn test_deserialize_preserves_order() {
        let json = r#"{"sftof": "/fx/sftof.nc", "sftlf": null}"#;
        let files: FxFiles = serde_json::from_str(json).unwrap();

        let entries: Vec<(&str, Option<&Path>)> = files.iter().collect();
        assert_eq!(entries[0], ("sftof", Some(Path::new("/fx/sftof.nc"))));
        assert_eq!(entries[1], ("sftlf", None));
    }
}
