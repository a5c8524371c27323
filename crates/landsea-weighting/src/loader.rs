//! Loading of fx fields.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::error::LoadError;
use crate::field::Field;

/// Loads an fx field from a source reference.
///
/// Implementations may return fields with deferred data; the weighting
/// operation only inspects the shape and composes arithmetic on top.
pub trait FxLoader {
    /// Load the field for `fx_var` from `source`.
    fn load(&self, fx_var: &str, source: &Path) -> Result<Field, LoadError>;
}

/// Loader over fields already held in memory, keyed by source path.
#[derive(Debug, Default)]
pub struct InMemoryFxLoader {
    fields: HashMap<PathBuf, Field>,
    loads: AtomicUsize,
}

impl InMemoryFxLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a field under `path`.
    pub fn with_field(mut self, path: impl Into<PathBuf>, field: Field) -> Self {
        self.fields.insert(path.into(), field);
        self
    }

    /// Number of successful loads so far.
    pub fn load_count(&self) -> usize {
        self.loads.load(Ordering::Relaxed)
    }
}

impl FxLoader for InMemoryFxLoader {
    fn load(&self, _fx_var: &str, source: &Path) -> Result<Field, LoadError> {
        let field = self
            .fields
            .get(source)
            .cloned()
            .ok_or_else(|| LoadError::NotFound(source.display().to_string()))?;
        self.loads.fetch_add(1, Ordering::Relaxed);
        Ok(field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_memory_loader() {
        let field = Field::from_shape_vec("sftlf", &[1, 2], vec![10.0, 90.0]).unwrap();
        let loader = InMemoryFxLoader::new().with_field("/fx/sftlf.nc", field);

        let loaded = loader.load("sftlf", Path::new("/fx/sftlf.nc")).unwrap();
        assert_eq!(loaded.shape(), &[1, 2]);
        assert_eq!(loader.load_count(), 1);

        let missing = loader.load("sftof", Path::new("/fx/sftof.nc"));
        assert!(matches!(missing, Err(LoadError::NotFound(_))));
        assert_eq!(loader.load_count(), 1);
    }
}
