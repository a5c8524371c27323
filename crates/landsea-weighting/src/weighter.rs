//! A configured weighter bundling a loader with weighting policy.

use crate::config::WeightingConfig;
use crate::error::Result;
use crate::field::Field;
use crate::fraction::{resolve_land_fraction, LandFraction};
use crate::fx::FxFiles;
use crate::loader::FxLoader;
use crate::weighting::{weight_with_area_type, AreaType};

/// Applies land/sea fraction weighting with a fixed loader and config.
#[derive(Debug)]
pub struct LandSeaWeighter<L> {
    loader: L,
    config: WeightingConfig,
}

impl<L: FxLoader> LandSeaWeighter<L> {
    /// Create a weighter with the default configuration (strict, land).
    pub fn new(loader: L) -> Self {
        Self::with_config(loader, WeightingConfig::default())
    }

    pub fn with_config(loader: L, config: WeightingConfig) -> Self {
        Self { loader, config }
    }

    pub fn config(&self) -> &WeightingConfig {
        &self.config
    }

    pub fn loader(&self) -> &L {
        &self.loader
    }

    /// Weight `field` with the given area type (`"land"` or `"sea"`) using
    /// the configured strictness and fx priority.
    pub fn weight<'a>(
        &self,
        field: &'a mut Field,
        fx_files: &FxFiles,
        area_type: &str,
    ) -> Result<&'a mut Field> {
        let area_type: AreaType = area_type.parse()?;
        self.weight_as(field, fx_files, area_type)
    }

    /// Weight `field` with the configured area type.
    pub fn weight_default<'a>(&self, field: &'a mut Field, fx_files: &FxFiles) -> Result<&'a mut Field> {
        self.weight_as(field, fx_files, self.config.area_type)
    }

    /// Resolve the land fraction for `field` without applying it.
    pub fn resolve(&self, field: &Field, fx_files: &FxFiles) -> Result<LandFraction> {
        let candidates = self.ordered(fx_files);
        resolve_land_fraction(field.shape(), field.var_name(), &candidates, &self.loader)
    }

    fn weight_as<'a>(
        &self,
        field: &'a mut Field,
        fx_files: &FxFiles,
        area_type: AreaType,
    ) -> Result<&'a mut Field> {
        let candidates = self.ordered(fx_files);
        weight_with_area_type(field, &candidates, area_type, self.config.strict, &self.loader)
    }

    fn ordered(&self, fx_files: &FxFiles) -> FxFiles {
        if self.config.fx_priority.is_empty() {
            fx_files.clone()
        } else {
            fx_files.prioritized(&self.config.fx_priority)
        }
    }
}
