//! NetCDF reader for fx fields.
//!
//! This crate loads fixed ("fx") fields such as `sftlf` (land area fraction)
//! and `sftof` (sea area fraction) from NetCDF files and hands them to the
//! land/sea weighting as [`Field`]s.
//!
//! # Implementation Notes
//!
//! Loading reads only metadata: the variable, its dimensions and units. By
//! default the values are read when the caller forces the field's data, so
//! weighting builds on a deferred array instead of a realized one. Use
//! [`NetCdfFxLoader::with_eager_reads`] to read values at load time instead.
//!
//! # CMIP fx file structure
//!
//! A typical fx file holds one data variable on a static (lat, lon) grid,
//! plus coordinate and bounds variables:
//!
//! ```text
//! float lat(lat) ;        lat:bounds = "lat_bnds" ;
//! double lat_bnds(lat, bnds) ;
//! float lon(lon) ;        lon:bounds = "lon_bnds" ;
//! double lon_bnds(lon, bnds) ;
//! float sftlf(lat, lon) ; sftlf:units = "%" ;
//! ```

pub mod error;
pub mod native;

use std::path::Path;

use landsea_weighting::{DeferredArray, Field, FieldData, FieldError, FxLoader, LoadError};
use tracing::debug;

pub use error::{NetCdfError, NetCdfResult};
pub use native::{inspect_fx_variable, read_variable, silence_hdf5_errors, FxVariableInfo};

/// [`FxLoader`] for NetCDF fx files.
#[derive(Debug, Clone, Copy, Default)]
pub struct NetCdfFxLoader {
    eager: bool,
}

impl NetCdfFxLoader {
    /// Create a loader that defers reading values until they are needed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read values at load time instead of deferring them.
    pub fn with_eager_reads(mut self, eager: bool) -> Self {
        self.eager = eager;
        self
    }
}

impl FxLoader for NetCdfFxLoader {
    fn load(&self, fx_var: &str, source: &Path) -> Result<Field, LoadError> {
        let info = inspect_fx_variable(source, fx_var)?;
        debug!(
            fx_var = fx_var,
            variable = %info.name,
            shape = ?info.shape,
            path = %source.display(),
            eager = self.eager,
            "Loading fx field"
        );

        let data: FieldData = if self.eager {
            read_variable(source, &info.name)?.into()
        } else {
            let path = source.to_path_buf();
            let name = info.name.clone();
            DeferredArray::new(info.shape.clone(), move || {
                read_variable(&path, &name).map_err(FieldError::from)
            })
            .into()
        };

        let field = Field::new(info.name, data);
        Ok(match info.units {
            Some(units) => field.with_units(units),
            None => field,
        })
    }
}
