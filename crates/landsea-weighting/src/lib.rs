//! Land/Sea Fraction Weighting for Gridded Fields
//!
//! This crate weights a gridded field with the land or sea area fraction of
//! its grid cells. The fraction is derived from fx (fixed) variables:
//!
//! - **sftlf**: land area fraction in percent, fraction = sftlf / 100
//! - **sftof**: sea area fraction in percent, fraction = 1 - sftof / 100
//!
//! # Architecture
//!
//! ```text
//! weighting_landsea_fraction(field, fx_files, "land" | "sea", strict)
//!      │
//!      ├─► Validate area type (InvalidArgument)
//!      │
//!      ├─► resolve_land_fraction: first usable candidate wins
//!      │         │
//!      │         ├─► missing source  → diagnostic, next
//!      │         ├─► FxLoader::load  → field (possibly deferred)
//!      │         ├─► not broadcastable → diagnostic, next
//!      │         └─► sftlf / sftof   → fraction
//!      │
//!      ├─► No fraction: strict → WeightingUnavailable
//!      │                 else  → debug log, field unchanged
//!      │
//!      └─► field.data = data × fraction (land) or data × (1 − fraction) (sea)
//! ```
//!
//! # Example
//!
//! ```ignore
//! use landsea_weighting::{weighting_landsea_fraction, Field, FxFiles};
//! use netcdf_parser::NetCdfFxLoader;
//!
//! let fx_files = FxFiles::new()
//!     .with("sftlf", "/data/fx/sftlf_fx_MPI-ESM-LR.nc")
//!     .with_missing("sftof");
//!
//! weighting_landsea_fraction(&mut gpp, &fx_files, "land", true, &NetCdfFxLoader::new())?;
//!
//! // Nothing has been computed yet if `gpp` held deferred data.
//! let values = gpp.data()?;
//! ```

pub mod broadcast;
pub mod config;
pub mod error;
pub mod field;
pub mod fraction;
pub mod fx;
pub mod loader;
pub mod weighter;
pub mod weighting;

// Re-export commonly used types at crate root
pub use broadcast::{broadcast_shape, format_shape, is_broadcastable};
pub use config::WeightingConfig;
pub use error::{FieldError, FieldResult, LoadError, Result, WeightingError};
pub use field::{DeferredArray, Field, FieldData};
pub use fraction::{resolve_land_fraction, LandFraction};
pub use fx::{FxFiles, FxVariable};
pub use loader::{FxLoader, InMemoryFxLoader};
pub use weighter::LandSeaWeighter;
pub use weighting::{weight_with_area_type, weighting_landsea_fraction, AreaType};
