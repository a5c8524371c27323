//! Weighting of fields by land or sea area fraction.
//!
//! Carbon cycle and other land-surface variables are commonly reported per
//! square meter of land (or sea), not per square meter of grid cell. To
//! integrate them over a region they have to be weighted by the land or sea
//! fraction of each cell in addition to the cell area.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, WeightingError};
use crate::field::Field;
use crate::fraction::resolve_land_fraction;
use crate::fx::FxFiles;
use crate::loader::FxLoader;

/// Which area fraction to weight with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AreaType {
    #[default]
    Land,
    Sea,
}

impl AreaType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Land => "land",
            Self::Sea => "sea",
        }
    }
}

impl FromStr for AreaType {
    type Err = WeightingError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "land" => Ok(Self::Land),
            "sea" => Ok(Self::Sea),
            other => Err(WeightingError::invalid_argument(format!(
                "Expected 'land' or 'sea' for area_type, got '{}'",
                other
            ))),
        }
    }
}

impl fmt::Display for AreaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Weight `field` with its land or sea area fraction.
///
/// The fraction is taken from the first usable entry of `fx_files`
/// (`sftlf` or `sftof`). `area_type` must be `"land"` or `"sea"`; anything
/// else fails with [`WeightingError::InvalidArgument`] before any fx field
/// is loaded.
///
/// If no fraction can be resolved and `strict` is true, this fails with
/// [`WeightingError::WeightingUnavailable`] listing every problem found.
/// With `strict` false the problems are logged at debug level and the field
/// is returned unchanged.
///
/// Deferred field data stays deferred: the product is only computed when the
/// caller realizes it.
pub fn weighting_landsea_fraction<'a, L: FxLoader + ?Sized>(
    field: &'a mut Field,
    fx_files: &FxFiles,
    area_type: &str,
    strict: bool,
    loader: &L,
) -> Result<&'a mut Field> {
    let area_type: AreaType = area_type.parse()?;
    weight_with_area_type(field, fx_files, area_type, strict, loader)
}

/// Same as [`weighting_landsea_fraction`] with an already parsed area type.
pub fn weight_with_area_type<'a, L: FxLoader + ?Sized>(
    field: &'a mut Field,
    fx_files: &FxFiles,
    area_type: AreaType,
    strict: bool,
    loader: &L,
) -> Result<&'a mut Field> {
    let resolved = resolve_land_fraction(field.shape(), field.var_name(), fx_files, loader)?;

    let Some(land_fraction) = resolved.fraction else {
        let problems = resolved.errors.join(" ");
        if strict {
            return Err(WeightingError::unavailable(format!(
                "Weighting with land/sea fraction is not possible, the following errors occurred: {}",
                problems
            )));
        }
        debug!(
            "Weighting of '{}' with '{}' fraction not possible because of the following problems: {}",
            field.var_name(),
            area_type,
            problems
        );
        return Ok(field);
    };

    let weight = match area_type {
        AreaType::Land => land_fraction,
        AreaType::Sea => land_fraction.one_minus(),
    };
    let weighted = field.core_data().mul(&weight)?;
    field.set_data(weighted)?;

    Ok(field)
}
