//! Native NetCDF reading of fx variables using the netcdf library.
//!
//! Metadata (variable name, dimensions, units) is read when an fx file is
//! inspected. Values are read separately so that callers can defer the read
//! until the data is actually needed.

use std::collections::HashSet;
use std::path::Path;
use std::sync::Once;

use ndarray::{ArrayD, IxDyn};

use crate::error::{NetCdfError, NetCdfResult};

/// Silence HDF5's automatic error printing to stderr.
///
/// The HDF5 C library prints verbose error messages to stderr even when errors
/// are handled gracefully by the Rust code (e.g., when checking for optional
/// attributes that don't exist). This creates confusing log spam like:
///
/// ```text
/// HDF5-DIAG: Error detected in HDF5 (1.10.8) thread 3:
///   #003: ../../../src/H5Adense.c line 397 in H5A__dense_open(): can't locate attribute in name index
/// ```
///
/// This function disables that output by calling H5Eset_auto2 with null handlers.
/// It only needs to be called once per process, but is safe to call multiple times.
pub fn silence_hdf5_errors() {
    static INIT: Once = Once::new();

    INIT.call_once(|| {
        // SAFETY: H5Eset_auto2 is thread-safe and we're passing null pointers
        // to disable error output, which is a documented valid use.
        unsafe {
            hdf5_metno_sys::h5e::H5Eset_auto2(
                hdf5_metno_sys::h5e::H5E_DEFAULT,
                None,
                std::ptr::null_mut(),
            );
        }
    });
}

/// Metadata of the variable holding an fx field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FxVariableInfo {
    /// Variable name in the file.
    pub name: String,
    /// Dimension lengths, outermost first.
    pub shape: Vec<usize>,
    /// Value of the `units` attribute, if any.
    pub units: Option<String>,
}

/// Locate the fx variable in `path` and read its metadata.
///
/// The variable named `fx_var` is preferred. If there is none, the file must
/// contain exactly one data variable, i.e. one that is neither a coordinate
/// variable, nor a bounds variable, nor a scalar.
pub fn inspect_fx_variable(path: &Path, fx_var: &str) -> NetCdfResult<FxVariableInfo> {
    let nc_file = open(path)?;

    let name = if nc_file.variable(fx_var).is_some() {
        fx_var.to_string()
    } else {
        let candidates = data_variables(&nc_file);
        match candidates.as_slice() {
            [single] => single.clone(),
            [] => {
                return Err(NetCdfError::MissingData(format!(
                    "no data variable in {}",
                    path.display()
                )))
            }
            many => {
                return Err(NetCdfError::InvalidFormat(format!(
                    "cannot identify '{}' in {}, found variables {}",
                    fx_var,
                    path.display(),
                    many.join(", ")
                )))
            }
        }
    };

    let var = nc_file
        .variable(&name)
        .ok_or_else(|| NetCdfError::MissingData(format!("{} variable", name)))?;

    Ok(FxVariableInfo {
        shape: var.dimensions().iter().map(|d| d.len()).collect(),
        units: get_string_attr(&var, "units"),
        name,
    })
}

/// Read all values of variable `name` as `f32`.
///
/// `_FillValue` (or `missing_value`) becomes NaN, and `scale_factor` /
/// `add_offset` are applied to the remaining values.
pub fn read_variable(path: &Path, name: &str) -> NetCdfResult<ArrayD<f32>> {
    let nc_file = open(path)?;

    let var = nc_file
        .variable(name)
        .ok_or_else(|| NetCdfError::MissingData(format!("{} variable", name)))?;
    let shape: Vec<usize> = var.dimensions().iter().map(|d| d.len()).collect();

    let raw_data: Vec<f32> = var
        .get_values(..)
        .map_err(|e| NetCdfError::InvalidFormat(format!("Failed to read {}: {}", name, e)))?;

    let scale_factor = get_f32_attr(&var, "scale_factor").unwrap_or(1.0);
    let add_offset = get_f32_attr(&var, "add_offset").unwrap_or(0.0);
    let fill_value =
        get_f32_attr(&var, "_FillValue").or_else(|| get_f32_attr(&var, "missing_value"));

    let data: Vec<f32> = raw_data
        .into_iter()
        .map(|val| match fill_value {
            Some(fill) if val == fill => f32::NAN,
            _ => val * scale_factor + add_offset,
        })
        .collect();

    ArrayD::from_shape_vec(IxDyn(&shape), data)
        .map_err(|e| NetCdfError::InvalidFormat(format!("{} has inconsistent shape: {}", name, e)))
}

fn open(path: &Path) -> NetCdfResult<netcdf::File> {
    if !path.exists() {
        return Err(NetCdfError::NotFound(path.display().to_string()));
    }

    silence_hdf5_errors();

    netcdf::open(path)
        .map_err(|e| NetCdfError::InvalidFormat(format!("Failed to open NetCDF: {}", e)))
}

// =============================================================================
// Internal helpers
// =============================================================================

/// Names of variables that are not coordinates, bounds or scalars.
fn data_variables(nc_file: &netcdf::File) -> Vec<String> {
    let bounds: HashSet<String> = nc_file
        .variables()
        .filter_map(|var| get_string_attr(&var, "bounds"))
        .collect();

    nc_file
        .variables()
        .filter(|var| {
            let name = var.name();
            let dims = var.dimensions();
            !dims.is_empty()
                && !dims.iter().any(|d| d.name() == name)
                && !bounds.contains(&name)
        })
        .map(|var| var.name())
        .collect()
}

/// Check if a variable has an attribute with the given name.
/// This avoids HDF5 error spam when checking for optional attributes.
fn has_attr(var: &netcdf::Variable, name: &str) -> bool {
    var.attributes().any(|attr| attr.name() == name)
}

/// Helper to get f32 attribute.
fn get_f32_attr(var: &netcdf::Variable, name: &str) -> Option<f32> {
    if !has_attr(var, name) {
        return None;
    }
    let attr_value = var.attribute_value(name)?.ok()?;
    f32::try_from(attr_value).ok()
}

/// Helper to get string attribute.
fn get_string_attr(var: &netcdf::Variable, name: &str) -> Option<String> {
    if !has_attr(var, name) {
        return None;
    }
    match var.attribute_value(name)?.ok()? {
        netcdf::AttributeValue::Str(s) => Some(s),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_not_found() {
        let err = inspect_fx_variable(Path::new("/nonexistent/sftlf.nc"), "sftlf").unwrap_err();
        assert!(matches!(err, NetCdfError::NotFound(_)));

        let err = read_variable(Path::new("/nonexistent/sftlf.nc"), "sftlf").unwrap_err();
        assert!(matches!(err, NetCdfError::NotFound(_)));
    }

    #[test]
    fn test_silence_hdf5_errors_is_idempotent() {
        silence_hdf5_errors();
        silence_hdf5_errors();
    }
}
