//! Land fraction resolution from candidate fx fields.

use tracing::debug;

use crate::broadcast::{format_shape, is_broadcastable};
use crate::error::{Result, WeightingError};
use crate::field::FieldData;
use crate::fx::{FxFiles, FxVariable};
use crate::loader::FxLoader;

/// Outcome of land fraction resolution.
#[derive(Debug)]
pub struct LandFraction {
    /// Land fraction in `[0, 1]`, absent if no candidate was usable.
    pub fraction: Option<FieldData>,
    /// One diagnostic per rejected or missing candidate.
    pub errors: Vec<String>,
}

impl LandFraction {
    /// Diagnostics joined into a single message.
    pub fn joined_errors(&self) -> String {
        self.errors.join(" ")
    }
}

/// Find the first fx candidate that yields a land fraction for a field of
/// `target_shape`.
///
/// Candidates are visited in the order given. Missing sources, shapes that
/// do not broadcast against the target and unsupported fx variables are
/// recorded and skipped. Loader failures are returned as errors.
pub fn resolve_land_fraction<L: FxLoader + ?Sized>(
    target_shape: &[usize],
    target_name: &str,
    fx_files: &FxFiles,
    loader: &L,
) -> Result<LandFraction> {
    let mut errors = Vec::new();

    if fx_files.is_empty() {
        errors.push("No fx files given.".to_string());
    }

    for (fx_var, source) in fx_files.iter() {
        let Some(source) = source else {
            skip(&mut errors, format!("File for '{}' not found.", fx_var));
            continue;
        };

        let fx_field = loader
            .load(fx_var, source)
            .map_err(|e| WeightingError::load(fx_var, e))?;

        if !is_broadcastable(fx_field.shape(), target_shape) {
            skip(&mut errors, format!(
                "Field '{}' with shape {} not broadcastable to field '{}' with shape {}.",
                fx_var,
                format_shape(fx_field.shape()),
                target_name,
                format_shape(target_shape),
            ));
            continue;
        }

        let percent = fx_field.into_data();
        let fraction = match FxVariable::parse(fx_var) {
            Some(FxVariable::Sftlf) => percent.divide(100.0),
            Some(FxVariable::Sftof) => percent.divide(100.0).one_minus(),
            None => {
                skip(&mut errors, format!(
                    "Cannot calculate land fraction from '{}', expected 'sftlf' or 'sftof'.",
                    fx_var
                ));
                continue;
            }
        };

        debug!(
            fx_var = fx_var,
            source = %source.display(),
            target = target_name,
            "Resolved land fraction"
        );
        return Ok(LandFraction {
            fraction: Some(fraction),
            errors,
        });
    }

    Ok(LandFraction {
        fraction: None,
        errors,
    })
}

fn skip(errors: &mut Vec<String>, reason: String) {
    debug!(reason = %reason, "Skipping fx candidate");
    errors.push(reason);
}
