//! Gridded fields with eager or deferred data.
//!
//! A [`Field`] pairs a variable name with [`FieldData`], which is either a
//! realized `ndarray` array or a [`DeferredArray`] whose values are produced
//! on demand. Shape introspection and elementwise arithmetic work on both
//! representations; arithmetic on deferred data only extends the producer
//! chain and never computes anything.

use std::fmt;
use std::sync::Arc;

use ndarray::{ArrayD, IxDyn};

use crate::broadcast::{broadcast_shape, format_shape};
use crate::error::{FieldError, FieldResult};

type Producer = dyn Fn() -> FieldResult<ArrayD<f32>> + Send + Sync;

/// A numeric array with a known shape whose values are computed lazily.
#[derive(Clone)]
pub struct DeferredArray {
    shape: Vec<usize>,
    producer: Arc<Producer>,
}

impl DeferredArray {
    /// Create a deferred array that will be produced by `producer`.
    ///
    /// The producer must yield an array of exactly `shape`.
    pub fn new<F>(shape: Vec<usize>, producer: F) -> Self
    where
        F: Fn() -> FieldResult<ArrayD<f32>> + Send + Sync + 'static,
    {
        Self {
            shape,
            producer: Arc::new(producer),
        }
    }

    /// Declared shape of the array.
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Run the producer chain and return the values.
    pub fn compute(&self) -> FieldResult<ArrayD<f32>> {
        let array = (self.producer)()?;
        if array.shape() != self.shape.as_slice() {
            return Err(FieldError::ShapeMismatch {
                expected: format_shape(&self.shape),
                actual: format_shape(array.shape()),
            });
        }
        Ok(array)
    }

    /// Apply `f` to every element once the array is computed.
    pub fn map<F>(&self, f: F) -> Self
    where
        F: Fn(f32) -> f32 + Send + Sync + 'static,
    {
        let inner = self.clone();
        Self::new(self.shape.clone(), move || {
            Ok(inner.compute()?.mapv_into(&f))
        })
    }
}

impl fmt::Debug for DeferredArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeferredArray")
            .field("shape", &self.shape)
            .finish_non_exhaustive()
    }
}

/// Data held by a field: realized values or a deferred computation.
#[derive(Debug, Clone)]
pub enum FieldData {
    Realized(ArrayD<f32>),
    Deferred(DeferredArray),
}

impl FieldData {
    /// Shape of the data. Never forces evaluation.
    pub fn shape(&self) -> &[usize] {
        match self {
            Self::Realized(array) => array.shape(),
            Self::Deferred(deferred) => deferred.shape(),
        }
    }

    /// Whether the data is still deferred.
    pub fn is_deferred(&self) -> bool {
        matches!(self, Self::Deferred(_))
    }

    /// Elementwise transform, kept deferred if the data is deferred.
    pub fn map<F>(self, f: F) -> Self
    where
        F: Fn(f32) -> f32 + Send + Sync + 'static,
    {
        match self {
            Self::Realized(array) => Self::Realized(array.mapv_into(f)),
            Self::Deferred(deferred) => Self::Deferred(deferred.map(f)),
        }
    }

    /// Divide every element by `divisor`.
    pub fn divide(self, divisor: f32) -> Self {
        self.map(move |v| v / divisor)
    }

    /// Compute `1 - x` for every element.
    pub fn one_minus(self) -> Self {
        self.map(|v| 1.0 - v)
    }

    /// Broadcasting elementwise product.
    ///
    /// Two realized operands are multiplied immediately; if either operand
    /// is deferred the product is deferred as well.
    pub fn mul(&self, other: &FieldData) -> FieldResult<FieldData> {
        let shape = broadcast_shape(self.shape(), other.shape())?;

        match (self, other) {
            (Self::Realized(a), Self::Realized(b)) => {
                Ok(Self::Realized(broadcast_mul(a, b, &shape)?))
            }
            _ => {
                let (a, b) = (self.clone(), other.clone());
                let out_shape = shape.clone();
                Ok(Self::Deferred(DeferredArray::new(shape, move || {
                    let x = a.to_array()?;
                    let y = b.to_array()?;
                    broadcast_mul(&x, &y, &out_shape)
                })))
            }
        }
    }

    /// Values as a new array, computing deferred data.
    pub fn to_array(&self) -> FieldResult<ArrayD<f32>> {
        match self {
            Self::Realized(array) => Ok(array.clone()),
            Self::Deferred(deferred) => deferred.compute(),
        }
    }

    /// Consume the data and return its values, computing deferred data.
    pub fn realize(self) -> FieldResult<ArrayD<f32>> {
        match self {
            Self::Realized(array) => Ok(array),
            Self::Deferred(deferred) => deferred.compute(),
        }
    }
}

impl From<ArrayD<f32>> for FieldData {
    fn from(array: ArrayD<f32>) -> Self {
        Self::Realized(array)
    }
}

impl From<DeferredArray> for FieldData {
    fn from(deferred: DeferredArray) -> Self {
        Self::Deferred(deferred)
    }
}

fn broadcast_mul(a: &ArrayD<f32>, b: &ArrayD<f32>, shape: &[usize]) -> FieldResult<ArrayD<f32>> {
    let incompatible = || FieldError::IncompatibleShapes {
        left: format_shape(a.shape()),
        right: format_shape(b.shape()),
    };
    let av = a.broadcast(IxDyn(shape)).ok_or_else(incompatible)?;
    let bv = b.broadcast(IxDyn(shape)).ok_or_else(incompatible)?;
    Ok(&av * &bv)
}

/// A named gridded field.
#[derive(Debug, Clone)]
pub struct Field {
    var_name: String,
    units: Option<String>,
    data: FieldData,
}

impl Field {
    /// Create a new field.
    pub fn new(var_name: impl Into<String>, data: impl Into<FieldData>) -> Self {
        Self {
            var_name: var_name.into(),
            units: None,
            data: data.into(),
        }
    }

    /// Create a realized field from row-major values.
    pub fn from_shape_vec(
        var_name: impl Into<String>,
        shape: &[usize],
        values: Vec<f32>,
    ) -> FieldResult<Self> {
        let len = values.len();
        let array = ArrayD::from_shape_vec(IxDyn(shape), values).map_err(|_| {
            FieldError::ShapeMismatch {
                expected: format_shape(shape),
                actual: format!("{} values", len),
            }
        })?;
        Ok(Self::new(var_name, array))
    }

    /// Set the physical units.
    pub fn with_units(mut self, units: impl Into<String>) -> Self {
        self.units = Some(units.into());
        self
    }

    pub fn var_name(&self) -> &str {
        &self.var_name
    }

    pub fn units(&self) -> Option<&str> {
        self.units.as_deref()
    }

    pub fn shape(&self) -> &[usize] {
        self.data.shape()
    }

    /// The data as held, without forcing deferred values.
    pub fn core_data(&self) -> &FieldData {
        &self.data
    }

    pub fn has_lazy_data(&self) -> bool {
        self.data.is_deferred()
    }

    /// Realized copy of the values.
    pub fn data(&self) -> FieldResult<ArrayD<f32>> {
        self.data.to_array()
    }

    /// Replace the data in place.
    ///
    /// The replacement must have the field's current shape; on error the
    /// field is left untouched.
    pub fn set_data(&mut self, data: impl Into<FieldData>) -> FieldResult<()> {
        let data = data.into();
        if data.shape() != self.shape() {
            return Err(FieldError::ShapeMismatch {
                expected: format_shape(self.shape()),
                actual: format_shape(data.shape()),
            });
        }
        self.data = data;
        Ok(())
    }

    /// Consume the field and return its data.
    pub fn into_data(self) -> FieldData {
        self.data
    }
}
