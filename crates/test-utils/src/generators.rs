//! Field generators for creating synthetic gridded data.
//!
//! These generators create predictable, verifiable fields that can be used
//! across the test suite.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use landsea_weighting::{DeferredArray, Field};
use ndarray::{ArrayD, IxDyn};

/// Creates a realized field filled with a constant value.
pub fn constant_field(name: &str, shape: &[usize], value: f32) -> Field {
    Field::new(name, ArrayD::from_elem(IxDyn(shape), value))
}

/// Creates a realized field of ones.
pub fn ones_field(name: &str, shape: &[usize]) -> Field {
    constant_field(name, shape, 1.0)
}

/// Creates a field whose values follow the flat (row-major) index.
///
/// Each value is `index + 1`, so no cell is zero and every cell is
/// distinguishable after weighting.
///
/// # Example
///
/// ```
/// use test_utils::gradient_field;
///
/// let field = gradient_field("gpp", &[2, 3]);
/// let data = field.data().unwrap();
/// assert_eq!(data[[0, 0]], 1.0);
/// assert_eq!(data[[1, 2]], 6.0);
/// ```
pub fn gradient_field(name: &str, shape: &[usize]) -> Field {
    let len: usize = shape.iter().product();
    let values = (0..len).map(|i| (i + 1) as f32).collect();
    Field::from_shape_vec(name, shape, values).expect("shape matches generated values")
}

/// Creates land/sea fraction percentages in `[0, 100]` with a deterministic
/// pattern that includes the pure land and pure sea extremes.
pub fn percent_values(len: usize) -> Vec<f32> {
    (0..len)
        .map(|i| match i % 5 {
            0 => 0.0,
            1 => 100.0,
            _ => ((i * 37) % 101) as f32,
        })
        .collect()
}

/// Creates an fx field (e.g. `sftlf`) holding [`percent_values`].
pub fn percent_field(name: &str, shape: &[usize]) -> Field {
    let len: usize = shape.iter().product();
    Field::from_shape_vec(name, shape, percent_values(len))
        .expect("shape matches generated values")
        .with_units("%")
}

/// Creates a field with NaN at the given flat indices and `value` elsewhere.
pub fn field_with_nans(name: &str, shape: &[usize], value: f32, nan_indices: &[usize]) -> Field {
    let len: usize = shape.iter().product();
    let mut values = vec![value; len];
    for &i in nan_indices {
        if i < len {
            values[i] = f32::NAN;
        }
    }
    Field::from_shape_vec(name, shape, values).expect("shape matches generated values")
}

/// Creates a field with deferred data and a counter of how often the data
/// was produced.
///
/// The counter stays at zero until something forces evaluation.
pub fn deferred_field(name: &str, shape: &[usize], value: f32) -> (Field, Arc<AtomicUsize>) {
    let evaluations = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&evaluations);
    let dims = shape.to_vec();

    let deferred = DeferredArray::new(shape.to_vec(), move || {
        counter.fetch_add(1, Ordering::SeqCst);
        Ok(ArrayD::from_elem(IxDyn(&dims), value))
    });

    (Field::new(name, deferred), evaluations)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gradient_field() {
        let field = gradient_field("tas", &[2, 3]);
        assert_eq!(field.shape(), &[2, 3]);
        let data = field.data().unwrap();
        assert_eq!(data[[0, 1]], 2.0);
        assert_eq!(data[[1, 0]], 4.0);
    }

    #[test]
    fn test_percent_values_in_range() {
        let values = percent_values(50);
        assert!(values.iter().all(|&v| (0.0..=100.0).contains(&v)));
        assert!(values.contains(&0.0));
        assert!(values.contains(&100.0));
    }

    #[test]
    fn test_field_with_nans() {
        let field = field_with_nans("nbp", &[4], 2.0, &[1, 3, 10]);
        let data = field.data().unwrap();
        assert_eq!(data[[0]], 2.0);
        assert!(data[[1]].is_nan());
        assert!(data[[3]].is_nan());
    }

    #[test]
    fn test_deferred_field_counts_evaluations() {
        let (field, evaluations) = deferred_field("gpp", &[2, 2], 3.0);
        assert!(field.has_lazy_data());
        assert_eq!(evaluations.load(Ordering::SeqCst), 0);

        let data = field.data().unwrap();
        assert_eq!(data.len(), 4);
        assert_eq!(evaluations.load(Ordering::SeqCst), 1);
    }
}
