//! Trailing-dimension broadcasting rules.
//!
//! Shapes are aligned at their rightmost dimension. Two aligned dimensions
//! are compatible when they are equal or either of them is 1; the shorter
//! shape is treated as if padded with 1s on the left.

use crate::error::{FieldError, FieldResult};

/// Check whether two shapes can be broadcast against each other.
pub fn is_broadcastable(a: &[usize], b: &[usize]) -> bool {
    a.iter()
        .rev()
        .zip(b.iter().rev())
        .all(|(&m, &n)| m == n || m == 1 || n == 1)
}

/// Compute the shape produced by broadcasting `a` against `b`.
pub fn broadcast_shape(a: &[usize], b: &[usize]) -> FieldResult<Vec<usize>> {
    let nd = a.len().max(b.len());
    let mut out = vec![1usize; nd];

    for i in 0..nd {
        let m = dim_from_right(a, i);
        let n = dim_from_right(b, i);
        out[nd - 1 - i] = if m == n || n == 1 {
            m
        } else if m == 1 {
            n
        } else {
            return Err(FieldError::IncompatibleShapes {
                left: format_shape(a),
                right: format_shape(b),
            });
        };
    }

    Ok(out)
}

/// Render a shape as a tuple, e.g. `(2, 3)`, `(4,)` or `()`.
pub fn format_shape(shape: &[usize]) -> String {
    match shape {
        [] => "()".to_string(),
        [n] => format!("({},)", n),
        dims => {
            let parts: Vec<String> = dims.iter().map(|d| d.to_string()).collect();
            format!("({})", parts.join(", "))
        }
    }
}

fn dim_from_right(shape: &[usize], i: usize) -> usize {
    if i < shape.len() {
        shape[shape.len() - 1 - i]
    } else {
        1
    }
}
