//! Fixed-point quantization of float tensors.
//!
//! Values are scaled and truncated toward zero, matching the artifacts the
//! engine's networks were originally exported with. Rounding to nearest
//! would change existing nets bit-for-bit.

use crate::error::QuantizeError;

/// Scale a single value and truncate it toward zero.
///
/// Fails if the result is not finite or does not fit in an `i16`.
#[inline]
pub fn quantize_value(value: f64, scale: i32) -> Result<i16, QuantizeError> {
    let scaled = (value * f64::from(scale)).trunc();
    if scaled.is_finite() && scaled >= f64::from(i16::MIN) && scaled <= f64::from(i16::MAX) {
        Ok(scaled as i16)
    } else {
        Err(QuantizeError::Overflow { value, scale })
    }
}

/// Quantize a bias vector, keeping input order.
pub fn quantize_vector(vector: &[f64], scale: i32) -> Result<Vec<i16>, QuantizeError> {
    vector.iter().map(|&v| quantize_value(v, scale)).collect()
}

/// Quantize a weight matrix into a flat buffer of exactly `length` values.
///
/// Element `(i, j)` lands at `i * stride + j`, or at `j * stride + i` when
/// `transpose` is set. The matrix must be rectangular, hold exactly `length`
/// elements, and its strided dimension (columns, or rows when transposed)
/// must equal `stride`, so every output slot is written exactly once.
pub fn quantize_matrix<R: AsRef<[f64]>>(
    matrix: &[R],
    stride: usize,
    length: usize,
    scale: i32,
    transpose: bool,
) -> Result<Vec<i16>, QuantizeError> {
    let rows = matrix.len();
    let cols = matrix.first().map_or(0, |row| row.as_ref().len());

    for (row, values) in matrix.iter().enumerate() {
        let found = values.as_ref().len();
        if found != cols {
            return Err(QuantizeError::Ragged {
                row,
                expected: cols,
                found,
            });
        }
    }

    if rows * cols != length {
        return Err(QuantizeError::LengthMismatch {
            expected: length,
            found: rows * cols,
        });
    }

    let strided = if transpose { rows } else { cols };
    if strided != stride {
        return Err(QuantizeError::StrideMismatch {
            stride,
            found: strided,
        });
    }

    let mut out = vec![0i16; length];
    for (i, values) in matrix.iter().enumerate() {
        for (j, &weight) in values.as_ref().iter().enumerate() {
            let index = if transpose {
                j * stride + i
            } else {
                i * stride + j
            };
            let slot = out.get_mut(index).ok_or(QuantizeError::IndexOutOfBounds {
                row: i,
                col: j,
                index,
                length,
            })?;
            *slot = quantize_value(weight, scale)?;
        }
    }

    Ok(out)
}
