//! Error types for tensor quantization and conversion.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Error type for quantization failures
#[derive(Debug, Clone, PartialEq)]
pub enum QuantizeError {
    /// Matrix rows have different widths
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// Element count does not match the output length
    LengthMismatch { expected: usize, found: usize },
    /// The dimension laid out along the stride has the wrong size
    StrideMismatch { stride: usize, found: usize },
    /// A source element maps outside the output buffer
    IndexOutOfBounds {
        row: usize,
        col: usize,
        index: usize,
        length: usize,
    },
    /// Scaled value does not fit in an `i16`, or is not finite
    Overflow { value: f64, scale: i32 },
    /// Tensor is a matrix where a vector was expected, or vice versa
    UnexpectedKind {
        expected: &'static str,
        found: &'static str,
    },
}

impl fmt::Display for QuantizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuantizeError::Ragged {
                row,
                expected,
                found,
            } => {
                write!(f, "Row {row} has {found} columns, expected {expected}")
            }
            QuantizeError::LengthMismatch { expected, found } => {
                write!(f, "Tensor has {found} elements, expected {expected}")
            }
            QuantizeError::StrideMismatch { stride, found } => {
                write!(f, "Strided dimension has size {found}, expected {stride}")
            }
            QuantizeError::IndexOutOfBounds {
                row,
                col,
                index,
                length,
            } => {
                write!(
                    f,
                    "Element ({row}, {col}) maps to index {index}, outside length {length}"
                )
            }
            QuantizeError::Overflow { value, scale } => {
                write!(f, "Value {value} scaled by {scale} does not fit in i16")
            }
            QuantizeError::UnexpectedKind { expected, found } => {
                write!(f, "Expected a {expected}, found a {found}")
            }
        }
    }
}

impl std::error::Error for QuantizeError {}

/// Error type for a full JSON to binary conversion
#[derive(Debug)]
pub enum ConvertError {
    /// The JSON file could not be read or parsed
    Input { path: PathBuf, source: InputSource },
    /// A tensor failed shape or range checks
    Quantize {
        tensor: String,
        source: QuantizeError,
    },
    /// An output file could not be written
    Io { path: PathBuf, source: io::Error },
}

/// Underlying cause of an input failure
#[derive(Debug)]
pub enum InputSource {
    Io(io::Error),
    Json(serde_json::Error),
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputSource::Io(err) => write!(f, "{err}"),
            InputSource::Json(err) => write!(f, "{err}"),
        }
    }
}

impl ConvertError {
    pub(crate) fn input_io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ConvertError::Input {
            path: path.into(),
            source: InputSource::Io(source),
        }
    }

    pub(crate) fn input_json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        ConvertError::Input {
            path: path.into(),
            source: InputSource::Json(source),
        }
    }

    pub(crate) fn quantize(tensor: &str, source: QuantizeError) -> Self {
        ConvertError::Quantize {
            tensor: tensor.to_string(),
            source,
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ConvertError::Io {
            path: path.into(),
            source,
        }
    }
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::Input { path, source } => {
                write!(f, "Failed to load '{}': {source}", path.display())
            }
            ConvertError::Quantize { tensor, source } => {
                write!(f, "Invalid tensor '{tensor}': {source}")
            }
            ConvertError::Io { path, source } => {
                write!(f, "Failed to write '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ConvertError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConvertError::Input { source, .. } => match source {
                InputSource::Io(err) => Some(err),
                InputSource::Json(err) => Some(err),
            },
            ConvertError::Quantize { source, .. } => Some(source),
            ConvertError::Io { source, .. } => Some(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_ragged_message() {
        let err = QuantizeError::Ragged {
            row: 3,
            expected: 768,
            found: 767,
        };
        let msg = err.to_string();
        assert!(msg.contains("Row 3"));
        assert!(msg.contains("767"));
        assert!(msg.contains("768"));
    }

    #[test]
    fn test_length_mismatch_message() {
        let err = QuantizeError::LengthMismatch {
            expected: 256,
            found: 255,
        };
        assert!(err.to_string().contains("255"));
        assert!(err.to_string().contains("256"));
    }

    #[test]
    fn test_overflow_message() {
        let err = QuantizeError::Overflow {
            value: 200.0,
            scale: 255,
        };
        assert!(err.to_string().contains("200"));
        assert!(err.to_string().contains("i16"));
    }

    #[test]
    fn test_index_out_of_bounds_message() {
        let err = QuantizeError::IndexOutOfBounds {
            row: 1,
            col: 2,
            index: 9,
            length: 4,
        };
        assert!(err.to_string().contains("(1, 2)"));
        assert!(err.to_string().contains("index 9"));
    }

    #[test]
    fn test_quantize_error_equality() {
        let err1 = QuantizeError::StrideMismatch { stride: 2, found: 3 };
        let err2 = QuantizeError::StrideMismatch { stride: 2, found: 3 };
        assert_eq!(err1, err2);
    }

    #[test]
    fn test_convert_error_names_tensor() {
        let err = ConvertError::quantize(
            "ft.bias",
            QuantizeError::LengthMismatch {
                expected: 256,
                found: 2,
            },
        );
        assert!(err.to_string().contains("'ft.bias'"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_convert_error_names_path() {
        let err = ConvertError::io(
            "net/feature_bias.bin",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(err.to_string().contains("net/feature_bias.bin"));
        assert!(err.to_string().contains("denied"));
    }

    #[test]
    fn test_input_error_from_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = ConvertError::input_json("net.json", json_err);
        assert!(err.to_string().contains("net.json"));
        assert!(matches!(
            err,
            ConvertError::Input {
                source: InputSource::Json(_),
                ..
            }
        ));
    }
}
