//! JSON tensor file as written by the trainer.
//!
//! The file is a single object mapping tensor names to nested number
//! lists. Only the names in the dispatch table are ever looked at, so other
//! entries may hold any JSON value.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::error::QuantizeError;

/// A single named tensor.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Tensor {
    /// Weights, one inner list per row
    Matrix(Vec<Vec<f64>>),
    /// Biases
    Vector(Vec<f64>),
    /// A lone output bias
    Scalar(f64),
    /// Anything else; only an error if a table entry claims it
    Other(serde_json::Value),
}

impl Tensor {
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Tensor::Matrix(_) => "matrix",
            Tensor::Vector(_) => "vector",
            Tensor::Scalar(_) => "scalar",
            Tensor::Other(_) => "non-numeric value",
        }
    }

    /// Rows of a weight matrix.
    pub fn as_matrix(&self) -> Result<&[Vec<f64>], QuantizeError> {
        match self {
            Tensor::Matrix(rows) => Ok(rows.as_slice()),
            other => Err(QuantizeError::UnexpectedKind {
                expected: "matrix",
                found: other.kind(),
            }),
        }
    }

    /// Values of a bias vector. A scalar is treated as a one-element vector.
    pub fn as_vector(&self) -> Result<&[f64], QuantizeError> {
        match self {
            Tensor::Vector(values) => Ok(values.as_slice()),
            Tensor::Scalar(value) => Ok(std::slice::from_ref(value)),
            // `[]` deserializes as an empty matrix
            Tensor::Matrix(rows) if rows.is_empty() => Ok(&[]),
            other => Err(QuantizeError::UnexpectedKind {
                expected: "vector",
                found: other.kind(),
            }),
        }
    }
}

/// All tensors in a JSON file, keyed by name.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct TensorFile {
    tensors: BTreeMap<String, Tensor>,
}

impl TensorFile {
    /// Parse a tensor file from a JSON string.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Tensor> {
        self.tensors.get(name)
    }

    pub fn insert(&mut self, name: impl Into<String>, tensor: Tensor) {
        self.tensors.insert(name.into(), tensor);
    }

    /// Tensor names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.tensors.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tensors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tensors.is_empty()
    }
}
