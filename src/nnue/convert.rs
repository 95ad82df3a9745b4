//! JSON to binary conversion driver.
//!
//! Walks the dispatch table in order, quantizing each tensor and flushing it
//! to its file before moving on. Nothing is rolled back: a failure part way
//! through leaves the earlier files freshly written and the later ones stale.

use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};

use super::arch::{Architecture, Layout, TensorRule};
use super::quantize::{quantize_matrix, quantize_vector};
use super::tensor::{Tensor, TensorFile};
use super::writer::write_artifact;
use super::DEFAULT_OUTPUT_DIR;
use crate::error::{ConvertError, QuantizeError};

/// Where converted artifacts are written.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConvertOptions {
    pub output_dir: PathBuf,
}

impl ConvertOptions {
    #[must_use]
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self::new(DEFAULT_OUTPUT_DIR)
    }
}

/// One file produced by a conversion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WrittenArtifact {
    pub name: &'static str,
    pub path: PathBuf,
    pub elements: usize,
}

impl WrittenArtifact {
    #[must_use]
    pub const fn bytes(&self) -> usize {
        self.elements * 2
    }
}

/// Outcome of a successful conversion.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConversionReport {
    /// Artifacts in the order they were written
    pub written: Vec<WrittenArtifact>,
    /// Table entries with no tensor in the input; their files were left alone
    pub missing: Vec<&'static str>,
    /// Input tensors that no table entry claims
    pub ignored: Vec<String>,
}

/// Read and parse a JSON tensor file.
pub fn load_tensors<P: AsRef<Path>>(path: P) -> Result<TensorFile, ConvertError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|err| ConvertError::input_io(path, err))?;
    serde_json::from_reader(BufReader::new(file))
        .map_err(|err| ConvertError::input_json(path, err))
}

/// Apply a table entry's quantization rule to a tensor.
pub fn quantize_tensor(rule: &TensorRule, tensor: &Tensor) -> Result<Vec<i16>, QuantizeError> {
    match rule.layout {
        Layout::Matrix {
            stride,
            length,
            transpose,
        } => quantize_matrix(tensor.as_matrix()?, stride, length, rule.scale, transpose),
        Layout::Vector { length } => {
            let values = tensor.as_vector()?;
            if let Some(expected) = length {
                if values.len() != expected {
                    return Err(QuantizeError::LengthMismatch {
                        expected,
                        found: values.len(),
                    });
                }
            }
            quantize_vector(values, rule.scale)
        }
    }
}

/// Quantize every known tensor and write it into `options.output_dir`.
pub fn convert(
    tensors: &TensorFile,
    arch: &Architecture,
    options: &ConvertOptions,
) -> Result<ConversionReport, ConvertError> {
    let rules = arch.rules();
    let mut report = ConversionReport::default();

    for name in tensors.names() {
        if !rules.iter().any(|rule| rule.name == name) {
            debug!("ignoring unknown tensor '{name}'");
            report.ignored.push(name.to_string());
        }
    }

    let dir = &options.output_dir;
    fs::create_dir_all(dir).map_err(|err| ConvertError::io(dir, err))?;

    for rule in &rules {
        let Some(tensor) = tensors.get(rule.name) else {
            warn!(
                "tensor '{}' not found, {} left untouched",
                rule.name, rule.file_name
            );
            report.missing.push(rule.name);
            continue;
        };

        debug!("quantizing '{}' as {:?} x{}", rule.name, rule.layout, rule.scale);
        let values = quantize_tensor(rule, tensor)
            .map_err(|err| ConvertError::quantize(rule.name, err))?;

        let path = dir.join(rule.file_name);
        write_artifact(&path, &values).map_err(|err| ConvertError::io(&path, err))?;

        let artifact = WrittenArtifact {
            name: rule.name,
            path,
            elements: values.len(),
        };
        info!(
            "wrote '{}' to {} ({} values, {} bytes)",
            artifact.name,
            artifact.path.display(),
            artifact.elements,
            artifact.bytes()
        );
        report.written.push(artifact);
    }

    Ok(report)
}

/// Load `json_path` and convert it.
pub fn convert_file<P: AsRef<Path>>(
    json_path: P,
    arch: &Architecture,
    options: &ConvertOptions,
) -> Result<ConversionReport, ConvertError> {
    let tensors = load_tensors(json_path)?;
    convert(&tensors, arch, options)
}
