//! Converted network as the engine sees it.
//!
//! Reads the four artifacts back in the engine's layout so a conversion can
//! be checked without the engine:
//! - Feature weights `[features][hidden]`, one accumulator row per feature
//! - Feature biases `[hidden]`
//! - Output weights `[2][hidden]`, side to move first
//! - One output bias

use std::io;
use std::path::Path;

use super::arch::{
    Architecture, FEATURE_BIAS_FILE, FEATURE_WEIGHTS_FILE, OUTPUT_BIAS_FILE, OUTPUT_WEIGHTS_FILE,
};
use super::writer::read_artifact;

/// Quantized network weights in engine layout
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuantizedNetwork {
    hidden: usize,
    /// Feature transformer weights `[features][hidden]`, flattened
    pub feature_weights: Vec<i16>,
    /// Feature transformer biases `[hidden]`
    pub feature_bias: Vec<i16>,
    /// Output weights `[2][hidden]`, flattened
    pub output_weights: Vec<i16>,
    /// Output bias
    pub output_bias: i16,
}

impl QuantizedNetwork {
    /// Load the artifacts a conversion wrote into `dir`.
    ///
    /// Every file must hold exactly the element count `arch` implies.
    pub fn load<P: AsRef<Path>>(dir: P, arch: &Architecture) -> io::Result<Self> {
        let dir = dir.as_ref();
        let hidden = arch.hidden;

        let feature_weights = load_exact(dir, FEATURE_WEIGHTS_FILE, arch.features * hidden)?;
        let feature_bias = load_exact(dir, FEATURE_BIAS_FILE, hidden)?;
        let output_weights = load_exact(dir, OUTPUT_WEIGHTS_FILE, hidden * 2)?;
        let output_bias = load_exact(dir, OUTPUT_BIAS_FILE, 1)?[0];

        Ok(Self {
            hidden,
            feature_weights,
            feature_bias,
            output_weights,
            output_bias,
        })
    }

    /// Weights added to the accumulator when `feature` becomes active.
    ///
    /// # Panics
    /// If `feature` is not below the architecture's feature count.
    #[inline]
    #[must_use]
    pub fn feature_row(&self, feature: usize) -> &[i16] {
        let start = feature * self.hidden;
        &self.feature_weights[start..start + self.hidden]
    }

    /// Output weights applied to the side to move's accumulator
    #[must_use]
    pub fn output_weights_us(&self) -> &[i16] {
        &self.output_weights[..self.hidden]
    }

    /// Output weights applied to the opponent's accumulator
    #[must_use]
    pub fn output_weights_them(&self) -> &[i16] {
        &self.output_weights[self.hidden..]
    }
}

fn load_exact(dir: &Path, file_name: &str, expected: usize) -> io::Result<Vec<i16>> {
    let values = read_artifact(dir.join(file_name))?;
    if values.len() != expected {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!(
                "{file_name} holds {} values, expected {expected}",
                values.len()
            ),
        ));
    }
    Ok(values)
}
