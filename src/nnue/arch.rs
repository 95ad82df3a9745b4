//! Network architecture descriptor and the tensor dispatch table.
//!
//! The table is the contract with the engine: every entry names a JSON
//! tensor, the file it lands in, and how its values are laid out there.

use super::{HIDDEN_SIZE, INPUT_SIZE, QA, QB};

pub const FEATURE_WEIGHTS_FILE: &str = "feature_weights.bin";
pub const FEATURE_BIAS_FILE: &str = "feature_bias.bin";
pub const OUTPUT_WEIGHTS_FILE: &str = "output_weights.bin";
pub const OUTPUT_BIAS_FILE: &str = "output_bias.bin";

/// Shape and quantization scales of a `(features -> hidden) x 2 -> 1` network.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Architecture {
    pub features: usize,
    pub hidden: usize,
    pub qa: i32,
    pub qb: i32,
}

impl Architecture {
    /// The chess network the engine ships with.
    pub const CHESS_768: Self = Self {
        features: INPUT_SIZE,
        hidden: HIDDEN_SIZE,
        qa: QA,
        qb: QB,
    };

    /// Output bias scale. The bias is added to the accumulated
    /// `activation * weight` products, which carry both scales.
    #[inline]
    #[must_use]
    pub const fn qab(&self) -> i32 {
        self.qa * self.qb
    }

    /// Dispatch table in conversion order.
    #[must_use]
    pub fn rules(&self) -> [TensorRule; 4] {
        let hidden = self.hidden;
        [
            // stored [neuron][feature], read by the engine as [feature][neuron]
            TensorRule {
                name: "ft.weight",
                file_name: FEATURE_WEIGHTS_FILE,
                scale: self.qa,
                layout: Layout::Matrix {
                    stride: hidden,
                    length: hidden * self.features,
                    transpose: true,
                },
            },
            TensorRule {
                name: "ft.bias",
                file_name: FEATURE_BIAS_FILE,
                scale: self.qa,
                layout: Layout::Vector { length: Some(hidden) },
            },
            // one output row covering both perspectives
            TensorRule {
                name: "out.weight",
                file_name: OUTPUT_WEIGHTS_FILE,
                scale: self.qb,
                layout: Layout::Matrix {
                    stride: hidden * 2,
                    length: hidden * 2,
                    transpose: false,
                },
            },
            TensorRule {
                name: "out.bias",
                file_name: OUTPUT_BIAS_FILE,
                scale: self.qab(),
                layout: Layout::Vector { length: None },
            },
        ]
    }

    /// Look up the rule for a tensor name.
    #[must_use]
    pub fn rule(&self, name: &str) -> Option<TensorRule> {
        self.rules().into_iter().find(|rule| rule.name == name)
    }
}

impl Default for Architecture {
    fn default() -> Self {
        Self::CHESS_768
    }
}

/// How a tensor is flattened into its output file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layout {
    /// 2-D weights flattened with `stride`, optionally transposed.
    Matrix {
        stride: usize,
        length: usize,
        transpose: bool,
    },
    /// 1-D biases in input order. `None` writes whatever length is given.
    Vector { length: Option<usize> },
}

impl Layout {
    /// Number of `i16` values the engine expects, if fixed.
    #[must_use]
    pub const fn expected_len(&self) -> Option<usize> {
        match *self {
            Layout::Matrix { length, .. } => Some(length),
            Layout::Vector { length } => length,
        }
    }
}

/// One entry of the dispatch table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TensorRule {
    /// Key in the JSON tensor file
    pub name: &'static str,
    /// File name inside the output directory
    pub file_name: &'static str,
    /// Fixed-point multiplier
    pub scale: i32,
    pub layout: Layout,
}
