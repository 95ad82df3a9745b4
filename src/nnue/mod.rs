//! NNUE tensor conversion.
//!
//! Turns the float tensors produced by the trainer into the quantized,
//! engine-layout `i16` files the evaluation code embeds:
//! - Fixed-point quantization with truncation toward zero
//! - Feature-transform transpose for accumulator-friendly access
//! - Raw little-endian output, one headerless file per tensor
//!
//! Architecture: (768 -> 256) x 2 perspectives -> 1

pub mod arch;
pub mod convert;
pub mod network;
pub mod quantize;
pub mod tensor;
pub mod writer;

#[cfg(test)]
mod tests;

pub use arch::{Architecture, Layout, TensorRule};
pub use convert::{
    convert, convert_file, load_tensors, ConversionReport, ConvertOptions, WrittenArtifact,
};
pub use network::QuantizedNetwork;
pub use quantize::{quantize_matrix, quantize_value, quantize_vector};
pub use tensor::{Tensor, TensorFile};

/// Input feature size: 64 squares × 6 piece types × 2 colors
pub const INPUT_SIZE: usize = 768;

/// Hidden layer size (must match trained network)
pub const HIDDEN_SIZE: usize = 256;

/// Weight quantization factor for feature weights
pub const QA: i32 = 255;

/// Output weight quantization factor
pub const QB: i32 = 64;

/// Directory the engine embeds its network files from, relative to the
/// working directory of the converter.
pub const DEFAULT_OUTPUT_DIR: &str = "../src/engine/nnue/net";
