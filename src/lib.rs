//! Converts trained NNUE tensors (JSON) into the quantized, headerless
//! `i16` files the engine embeds for evaluation.
//!
//! # Example
//! ```no_run
//! use nnue_convert::nnue::{convert_file, Architecture, ConvertOptions};
//!
//! let report = convert_file("net.json", &Architecture::default(), &ConvertOptions::default())?;
//! println!("wrote {} files", report.written.len());
//! # Ok::<(), nnue_convert::ConvertError>(())
//! ```

pub mod error;
pub mod nnue;

pub use error::{ConvertError, QuantizeError};
pub use nnue::{Architecture, ConvertOptions};
