//! Conversion tests.
//!
//! Tests are organized into separate files by category:
//! - `layout.rs` - Engine access patterns over full-size artifacts
//! - `proptest.rs` - Property-based tests
