#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Capture model for regast.
//!
//! - [`CaptureList`]: the flat list of captures, in textual order
//! - [`CaptureStructure`]: the nested optional/tuple shape derived from it
//! - the versioned binary encoding of that shape, handed to code generators

pub mod codec;
pub mod constants;
pub mod list;
pub mod opcode;
pub mod structure;

#[cfg(test)]
mod structure_tests;

pub use codec::{DecodeError, EncodeError};
pub use constants::{VERSION, serialization_buffer_size};
pub use list::{Capture, CaptureList};
pub use opcode::Opcode;
pub use structure::CaptureStructure;
