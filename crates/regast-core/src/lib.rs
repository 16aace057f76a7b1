#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Unicode character property model for regast.
//!
//! This crate has no knowledge of pattern syntax. It maps the text found
//! inside property escapes to typed values:
//! - `tables`: alias tables for general categories, binary properties, scripts
//! - `property`: the classifier entry points and their errors
//! - `utils`: loose-matching helpers (UAX44-LM3)

pub mod property;
pub mod tables;
pub mod utils;


pub use property::{MapKind, PropertyError, PropertyKind, classify, classify_keyed};
pub use tables::{
    BinaryProperty, GeneralCategory, JavaSpecial, NumericType, PcreSpecial, PosixProperty, Script,
};
