//! Character property classification.
//!
//! Turns the free-form text of `\p{...}`, `[:...:]` and friends into a typed
//! [`PropertyKind`]. Two entry points:
//! - [`classify`] for a bare value (`\p{Greek}`, `\p{Lu}`)
//! - [`classify_keyed`] for `key=value` forms (`\p{sc=Greek}`)

use serde::{Deserialize, Serialize};

use crate::tables::{
    BinaryProperty, GeneralCategory, JavaSpecial, NumericType, PcreSpecial, PosixProperty, Script,
};
use crate::utils::{normalize_property_name, with_normalized_forms};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PropertyKind {
    Any,
    Assigned,
    Ascii,
    GeneralCategory(GeneralCategory),
    Binary(BinaryProperty, bool),
    Script(Script),
    ScriptExtension(Script),
    Named(String),
    NumericType(NumericType),
    NumericValue(f64),
    Mapping(MapKind, String),
    Ccc(u8),
    Age { major: u32, minor: u32 },
    Posix(PosixProperty),
    PcreSpecial(PcreSpecial),
    JavaSpecial(JavaSpecial),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MapKind {
    Lowercase,
    Uppercase,
    Titlecase,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PropertyError {
    #[error("empty property")]
    EmptyProperty,

    #[error("{}", unknown_property_message(.key.as_deref(), .value))]
    UnknownProperty { key: Option<String>, value: String },

    #[error("unrecognized script '{0}'")]
    UnrecognizedScript(String),

    #[error("unrecognized general category '{0}'")]
    UnrecognizedCategory(String),

    #[error("invalid age '{0}'")]
    InvalidAge(String),

    #[error("invalid numeric value '{0}'")]
    InvalidNumericValue(String),

    #[error("unrecognized numeric type '{0}'")]
    UnrecognizedNumericType(String),

    #[error("invalid canonical combining class '{0}'")]
    InvalidCcc(String),
}

fn unknown_property_message(key: Option<&str>, value: &str) -> String {
    match key {
        Some(key) => format!("unknown character property '{key}={value}'"),
        None => format!("unknown character property '{value}'"),
    }
}

pub type Result<T> = std::result::Result<T, PropertyError>;

impl PropertyKind {
    pub fn is_pcre_special(&self) -> bool {
        matches!(self, Self::PcreSpecial(_))
    }

    pub fn is_java_special(&self) -> bool {
        matches!(self, Self::JavaSpecial(_))
    }
}

fn classify_special(value: &str) -> Option<PropertyKind> {
    with_normalized_forms(value, |s| match s {
        "any" => Some(PropertyKind::Any),
        "assigned" => Some(PropertyKind::Assigned),
        "ascii" => Some(PropertyKind::Ascii),
        _ => None,
    })
}

fn classify_bool(value: &str) -> Option<bool> {
    with_normalized_forms(value, |s| match s {
        "t" | "true" | "y" | "yes" => Some(true),
        "f" | "false" | "n" | "no" => Some(false),
        _ => None,
    })
}

pub fn binary_property(s: &str) -> Option<BinaryProperty> {
    with_normalized_forms(s, BinaryProperty::from_alias)
}

pub fn general_category(s: &str) -> Option<GeneralCategory> {
    with_normalized_forms(s, GeneralCategory::from_alias)
}

pub fn script(s: &str) -> Option<Script> {
    with_normalized_forms(s, Script::from_alias)
}

pub fn posix_property(s: &str) -> Option<PosixProperty> {
    with_normalized_forms(s, PosixProperty::from_alias)
}

fn numeric_type(s: &str) -> Option<NumericType> {
    with_normalized_forms(s, NumericType::from_alias)
}

/// Parse a Unicode version written as `3.0` or `V3_0`.
pub fn parse_age(value: &str) -> Option<(u32, u32)> {
    let (rest, separator) = match value.strip_prefix('V') {
        Some(rest) => (rest, '_'),
        None => (value, '.'),
    };
    let (major, minor) = rest.split_once(separator)?;
    Some((major.parse().ok()?, minor.parse().ok()?))
}

/// Classify a property given only its value, inferring the key.
///
/// Lookup order: special values, binary properties, general categories,
/// scripts (as script extensions), POSIX classes, then the exact-spelling
/// PCRE and Java extensions.
pub fn classify(value: &str) -> Result<PropertyKind> {
    if value.is_empty() {
        return Err(PropertyError::EmptyProperty);
    }
    if let Some(special) = classify_special(value) {
        return Ok(special);
    }
    if let Some(prop) = binary_property(value) {
        return Ok(PropertyKind::Binary(prop, true));
    }
    if let Some(cat) = general_category(value) {
        return Ok(PropertyKind::GeneralCategory(cat));
    }
    if let Some(script) = script(value) {
        return Ok(PropertyKind::ScriptExtension(script));
    }
    if let Some(posix) = posix_property(value) {
        return Ok(PropertyKind::Posix(posix));
    }
    if let Some(pcre) = PcreSpecial::from_raw(value) {
        return Ok(PropertyKind::PcreSpecial(pcre));
    }
    if let Some(java) = JavaSpecial::from_raw(value) {
        return Ok(PropertyKind::JavaSpecial(java));
    }
    Err(PropertyError::UnknownProperty {
        key: None,
        value: value.to_string(),
    })
}

/// Classify a `key=value` property.
pub fn classify_keyed(key: &str, value: &str) -> Result<PropertyKind> {
    if key.is_empty() || value.is_empty() {
        return Err(PropertyError::EmptyProperty);
    }

    if let (Some(prop), Some(is_true)) = (binary_property(key), classify_bool(value)) {
        return Ok(PropertyKind::Binary(prop, is_true));
    }

    let owned = || value.to_string();
    let Some(kind) = with_normalized_forms(key, |k| {
        Some(match k {
            "script" | "sc" => script(value)
                .map(PropertyKind::Script)
                .ok_or_else(|| PropertyError::UnrecognizedScript(owned())),
            "scriptextensions" | "scx" => script(value)
                .map(PropertyKind::ScriptExtension)
                .ok_or_else(|| PropertyError::UnrecognizedScript(owned())),
            "gc" | "generalcategory" => general_category(value)
                .map(PropertyKind::GeneralCategory)
                .ok_or_else(|| PropertyError::UnrecognizedCategory(owned())),
            "age" => parse_age(value)
                .map(|(major, minor)| PropertyKind::Age { major, minor })
                .ok_or_else(|| PropertyError::InvalidAge(owned())),
            "name" | "na" => Ok(PropertyKind::Named(owned())),
            "numericvalue" | "nv" => value
                .parse::<f64>()
                .map(PropertyKind::NumericValue)
                .map_err(|_| PropertyError::InvalidNumericValue(owned())),
            "numerictype" | "nt" => numeric_type(value)
                .map(PropertyKind::NumericType)
                .ok_or_else(|| PropertyError::UnrecognizedNumericType(owned())),
            "slc" | "simplelowercasemapping" => Ok(PropertyKind::Mapping(MapKind::Lowercase, owned())),
            "suc" | "simpleuppercasemapping" => Ok(PropertyKind::Mapping(MapKind::Uppercase, owned())),
            "stc" | "simpletitlecasemapping" => Ok(PropertyKind::Mapping(MapKind::Titlecase, owned())),
            "ccc" | "canonicalcombiningclass" => value
                .parse::<u8>()
                .ok()
                .filter(|&ccc| ccc <= 254)
                .map(PropertyKind::Ccc)
                .ok_or_else(|| PropertyError::InvalidCcc(owned())),
            _ => return None,
        })
    }) else {
        return Err(PropertyError::UnknownProperty {
            key: Some(key.to_string()),
            value: owned(),
        });
    };
    kind
}
