//! The type-level shape of a pattern's captures.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A tree describing the type of a pattern's captures.
///
/// `Tuple(vec![])` is the empty structure of a pattern without captures.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CaptureStructure {
    Atom {
        name: Option<String>,
        type_name: Option<String>,
    },
    Optional(Box<CaptureStructure>),
    Tuple(Vec<CaptureStructure>),
}

impl CaptureStructure {
    pub fn empty() -> Self {
        Self::Tuple(Vec::new())
    }

    pub fn atom() -> Self {
        Self::Atom {
            name: None,
            type_name: None,
        }
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self::Atom {
            name: Some(name.into()),
            type_name: None,
        }
    }

    pub fn optional(inner: CaptureStructure) -> Self {
        Self::Optional(Box::new(inner))
    }

    /// True for the empty tuple only.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Tuple(elements) if elements.is_empty())
    }

    /// Whether any atom carries an explicit type.
    pub fn has_typed_atoms(&self) -> bool {
        match self {
            Self::Atom { type_name, .. } => type_name.is_some(),
            Self::Optional(inner) => inner.has_typed_atoms(),
            Self::Tuple(elements) => elements.iter().any(Self::has_typed_atoms),
        }
    }
}

impl fmt::Display for CaptureStructure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Atom {
                name: None,
                type_name: None,
            } => write!(f, "Atom"),
            Self::Atom {
                name: Some(name),
                type_name: None,
            } => write!(f, "Atom({name})"),
            Self::Atom {
                name,
                type_name: Some(ty),
            } => write!(f, "Atom({}: {ty})", name.as_deref().unwrap_or("_")),
            Self::Optional(inner) => write!(f, "Optional({inner})"),
            Self::Tuple(elements) => {
                write!(f, "Tuple(")?;
                for (i, element) in elements.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{element}")?;
                }
                write!(f, ")")
            }
        }
    }
}
