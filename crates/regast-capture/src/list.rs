//! Flat, textually ordered list of a pattern's captures.

use rowan::TextRange;

use crate::structure::CaptureStructure;

/// One capturing group.
///
/// `optional_depth` counts the enclosing constructs that make the group's
/// participation conditional: alternation arms, zero-minimum quantifiers,
/// conditional branches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Capture {
    pub name: Option<String>,
    pub type_name: Option<String>,
    pub optional_depth: u32,
    pub range: TextRange,
}

impl Capture {
    pub fn new(name: Option<String>, optional_depth: u32, range: TextRange) -> Self {
        Self {
            name,
            type_name: None,
            optional_depth,
            range,
        }
    }

    pub fn structure(&self, nest_optionals: bool) -> CaptureStructure {
        let mut structure = CaptureStructure::Atom {
            name: self.name.clone(),
            type_name: self.type_name.clone(),
        };
        let layers = match (self.optional_depth, nest_optionals) {
            (0, _) => 0,
            (depth, true) => depth,
            (_, false) => 1,
        };
        for _ in 0..layers {
            structure = CaptureStructure::optional(structure);
        }
        structure
    }
}

/// Captures in the order their opening constructs appear. The whole match is
/// not included.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CaptureList {
    captures: Vec<Capture>,
}

impl CaptureList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, capture: Capture) {
        self.captures.push(capture);
    }

    pub fn len(&self) -> usize {
        self.captures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.captures.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Capture> {
        self.captures.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Capture> {
        self.captures.get(index)
    }

    /// First capture declared with `name`.
    pub fn find_named(&self, name: &str) -> Option<&Capture> {
        self.captures
            .iter()
            .find(|c| c.name.as_deref() == Some(name))
    }

    pub fn has_name(&self, name: &str) -> bool {
        self.find_named(name).is_some()
    }

    /// The type shape of this list.
    ///
    /// Without `nest_optionals`, each capture is wrapped in at most one
    /// `Optional` regardless of its depth.
    pub fn structure(&self, nest_optionals: bool) -> CaptureStructure {
        match self.captures.as_slice() {
            [] => CaptureStructure::empty(),
            [single] => single.structure(nest_optionals),
            all => CaptureStructure::Tuple(
                all.iter().map(|c| c.structure(nest_optionals)).collect(),
            ),
        }
    }
}

impl<'a> IntoIterator for &'a CaptureList {
    type Item = &'a Capture;
    type IntoIter = std::slice::Iter<'a, Capture>;

    fn into_iter(self) -> Self::IntoIter {
        self.captures.iter()
    }
}

impl FromIterator<Capture> for CaptureList {
    fn from_iter<I: IntoIterator<Item = Capture>>(iter: I) -> Self {
        Self {
            captures: iter.into_iter().collect(),
        }
    }
}
