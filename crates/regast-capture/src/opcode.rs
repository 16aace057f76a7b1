//! Byte codes of the capture-structure stream.

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[repr(u8)]
pub enum Opcode {
    /// Terminates the stream.
    End = 0,
    /// Unnamed atom.
    Atom = 1,
    /// Named atom, followed by the name bytes and a NUL.
    NamedAtom = 2,
    // 3 is reserved for arrays.
    /// Wraps the preceding element in an optional.
    FormOptional = 4,
    BeginTuple = 5,
    EndTuple = 6,
}

impl Opcode {
    pub fn from_u8(v: u8) -> Option<Self> {
        match v {
            0 => Some(Self::End),
            1 => Some(Self::Atom),
            2 => Some(Self::NamedAtom),
            4 => Some(Self::FormOptional),
            5 => Some(Self::BeginTuple),
            6 => Some(Self::EndTuple),
            _ => None,
        }
    }
}
