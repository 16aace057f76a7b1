//! Binary serialization of [`CaptureStructure`].
//!
//! Layout: a little-endian `u16` version, then a code stream ending in `end`.
//!
//! ```text
//! encode(T)            = version, [T], end
//! [atom]               = atom
//! [name: atom]         = named-atom, name bytes, NUL
//! [T?]                 = [T], form-optional
//! [(T0, T1, ...)]      = begin-tuple, [T0], [T1], ..., end-tuple
//! top-level (T0, ...)  = [T0], [T1], ...
//! ```
//!
//! A stream holding exactly one top-level element decodes to that element;
//! anything else decodes to a tuple.

use crate::constants::{VERSION, VERSION_SIZE};
use crate::opcode::Opcode;
use crate::structure::CaptureStructure;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EncodeError {
    #[error("buffer too small: need {required} bytes, capacity is {capacity}")]
    BufferTooSmall { required: usize, capacity: usize },
    #[error("cannot encode a capture structure with explicit types")]
    TypedAtom,
    #[error("capture name contains a NUL byte: {0:?}")]
    InvalidName(String),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("unsupported version: {0} (expected {VERSION})")]
    UnsupportedVersion(u16),
    #[error("unexpected end of capture structure data")]
    Truncated,
    #[error("unknown capture structure code: {0}")]
    UnknownOpcode(u8),
    #[error("optional marker with no preceding element")]
    DanglingOptional,
    #[error("tuple end without matching begin")]
    UnbalancedTuple,
    #[error("{0} tuple(s) left open at end of data")]
    UnclosedScopes(usize),
    #[error("capture name is not valid UTF-8")]
    InvalidName,
}

impl CaptureStructure {
    /// Bytes [`encode`](Self::encode) appends for this structure.
    pub fn encoded_len(&self) -> usize {
        fn body(node: &CaptureStructure, top_level: bool) -> usize {
            match node {
                CaptureStructure::Atom { name: None, .. } => 1,
                CaptureStructure::Atom { name: Some(n), .. } => 1 + n.len() + 1,
                CaptureStructure::Optional(inner) => body(inner, false) + 1,
                CaptureStructure::Tuple(elements) => {
                    let brackets = if top_level { 0 } else { 2 };
                    brackets + elements.iter().map(|e| body(e, false)).sum::<usize>()
                }
            }
        }
        let contents = if self.is_empty() { 0 } else { body(self, true) };
        VERSION_SIZE + contents + 1
    }

    /// Append the serialized form to `buf`.
    ///
    /// `capacity` is the space the caller reserved, usually
    /// [`serialization_buffer_size`](crate::serialization_buffer_size) of the
    /// pattern. Nothing is written when the encoding would not fit.
    pub fn encode(&self, buf: &mut Vec<u8>, capacity: usize) -> Result<(), EncodeError> {
        if self.has_typed_atoms() {
            return Err(EncodeError::TypedAtom);
        }
        let required = self.encoded_len();
        if required > capacity {
            return Err(EncodeError::BufferTooSmall { required, capacity });
        }

        let start = buf.len();
        buf.reserve(required);
        buf.extend_from_slice(&VERSION.to_le_bytes());
        let written = if self.is_empty() {
            Ok(())
        } else {
            encode_node(self, true, buf)
        };
        if let Err(err) = written {
            buf.truncate(start);
            return Err(err);
        }
        buf.push(Opcode::End as u8);
        Ok(())
    }

    /// Decode a serialized structure. Bytes after the `end` code are ignored.
    pub fn decode(bytes: &[u8]) -> Result<Self, DecodeError> {
        let Some(version) = bytes.get(..VERSION_SIZE) else {
            return Err(DecodeError::Truncated);
        };
        let version = u16::from_le_bytes([version[0], version[1]]);
        if version != VERSION {
            return Err(DecodeError::UnsupportedVersion(version));
        }

        let mut scopes: Vec<Vec<CaptureStructure>> = vec![Vec::new()];
        let mut offset = VERSION_SIZE;
        loop {
            let &raw = bytes.get(offset).ok_or(DecodeError::Truncated)?;
            offset += 1;
            let code = Opcode::from_u8(raw).ok_or(DecodeError::UnknownOpcode(raw))?;
            let scope = scopes.last_mut().ok_or(DecodeError::UnbalancedTuple)?;
            match code {
                Opcode::End => break,
                Opcode::Atom => scope.push(CaptureStructure::atom()),
                Opcode::NamedAtom => {
                    let rest = &bytes[offset..];
                    let len = rest
                        .iter()
                        .position(|&b| b == 0)
                        .ok_or(DecodeError::Truncated)?;
                    let name =
                        std::str::from_utf8(&rest[..len]).map_err(|_| DecodeError::InvalidName)?;
                    scope.push(CaptureStructure::named(name));
                    offset += len + 1;
                }
                Opcode::FormOptional => {
                    let last = scope.pop().ok_or(DecodeError::DanglingOptional)?;
                    scope.push(CaptureStructure::optional(last));
                }
                Opcode::BeginTuple => scopes.push(Vec::new()),
                Opcode::EndTuple => {
                    if scopes.len() < 2 {
                        return Err(DecodeError::UnbalancedTuple);
                    }
                    let elements = scopes.pop().unwrap_or_default();
                    if let Some(parent) = scopes.last_mut() {
                        parent.push(CaptureStructure::Tuple(elements));
                    }
                }
            }
        }

        if scopes.len() != 1 {
            return Err(DecodeError::UnclosedScopes(scopes.len() - 1));
        }
        let mut top = scopes.pop().unwrap_or_default();
        if top.len() == 1 {
            return Ok(top.remove(0));
        }
        Ok(CaptureStructure::Tuple(top))
    }
}

fn encode_node(
    node: &CaptureStructure,
    top_level: bool,
    buf: &mut Vec<u8>,
) -> Result<(), EncodeError> {
    match node {
        CaptureStructure::Atom { name: None, .. } => buf.push(Opcode::Atom as u8),
        CaptureStructure::Atom { name: Some(name), .. } => {
            if name.as_bytes().contains(&0) {
                return Err(EncodeError::InvalidName(name.clone()));
            }
            buf.push(Opcode::NamedAtom as u8);
            buf.extend_from_slice(name.as_bytes());
            buf.push(0);
        }
        CaptureStructure::Optional(inner) => {
            encode_node(inner, false, buf)?;
            buf.push(Opcode::FormOptional as u8);
        }
        CaptureStructure::Tuple(elements) => {
            if !top_level {
                buf.push(Opcode::BeginTuple as u8);
            }
            for element in elements {
                encode_node(element, false, buf)?;
            }
            if !top_level {
                buf.push(Opcode::EndTuple as u8);
            }
        }
    }
    Ok(())
}
