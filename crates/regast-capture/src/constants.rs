//! Wire format constants.

/// Current capture-structure serialization version.
pub const VERSION: u16 = 1;

/// Size of the little-endian version prefix.
pub const VERSION_SIZE: usize = std::mem::size_of::<u16>();

/// Bytes needed to serialize the capture structure of a pattern.
///
/// Every capture costs at least one byte of pattern text per encoded byte,
/// so the pattern's UTF-8 length bounds the body. Add the version prefix
/// and the trailing `end` code.
pub fn serialization_buffer_size(pattern_utf8_len: usize) -> usize {
    VERSION_SIZE + pattern_utf8_len + 1
}
