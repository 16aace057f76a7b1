//! Dialect switches that change how a pattern is tokenized.

use std::fmt;
use std::ops::{BitOr, BitOrAssign};

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SyntaxOptions(u32);

impl SyntaxOptions {
    /// `a \. b` matches `a.b`.
    pub const NON_SEMANTIC_WHITESPACE: Self = Self(1 << 0);
    /// `abc # comment`
    pub const END_OF_LINE_COMMENTS: Self = Self(1 << 1);
    /// `"..."` quotes.
    pub const EXPERIMENTAL_QUOTES: Self = Self(1 << 2);
    /// `/* ... */` comments.
    pub const EXPERIMENTAL_COMMENTS: Self = Self(1 << 3);
    /// `{n...m}` and `{n..<m}` quantifier ranges.
    pub const EXPERIMENTAL_RANGES: Self = Self(1 << 4);
    /// `(_: ...)` non-capturing groups.
    pub const EXPERIMENTAL_CAPTURES: Self = Self(1 << 5);
    /// Set for pound-fenced multi-line literals. Does not imply extended syntax.
    pub const MULTILINE_COMPILER_LITERAL: Self = Self(1 << 6);
    /// `(?n)`: bare parentheses do not capture.
    pub const NAMED_CAPTURES_ONLY: Self = Self(1 << 7);

    pub const TRADITIONAL: Self = Self(0);
    pub const EXTENDED_SYNTAX: Self = Self(Self::NON_SEMANTIC_WHITESPACE.0 | Self::END_OF_LINE_COMMENTS.0);
    pub const EXPERIMENTAL: Self = Self(
        Self::NON_SEMANTIC_WHITESPACE.0
            | Self::EXPERIMENTAL_QUOTES.0
            | Self::EXPERIMENTAL_COMMENTS.0
            | Self::EXPERIMENTAL_RANGES.0
            | Self::EXPERIMENTAL_CAPTURES.0,
    );

    const NAMES: [(Self, &'static str); 8] = [
        (Self::NON_SEMANTIC_WHITESPACE, "NON_SEMANTIC_WHITESPACE"),
        (Self::END_OF_LINE_COMMENTS, "END_OF_LINE_COMMENTS"),
        (Self::EXPERIMENTAL_QUOTES, "EXPERIMENTAL_QUOTES"),
        (Self::EXPERIMENTAL_COMMENTS, "EXPERIMENTAL_COMMENTS"),
        (Self::EXPERIMENTAL_RANGES, "EXPERIMENTAL_RANGES"),
        (Self::EXPERIMENTAL_CAPTURES, "EXPERIMENTAL_CAPTURES"),
        (Self::MULTILINE_COMPILER_LITERAL, "MULTILINE_COMPILER_LITERAL"),
        (Self::NAMED_CAPTURES_ONLY, "NAMED_CAPTURES_ONLY"),
    ];

    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    pub const fn bits(self) -> u32 {
        self.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// All bits of `other` are set.
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Any bit of `other` is set.
    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    pub fn insert(&mut self, other: Self) {
        self.0 |= other.0;
    }

    pub fn remove(&mut self, other: Self) {
        self.0 &= !other.0;
    }
}

impl BitOr for SyntaxOptions {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for SyntaxOptions {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl fmt::Debug for SyntaxOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "SyntaxOptions(TRADITIONAL)");
        }
        let names: Vec<_> = Self::NAMES
            .iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|(_, name)| *name)
            .collect();
        write!(f, "SyntaxOptions({})", names.join(" | "))
    }
}
