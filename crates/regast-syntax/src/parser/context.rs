//! State threaded through the descent and saved at scoped boundaries.

use indexmap::IndexSet;

use crate::ast::{GroupKind, NewlineMode, ReferenceKind};
use crate::options::SyntaxOptions;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsingContext {
    pub in_custom_class: bool,
    pub syntax: SyntaxOptions,
    /// Capturing groups opened so far.
    pub prior_group_count: usize,
    pub used_names: IndexSet<String>,
    pub newline_mode: NewlineMode,
}

impl ParsingContext {
    pub fn new(syntax: SyntaxOptions) -> Self {
        Self {
            syntax,
            ..Self::default()
        }
    }

    pub fn ignore_whitespace(&self) -> bool {
        self.syntax.contains(SyntaxOptions::NON_SEMANTIC_WHITESPACE)
    }

    pub fn end_of_line_comments(&self) -> bool {
        self.syntax.contains(SyntaxOptions::END_OF_LINE_COMMENTS)
    }

    pub fn experimental_quotes(&self) -> bool {
        self.syntax.contains(SyntaxOptions::EXPERIMENTAL_QUOTES)
    }

    pub fn experimental_comments(&self) -> bool {
        self.syntax.contains(SyntaxOptions::EXPERIMENTAL_COMMENTS)
    }

    pub fn experimental_ranges(&self) -> bool {
        self.syntax.contains(SyntaxOptions::EXPERIMENTAL_RANGES)
    }

    pub fn experimental_captures(&self) -> bool {
        self.syntax.contains(SyntaxOptions::EXPERIMENTAL_CAPTURES)
    }

    pub fn is_multiline_literal(&self) -> bool {
        self.syntax.contains(SyntaxOptions::MULTILINE_COMPILER_LITERAL)
    }

    pub fn record_group(&mut self, kind: &GroupKind) {
        if kind.is_capturing() {
            self.prior_group_count += 1;
        }
        if let Some(name) = kind.name() {
            self.used_names.insert(name.value.clone());
        }
    }

    /// Whether `reference` names a group that was opened earlier.
    pub fn is_prior_group_ref(&self, reference: &ReferenceKind) -> bool {
        match reference {
            ReferenceKind::Absolute(n) => {
                usize::try_from(n.value).is_ok_and(|n| n <= self.prior_group_count)
            }
            ReferenceKind::Relative(n) => n.value < 0,
            ReferenceKind::Named(name) => self.used_names.contains(name),
            ReferenceKind::RecurseWholePattern(_) => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use rowan::TextRange;

    use super::*;
    use crate::ast::Located;

    fn num(value: i32) -> crate::ast::Number {
        Located::new(value, TextRange::default())
    }

    #[test]
    fn records_only_capturing_groups() {
        let mut ctx = ParsingContext::new(SyntaxOptions::TRADITIONAL);
        ctx.record_group(&GroupKind::NonCapture);
        ctx.record_group(&GroupKind::Capture);
        ctx.record_group(&GroupKind::NamedCapture(Located::new(
            "year".to_string(),
            TextRange::default(),
        )));

        assert_eq!(ctx.prior_group_count, 2);
        assert!(ctx.is_prior_group_ref(&ReferenceKind::Named("year".into())));
        assert!(!ctx.is_prior_group_ref(&ReferenceKind::Named("month".into())));
        assert!(ctx.is_prior_group_ref(&ReferenceKind::Absolute(num(2))));
        assert!(!ctx.is_prior_group_ref(&ReferenceKind::Absolute(num(3))));
        assert!(!ctx.is_prior_group_ref(&ReferenceKind::Absolute(num(-1))));
        assert!(ctx.is_prior_group_ref(&ReferenceKind::Relative(num(-1))));
        assert!(!ctx.is_prior_group_ref(&ReferenceKind::Relative(num(1))));
    }

    #[test]
    fn snapshots_are_independent() {
        let mut ctx = ParsingContext::new(SyntaxOptions::EXTENDED_SYNTAX);
        let saved = ctx.clone();
        ctx.syntax.remove(SyntaxOptions::EXTENDED_SYNTAX);
        ctx.in_custom_class = true;

        assert!(!ctx.ignore_whitespace());
        assert!(saved.ignore_whitespace());
        assert!(saved.end_of_line_comments());
        assert!(!saved.in_custom_class);
    }
}
