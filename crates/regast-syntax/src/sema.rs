//! Semantic validation.
//!
//! Runs after a successful parse and flags constructs that are valid syntax
//! but cannot be compiled. The tree is never changed; every finding is
//! appended to the AST's diagnostics, so one pass reports all of them.

use indexmap::IndexMap;
use regast_capture::CaptureList;
use regast_core::{BinaryProperty, PropertyKind};
use rowan::TextRange;

use crate::ast::visitor::{
    Visitor, walk_absent_function, walk_class_range, walk_conditional, walk_group,
    walk_quantification,
};
use crate::ast::{
    AbsentFunction, Amount, Ast, Atom, AtomKind, ClassRange, Conditional, EscapedBuiltin,
    GlobalMatchingOptionKind, Group, GroupKind, MatchingOptionKind, MatchingOptionSequence,
    Quantification, Reference, ReferenceKind,
};
use crate::diagnostics::Diagnostics;
use crate::error::ParseError;

/// Validates `ast`, appending findings to `ast.diagnostics`.
pub fn validate(ast: &mut Ast) {
    let mut validator = Validator {
        captures: ast.capture_list(),
        names: IndexMap::new(),
        diagnostics: Diagnostics::new(),
    };
    validator.validate_global_options(ast);
    validator.visit_node(&ast.root);

    tracing::debug!(
        errors = validator.diagnostics.error_count(),
        warnings = validator.diagnostics.warning_count(),
        "semantic validation finished"
    );
    ast.diagnostics.extend(validator.diagnostics);
}

struct Validator {
    captures: CaptureList,
    /// First declaration of each group name.
    names: IndexMap<String, TextRange>,
    diagnostics: Diagnostics,
}

fn unsupported(what: impl Into<String>) -> ParseError {
    ParseError::Unsupported(what.into())
}

impl Validator {
    fn report_unsupported(&mut self, what: impl Into<String>, range: TextRange) {
        self.diagnostics.report(unsupported(what), range).emit();
    }

    fn validate_global_options(&mut self, ast: &Ast) {
        let Some(global) = &ast.global_options else {
            return;
        };
        for opt in &global.options {
            let what = match opt.kind {
                GlobalMatchingOptionKind::NewlineMatching(_) => "newline matching mode",
                GlobalMatchingOptionKind::NewlineSequenceMatching(_) => {
                    "newline sequence matching mode"
                }
                _ => "global matching option",
            };
            self.report_unsupported(what, opt.range);
        }
    }

    fn validate_matching_options(&mut self, opts: &MatchingOptionSequence) {
        for opt in opts.all() {
            let what = match opt.kind {
                MatchingOptionKind::AllowDuplicateGroupNames => "duplicate group naming",
                MatchingOptionKind::UnicodeWordBoundaries => "unicode word boundary mode",
                MatchingOptionKind::TextSegmentGraphemeMode
                | MatchingOptionKind::TextSegmentWordMode => "text segment mode",
                MatchingOptionKind::ByteSemantics => "byte semantic mode",
                _ => continue,
            };
            self.report_unsupported(what, opt.range);
        }
    }

    fn validate_reference(&mut self, reference: &Reference) {
        match &reference.kind {
            ReferenceKind::Absolute(n) => {
                if !usize::try_from(n.value).is_ok_and(|i| i <= self.captures.len()) {
                    self.diagnostics
                        .report(ParseError::InvalidReference(n.value), reference.inner_range)
                        .emit();
                }
            }
            ReferenceKind::Relative(_) => {
                self.report_unsupported("relative capture reference", reference.inner_range);
            }
            ReferenceKind::Named(name) => {
                if !self.captures.has_name(name) {
                    self.diagnostics
                        .report(
                            ParseError::InvalidNamedReference(name.clone()),
                            reference.inner_range,
                        )
                        .emit();
                }
            }
            // Rejected by the parser for backreferences.
            ReferenceKind::RecurseWholePattern(_) => {}
        }
        if let Some(level) = reference.recursion_level {
            self.report_unsupported("recursion level", level.range);
        }
    }

    fn validate_escaped(&mut self, escaped: EscapedBuiltin, range: TextRange) {
        use EscapedBuiltin::*;
        if matches!(
            escaped,
            ResetStartOfMatch
                | SingleDataUnit
                | HorizontalWhitespace
                | NotHorizontalWhitespace
                | VerticalTab
                | NotVerticalTab
                | NotNewline
        ) {
            self.report_unsupported(format!("'\\{}'", escaped.character()), range);
        }
    }

    fn validate_binary_property(&mut self, prop: BinaryProperty, range: TextRange) {
        if prop.is_deprecated() {
            self.diagnostics
                .report(ParseError::DeprecatedUnicode(format!("'{prop:?}'")), range)
                .emit();
        } else if prop.is_unsupported() {
            self.report_unsupported(format!("'{prop:?}'"), range);
        }
    }

    /// Reports a bound that cannot take part in a range. Returns its scalar
    /// when it can.
    fn validate_range_bound(&mut self, bound: &Atom) -> Option<char> {
        if !bound.is_valid_class_range_bound() {
            self.diagnostics
                .report(ParseError::InvalidCharacterClassRangeOperand, bound.range)
                .emit();
            return None;
        }
        let c = bound.literal_char();
        if c.is_none() {
            self.report_unsupported("character class range operand", bound.range);
        }
        c
    }

    fn validate_group_name(&mut self, group: &Group) {
        let Some(name) = group.kind.value.name() else {
            return;
        };
        match self.names.get(&name.value) {
            Some(&first) => self
                .diagnostics
                .report(ParseError::DuplicateNamedCapture(name.value.clone()), name.range)
                .related_to("first declared here", first)
                .emit(),
            None => {
                self.names.insert(name.value.clone(), name.range);
            }
        }
    }
}

impl Visitor for Validator {
    fn visit_group(&mut self, group: &Group) {
        let range = group.kind.range;
        match &group.kind.value {
            GroupKind::Capture
            | GroupKind::NamedCapture(_)
            | GroupKind::NonCapture
            | GroupKind::Lookahead
            | GroupKind::NegativeLookahead => {}
            GroupKind::BalancedCapture(_) => self.report_unsupported("balanced capture", range),
            GroupKind::NonCaptureReset => self.report_unsupported("branch reset group", range),
            GroupKind::AtomicNonCapturing => self.report_unsupported("atomic group", range),
            GroupKind::NonAtomicLookahead => {
                self.report_unsupported("non-atomic lookahead", range)
            }
            GroupKind::Lookbehind
            | GroupKind::NegativeLookbehind
            | GroupKind::NonAtomicLookbehind => self.report_unsupported("lookbehind", range),
            GroupKind::ScriptRun | GroupKind::AtomicScriptRun => {
                self.report_unsupported("script run", range)
            }
            GroupKind::ChangeMatchingOptions(opts) => self.validate_matching_options(opts),
        }
        self.validate_group_name(group);
        walk_group(self, group);
    }

    fn visit_conditional(&mut self, cond: &Conditional) {
        self.report_unsupported("conditional", cond.range);
        walk_conditional(self, cond);
    }

    fn visit_quantification(&mut self, quant: &Quantification) {
        walk_quantification(self, quant);
        if let Amount::Range(lower, upper) = quant.amount.value
            && lower.value > upper.value
        {
            self.diagnostics
                .report(
                    ParseError::InvalidQuantifierRange(lower.value, upper.value),
                    quant.range,
                )
                .emit();
        }
    }

    fn visit_atom(&mut self, atom: &Atom) {
        let range = atom.range;
        match &atom.kind {
            AtomKind::Escaped(escaped) => self.validate_escaped(*escaped, range),
            AtomKind::KeyboardControl(_)
            | AtomKind::KeyboardMeta(_)
            | AtomKind::KeyboardMetaControl(_) => {
                self.report_unsupported("control sequence", range)
            }
            AtomKind::Property(prop) => match &prop.kind {
                PropertyKind::Binary(b, _) => self.validate_binary_property(*b, range),
                PropertyKind::PcreSpecial(_) => self.report_unsupported("PCRE property", range),
                PropertyKind::JavaSpecial(_) => self.report_unsupported("Java property", range),
                _ => {}
            },
            AtomKind::Backreference(reference) => self.validate_reference(reference),
            AtomKind::Subpattern(_) => self.report_unsupported("subpattern", range),
            AtomKind::Callout(_) => self.report_unsupported("callout", range),
            AtomKind::BacktrackingDirective(_) => {
                self.report_unsupported("backtracking directive", range)
            }
            AtomKind::ChangeMatchingOptions(opts) => self.validate_matching_options(opts),
            AtomKind::Char(_)
            | AtomKind::Scalar(_)
            | AtomKind::ScalarSequence(_)
            | AtomKind::NamedCharacter(_)
            | AtomKind::Any
            | AtomKind::StartOfLine
            | AtomKind::EndOfLine => {}
        }
    }

    fn visit_class_range(&mut self, range: &ClassRange) {
        walk_class_range(self, range);
        let lower = self.validate_range_bound(&range.lhs);
        let upper = self.validate_range_bound(&range.rhs);
        if let (Some(from), Some(to)) = (lower, upper)
            && from > to
        {
            self.diagnostics
                .report(ParseError::InvalidCharacterRange { from, to }, range.range())
                .related_to("upper bound", range.rhs.range)
                .emit();
        }
    }

    fn visit_absent_function(&mut self, absent: &AbsentFunction) {
        self.report_unsupported("absent function", absent.range);
        walk_absent_function(self, absent);
    }
}
