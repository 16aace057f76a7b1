//! Keyword tables for the `(*...)` family of constructs.
//!
//! Logos picks the longest keyword at the cursor, so `CRLF` wins over `CR`
//! and `NOTEMPTY_ATSTART` over `NOTEMPTY` without ordering tricks.

use logos::Logos;

use crate::ast::{DirectiveKind, GroupKind, NewlineMode, NewlineSequenceMode};

/// Upper-case verbs after `(*`: backtracking directives and global options.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    #[token("ACCEPT")]
    Accept,
    #[token("FAIL")]
    #[token("F")]
    Fail,
    #[token("MARK")]
    Mark,
    #[token("COMMIT")]
    Commit,
    #[token("PRUNE")]
    Prune,
    #[token("SKIP")]
    Skip,
    #[token("THEN")]
    Then,

    #[token("CR")]
    Cr,
    #[token("LF")]
    Lf,
    #[token("CRLF")]
    Crlf,
    #[token("ANYCRLF")]
    AnyCrlf,
    #[token("ANY")]
    Any,
    #[token("NUL")]
    Nul,
    #[token("BSR_ANYCRLF")]
    BsrAnyCrlf,
    #[token("BSR_UNICODE")]
    BsrUnicode,

    #[token("LIMIT_DEPTH")]
    LimitDepth,
    #[token("LIMIT_HEAP")]
    LimitHeap,
    #[token("LIMIT_MATCH")]
    LimitMatch,
    #[token("NOTEMPTY")]
    NotEmpty,
    #[token("NOTEMPTY_ATSTART")]
    NotEmptyAtStart,
    #[token("NO_AUTO_POSSESS")]
    NoAutoPossess,
    #[token("NO_DOTSTAR_ANCHOR")]
    NoDotStarAnchor,
    #[token("NO_JIT")]
    NoJit,
    #[token("NO_START_OPT")]
    NoStartOpt,
    #[token("UTF")]
    Utf,
    #[token("UCP")]
    Ucp,
}

impl Verb {
    /// Longest verb at the start of `text`, with its byte length.
    pub fn leading(text: &str) -> Option<(Self, usize)> {
        let mut lexer = Self::lexer(text);
        match lexer.next() {
            Some(Ok(verb)) if lexer.span().start == 0 => Some((verb, lexer.span().end)),
            _ => None,
        }
    }

    pub fn directive(self) -> Option<DirectiveKind> {
        let kind = match self {
            Verb::Accept => DirectiveKind::Accept,
            Verb::Fail => DirectiveKind::Fail,
            Verb::Mark => DirectiveKind::Mark,
            Verb::Commit => DirectiveKind::Commit,
            Verb::Prune => DirectiveKind::Prune,
            Verb::Skip => DirectiveKind::Skip,
            Verb::Then => DirectiveKind::Then,
            _ => return None,
        };
        Some(kind)
    }

    pub fn newline_mode(self) -> Option<NewlineMode> {
        let mode = match self {
            Verb::Cr => NewlineMode::CarriageReturnOnly,
            Verb::Lf => NewlineMode::LinefeedOnly,
            Verb::Crlf => NewlineMode::CarriageAndLinefeedOnly,
            Verb::AnyCrlf => NewlineMode::AnyCarriageReturnOrLinefeed,
            Verb::Any => NewlineMode::AnyUnicode,
            Verb::Nul => NewlineMode::NulCharacter,
            _ => return None,
        };
        Some(mode)
    }

    pub fn newline_sequence_mode(self) -> Option<NewlineSequenceMode> {
        match self {
            Verb::BsrAnyCrlf => Some(NewlineSequenceMode::AnyCarriageReturnOrLinefeed),
            Verb::BsrUnicode => Some(NewlineSequenceMode::AnyUnicode),
            _ => None,
        }
    }

    /// `LIMIT_*` verbs take `=n`.
    pub fn is_limit(self) -> bool {
        matches!(self, Verb::LimitDepth | Verb::LimitHeap | Verb::LimitMatch)
    }
}

/// Spelled-out PCRE2 group openers after `(*`, colon included.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pcre2Group {
    #[token("atomic:")]
    Atomic,
    #[token("pla:")]
    #[token("positive_lookahead:")]
    Lookahead,
    #[token("nla:")]
    #[token("negative_lookahead:")]
    NegativeLookahead,
    #[token("plb:")]
    #[token("positive_lookbehind:")]
    Lookbehind,
    #[token("nlb:")]
    #[token("negative_lookbehind:")]
    NegativeLookbehind,
    #[token("napla:")]
    #[token("non_atomic_positive_lookahead:")]
    NonAtomicLookahead,
    #[token("naplb:")]
    #[token("non_atomic_positive_lookbehind:")]
    NonAtomicLookbehind,
    #[token("sr:")]
    #[token("script_run:")]
    ScriptRun,
    #[token("asr:")]
    #[token("atomic_script_run:")]
    AtomicScriptRun,
}

impl Pcre2Group {
    pub fn leading(text: &str) -> Option<(Self, usize)> {
        let mut lexer = Self::lexer(text);
        match lexer.next() {
            Some(Ok(group)) if lexer.span().start == 0 => Some((group, lexer.span().end)),
            _ => None,
        }
    }

    pub fn kind(self) -> GroupKind {
        match self {
            Pcre2Group::Atomic => GroupKind::AtomicNonCapturing,
            Pcre2Group::Lookahead => GroupKind::Lookahead,
            Pcre2Group::NegativeLookahead => GroupKind::NegativeLookahead,
            Pcre2Group::Lookbehind => GroupKind::Lookbehind,
            Pcre2Group::NegativeLookbehind => GroupKind::NegativeLookbehind,
            Pcre2Group::NonAtomicLookahead => GroupKind::NonAtomicLookahead,
            Pcre2Group::NonAtomicLookbehind => GroupKind::NonAtomicLookbehind,
            Pcre2Group::ScriptRun => GroupKind::ScriptRun,
            Pcre2Group::AtomicScriptRun => GroupKind::AtomicScriptRun,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn longest_verb_wins() {
        assert_eq!(Verb::leading("CRLF)"), Some((Verb::Crlf, 4)));
        assert_eq!(Verb::leading("CR)"), Some((Verb::Cr, 2)));
        assert_eq!(Verb::leading("ANYCRLF)"), Some((Verb::AnyCrlf, 7)));
        assert_eq!(Verb::leading("NOTEMPTY_ATSTART)"), Some((Verb::NotEmptyAtStart, 16)));
        assert_eq!(Verb::leading("FOO)"), Some((Verb::Fail, 1)));
        assert_eq!(Verb::leading("foo)"), None);
        assert_eq!(Verb::leading(""), None);
    }

    #[test]
    fn verb_categories() {
        assert_eq!(Verb::Mark.directive(), Some(DirectiveKind::Mark));
        assert_eq!(Verb::Utf.directive(), None);
        assert_eq!(Verb::Nul.newline_mode(), Some(NewlineMode::NulCharacter));
        assert!(Verb::LimitHeap.is_limit());
        assert!(!Verb::NoJit.is_limit());
    }

    #[test]
    fn pcre2_group_names() {
        assert_eq!(
            Pcre2Group::leading("napla:a)"),
            Some((Pcre2Group::NonAtomicLookahead, 6))
        );
        assert_eq!(
            Pcre2Group::leading("atomic_script_run:a)"),
            Some((Pcre2Group::AtomicScriptRun, 18))
        );
        assert_eq!(Pcre2Group::leading("atomic)"), None);
        assert_eq!(Pcre2Group::Lookbehind.kind(), GroupKind::Lookbehind);
    }
}
