use rowan::{TextRange, TextSize};

use crate::ast::{
    AbsentFunction, AbsentFunctionKind, Condition, Conditional, Group, GroupKind, Located,
    MatchingOptionKind, MatchingOptionSequence, Node,
};
use crate::error::{Error, ParseError, Result};
use crate::options::SyntaxOptions;
use crate::parser::Parser;
use crate::parser::lexical::AbsentStart;

impl Parser<'_> {
    /// Branches and closing `)` of a conditional whose condition is lexed.
    pub(crate) fn parse_conditional_branches(
        &mut self,
        start: TextSize,
        condition: Condition,
    ) -> Result<Node> {
        let (true_branch, pipe, false_branch) = match self.parse_node()? {
            Node::Alternation(alt) => {
                let range = alt.range;
                let (lhs, pipe, rhs) = alt.into_pair().map_err(|count| {
                    Error::new(ParseError::TooManyBranchesInConditional(count), range)
                })?;
                (lhs, Some(pipe), rhs)
            }
            // A lone branch matches when the condition holds; otherwise nothing.
            child => {
                let empty = Node::Empty(TextRange::empty(self.src.position()));
                (child, None, empty)
            }
        };
        self.expect(')')?;
        Ok(Node::Conditional(Conditional {
            condition,
            true_branch: Box::new(true_branch),
            pipe,
            false_branch: Box::new(false_branch),
            range: self.src.range_from(start),
        }))
    }

    /// Applies the dialect-affecting parts of an option sequence.
    ///
    /// `is_scoped` is set for `(?x:...)` groups, whose changes are undone
    /// when the group closes.
    pub(crate) fn apply_syntax_options(
        &mut self,
        seq: &MatchingOptionSequence,
        is_scoped: bool,
    ) -> Result<()> {
        map_option(
            &mut self.context.syntax,
            seq,
            SyntaxOptions::NAMED_CAPTURES_ONLY,
            |kind| kind == MatchingOptionKind::NamedCapturesOnly,
        );

        // `x` and `xx` are treated alike.
        let is_extended = |kind| {
            matches!(
                kind,
                MatchingOptionKind::Extended | MatchingOptionKind::ExtraExtended
            )
        };
        if !is_scoped && self.context.is_multiline_literal() {
            if let Some(opt) = seq.removing.iter().find(|opt| is_extended(opt.kind)) {
                return self.error_at(ParseError::CannotRemoveExtendedSyntaxInMultilineMode, opt.range);
            }
            if let Some(caret) = seq.caret {
                return self.error_at(ParseError::CannotResetExtendedSyntaxInMultilineMode, caret);
            }
            // Adding `x` is a no-op here.
            return Ok(());
        }
        map_option(
            &mut self.context.syntax,
            seq,
            SyntaxOptions::EXTENDED_SYNTAX,
            is_extended,
        );
        Ok(())
    }

    /// Body and closing `)` of a group. Dialect changes made inside do not
    /// outlive it.
    pub(crate) fn parse_group_body(
        &mut self,
        start: TextSize,
        kind: Located<GroupKind>,
    ) -> Result<Group> {
        self.context.record_group(&kind.value);
        let outer_syntax = self.context.syntax;
        let group = self.parse_scoped_group_body(start, kind, outer_syntax);
        self.context.syntax = outer_syntax;
        group
    }

    fn parse_scoped_group_body(
        &mut self,
        start: TextSize,
        kind: Located<GroupKind>,
        outer_syntax: SyntaxOptions,
    ) -> Result<Group> {
        if let GroupKind::ChangeMatchingOptions(seq) = &kind.value {
            self.apply_syntax_options(seq, true)?;
        }
        let unsets_extended = outer_syntax.contains(SyntaxOptions::EXTENDED_SYNTAX)
            && !self.context.syntax.contains(SyntaxOptions::EXTENDED_SYNTAX);

        let child = self.parse_node()?;
        self.expect(')')?;
        let range = self.src.range_from(start);

        if unsets_extended
            && self.context.is_multiline_literal()
            && self.src.slice(child.range()).contains(['\n', '\r'])
        {
            return self.error_at(ParseError::UnsetExtendedSyntaxMayNotSpanMultipleLines, range);
        }
        Ok(Group {
            kind,
            child: Box::new(child),
            range,
        })
    }

    /// `(?~absent)`, `(?~|absent|expr)`, `(?~|absent)` or `(?~|)`.
    pub(crate) fn parse_absent_function_body(
        &mut self,
        start: Located<AbsentStart>,
    ) -> Result<AbsentFunction> {
        let kind = match start.value {
            AbsentStart::WithoutPipe => AbsentFunctionKind::Repeater(Box::new(self.parse_node()?)),
            AbsentStart::WithPipe if self.src.peek() == Some(')') => AbsentFunctionKind::Clearer,
            AbsentStart::WithPipe => match self.parse_node()? {
                Node::Alternation(alt) => {
                    let range = alt.range;
                    let (absentee, pipe, expr) = alt.into_pair().map_err(|count| {
                        Error::new(ParseError::TooManyAbsentExpressionChildren(count), range)
                    })?;
                    AbsentFunctionKind::Expression {
                        absentee: Box::new(absentee),
                        pipe,
                        expr: Box::new(expr),
                    }
                }
                child => AbsentFunctionKind::Stopper(Box::new(child)),
            },
        };
        self.expect(')')?;
        Ok(AbsentFunction {
            start: start.range,
            kind,
            range: self.src.range_from(start.range.start()),
        })
    }
}

fn map_option(
    syntax: &mut SyntaxOptions,
    seq: &MatchingOptionSequence,
    option: SyntaxOptions,
    pred: impl Fn(MatchingOptionKind) -> bool,
) {
    if seq.resets() {
        syntax.remove(option);
    }
    if seq.adding.iter().any(|opt| pred(opt.kind)) {
        syntax.insert(option);
    }
    if seq.removing.iter().any(|opt| pred(opt.kind)) {
        syntax.remove(option);
    }
}
