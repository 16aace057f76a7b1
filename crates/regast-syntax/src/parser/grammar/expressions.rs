use rowan::TextRange;

use crate::ast::{
    Alternation, AtomKind, Concatenation, Condition, ConditionKind, GlobalMatchingOptionSequence,
    Node, Quantification,
};
use crate::error::{ParseError, Result};
use crate::parser::Parser;

impl Parser<'_> {
    /// Leading `(*...)` options. The last newline mode applies to the rest
    /// of the pattern.
    pub(crate) fn parse_global_options(&mut self) -> Result<Option<GlobalMatchingOptionSequence>> {
        let options = self.lex_global_matching_option_sequence()?;
        if let Some(mode) = options.as_ref().and_then(|opts| opts.newline_mode()) {
            self.context.newline_mode = mode;
        }
        Ok(options)
    }

    /// An alternation, a single concatenation, or nothing.
    pub(crate) fn parse_node(&mut self) -> Result<Node> {
        self.enter_recursion()?;
        let node = self.parse_alternation();
        self.exit_recursion();
        node
    }

    fn parse_alternation(&mut self) -> Result<Node> {
        let start = self.src.position();
        if self.src.is_empty() {
            return Ok(Node::Empty(TextRange::empty(start)));
        }

        let mut children = vec![self.parse_concatenation()?];
        let mut pipes = Vec::new();
        while let Some(pipe) = self.try_eat_located('|') {
            pipes.push(pipe);
            children.push(self.parse_concatenation()?);
        }

        if pipes.is_empty() {
            return Ok(children.remove(0));
        }
        Ok(Node::Alternation(Alternation {
            children,
            pipes,
            range: self.src.range_from(start),
        }))
    }

    /// Stops before `|` or `)` without consuming it.
    fn parse_concatenation(&mut self) -> Result<Node> {
        let start = self.src.position();
        let mut children = Vec::new();

        loop {
            // Before `|` and `)` too, so a marked one never ends the branch.
            self.reject_confusable()?;
            if self.src.is_empty() || matches!(self.src.peek(), Some('|' | ')')) {
                break;
            }
            let item_start = self.src.position();

            if let Some(trivia) = self.lex_trivia()? {
                children.push(Node::Trivia(trivia));
                continue;
            }
            if let Some(quote) = self.lex_quote()? {
                children.push(Node::Quote(quote));
                continue;
            }
            if let Some(interpolation) = self.lex_interpolation()? {
                return self.error_at(
                    ParseError::Unsupported("interpolation".to_string()),
                    interpolation.range,
                );
            }

            let Some(operand) = self.parse_quantifier_operand()? else {
                break;
            };
            self.reject_confusable()?;
            let Some(quantifier) = self.lex_quantifier()? else {
                children.push(operand);
                continue;
            };
            if !operand.is_quantifiable() {
                let range = quantifier.amount.range.cover(quantifier.kind.range);
                return self.error_at(ParseError::NotQuantifiable, range);
            }
            children.push(Node::Quantification(Quantification {
                amount: quantifier.amount,
                kind: quantifier.kind,
                child: Box::new(operand),
                trivia: quantifier.trivia,
                range: self.src.range_from(item_start),
            }));
        }

        match children.len() {
            0 => Ok(Node::Empty(self.src.range_from(start))),
            1 => Ok(children.remove(0)),
            _ => Ok(Node::Concatenation(Concatenation {
                children,
                range: self.src.range_from(start),
            })),
        }
    }

    fn parse_quantifier_operand(&mut self) -> Result<Option<Node>> {
        let start = self.src.position();

        if let Some(condition) = self.lex_known_conditional_start()? {
            return self.parse_conditional_branches(start, condition).map(Some);
        }
        if let Some(kind) = self.lex_group_conditional_start()? {
            let group = self.parse_group_body(kind.range.start(), kind)?;
            let condition = Condition {
                range: group.range,
                kind: ConditionKind::Group(Box::new(group)),
            };
            return self.parse_conditional_branches(start, condition).map(Some);
        }

        if let Some(absent) = self.lex_absent_function_start() {
            let function = self.parse_absent_function_body(absent)?;
            return Ok(Some(Node::AbsentFunction(function)));
        }
        if let Some(kind) = self.lex_group_start()? {
            let group = self.parse_group_body(start, kind)?;
            return Ok(Some(Node::Group(group)));
        }
        if let Some(class_start) = self.lex_custom_class_start() {
            let class = self.parse_custom_class(class_start)?;
            return Ok(Some(Node::CustomCharacterClass(class)));
        }

        let Some(atom) = self.lex_atom()? else {
            return Ok(None);
        };
        // Scoped changes are handled by the group; this one runs to its end.
        if let AtomKind::ChangeMatchingOptions(seq) = &atom.kind {
            self.apply_syntax_options(seq, false)?;
        }
        Ok(Some(Node::Atom(atom)))
    }
}
