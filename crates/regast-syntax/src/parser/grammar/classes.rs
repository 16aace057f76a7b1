use crate::ast::{
    Atom, AtomKind, ClassMember, ClassRange, ClassStart, CustomCharacterClass, Located,
};
use crate::error::{ParseError, Result};
use crate::parser::Parser;

impl Parser<'_> {
    /// Members and closing `]` of a class whose opener is lexed.
    ///
    /// Set operators fold left to right: `[a--b&&c]` is `[[a--b]&&c]`.
    pub(crate) fn parse_custom_class(
        &mut self,
        start: Located<ClassStart>,
    ) -> Result<CustomCharacterClass> {
        self.enter_recursion()?;
        let was_in_class = self.context.in_custom_class;
        self.context.in_custom_class = true;
        let class = self.parse_custom_class_body(start);
        self.context.in_custom_class = was_in_class;
        self.exit_recursion();
        class
    }

    fn parse_custom_class_body(&mut self, start: Located<ClassStart>) -> Result<CustomCharacterClass> {
        let mut members = Vec::new();
        self.parse_class_members(&mut members, true)?;

        while let Some(op) = self.lex_set_op() {
            let mut rhs = Vec::new();
            self.parse_class_members(&mut rhs, false)?;
            if !has_semantic_member(&members) || !has_semantic_member(&rhs) {
                return self.error_at(ParseError::ExpectedCustomCharacterClassMembers, start.range);
            }
            let lhs = std::mem::take(&mut members);
            members.push(ClassMember::SetOperation { lhs, op, rhs });
        }
        if !has_semantic_member(&members) {
            return self.error_at(ParseError::ExpectedCustomCharacterClassMembers, start.range);
        }

        self.expect(']')?;
        Ok(CustomCharacterClass {
            start,
            members,
            range: self.src.range_from(start.range.start()),
        })
    }

    /// Members up to `]`, a set operator or the end of input.
    fn parse_class_members(&mut self, members: &mut Vec<ClassMember>, leading: bool) -> Result<()> {
        let mut leading = leading;
        while let Some(member) = self.parse_class_member(leading)? {
            leading = false;
            let ClassMember::Atom(lhs) = member else {
                members.push(member);
                continue;
            };

            let mut trivia = Vec::new();
            while let Some(t) = self.lex_trivia()? {
                trivia.push(t);
            }
            let Some(dash) = self.lex_class_range_operator() else {
                members.push(ClassMember::Atom(lhs));
                members.extend(trivia.into_iter().map(ClassMember::Trivia));
                continue;
            };
            let mut rhs_trivia = Vec::new();
            while let Some(t) = self.lex_trivia()? {
                rhs_trivia.push(t);
            }

            match self.parse_class_member(false)? {
                Some(ClassMember::Atom(rhs)) => {
                    trivia.extend(rhs_trivia);
                    members.push(ClassMember::Range(ClassRange {
                        lhs,
                        dash,
                        rhs,
                        trivia,
                    }));
                }
                // No range after all; the dash is literal, as in `[a-]`.
                other => {
                    members.push(ClassMember::Atom(lhs));
                    members.extend(trivia.into_iter().map(ClassMember::Trivia));
                    members.push(ClassMember::Atom(Atom::new(AtomKind::Char('-'), dash)));
                    members.extend(rhs_trivia.into_iter().map(ClassMember::Trivia));
                    members.extend(other);
                }
            }
        }
        Ok(())
    }

    fn parse_class_member(&mut self, leading: bool) -> Result<Option<ClassMember>> {
        self.reject_confusable()?;
        // `[]a]` contains `]`.
        if leading && let Some(range) = self.try_eat_located(']') {
            return Ok(Some(ClassMember::Atom(Atom::new(AtomKind::Char(']'), range))));
        }
        if self.src.is_empty() || self.src.peek() == Some(']') || self.peek_set_op().is_some() {
            return Ok(None);
        }

        if let Some(start) = self.lex_custom_class_start() {
            return Ok(Some(ClassMember::Custom(self.parse_custom_class(start)?)));
        }
        if let Some(quote) = self.lex_quote()? {
            return Ok(Some(ClassMember::Quote(quote)));
        }
        if let Some(trivia) = self.lex_trivia()? {
            return Ok(Some(ClassMember::Trivia(trivia)));
        }
        Ok(self.lex_atom()?.map(ClassMember::Atom))
    }
}

fn has_semantic_member(members: &[ClassMember]) -> bool {
    members.iter().any(ClassMember::is_semantic)
}
