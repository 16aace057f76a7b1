//! AST Visitor pattern.
//!
//! Implement `Visitor` for a pass and override the `visit_*` methods it cares
//! about. Call the matching `walk_*` inside an override to keep descending.
//!
//! ```ignore
//! impl Visitor for MyPass {
//!     fn visit_group(&mut self, group: &Group) {
//!         // Pre-order logic
//!         walk_group(self, group);
//!         // Post-order logic
//!     }
//! }
//! ```

use super::{
    AbsentFunction, AbsentFunctionKind, Alternation, Atom, ClassMember, ClassRange, Concatenation,
    Condition, ConditionKind, Conditional, CustomCharacterClass, Group, Node, Quantification,
    Quote, Trivia,
};

pub trait Visitor: Sized {
    fn visit_node(&mut self, node: &Node) {
        walk_node(self, node);
    }

    fn visit_alternation(&mut self, alt: &Alternation) {
        walk_alternation(self, alt);
    }

    fn visit_concatenation(&mut self, concat: &Concatenation) {
        walk_concatenation(self, concat);
    }

    fn visit_group(&mut self, group: &Group) {
        walk_group(self, group);
    }

    fn visit_conditional(&mut self, cond: &Conditional) {
        walk_conditional(self, cond);
    }

    fn visit_condition(&mut self, condition: &Condition) {
        walk_condition(self, condition);
    }

    fn visit_quantification(&mut self, quant: &Quantification) {
        walk_quantification(self, quant);
    }

    fn visit_atom(&mut self, _atom: &Atom) {
        // Leaf node
    }

    fn visit_custom_class(&mut self, class: &CustomCharacterClass) {
        walk_custom_class(self, class);
    }

    fn visit_class_member(&mut self, member: &ClassMember) {
        walk_class_member(self, member);
    }

    fn visit_class_range(&mut self, range: &ClassRange) {
        walk_class_range(self, range);
    }

    fn visit_quote(&mut self, _quote: &Quote) {}

    fn visit_trivia(&mut self, _trivia: &Trivia) {}

    fn visit_absent_function(&mut self, absent: &AbsentFunction) {
        walk_absent_function(self, absent);
    }
}

pub fn walk_node<V: Visitor>(visitor: &mut V, node: &Node) {
    match node {
        Node::Alternation(n) => visitor.visit_alternation(n),
        Node::Concatenation(n) => visitor.visit_concatenation(n),
        Node::Group(n) => visitor.visit_group(n),
        Node::Conditional(n) => visitor.visit_conditional(n),
        Node::Quantification(n) => visitor.visit_quantification(n),
        Node::Atom(n) => visitor.visit_atom(n),
        Node::CustomCharacterClass(n) => visitor.visit_custom_class(n),
        Node::Quote(n) => visitor.visit_quote(n),
        Node::Trivia(n) => visitor.visit_trivia(n),
        Node::AbsentFunction(n) => visitor.visit_absent_function(n),
        Node::Empty(_) => {}
    }
}

pub fn walk_alternation<V: Visitor>(visitor: &mut V, alt: &Alternation) {
    for child in &alt.children {
        visitor.visit_node(child);
    }
}

pub fn walk_concatenation<V: Visitor>(visitor: &mut V, concat: &Concatenation) {
    for child in &concat.children {
        visitor.visit_node(child);
    }
}

pub fn walk_group<V: Visitor>(visitor: &mut V, group: &Group) {
    visitor.visit_node(&group.child);
}

pub fn walk_conditional<V: Visitor>(visitor: &mut V, cond: &Conditional) {
    visitor.visit_condition(&cond.condition);
    visitor.visit_node(&cond.true_branch);
    visitor.visit_node(&cond.false_branch);
}

pub fn walk_condition<V: Visitor>(visitor: &mut V, condition: &Condition) {
    if let ConditionKind::Group(group) = &condition.kind {
        visitor.visit_group(group);
    }
}

pub fn walk_quantification<V: Visitor>(visitor: &mut V, quant: &Quantification) {
    visitor.visit_node(&quant.child);
    for trivia in &quant.trivia {
        visitor.visit_trivia(trivia);
    }
}

pub fn walk_custom_class<V: Visitor>(visitor: &mut V, class: &CustomCharacterClass) {
    for member in &class.members {
        visitor.visit_class_member(member);
    }
}

pub fn walk_class_member<V: Visitor>(visitor: &mut V, member: &ClassMember) {
    match member {
        ClassMember::Custom(c) => visitor.visit_custom_class(c),
        ClassMember::Range(r) => visitor.visit_class_range(r),
        ClassMember::Atom(a) => visitor.visit_atom(a),
        ClassMember::Quote(q) => visitor.visit_quote(q),
        ClassMember::Trivia(t) => visitor.visit_trivia(t),
        ClassMember::SetOperation { lhs, rhs, .. } => {
            for m in lhs.iter().chain(rhs) {
                visitor.visit_class_member(m);
            }
        }
    }
}

pub fn walk_class_range<V: Visitor>(visitor: &mut V, range: &ClassRange) {
    visitor.visit_atom(&range.lhs);
    visitor.visit_atom(&range.rhs);
}

pub fn walk_absent_function<V: Visitor>(visitor: &mut V, absent: &AbsentFunction) {
    match &absent.kind {
        AbsentFunctionKind::Repeater(n) | AbsentFunctionKind::Stopper(n) => visitor.visit_node(n),
        AbsentFunctionKind::Expression { absentee, expr, .. } => {
            visitor.visit_node(absentee);
            visitor.visit_node(expr);
        }
        AbsentFunctionKind::Clearer => {}
    }
}
