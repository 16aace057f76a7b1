//! Test utilities: parse helpers and an indented AST dump for snapshots.

use std::fmt::Write;

use crate::ast::{
    AbsentFunctionKind, Amount, Ast, Atom, AtomKind, Callout, CalloutArgument, ClassMember,
    ClassStart, ConditionKind, CustomCharacterClass, GroupKind, MatchingOptionSequence, Node,
    QuantKind, Reference, ReferenceKind, SetOp,
};
use crate::error::Error;
use crate::options::SyntaxOptions;
use crate::parser::Parser;

pub fn parse_ok(pattern: &str) -> Ast {
    parse_ok_with(pattern, SyntaxOptions::TRADITIONAL)
}

pub fn parse_ok_with(pattern: &str, syntax: SyntaxOptions) -> Ast {
    match Parser::new(pattern, syntax).parse() {
        Ok(ast) => ast,
        Err(err) => panic!("expected {pattern:?} to parse, got {err} at {:?}", err.range),
    }
}

pub fn parse_err(pattern: &str) -> Error {
    parse_err_with(pattern, SyntaxOptions::TRADITIONAL)
}

pub fn parse_err_with(pattern: &str, syntax: SyntaxOptions) -> Error {
    match Parser::new(pattern, syntax).parse() {
        Ok(ast) => panic!("expected {pattern:?} to fail, got {:#?}", ast.root),
        Err(err) => err,
    }
}

/// Parses with the traditional dialect and dumps the tree.
pub fn dump(pattern: &str) -> String {
    dump_ast(&parse_ok(pattern))
}

pub fn dump_with(pattern: &str, syntax: SyntaxOptions) -> String {
    dump_ast(&parse_ok_with(pattern, syntax))
}

pub fn dump_ast(ast: &Ast) -> String {
    let mut out = String::new();
    if let Some(global) = &ast.global_options {
        for opt in &global.options {
            line(&mut out, 0, &format!("Global {:?}", opt.kind));
        }
    }
    dump_node(&mut out, &ast.root, 0);
    out
}

fn line(out: &mut String, depth: usize, text: &str) {
    let _ = writeln!(out, "{:indent$}{text}", "", indent = depth * 2);
}

fn dump_node(out: &mut String, node: &Node, depth: usize) {
    match node {
        Node::Empty(_) => line(out, depth, "Empty"),
        Node::Alternation(alt) => {
            line(out, depth, "Alternation");
            for child in &alt.children {
                dump_node(out, child, depth + 1);
            }
        }
        Node::Concatenation(concat) => {
            line(out, depth, "Concatenation");
            for child in &concat.children {
                dump_node(out, child, depth + 1);
            }
        }
        Node::Group(group) => {
            line(out, depth, &format!("Group {}", group_label(&group.kind.value)));
            dump_node(out, &group.child, depth + 1);
        }
        Node::Conditional(cond) => {
            let label = match &cond.condition.kind {
                ConditionKind::GroupMatched(r) => format!("GroupMatched {}", reference_label(r)),
                ConditionKind::RecursionCheck => "RecursionCheck".to_string(),
                ConditionKind::GroupRecursionCheck(r) => {
                    format!("GroupRecursionCheck {}", reference_label(r))
                }
                ConditionKind::DefineGroup => "Define".to_string(),
                ConditionKind::PcreVersionCheck(v) => {
                    format!("Version {:?} {}.{}", v.kind.value, v.major.value, v.minor.value)
                }
                ConditionKind::Group(_) => "Group".to_string(),
            };
            line(out, depth, &format!("Conditional {label}"));
            if let ConditionKind::Group(group) = &cond.condition.kind {
                dump_node(out, &Node::Group((**group).clone()), depth + 1);
            }
            dump_node(out, &cond.true_branch, depth + 1);
            dump_node(out, &cond.false_branch, depth + 1);
        }
        Node::Quantification(quant) => {
            let amount = match quant.amount.value {
                Amount::ZeroOrMore => "*".to_string(),
                Amount::OneOrMore => "+".to_string(),
                Amount::ZeroOrOne => "?".to_string(),
                Amount::Exactly(n) => format!("{{{}}}", n.value),
                Amount::NOrMore(n) => format!("{{{},}}", n.value),
                Amount::UpToN(n) => format!("{{,{}}}", n.value),
                Amount::Range(n, m) => format!("{{{},{}}}", n.value, m.value),
            };
            let kind = match quant.kind.value {
                QuantKind::Eager => "eager",
                QuantKind::Reluctant => "reluctant",
                QuantKind::Possessive => "possessive",
            };
            line(out, depth, &format!("Quantification {amount} {kind}"));
            dump_node(out, &quant.child, depth + 1);
        }
        Node::Atom(atom) => line(out, depth, &format!("Atom {}", atom_label(atom))),
        Node::CustomCharacterClass(class) => dump_class(out, class, depth),
        Node::Quote(quote) => line(out, depth, &format!("Quote {:?}", quote.literal)),
        Node::Trivia(trivia) => line(out, depth, &format!("Trivia {:?}", trivia.contents)),
        Node::AbsentFunction(absent) => match &absent.kind {
            AbsentFunctionKind::Repeater(child) => {
                line(out, depth, "AbsentFunction Repeater");
                dump_node(out, child, depth + 1);
            }
            AbsentFunctionKind::Stopper(child) => {
                line(out, depth, "AbsentFunction Stopper");
                dump_node(out, child, depth + 1);
            }
            AbsentFunctionKind::Expression { absentee, expr, .. } => {
                line(out, depth, "AbsentFunction Expression");
                dump_node(out, absentee, depth + 1);
                dump_node(out, expr, depth + 1);
            }
            AbsentFunctionKind::Clearer => line(out, depth, "AbsentFunction Clearer"),
        },
    }
}

fn dump_class(out: &mut String, class: &CustomCharacterClass, depth: usize) {
    let label = match class.start.value {
        ClassStart::Normal => "CustomClass",
        ClassStart::Inverted => "CustomClass ^",
    };
    line(out, depth, label);
    for member in &class.members {
        dump_member(out, member, depth + 1);
    }
}

fn dump_member(out: &mut String, member: &ClassMember, depth: usize) {
    match member {
        ClassMember::Custom(class) => dump_class(out, class, depth),
        ClassMember::Range(range) => {
            line(out, depth, "Range");
            line(out, depth + 1, &format!("Atom {}", atom_label(&range.lhs)));
            line(out, depth + 1, &format!("Atom {}", atom_label(&range.rhs)));
        }
        ClassMember::Atom(atom) => line(out, depth, &format!("Atom {}", atom_label(atom))),
        ClassMember::Quote(quote) => line(out, depth, &format!("Quote {:?}", quote.literal)),
        ClassMember::Trivia(trivia) => line(out, depth, &format!("Trivia {:?}", trivia.contents)),
        ClassMember::SetOperation { lhs, op, rhs } => {
            let op = match op.value {
                SetOp::Subtraction => "--",
                SetOp::Intersection => "&&",
                SetOp::SymmetricDifference => "~~",
            };
            line(out, depth, &format!("SetOperation {op}"));
            line(out, depth + 1, "Lhs");
            for m in lhs {
                dump_member(out, m, depth + 2);
            }
            line(out, depth + 1, "Rhs");
            for m in rhs {
                dump_member(out, m, depth + 2);
            }
        }
    }
}

fn group_label(kind: &GroupKind) -> String {
    match kind {
        GroupKind::Capture => "Capture".to_string(),
        GroupKind::NamedCapture(name) => format!("NamedCapture {}", name.value),
        GroupKind::BalancedCapture(b) => {
            let name = b.name.as_ref().map_or("", |n| n.value.as_str());
            format!("BalancedCapture {name}-{}", b.prior_name.value)
        }
        GroupKind::ChangeMatchingOptions(seq) => format!("Options {}", options_label(seq)),
        other => format!("{other:?}"),
    }
}

fn options_label(seq: &MatchingOptionSequence) -> String {
    let mut s = String::new();
    if seq.caret.is_some() {
        s.push('^');
    }
    for opt in &seq.adding {
        s.push_str(opt.kind.spelling());
    }
    if seq.minus.is_some() {
        s.push('-');
    }
    for opt in &seq.removing {
        s.push_str(opt.kind.spelling());
    }
    s
}

fn reference_label(reference: &Reference) -> String {
    let mut s = match &reference.kind {
        ReferenceKind::Absolute(n) => n.value.to_string(),
        ReferenceKind::Relative(n) => format!("{:+}", n.value),
        ReferenceKind::Named(name) => name.clone(),
        ReferenceKind::RecurseWholePattern(_) => "R".to_string(),
    };
    if let Some(level) = reference.recursion_level {
        let _ = write!(s, " level {:+}", level.value);
    }
    s
}

fn atom_label(atom: &Atom) -> String {
    match &atom.kind {
        AtomKind::Char(c) => format!("Char {c:?}"),
        AtomKind::Scalar(s) => format!("Scalar U+{:04X}", s.value as u32),
        AtomKind::ScalarSequence(seq) => {
            let scalars: Vec<_> = seq
                .scalars
                .iter()
                .map(|s| format!("U+{:04X}", s.value as u32))
                .collect();
            format!("ScalarSequence {}", scalars.join(" "))
        }
        AtomKind::Property(prop) => {
            let mut s = format!("Property {:?}", prop.kind);
            if prop.is_inverted {
                s.push_str(" inverted");
            }
            if prop.is_posix {
                s.push_str(" posix");
            }
            s
        }
        AtomKind::Escaped(e) => format!("Escaped {e:?}"),
        AtomKind::KeyboardControl(c) => format!("KeyboardControl {c:?}"),
        AtomKind::KeyboardMeta(c) => format!("KeyboardMeta {c:?}"),
        AtomKind::KeyboardMetaControl(c) => format!("KeyboardMetaControl {c:?}"),
        AtomKind::NamedCharacter(name) => format!("NamedCharacter {name}"),
        AtomKind::Any => "Any".to_string(),
        AtomKind::StartOfLine => "StartOfLine".to_string(),
        AtomKind::EndOfLine => "EndOfLine".to_string(),
        AtomKind::Backreference(r) => format!("Backreference {}", reference_label(r)),
        AtomKind::Subpattern(r) => format!("Subpattern {}", reference_label(r)),
        AtomKind::Callout(callout) => match callout {
            Callout::Pcre(arg) => match &arg.value {
                CalloutArgument::Number(n) => format!("Callout C{n}"),
                CalloutArgument::String(s) => format!("Callout C{s:?}"),
            },
            Callout::OnigurumaNamed { name, .. } => format!("Callout {}", name.value),
            Callout::OnigurumaOfContents {
                contents,
                direction,
                ..
            } => format!("Callout {{{}}} {:?}", contents.value, direction.value),
        },
        AtomKind::BacktrackingDirective(d) => match &d.name {
            Some(name) => format!("Directive {:?}:{}", d.kind.value, name.value),
            None => format!("Directive {:?}", d.kind.value),
        },
        AtomKind::ChangeMatchingOptions(seq) => format!("Options {}", options_label(seq)),
    }
}
