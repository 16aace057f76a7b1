//! Grammar productions for regex patterns.
//!
//! This module implements all `parse_*` methods as an extension of `Parser`.
//!
//! ```text
//! Regex          := GlobalMatchingOption* Node
//! Node           := '' | Concatenation ('|' Concatenation)*
//! Concatenation  := (Trivia | Quote | Operand Quantifier?)*
//! Operand        := Conditional | AbsentFunction | Group | CustomClass | Atom
//! CustomClass    := Start Member+ (SetOp Member+)* ']'
//! ```

mod classes;
mod expressions;
mod groups;
