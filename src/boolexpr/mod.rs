//! A small boolean expression language used to decide compound license
//! expressions such as `MIT || (Apache-2.0 && !GPL-3.0)`.
//!
//! ```
//! use std::collections::HashMap;
//! use license_checker::boolexpr::Node;
//!
//! let tree = Node::parse("T && (T || F)").unwrap();
//! assert!(tree.solve(&HashMap::<String, bool>::new()).unwrap());
//! ```

use std::fmt;

pub mod error;
mod parser;
mod solver;

pub use error::{EvalError, ParseError};
pub use solver::{parse_bool_literal, Context, FALSE_LITERALS, TRUE_LITERALS};

/// Maximum depth of the expression tree accepted by the parser and the solver.
///
/// Every `&&` or `||` puts its right operand one level further down, so a
/// flat chain of terms counts toward the limit as well as parentheses and `!`.
pub const MAX_DEPTH: usize = 256;

/// The logical role of a node in an expression tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Literal,
    Not,
    And,
    Or,
}

/// A node of a parsed expression. The root exclusively owns its subtree and
/// nothing is mutated once the tree is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A boolean constant or a variable name, kept as written.
    Literal(String),
    Not(Box<Node>),
    And(Box<Node>, Box<Node>),
    Or(Box<Node>, Box<Node>),
}

impl Node {
    /// Builds an expression tree from `expression`.
    ///
    /// Binary operators group to the right: `a && b || c` is read as
    /// `a && (b || c)`. Use parentheses for any other grouping.
    pub fn parse(expression: &str) -> Result<Self, ParseError> {
        log::trace!("parsing expression '{expression}'");
        parser::build_tree(expression, 0)
    }

    pub fn operator(&self) -> Operator {
        match self {
            Self::Literal(_) => Operator::Literal,
            Self::Not(_) => Operator::Not,
            Self::And(..) => Operator::And,
            Self::Or(..) => Operator::Or,
        }
    }

    /// The only child of a `Not`, or the left side of `And`/`Or`.
    pub fn left(&self) -> Option<&Self> {
        match self {
            Self::Literal(_) => None,
            Self::Not(operand) => Some(operand),
            Self::And(left, _) | Self::Or(left, _) => Some(left),
        }
    }

    pub fn right(&self) -> Option<&Self> {
        match self {
            Self::And(_, right) | Self::Or(_, right) => Some(right),
            Self::Literal(_) | Self::Not(_) => None,
        }
    }

    /// The source text of a literal; empty for every other node.
    pub fn raw_text(&self) -> &str {
        match self {
            Self::Literal(text) => text,
            _ => "",
        }
    }

    /// Names of all literals that are not boolean constants, left to right.
    pub fn variables(&self) -> Vec<&str> {
        let mut names = Vec::new();
        self.collect_variables(&mut names);
        names
    }

    fn collect_variables<'a>(&'a self, names: &mut Vec<&'a str>) {
        match self {
            Self::Literal(text) => {
                if parse_bool_literal(text).is_none() && !names.contains(&text.as_str()) {
                    names.push(text);
                }
            }
            Self::Not(operand) => operand.collect_variables(names),
            Self::And(left, right) | Self::Or(left, right) => {
                left.collect_variables(names);
                right.collect_variables(names);
            }
        }
    }
}

/// Renders the tree fully parenthesized, so the grouping chosen by the
/// parser is visible.
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(text) => write!(f, "{text}"),
            Self::Not(operand) => write!(f, "!{operand}"),
            Self::And(left, right) => write!(f, "({left} && {right})"),
            Self::Or(left, right) => write!(f, "({left} || {right})"),
        }
    }
}
