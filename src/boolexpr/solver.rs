use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use indexmap::IndexMap;

use super::{EvalError, Node, MAX_DEPTH};

/// Spellings read as `true`, compared ASCII case-insensitively.
pub const TRUE_LITERALS: &[&str] = &["true", "t", "1"];
/// Spellings read as `false`, compared ASCII case-insensitively.
pub const FALSE_LITERALS: &[&str] = &["false", "f", "0"];

/// Variable values a tree is solved against. Names are case-sensitive.
pub trait Context {
    fn lookup(&self, name: &str) -> Option<bool>;
}

impl<S: BuildHasher> Context for HashMap<String, bool, S> {
    fn lookup(&self, name: &str) -> Option<bool> {
        self.get(name).copied()
    }
}

impl Context for BTreeMap<String, bool> {
    fn lookup(&self, name: &str) -> Option<bool> {
        self.get(name).copied()
    }
}

impl<S: BuildHasher> Context for IndexMap<String, bool, S> {
    fn lookup(&self, name: &str) -> Option<bool> {
        self.get(name).copied()
    }
}

pub fn parse_bool_literal(text: &str) -> Option<bool> {
    if TRUE_LITERALS.iter().any(|l| l.eq_ignore_ascii_case(text)) {
        Some(true)
    } else if FALSE_LITERALS.iter().any(|l| l.eq_ignore_ascii_case(text)) {
        Some(false)
    } else {
        None
    }
}

impl Node {
    /// Reduces the tree to a boolean. Both sides of `&&` and `||` are always
    /// solved, so an unknown variable is reported even when the other side
    /// already decides the result.
    pub fn solve<C: Context + ?Sized>(&self, context: &C) -> Result<bool, EvalError> {
        self.solve_at(context, 0)
    }

    fn solve_at<C: Context + ?Sized>(&self, context: &C, depth: usize) -> Result<bool, EvalError> {
        if depth > MAX_DEPTH {
            return Err(EvalError::Internal {
                message: format!("expression nests deeper than {MAX_DEPTH} levels"),
            });
        }

        match self {
            Self::Literal(text) => value(text, context),
            Self::Not(operand) => operand
                .solve_at(context, depth + 1)
                .map(|v| !v)
                .map_err(|e| EvalError::Negation(Box::new(e))),
            Self::And(left, right) => {
                let (left, right) = solve_both(left, right, context, depth)?;
                Ok(left && right)
            }
            Self::Or(left, right) => {
                let (left, right) = solve_both(left, right, context, depth)?;
                Ok(left || right)
            }
        }
    }
}

fn solve_both<C: Context + ?Sized>(
    left: &Node,
    right: &Node,
    context: &C,
    depth: usize,
) -> Result<(bool, bool), EvalError> {
    let left = left.solve_at(context, depth + 1);
    let right = right.solve_at(context, depth + 1);

    let left = left.map_err(|e| EvalError::Left(Box::new(e)))?;
    let right = right.map_err(|e| EvalError::Right(Box::new(e)))?;
    Ok((left, right))
}

fn value<C: Context + ?Sized>(text: &str, context: &C) -> Result<bool, EvalError> {
    parse_bool_literal(text)
        .or_else(|| context.lookup(text))
        .ok_or_else(|| EvalError::UnknownVariable { name: text.to_string() })
}
