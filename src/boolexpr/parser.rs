use super::{Node, ParseError, MAX_DEPTH};

/// Result of splitting an expression on the spaces outside parentheses.
#[derive(Debug, PartialEq, Eq)]
enum Split<'a> {
    Empty,
    Unary(&'a str),
    Binary {
        left: &'a str,
        operator: &'a str,
        right: &'a str,
    },
}

pub(super) fn build_tree(expression: &str, depth: usize) -> Result<Node, ParseError> {
    if depth > MAX_DEPTH {
        return Err(ParseError::TooDeep { limit: MAX_DEPTH });
    }

    match split_expression(expression)? {
        Split::Empty => Ok(Node::Literal(String::new())),
        // `()` and `( )` hold nothing to decide
        Split::Unary(token) if token.trim().is_empty() => Err(ParseError::MissingOperand {
            expression: expression.trim().to_string(),
        }),
        // surrounding blanks or a layer of parentheses were dropped, start over
        Split::Unary(token) if token != expression => build_tree(token, depth + 1),
        Split::Unary(_) => build_unary(expression, depth),
        Split::Binary {
            left,
            operator,
            right,
        } => build_binary(left, operator, right, depth),
    }
}

fn build_unary(expression: &str, depth: usize) -> Result<Node, ParseError> {
    match expression.strip_prefix('!') {
        Some(operand) => {
            let operand = build_tree(operand, depth + 1)
                .map_err(|e| ParseError::Negation(Box::new(e)))?;
            Ok(Node::Not(Box::new(operand)))
        }
        None => Ok(Node::Literal(expression.to_string())),
    }
}

fn build_binary(left: &str, operator: &str, right: &str, depth: usize) -> Result<Node, ParseError> {
    if right.trim().is_empty() {
        return Err(ParseError::MissingOperand {
            expression: format!("{left} {operator} {right}"),
        });
    }

    let left = build_tree(left, depth + 1).map_err(|e| ParseError::Left(Box::new(e)))?;
    let right = build_tree(right, depth + 1).map_err(|e| ParseError::Right(Box::new(e)))?;

    match operator {
        "&&" => Ok(Node::And(Box::new(left), Box::new(right))),
        "||" => Ok(Node::Or(Box::new(left), Box::new(right))),
        _ => Err(ParseError::InvalidOperator {
            operator: operator.to_string(),
        }),
    }
}

/// Splits on spaces at parenthesis depth zero, stopping after the second
/// such token: everything past it is returned verbatim as the right operand,
/// which makes binary operators group to the right.
///
/// Operands of a binary split keep their parentheses; `build_tree` strips
/// them when it descends, so an empty `()` operand is reported as written.
/// A lone token comes back with one wrapping pair removed.
fn split_expression(expression: &str) -> Result<Split<'_>, ParseError> {
    let unbalanced = || ParseError::UnbalancedParentheses {
        expression: expression.to_string(),
    };

    let mut parts: Vec<&str> = Vec::with_capacity(2);
    let mut start: Option<usize> = None;
    let mut depth = 0usize;

    // only ASCII bytes are inspected, so every index is a char boundary
    for (i, byte) in expression.bytes().enumerate() {
        match byte {
            b' ' if depth == 0 => {
                let Some(token_start) = start.take() else {
                    continue;
                };
                parts.push(&expression[token_start..i]);

                if let [left, operator] = parts[..] {
                    return Ok(Split::Binary {
                        left,
                        operator,
                        right: &expression[i + 1..],
                    });
                }
            }
            b'(' => {
                depth += 1;
                start.get_or_insert(i);
            }
            b')' => {
                depth = depth.checked_sub(1).ok_or_else(unbalanced)?;
                start.get_or_insert(i);
            }
            _ => {
                start.get_or_insert(i);
            }
        }
    }

    if depth != 0 {
        return Err(unbalanced());
    }
    if let Some(token_start) = start {
        parts.push(&expression[token_start..]);
    }

    match parts[..] {
        [] => Ok(Split::Empty),
        [token] => Ok(Split::Unary(strip_wrapping_parentheses(token))),
        _ => Err(ParseError::MissingOperand {
            expression: expression.to_string(),
        }),
    }
}

/// Removes one pair of parentheses when the opening one is closed by the
/// last character, e.g. `(a && b)` but not `(a) && (b)`.
fn strip_wrapping_parentheses(token: &str) -> &str {
    let Some(inner) = token.strip_prefix('(').and_then(|t| t.strip_suffix(')')) else {
        return token;
    };

    let mut depth = 0usize;
    for byte in inner.bytes() {
        match byte {
            b'(' => depth += 1,
            b')' => match depth.checked_sub(1) {
                Some(d) => depth = d,
                // the opening parenthesis closed early
                None => return token,
            },
            _ => {}
        }
    }

    if depth == 0 {
        inner
    } else {
        token
    }
}
