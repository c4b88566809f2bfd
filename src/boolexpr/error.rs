/// Returned when an expression cannot be split into a unary or binary form.
///
/// Failures inside a sub-expression are wrapped in [`ParseError::Left`],
/// [`ParseError::Right`] or [`ParseError::Negation`]; use
/// [`ParseError::root_cause`] to get at the underlying failure.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("invalid operator '{operator}'")]
    InvalidOperator { operator: String },

    #[error("missing operand in '{expression}'")]
    MissingOperand { expression: String },

    #[error("unbalanced parentheses in '{expression}'")]
    UnbalancedParentheses { expression: String },

    #[error("expression nests deeper than {limit} levels")]
    TooDeep { limit: usize },

    #[error("failed to build left subtree")]
    Left(#[source] Box<ParseError>),

    #[error("failed to build right subtree")]
    Right(#[source] Box<ParseError>),

    #[error("failed to build negated subtree")]
    Negation(#[source] Box<ParseError>),
}

impl ParseError {
    pub fn root_cause(&self) -> &Self {
        match self {
            Self::Left(inner) | Self::Right(inner) | Self::Negation(inner) => inner.root_cause(),
            _ => self,
        }
    }
}

/// Returned when a tree cannot be reduced to a single boolean.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// A literal is neither a boolean constant nor a key of the context.
    #[error("unknown variable: {name}")]
    UnknownVariable { name: String },

    #[error("failed solving NOT sub-expression")]
    Negation(#[source] Box<EvalError>),

    #[error("failed solving left expression")]
    Left(#[source] Box<EvalError>),

    #[error("failed solving right expression")]
    Right(#[source] Box<EvalError>),

    /// The tree violates an invariant the parser guarantees.
    #[error("internal error: {message}")]
    Internal { message: String },
}

impl EvalError {
    pub fn root_cause(&self) -> &Self {
        match self {
            Self::Negation(inner) | Self::Left(inner) | Self::Right(inner) => inner.root_cause(),
            _ => self,
        }
    }

    /// The name of the unresolved variable, however deep it was found.
    pub fn unknown_variable(&self) -> Option<&str> {
        match self.root_cause() {
            Self::UnknownVariable { name } => Some(name),
            _ => None,
        }
    }
}
