use derive_more::Display;

use crate::Operator;

#[derive(Debug, Display, Clone, PartialEq)]
pub enum LexError {
    #[display(fmt = "Equation cannot be empty")]
    Empty,

    #[display(fmt = "Invalid character at position {}: '{}'", position, found)]
    InvalidCharacter { position: usize, found: char },
}

impl std::error::Error for LexError {}

#[derive(Debug, Display, Clone, PartialEq)]
pub enum InvalidEquationError {
    #[display(fmt = "No tokens to parse")]
    NoTokens,

    #[display(fmt = "Unexpected '(' after operand at position {}", position)]
    UnexpectedOpenParen { position: usize },

    #[display(fmt = "Missing operand before '{}' at position {}", token, position)]
    MissingOperand { position: usize, token: String },

    #[display(
        fmt = "Unexpected operand '{}' at position {} - expected operator",
        token,
        position
    )]
    UnexpectedOperand { position: usize, token: String },

    #[display(fmt = "Expression ends with operator at position {}", position)]
    TrailingOperator { position: usize },

    /// `position` is the first unmatched `)` when `depth` is negative, otherwise
    /// the first `(` left open
    #[display(
        fmt = "Mismatched parentheses: depth {} at end of expression, unmatched at position {}",
        depth,
        position
    )]
    MismatchedParentheses { depth: isize, position: usize },

    #[display(fmt = "Expression depth {} exceeds the limit of {}", depth, limit)]
    TooDeep { depth: usize, limit: usize },

    #[display(fmt = "Insufficient operands for operator '{}'", _0)]
    InsufficientOperands(Operator),

    #[display(fmt = "Malformed expression: {} roots", roots)]
    MalformedExpression { roots: usize },

    #[display(fmt = "Invalid token in postfix expression: '{}'", _0)]
    InvalidPostfixToken(String),
}

impl std::error::Error for InvalidEquationError {}

#[derive(Debug, Display, Clone, PartialEq)]
pub enum ConversionError {
    #[display(fmt = "Token list cannot be empty")]
    Empty,

    #[display(fmt = "Unexpected operand '{}' at position {}", token, position)]
    UnexpectedOperand { position: usize, token: String },

    #[display(fmt = "Unexpected '(' at position {}", position)]
    UnexpectedOpenParen { position: usize },

    #[display(fmt = "Unexpected ')' at position {}", position)]
    UnexpectedCloseParen { position: usize },

    #[display(fmt = "Unexpected operator '{}' at position {}", operator, position)]
    UnexpectedOperator { position: usize, operator: Operator },

    #[display(fmt = "Mismatched parentheses: extra ')' at position {}", position)]
    UnmatchedCloseParen { position: usize },

    #[display(fmt = "Mismatched parentheses: unclosed '('")]
    UnclosedParen,

    #[display(fmt = "Expression ends with operator")]
    TrailingOperator,
}

impl std::error::Error for ConversionError {}

/// Any failure produced while turning equation text into a tree
#[derive(Debug, Display, Clone, PartialEq)]
pub enum ParseError {
    #[display(fmt = "Lex Error: {}", _0)]
    Lex(LexError),

    #[display(fmt = "Invalid Equation: {}", _0)]
    InvalidEquation(InvalidEquationError),

    #[display(fmt = "Conversion Error: {}", _0)]
    Conversion(ConversionError),
}

impl ParseError {
    /// Index of the offending token (or character, for lexing failures)
    pub fn position(&self) -> Option<usize> {
        match self {
            ParseError::Lex(LexError::InvalidCharacter { position, .. }) => Some(*position),
            ParseError::Lex(LexError::Empty) => None,
            ParseError::InvalidEquation(e) => match e {
                InvalidEquationError::UnexpectedOpenParen { position }
                | InvalidEquationError::MissingOperand { position, .. }
                | InvalidEquationError::UnexpectedOperand { position, .. }
                | InvalidEquationError::TrailingOperator { position }
                | InvalidEquationError::MismatchedParentheses { position, .. } => Some(*position),
                _ => None,
            },
            ParseError::Conversion(e) => match e {
                ConversionError::UnexpectedOperand { position, .. }
                | ConversionError::UnexpectedOpenParen { position }
                | ConversionError::UnexpectedCloseParen { position }
                | ConversionError::UnexpectedOperator { position, .. }
                | ConversionError::UnmatchedCloseParen { position } => Some(*position),
                _ => None,
            },
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseError::Lex(e) => Some(e),
            ParseError::InvalidEquation(e) => Some(e),
            ParseError::Conversion(e) => Some(e),
        }
    }
}

impl From<LexError> for ParseError {
    fn from(e: LexError) -> Self {
        ParseError::Lex(e)
    }
}

impl From<InvalidEquationError> for ParseError {
    fn from(e: InvalidEquationError) -> Self {
        ParseError::InvalidEquation(e)
    }
}

impl From<ConversionError> for ParseError {
    fn from(e: ConversionError) -> Self {
        ParseError::Conversion(e)
    }
}

#[derive(Debug, Display, Clone, PartialEq)]
pub enum EvaluationError {
    #[display(fmt = "Expression tree is missing")]
    MissingTree,

    #[display(fmt = "Unbound variable: {}", _0)]
    UnboundVariable(String),

    #[display(fmt = "Division by zero")]
    DivisionByZero,

    #[display(fmt = "Invalid numeric literal: {}", _0)]
    InvalidLiteral(String),
}

impl std::error::Error for EvaluationError {}
