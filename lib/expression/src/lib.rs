use log::debug;

pub use error::{ConversionError, EvaluationError, InvalidEquationError, LexError, ParseError};
pub use eval::{evaluate, extract_variables};
pub use infix::reconstruct;
pub use operator::Operator;
pub use postfix::to_postfix;
pub use token::{is_number, is_operator, is_variable, tokenize, Token};
pub use tree::{build, Expr, MAX_DEPTH};
pub use validate::validate;

mod error;
mod eval;
mod infix;
mod operator;
mod postfix;
mod token;
mod tree;
mod validate;

/// Parses an infix equation into an expression tree
pub fn parse(equation: &str) -> Result<Expr, ParseError> {
    let tokens = tokenize(equation)?;
    debug!("tokenized {:?} into {} tokens", equation, tokens.len());

    validate(&tokens)?;

    let postfix = to_postfix(&tokens)?;
    debug!(
        "postfix: {}",
        postfix
            .iter()
            .map(Token::lexeme)
            .collect::<Vec<_>>()
            .join(" ")
    );

    Ok(build(&postfix)?)
}
