use crate::{InvalidEquationError, Operator, Token};

/// Checks that operands and operators alternate, that a leading `-` only
/// appears where it can be read as negation and that parentheses balance.
pub fn validate(tokens: &[Token]) -> Result<(), InvalidEquationError> {
    if tokens.is_empty() {
        return Err(InvalidEquationError::NoTokens);
    }

    let mut expect_operand = true;
    let mut depth: isize = 0;
    let mut open = Vec::new();
    let mut unmatched_close = None;

    for (position, token) in tokens.iter().enumerate() {
        match token {
            Token::OpenParen => {
                if !expect_operand {
                    return Err(InvalidEquationError::UnexpectedOpenParen { position });
                }
                depth += 1;
                open.push(position);
            }
            Token::CloseParen => {
                if expect_operand {
                    return Err(InvalidEquationError::MissingOperand {
                        position,
                        token: token.to_string(),
                    });
                }
                depth -= 1;
                if open.pop().is_none() && unmatched_close.is_none() {
                    unmatched_close = Some(position);
                }
            }
            Token::Number(_) | Token::Variable(_) => {
                if !expect_operand {
                    return Err(InvalidEquationError::UnexpectedOperand {
                        position,
                        token: token.to_string(),
                    });
                }
                expect_operand = false;
            }
            Token::Operator(op) => {
                if expect_operand && !is_negation(*op, tokens, position) {
                    return Err(InvalidEquationError::MissingOperand {
                        position,
                        token: token.to_string(),
                    });
                }
                expect_operand = true;
            }
        }
    }

    if expect_operand {
        return Err(InvalidEquationError::TrailingOperator {
            position: tokens.len() - 1,
        });
    }
    if depth != 0 {
        let unmatched = if depth < 0 {
            unmatched_close
        } else {
            open.first().copied()
        };
        return Err(InvalidEquationError::MismatchedParentheses {
            depth,
            position: unmatched.unwrap_or(tokens.len() - 1),
        });
    }

    Ok(())
}

fn is_negation(op: Operator, tokens: &[Token], position: usize) -> bool {
    op == Operator::Sub && (position == 0 || tokens[position - 1] == Token::OpenParen)
}
