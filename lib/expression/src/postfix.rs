use crate::{ConversionError, Operator, Token};

enum Pending {
    OpenParen,
    Operator(Operator),
}

/// Shunting-Yard conversion from infix to postfix order.
///
/// A `-` found where an operand is expected is negation, which is rewritten
/// as subtraction from a synthesised `0` operand.
pub fn to_postfix(tokens: &[Token]) -> Result<Vec<Token>, ConversionError> {
    if tokens.is_empty() {
        return Err(ConversionError::Empty);
    }

    let mut output = Vec::with_capacity(tokens.len() + 1);
    let mut stack: Vec<Pending> = Vec::new();
    let mut expect_operand = true;

    for (position, token) in tokens.iter().enumerate() {
        match token {
            Token::Number(_) | Token::Variable(_) => {
                if !expect_operand {
                    return Err(ConversionError::UnexpectedOperand {
                        position,
                        token: token.to_string(),
                    });
                }
                output.push(token.clone());
                expect_operand = false;
            }
            Token::OpenParen => {
                if !expect_operand {
                    return Err(ConversionError::UnexpectedOpenParen { position });
                }
                stack.push(Pending::OpenParen);
            }
            Token::CloseParen => {
                if expect_operand {
                    return Err(ConversionError::UnexpectedCloseParen { position });
                }
                loop {
                    match stack.pop() {
                        Some(Pending::Operator(op)) => output.push(Token::Operator(op)),
                        Some(Pending::OpenParen) => break,
                        None => return Err(ConversionError::UnmatchedCloseParen { position }),
                    }
                }
            }
            Token::Operator(op) => {
                let op = *op;
                if expect_operand {
                    if op != Operator::Sub || !is_unary_position(tokens, position) {
                        return Err(ConversionError::UnexpectedOperator {
                            position,
                            operator: op,
                        });
                    }
                    output.push(Token::Number("0".to_string()));
                }

                while let Some(&Pending::Operator(top)) = stack.last() {
                    if !top.binds_before(op) {
                        break;
                    }
                    output.push(Token::Operator(top));
                    stack.pop();
                }

                stack.push(Pending::Operator(op));
                expect_operand = true;
            }
        }
    }

    if expect_operand {
        return Err(ConversionError::TrailingOperator);
    }

    while let Some(pending) = stack.pop() {
        match pending {
            Pending::Operator(op) => output.push(Token::Operator(op)),
            Pending::OpenParen => return Err(ConversionError::UnclosedParen),
        }
    }

    Ok(output)
}

// Negation is only recognised at the start or directly after `(`
fn is_unary_position(tokens: &[Token], position: usize) -> bool {
    position == 0 || tokens[position - 1] == Token::OpenParen
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenize;

    fn postfix(equation: &str) -> Result<String, Box<dyn std::error::Error>> {
        let tokens = to_postfix(&tokenize(equation)?)?;
        Ok(tokens
            .iter()
            .map(Token::lexeme)
            .collect::<Vec<_>>()
            .join(" "))
    }

    #[test]
    fn test_precedence() -> Result<(), Box<dyn std::error::Error>> {
        assert_eq!(postfix("3+2*x")?, "3 2 x * +");
        assert_eq!(postfix("3*2+x")?, "3 2 * x +");
        assert_eq!(postfix("a+b*c^d")?, "a b c d ^ * +");
        assert_eq!(postfix("(x+2)*(y-1)")?, "x 2 + y 1 - *");
        Ok(())
    }

    #[test]
    fn test_associativity() -> Result<(), Box<dyn std::error::Error>> {
        assert_eq!(postfix("10-5-2")?, "10 5 - 2 -");
        assert_eq!(postfix("20/4/2")?, "20 4 / 2 /");
        assert_eq!(postfix("2^3^2")?, "2 3 2 ^ ^");
        assert_eq!(postfix("(2^3)^2")?, "2 3 ^ 2 ^");
        Ok(())
    }

    #[test]
    fn test_unary_minus() -> Result<(), Box<dyn std::error::Error>> {
        assert_eq!(postfix("-x+3")?, "0 x - 3 +");
        assert_eq!(postfix("-x^2")?, "0 x 2 ^ -");
        assert_eq!(postfix("2*(-x)")?, "2 0 x - *");
        assert_eq!(postfix("-(x+1)")?, "0 x 1 + -");
        Ok(())
    }

    #[test]
    fn test_malformed() -> Result<(), Box<dyn std::error::Error>> {
        let convert = |equation: &str| -> Result<Vec<Token>, ConversionError> {
            to_postfix(&tokenize(equation).expect("equation must tokenize"))
        };

        assert_eq!(to_postfix(&[]), Err(ConversionError::Empty));
        assert_eq!(
            convert("x)+(y"),
            Err(ConversionError::UnmatchedCloseParen { position: 1 })
        );
        assert_eq!(convert("(x+2"), Err(ConversionError::UnclosedParen));
        assert_eq!(convert("x*"), Err(ConversionError::TrailingOperator));
        assert_eq!(
            convert("*x"),
            Err(ConversionError::UnexpectedOperator {
                position: 0,
                operator: Operator::Mul
            })
        );
        assert_eq!(
            convert("2x"),
            Err(ConversionError::UnexpectedOperand {
                position: 1,
                token: "x".to_string()
            })
        );
        assert_eq!(
            convert("(x)(y)"),
            Err(ConversionError::UnexpectedOpenParen { position: 3 })
        );
        assert_eq!(
            convert("(+x)"),
            Err(ConversionError::UnexpectedOperator {
                position: 1,
                operator: Operator::Add
            })
        );
        assert_eq!(
            convert("2*-x"),
            Err(ConversionError::UnexpectedOperator {
                position: 2,
                operator: Operator::Sub
            })
        );
        assert_eq!(
            convert("()"),
            Err(ConversionError::UnexpectedCloseParen { position: 1 })
        );
        Ok(())
    }
}
