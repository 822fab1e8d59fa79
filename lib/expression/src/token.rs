use nom::IResult;
use nom::{
    branch::alt,
    bytes::complete::tag,
    character::complete::{alpha1, alphanumeric1, char, digit0, digit1, one_of},
    combinator::{all_consuming, map, map_res, opt, recognize},
    multi::many0_count,
    sequence::pair,
};

use crate::{LexError, Operator};

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Number(String),
    Variable(String),
    Operator(Operator),
    OpenParen,
    CloseParen,
}

impl Token {
    pub fn lexeme(&self) -> &str {
        match self {
            Token::Number(s) | Token::Variable(s) => s,
            Token::Operator(op) => op.symbol(),
            Token::OpenParen => "(",
            Token::CloseParen => ")",
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.lexeme())
    }
}

fn numeral(i: &str) -> IResult<&str, &str> {
    recognize(pair(digit1, opt(pair(char('.'), digit0))))(i)
}

fn identifier(i: &str) -> IResult<&str, &str> {
    recognize(pair(
        alt((alpha1, tag("_"))),
        many0_count(alt((alphanumeric1, tag("_")))),
    ))(i)
}

fn parse_token(i: &str) -> IResult<&str, Token> {
    alt((
        map(numeral, |s: &str| Token::Number(s.to_string())),
        map(identifier, |s: &str| Token::Variable(s.to_string())),
        map_res(recognize(one_of("+-*/^")), |s: &str| {
            s.parse().map(Token::Operator)
        }),
        map(char('('), |_| Token::OpenParen),
        map(char(')'), |_| Token::CloseParen),
    ))(i)
}

/// Splits an equation into tokens. Whitespace is insignificant and stripped
/// before scanning, so reported positions index the stripped text.
pub fn tokenize(equation: &str) -> Result<Vec<Token>, LexError> {
    let compact: String = equation.chars().filter(|c| !c.is_whitespace()).collect();
    if compact.is_empty() {
        return Err(LexError::Empty);
    }

    let mut tokens = Vec::new();
    let mut remaining = compact.as_str();
    while !remaining.is_empty() {
        match parse_token(remaining) {
            Ok((rest, token)) => {
                tokens.push(token);
                remaining = rest;
            }
            Err(_) => {
                let consumed = &compact[..compact.len() - remaining.len()];
                return Err(LexError::InvalidCharacter {
                    position: consumed.chars().count(),
                    found: remaining.chars().next().unwrap_or_default(),
                });
            }
        }
    }

    Ok(tokens)
}

pub fn is_number(lexeme: &str) -> bool {
    all_consuming(numeral)(lexeme).is_ok()
}

pub fn is_variable(lexeme: &str) -> bool {
    all_consuming(identifier)(lexeme).is_ok()
}

pub fn is_operator(lexeme: &str) -> bool {
    lexeme.parse::<Operator>().is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lexemes(tokens: &[Token]) -> Vec<&str> {
        tokens.iter().map(Token::lexeme).collect()
    }

    #[test]
    fn test_tokenize_simple() -> Result<(), Box<dyn std::error::Error>> {
        let tokens = tokenize("3 + 2 * x")?;

        assert_eq!(
            tokens,
            vec![
                Token::Number("3".to_string()),
                Token::Operator(Operator::Add),
                Token::Number("2".to_string()),
                Token::Operator(Operator::Mul),
                Token::Variable("x".to_string()),
            ]
        );
        Ok(())
    }

    #[test]
    fn test_tokenize_parentheses() -> Result<(), Box<dyn std::error::Error>> {
        let tokens = tokenize("(x + 2) * (y - 1)")?;
        assert_eq!(
            lexemes(&tokens),
            vec!["(", "x", "+", "2", ")", "*", "(", "y", "-", "1", ")"]
        );
        Ok(())
    }

    #[test]
    fn test_tokenize_longest_match() -> Result<(), Box<dyn std::error::Error>> {
        let tokens = tokenize("3.14*rate_2+_tmp^12")?;
        assert_eq!(
            lexemes(&tokens),
            vec!["3.14", "*", "rate_2", "+", "_tmp", "^", "12"]
        );
        assert_eq!(tokens[2], Token::Variable("rate_2".to_string()));

        // whitespace is removed before scanning, so split digits join up
        assert_eq!(lexemes(&tokenize("1 2 + x y")?), vec!["12", "+", "xy"]);
        Ok(())
    }

    #[test]
    fn test_whitespace_insignificant() -> Result<(), Box<dyn std::error::Error>> {
        assert_eq!(tokenize(" x +\t2\n")?, tokenize("x+2")?);
        Ok(())
    }

    #[test]
    fn test_tokenize_empty() {
        assert_eq!(tokenize(""), Err(LexError::Empty));
        assert_eq!(tokenize("  \t "), Err(LexError::Empty));
    }

    #[test]
    fn test_invalid_character() {
        assert_eq!(
            tokenize("x & y"),
            Err(LexError::InvalidCharacter {
                position: 1,
                found: '&'
            })
        );
        assert_eq!(
            tokenize("x @ 2"),
            Err(LexError::InvalidCharacter {
                position: 1,
                found: '@'
            })
        );
        assert_eq!(
            tokenize("1.2.3"),
            Err(LexError::InvalidCharacter {
                position: 3,
                found: '.'
            })
        );
        assert_eq!(
            tokenize("é+1"),
            Err(LexError::InvalidCharacter {
                position: 0,
                found: 'é'
            })
        );

        let message = tokenize("2 * $").unwrap_err().to_string();
        assert_eq!(message, "Invalid character at position 2: '$'");
    }

    #[test]
    fn test_predicates() {
        for lexeme in &["42", "3.14", "0", "1.5", "7."] {
            assert!(is_number(lexeme), "{} should be a number", lexeme);
            assert!(lexeme.parse::<f64>().is_ok());
        }
        for lexeme in &["x", "var", "x1", "_var", "inf", "NaN"] {
            assert!(is_variable(lexeme), "{} should be a variable", lexeme);
            assert!(!is_number(lexeme));
        }
        for lexeme in &["+", "-", "*", "/", "^"] {
            assert!(is_operator(lexeme));
        }

        assert!(!is_number("1e5"));
        assert!(!is_number(".5"));
        assert!(!is_variable("1x"));
        assert!(!is_variable("x-1"));
        assert!(!is_operator("("));
        assert!(!is_operator("**"));
    }
}
