use serde::{Deserialize, Serialize};

use crate::{InvalidEquationError, Operator, Token};

/// Deepest tree `build` accepts, counting leaves as depth 1. Evaluation,
/// rendering and dropping all recurse once per level.
pub const MAX_DEPTH: usize = 1024;

/// A binary expression tree. Operators own exactly two children and operands
/// are leaves, so no node can be built with a single child.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Expr {
    /// A numeral, kept as written
    Constant(String),
    Variable(String),
    Application(Operator, Box<Expr>, Box<Expr>),
}

impl Expr {
    pub fn constant<S: Into<String>>(literal: S) -> Expr {
        Expr::Constant(literal.into())
    }

    pub fn variable<S: Into<String>>(name: S) -> Expr {
        Expr::Variable(name.into())
    }

    pub fn apply(op: Operator, left: Expr, right: Expr) -> Expr {
        Expr::Application(op, Box::new(left), Box::new(right))
    }

    /// The operator symbol, numeral text or variable name held by this node
    pub fn value(&self) -> &str {
        match self {
            Expr::Constant(s) | Expr::Variable(s) => s,
            Expr::Application(op, _, _) => op.symbol(),
        }
    }

    pub fn operator(&self) -> Option<Operator> {
        match self {
            Expr::Application(op, _, _) => Some(*op),
            _ => None,
        }
    }

    pub fn left(&self) -> Option<&Expr> {
        match self {
            Expr::Application(_, l, _) => Some(l),
            _ => None,
        }
    }

    pub fn right(&self) -> Option<&Expr> {
        match self {
            Expr::Application(_, _, r) => Some(r),
            _ => None,
        }
    }

    pub fn is_leaf(&self) -> bool {
        !self.is_operator()
    }

    pub fn is_operator(&self) -> bool {
        matches!(self, Expr::Application(..))
    }
}

/// Folds a postfix token sequence into a tree, rejecting trees deeper than
/// [`MAX_DEPTH`]
pub fn build(postfix: &[Token]) -> Result<Expr, InvalidEquationError> {
    // each entry carries the depth of the subtree it holds
    let mut stack: Vec<(Expr, usize)> = Vec::with_capacity(postfix.len());

    for token in postfix {
        match token {
            Token::Number(s) => stack.push((Expr::Constant(s.clone()), 1)),
            Token::Variable(s) => stack.push((Expr::Variable(s.clone()), 1)),
            Token::Operator(op) => {
                // the operand nearest the operator is its right hand side
                match (stack.pop(), stack.pop()) {
                    (Some((right, rd)), Some((left, ld))) => {
                        let depth = 1 + ld.max(rd);
                        if depth > MAX_DEPTH {
                            return Err(InvalidEquationError::TooDeep {
                                depth,
                                limit: MAX_DEPTH,
                            });
                        }
                        stack.push((Expr::apply(*op, left, right), depth))
                    }
                    _ => return Err(InvalidEquationError::InsufficientOperands(*op)),
                }
            }
            Token::OpenParen | Token::CloseParen => {
                return Err(InvalidEquationError::InvalidPostfixToken(
                    token.to_string(),
                ))
            }
        }
    }

    match stack.len() {
        1 => stack
            .pop()
            .map(|(root, _)| root)
            .ok_or(InvalidEquationError::MalformedExpression { roots: 0 }),
        roots => Err(InvalidEquationError::MalformedExpression { roots }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn num(s: &str) -> Token {
        Token::Number(s.to_string())
    }

    fn var(s: &str) -> Token {
        Token::Variable(s.to_string())
    }

    #[test]
    fn test_build_simple() -> Result<(), Box<dyn std::error::Error>> {
        let tree = build(&[num("3"), num("2"), Token::Operator(Operator::Add)])?;

        assert_eq!(
            tree,
            Expr::apply(Operator::Add, Expr::constant("3"), Expr::constant("2"))
        );
        assert_eq!(tree.value(), "+");
        assert!(tree.is_operator());
        assert_eq!(tree.left().map(Expr::value), Some("3"));
        assert_eq!(tree.right().map(Expr::value), Some("2"));
        Ok(())
    }

    #[test]
    fn test_operand_order() -> Result<(), Box<dyn std::error::Error>> {
        // x 2 - => x - 2, never 2 - x
        let tree = build(&[var("x"), num("2"), Token::Operator(Operator::Sub)])?;
        assert_eq!(tree.left(), Some(&Expr::variable("x")));
        assert_eq!(tree.right(), Some(&Expr::constant("2")));

        // 3 2 x * + => 3 + (2 * x)
        let tree = build(&[
            num("3"),
            num("2"),
            var("x"),
            Token::Operator(Operator::Mul),
            Token::Operator(Operator::Add),
        ])?;
        assert_eq!(tree.operator(), Some(Operator::Add));
        match tree {
            Expr::Application(Operator::Add, l, r) => {
                assert_eq!(*l, Expr::constant("3"));
                assert_eq!(
                    *r,
                    Expr::apply(Operator::Mul, Expr::constant("2"), Expr::variable("x"))
                );
            }
            _ => panic!("{:?} doesn't match", tree),
        }
        Ok(())
    }

    #[test]
    fn test_leaf() -> Result<(), Box<dyn std::error::Error>> {
        let tree = build(&[var("x")])?;
        assert!(tree.is_leaf());
        assert_eq!(tree.left(), None);
        assert_eq!(tree.right(), None);
        assert_eq!(tree.operator(), None);
        Ok(())
    }

    #[test]
    fn test_insufficient_operands() {
        assert_eq!(
            build(&[num("3"), Token::Operator(Operator::Mul)]),
            Err(InvalidEquationError::InsufficientOperands(Operator::Mul))
        );
        assert_eq!(
            build(&[Token::Operator(Operator::Pow)]),
            Err(InvalidEquationError::InsufficientOperands(Operator::Pow))
        );
    }

    #[test]
    fn test_malformed_roots() {
        let err = build(&[num("1"), num("2")]).unwrap_err();
        assert_eq!(err, InvalidEquationError::MalformedExpression { roots: 2 });
        assert_eq!(err.to_string(), "Malformed expression: 2 roots");

        assert_eq!(
            build(&[]),
            Err(InvalidEquationError::MalformedExpression { roots: 0 })
        );
    }

    #[test]
    fn test_parenthesis_rejected() {
        assert_eq!(
            build(&[num("1"), Token::OpenParen]),
            Err(InvalidEquationError::InvalidPostfixToken("(".to_string()))
        );
    }

    fn chain(operators: usize) -> Vec<Token> {
        let mut postfix = vec![num("1")];
        for _ in 0..operators {
            postfix.push(num("1"));
            postfix.push(Token::Operator(Operator::Add));
        }
        postfix
    }

    #[test]
    fn test_depth_limit() -> Result<(), Box<dyn std::error::Error>> {
        let tree = build(&chain(MAX_DEPTH - 1))?;
        assert_eq!(tree.operator(), Some(Operator::Add));

        assert_eq!(
            build(&chain(MAX_DEPTH)),
            Err(InvalidEquationError::TooDeep {
                depth: MAX_DEPTH + 1,
                limit: MAX_DEPTH
            })
        );
        assert_eq!(
            build(&chain(50_000)),
            Err(InvalidEquationError::TooDeep {
                depth: MAX_DEPTH + 1,
                limit: MAX_DEPTH
            })
        );
        Ok(())
    }

    #[test]
    fn test_serde() -> Result<(), Box<dyn std::error::Error>> {
        let tree = Expr::apply(Operator::Pow, Expr::variable("x"), Expr::constant("2"));
        let encoded = serde_json::to_string(&tree)?;
        assert_eq!(
            encoded,
            r#"{"application":["pow",{"variable":"x"},{"constant":"2"}]}"#
        );
        Ok(())
    }
}
