use std::sync::Arc;

use expression::Expr;

#[derive(Debug, Clone)]
pub struct Equation {
    pub id: String,
    /// The equation as submitted, trimmed
    pub infix: String,
    pub root: Arc<Expr>,
}

impl Equation {
    /// The stored tree rendered back into minimally parenthesised infix
    pub fn canonical(&self) -> String {
        self.root.to_string()
    }
}
