use std::collections::{BTreeSet, HashMap};

use crate::{EvaluationError, Expr};

/// Evaluates a tree against the supplied variable values.
///
/// Both sides of every operator are evaluated, left first, so an unbound
/// variable is reported even where the other operand would decide the result.
pub fn evaluate(
    root: Option<&Expr>,
    bindings: &HashMap<String, f64>,
) -> Result<f64, EvaluationError> {
    let root = root.ok_or(EvaluationError::MissingTree)?;
    evaluate_node(root, bindings)
}

fn evaluate_node(node: &Expr, bindings: &HashMap<String, f64>) -> Result<f64, EvaluationError> {
    match node {
        Expr::Constant(literal) => literal
            .parse()
            .map_err(|_| EvaluationError::InvalidLiteral(literal.clone())),
        Expr::Variable(name) => bindings
            .get(name)
            .copied()
            .ok_or_else(|| EvaluationError::UnboundVariable(name.clone())),
        Expr::Application(op, l, r) => {
            let left = evaluate_node(l, bindings)?;
            let right = evaluate_node(r, bindings)?;
            op.apply(left, right)
        }
    }
}

pub fn extract_variables(root: Option<&Expr>) -> BTreeSet<String> {
    let mut variables = BTreeSet::new();
    if let Some(root) = root {
        collect_variables(root, &mut variables);
    }
    variables
}

fn collect_variables(node: &Expr, variables: &mut BTreeSet<String>) {
    match node {
        Expr::Constant(_) => {}
        Expr::Variable(name) => {
            variables.insert(name.clone());
        }
        Expr::Application(_, l, r) => {
            collect_variables(l, variables);
            collect_variables(r, variables);
        }
    }
}

impl Expr {
    pub fn evaluate(&self, bindings: &HashMap<String, f64>) -> Result<f64, EvaluationError> {
        evaluate(Some(self), bindings)
    }

    pub fn variables(&self) -> BTreeSet<String> {
        extract_variables(Some(self))
    }
}
