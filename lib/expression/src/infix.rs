use crate::{Expr, Operator};

/// Renders a tree as infix text with only the parentheses needed to keep its
/// grouping. Re-parsing the output yields a tree that evaluates identically.
pub fn reconstruct(node: Option<&Expr>) -> String {
    let mut out = String::new();
    if let Some(node) = node {
        write_node(node, &mut out);
    }
    out
}

fn write_node(node: &Expr, out: &mut String) {
    match node {
        Expr::Constant(s) | Expr::Variable(s) => out.push_str(s),
        Expr::Application(op, l, r) => {
            write_operand(l, needs_parens_left(*op, l), out);
            out.push_str(op.symbol());
            write_operand(r, needs_parens_right(*op, r), out);
        }
    }
}

fn write_operand(node: &Expr, parens: bool, out: &mut String) {
    if parens {
        out.push('(');
        write_node(node, out);
        out.push(')');
    } else {
        write_node(node, out);
    }
}

fn needs_parens_left(parent: Operator, child: &Expr) -> bool {
    match child.operator() {
        Some(op) => {
            op.precedence() < parent.precedence()
                || (op.precedence() == parent.precedence() && parent.is_right_associative())
        }
        None => false,
    }
}

fn needs_parens_right(parent: Operator, child: &Expr) -> bool {
    match child.operator() {
        Some(op) => {
            op.precedence() < parent.precedence()
                || (op.precedence() == parent.precedence()
                    && matches!(parent, Operator::Sub | Operator::Div))
        }
        None => false,
    }
}

impl std::fmt::Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&reconstruct(Some(self)))
    }
}
