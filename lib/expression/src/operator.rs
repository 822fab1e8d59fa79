use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString, IntoStaticStr};

use crate::EvaluationError;

#[derive(
    Debug,
    Clone,
    Copy,
    Hash,
    PartialEq,
    Eq,
    Display,
    EnumString,
    IntoStaticStr,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Operator {
    #[strum(serialize = "+")]
    Add,
    #[strum(serialize = "-")]
    Sub,
    #[strum(serialize = "*")]
    Mul,
    #[strum(serialize = "/")]
    Div,
    #[strum(serialize = "^")]
    Pow,
}

impl Operator {
    pub fn symbol(self) -> &'static str {
        self.into()
    }

    pub fn precedence(self) -> u8 {
        match self {
            Operator::Add | Operator::Sub => 1,
            Operator::Mul | Operator::Div => 2,
            Operator::Pow => 3,
        }
    }

    pub fn is_right_associative(self) -> bool {
        self == Operator::Pow
    }

    /// Whether `self`, sitting on the operator stack, must be emitted before
    /// `incoming` is pushed
    pub(crate) fn binds_before(self, incoming: Operator) -> bool {
        let (top, next) = (self.precedence(), incoming.precedence());
        top > next || (top == next && !incoming.is_right_associative())
    }

    pub fn apply(self, left: f64, right: f64) -> Result<f64, EvaluationError> {
        match self {
            Operator::Add => Ok(left + right),
            Operator::Sub => Ok(left - right),
            Operator::Mul => Ok(left * right),
            Operator::Div if right == 0.0 => Err(EvaluationError::DivisionByZero),
            Operator::Div => Ok(left / right),
            Operator::Pow => Ok(left.powf(right)),
        }
    }
}
