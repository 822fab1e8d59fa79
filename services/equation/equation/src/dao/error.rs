use derive_more::Display;

use telemetry::IsErr;

#[derive(Debug, Display, Clone, PartialEq)]
pub enum DaoError {
    #[display(fmt = "Equation with ID '{}' not found", _0)]
    NotFound(String),
}

impl std::error::Error for DaoError {}

impl IsErr for DaoError {
    fn is_err(&self) -> bool {
        match self {
            DaoError::NotFound(_) => false,
        }
    }
}
