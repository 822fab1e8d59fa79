use async_trait::async_trait;

use expression::Expr;

pub use memory::EquationDaoMemory;

use crate::dao::error::DaoError;
use crate::model::Equation;

mod memory;

#[async_trait]
pub trait EquationDao: Sync + Send {
    /// Persists a parsed equation, returning its newly assigned id
    async fn store(&self, infix: String, root: Expr) -> Result<String, DaoError>;

    async fn lookup(&self, equation_id: &str) -> Result<Option<Equation>, DaoError>;

    async fn get(&self, equation_id: &str) -> Result<Equation, DaoError> {
        self.lookup(equation_id)
            .await?
            .ok_or_else(|| DaoError::NotFound(equation_id.to_string()))
    }

    /// All stored equations in the order they were stored
    async fn list(&self) -> Result<Vec<Equation>, DaoError>;

    async fn delete(&self, equation_id: &str) -> Result<(), DaoError>;
}
