pub use equation::{EquationDao, EquationDaoMemory};
pub use error::DaoError;

mod equation;
mod error;
