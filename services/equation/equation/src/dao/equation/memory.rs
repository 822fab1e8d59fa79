use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use log::debug;
use tokio::sync::Mutex;

use expression::Expr;
use telemetry::Measure;

use crate::dao::{DaoError, EquationDao};
use crate::model::Equation;

lazy_static! {
    static ref STORE_MEASURE: Measure = Measure::new("dao", "equation_dao_store");
    static ref LOOKUP_MEASURE: Measure = Measure::new("dao", "equation_dao_lookup");
    static ref LIST_MEASURE: Measure = Measure::new("dao", "equation_dao_list");
    static ref DELETE_MEASURE: Measure = Measure::new("dao", "equation_dao_delete");
}

/// Keeps equations in process memory; ids are decimal strings counting up
/// from 1
pub struct EquationDaoMemory {
    data: Mutex<HashMap<String, Equation>>,
    next_id: AtomicU64,
}

impl EquationDaoMemory {
    pub fn new() -> EquationDaoMemory {
        EquationDaoMemory {
            data: Mutex::new(Default::default()),
            next_id: AtomicU64::new(1),
        }
    }
}

impl Default for EquationDaoMemory {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EquationDao for EquationDaoMemory {
    async fn store(&self, infix: String, root: Expr) -> Result<String, DaoError> {
        STORE_MEASURE
            .stats(async move {
                let equation_id = self.next_id.fetch_add(1, Ordering::SeqCst).to_string();
                let equation = Equation {
                    id: equation_id.clone(),
                    infix,
                    root: Arc::new(root),
                };

                let mut data = self.data.lock().await;
                data.insert(equation_id.clone(), equation);
                debug!("stored equation {} ({} total)", equation_id, data.len());

                Ok(equation_id)
            })
            .await
    }

    async fn lookup(&self, equation_id: &str) -> Result<Option<Equation>, DaoError> {
        LOOKUP_MEASURE
            .stats(async move {
                let data = self.data.lock().await;
                Ok(data.get(equation_id).cloned())
            })
            .await
    }

    async fn list(&self) -> Result<Vec<Equation>, DaoError> {
        LIST_MEASURE
            .stats(async move {
                let data = self.data.lock().await;
                let mut equations: Vec<_> = data.values().cloned().collect();
                // ids are unpadded decimals, so shorter means older
                equations.sort_by(|a, b| a.id.len().cmp(&b.id.len()).then_with(|| a.id.cmp(&b.id)));
                Ok(equations)
            })
            .await
    }

    async fn delete(&self, equation_id: &str) -> Result<(), DaoError> {
        DELETE_MEASURE
            .stats(async move {
                let mut data = self.data.lock().await;
                data.remove(equation_id)
                    .map(|_| ())
                    .ok_or_else(|| DaoError::NotFound(equation_id.to_string()))
            })
            .await
    }
}
