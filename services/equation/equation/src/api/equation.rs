use std::sync::Arc;

use log::info;
use rocket::http::Status;
use rocket::response::status;
use rocket::serde::json::Json;
use rocket::{Route, State};

use equation_client::{
    EquationList, EquationSummary, EvaluateRequest, EvaluateResponse, StoreRequest, StoreResponse,
};
use expression::Expr;
use telemetry::Measure;

use crate::api::config::ApiConfig;
use crate::api::error::ApiError;
use crate::dao::EquationDao;
use crate::model::Equation;

lazy_static! {
    static ref STORE_MEASURE: Measure = Measure::new("controller", "equation_store");
    static ref PARSE_MEASURE: Measure = Measure::new("controller", "equation_parse");
    static ref LIST_MEASURE: Measure = Measure::new("controller", "equation_list");
    static ref GET_MEASURE: Measure = Measure::new("controller", "equation_get");
    static ref TREE_MEASURE: Measure = Measure::new("controller", "equation_tree");
    static ref EVALUATE_MEASURE: Measure = Measure::new("controller", "equation_evaluate");
    static ref DELETE_MEASURE: Measure = Measure::new("controller", "equation_delete");
}

fn summary(equation: Equation) -> EquationSummary {
    EquationSummary {
        canonical: equation.canonical(),
        equation_id: equation.id,
        equation: equation.infix,
    }
}

#[post("/api/v1/equations", format = "json", data = "<request>")]
async fn store(
    request: Json<StoreRequest>,
    config: &State<ApiConfig>,
    equation_dao: &State<Arc<dyn EquationDao>>,
) -> Result<status::Created<Json<StoreResponse>>, ApiError> {
    STORE_MEASURE
        .stats(async move {
            let infix = request.into_inner().equation.trim().to_string();
            let length = infix.chars().count();
            if length > config.max_equation_length {
                return Err(ApiError::InvalidRequest(format!(
                    "Equation is {} characters long, the limit is {}",
                    length, config.max_equation_length
                )));
            }

            let root = PARSE_MEASURE.record(|| expression::parse(&infix).map_err(ApiError::from))?;
            let equation_id = equation_dao.store(infix, root).await?;
            info!("stored equation {}", equation_id);

            Ok(
                status::Created::new(format!("/api/v1/equations/{}", equation_id)).body(Json(
                    StoreResponse {
                        message: "Equation stored successfully".to_string(),
                        equation_id,
                    },
                )),
            )
        })
        .await
}

#[get("/api/v1/equations")]
async fn list(
    equation_dao: &State<Arc<dyn EquationDao>>,
) -> Result<Json<EquationList>, ApiError> {
    LIST_MEASURE
        .stats(async move {
            let equations = equation_dao.list().await?;
            Ok(Json(EquationList {
                equations: equations.into_iter().map(summary).collect(),
            }))
        })
        .await
}

#[get("/api/v1/equations/<equation_id>")]
async fn get(
    equation_id: &str,
    equation_dao: &State<Arc<dyn EquationDao>>,
) -> Result<Json<EquationSummary>, ApiError> {
    GET_MEASURE
        .stats(async move {
            let equation = equation_dao.get(equation_id).await?;
            Ok(Json(summary(equation)))
        })
        .await
}

#[get("/api/v1/equations/<equation_id>/tree")]
async fn tree(
    equation_id: &str,
    equation_dao: &State<Arc<dyn EquationDao>>,
) -> Result<Json<Expr>, ApiError> {
    TREE_MEASURE
        .stats(async move {
            let equation = equation_dao.get(equation_id).await?;
            Ok(Json(Expr::clone(&equation.root)))
        })
        .await
}

#[post(
    "/api/v1/equations/<equation_id>/evaluate",
    format = "json",
    data = "<request>"
)]
async fn evaluate(
    equation_id: &str,
    request: Json<EvaluateRequest>,
    equation_dao: &State<Arc<dyn EquationDao>>,
) -> Result<Json<EvaluateResponse>, ApiError> {
    EVALUATE_MEASURE
        .stats(async move {
            let request = request.into_inner();
            let equation = equation_dao.get(equation_id).await?;
            let result = equation.root.evaluate(&request.variables)?;

            Ok(Json(EvaluateResponse {
                equation_id: equation.id,
                equation: equation.infix,
                variables: request.variables,
                result: Some(result).filter(|r| r.is_finite()),
            }))
        })
        .await
}

#[delete("/api/v1/equations/<equation_id>")]
async fn delete(
    equation_id: &str,
    equation_dao: &State<Arc<dyn EquationDao>>,
) -> Result<Status, ApiError> {
    DELETE_MEASURE
        .stats(async move {
            equation_dao.delete(equation_id).await?;
            info!("deleted equation {}", equation_id);
            Ok(Status::NoContent)
        })
        .await
}

pub(crate) fn routes() -> Vec<Route> {
    routes![store, list, get, tree, evaluate, delete]
}
