use log::error;
use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::{response, Request};

use equation_client::ErrorResponse;
use expression::{EvaluationError, ParseError};
use telemetry::IsErr;

use crate::dao::DaoError;

#[derive(Debug)]
pub enum ApiError {
    InvalidEquation(String),
    InvalidRequest(String),
    Evaluation(String),
    NotFound(String),
    InternalError(String),
}

pub(crate) fn error_response(error: &str, message: String) -> Json<ErrorResponse> {
    Json(ErrorResponse {
        error: error.to_string(),
        message,
        timestamp: chrono::Utc::now().timestamp_millis(),
    })
}

impl<'r> response::Responder<'r, 'static> for ApiError {
    fn respond_to(self, req: &'r Request<'_>) -> response::Result<'static> {
        let (error, message, status) = match self {
            ApiError::InternalError(e) => {
                error!("Internal Error: {}", e);
                (
                    "Internal Server Error",
                    "Internal Server Error".to_string(),
                    Status::InternalServerError,
                )
            }
            ApiError::InvalidEquation(e) => ("Invalid Equation", e, Status::BadRequest),
            ApiError::InvalidRequest(e) => ("Invalid Request", e, Status::BadRequest),
            ApiError::Evaluation(e) => ("Evaluation Error", e, Status::BadRequest),
            ApiError::NotFound(e) => ("Not Found", e, Status::NotFound),
        };
        response::status::Custom(status, error_response(error, message)).respond_to(req)
    }
}

impl From<ParseError> for ApiError {
    fn from(e: ParseError) -> Self {
        // the response's error field already names the kind
        let message = match e {
            ParseError::Lex(e) => e.to_string(),
            ParseError::InvalidEquation(e) => e.to_string(),
            ParseError::Conversion(e) => e.to_string(),
        };
        ApiError::InvalidEquation(message)
    }
}

impl From<EvaluationError> for ApiError {
    fn from(e: EvaluationError) -> Self {
        match e {
            EvaluationError::MissingTree | EvaluationError::InvalidLiteral(_) => {
                ApiError::InternalError(format!("EvaluationError: {}", e))
            }
            EvaluationError::UnboundVariable(_) | EvaluationError::DivisionByZero => {
                ApiError::Evaluation(e.to_string())
            }
        }
    }
}

impl From<DaoError> for ApiError {
    fn from(e: DaoError) -> Self {
        match e {
            DaoError::NotFound(_) => ApiError::NotFound(e.to_string()),
        }
    }
}

impl IsErr for ApiError {
    fn is_err(&self) -> bool {
        matches!(self, ApiError::InternalError(_))
    }
}
