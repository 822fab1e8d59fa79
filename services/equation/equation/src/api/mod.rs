use rocket::http::Status;
use rocket::response::status::Custom;
use rocket::serde::json::{json, Json, Value};
use rocket::{Catcher, Request, Route};

use equation_client::ErrorResponse;

pub use crate::api::config::ApiConfig;
use crate::api::error::error_response;

mod config;
mod equation;
mod error;

#[get("/status")]
fn status() -> Value {
    json!({ "status": "ok" })
}

#[get("/metrics")]
fn metrics() -> Result<String, Status> {
    telemetry::encode().map_err(|_| Status::InternalServerError)
}

#[catch(default)]
fn default_catcher(status: Status, _req: &Request<'_>) -> Custom<Json<ErrorResponse>> {
    let error = status.reason().unwrap_or("Unknown Error");
    Custom(status, error_response(error, error.to_string()))
}

pub fn routes() -> Vec<Route> {
    let mut routes = routes![status, metrics];
    routes.append(&mut equation::routes());
    routes
}

pub fn catchers() -> Vec<Catcher> {
    catchers![default_catcher]
}
