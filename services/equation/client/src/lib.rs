use std::collections::HashMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct StoreRequest {
    pub equation: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct StoreResponse {
    pub message: String,
    pub equation_id: String,
}

/// A stored equation as submitted, alongside its normalised rendering
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct EquationSummary {
    pub equation_id: String,
    pub equation: String,
    pub canonical: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct EquationList {
    pub equations: Vec<EquationSummary>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct EvaluateRequest {
    pub variables: HashMap<String, f64>,
}

/// `result` is `null` on the wire when the value is not finite
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct EvaluateResponse {
    pub equation_id: String,
    pub equation: String,
    pub variables: HashMap<String, f64>,
    pub result: Option<f64>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub timestamp: i64,
}
