use rocket::figment::{providers::Env, Figment};
use serde::Deserialize;

use crate::api::ApiConfig;

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
}

/// Rocket's own configuration overlaid with `APP_` prefixed environment
/// variables, e.g. `APP_API_MAX_EQUATION_LENGTH` sets `api.max_equation_length`
pub fn figment() -> Figment {
    rocket::Config::figment()
        .merge(Env::prefixed("APP_").map(|s| s.as_str().replacen('_', ".", 1).into()))
}
