#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate rocket;

use std::error::Error;
use std::sync::Arc;

use log::info;

use crate::dao::{EquationDao, EquationDaoMemory};

mod api;
mod config;
mod dao;
mod model;

#[rocket::main]
async fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let figment = config::figment();

    let config: config::Config = figment.extract()?;
    info!(
        "accepting equations up to {} characters",
        config.api.max_equation_length
    );

    let equation_dao = Arc::new(EquationDaoMemory::new());

    rocket::custom(figment)
        .manage(config.api)
        .manage(equation_dao as Arc<dyn EquationDao>)
        .mount("/", api::routes())
        .register("/", api::catchers())
        .launch()
        .await?;

    Ok(())
}
