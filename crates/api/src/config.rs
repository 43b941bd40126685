// config.rs - Shared state for the API handlers

use mongodb::Client;

#[derive(Clone, Debug)]
pub struct Config {
    pub client: Client,
    pub database: String,
    pub collection: String,
}
