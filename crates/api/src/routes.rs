// routes.rs - API routes for configuration lookups

use super::config::Config;
use actix_web::{get, web::Data, web::Path, HttpResponse};
use database::configurations::query::get_configuration;
use database::error::QueryError;
use mongodb::bson::Document;
use serde_json::json;
use tracing::{debug, error, info, warn};

#[tracing::instrument(name = "/health - Reports that the process is up")]
#[get("/health")]
pub async fn health() -> HttpResponse {
    // Liveness only. Database reachability is deliberately not checked here,
    // so this stays green while the store is down.
    HttpResponse::Ok().json(json!({ "ok": true }))
}

#[tracing::instrument(
    name = "/configurations/by-name - Returns the configuration document matching a name",
    skip(config)
)]
#[get("/configurations/by-name/{name}")]
pub async fn configuration_by_name(config: Data<Config>, name: Path<String>) -> HttpResponse {
    let name = name.into_inner();
    info!("Looking up configuration: {}", name);

    // Exact, case-sensitive equality on configuration_name; the raw path
    // segment is used as-is.
    let result =
        get_configuration(&config.client, &config.database, &config.collection, &name).await;

    lookup_response(&name, result)
}

// Maps the database outcome to the three client-visible responses. Backend
// failures are logged with their cause but collapse to one generic body.
fn lookup_response(name: &str, result: Result<Option<Document>, QueryError>) -> HttpResponse {
    match result {
        Ok(Some(document)) => {
            debug!("Configuration found: {}", name);
            HttpResponse::Ok().json(document)
        }
        Ok(None) => {
            warn!("No configuration matches: {}", name);
            HttpResponse::NotFound().json(json!({ "error": "Configuration not found" }))
        }
        Err(e @ QueryError::Connection(_)) => {
            error!("Database unreachable while looking up {}: {}", name, e);
            HttpResponse::InternalServerError().json(json!({ "error": "Server error" }))
        }
        Err(e) => {
            error!("Lookup failed for {}: {}", name, e);
            HttpResponse::InternalServerError().json(json!({ "error": "Server error" }))
        }
    }
}
