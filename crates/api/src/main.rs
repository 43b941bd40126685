// main.rs - entry point to run the configuration lookup server

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use clap::Parser;
use dotenvy::dotenv;
use tracing::info;
use tracing::subscriber::set_global_default;
use tracing_actix_web::TracingLogger;
use tracing_log::LogTracer;
use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter, Registry};

mod config;
mod routes;

use config::Config;
use routes::{configuration_by_name, health};

#[derive(Parser, Debug)]
struct Args {
    /// Port the HTTP server binds
    #[arg(long, env = "PORT", default_value_t = 3000)]
    port: u16,
    /// Database URI, name and collection. The URI has no default on purpose:
    /// the process refuses to start without one.
    #[arg(long, env = "MONGO_URL")]
    mongo_url: String,
    #[arg(long, env = "MONGO_DB", default_value = "serpents-config")]
    mongo_db: String,
    #[arg(long, env = "MONGO_COLLECTION", default_value = "configurations")]
    mongo_collection: String,
    /// Environment
    #[arg(long, env = "ENVIRONMENT", default_value = "local")]
    pub environment: String,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables from .env file if local
    dotenv().ok();

    // Parse CLI args, using ENV vars if not provided
    let args = Args::parse();

    // Setup tracing for our API
    // Adds log tracer as the default tracer for the log crate
    LogTracer::init().expect("Failed to set log tracer");
    // Set log level based on env variable
    let env_layer = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap();
    let fmt_layer = fmt::layer().with_target(false);
    let subscriber = Registry::default().with(env_layer).with(fmt_layer);
    set_global_default(subscriber).expect("Failed to set global default subscriber");

    // Create the database client before accepting any traffic. The driver
    // connects lazily and pools internally, so an unreachable server shows up
    // per-query rather than here.
    let client = mongodb::Client::with_uri_str(args.mongo_url)
        .await
        .expect("Failed to create database client.");

    // Set api config, injected into every handler
    let config = Config {
        client,
        database: args.mongo_db.clone(),
        collection: args.mongo_collection.clone(),
    };

    let binding = ("0.0.0.0", args.port);
    info!("Config server listening on port {}", args.port);

    // Create and run http server
    HttpServer::new(move || {
        let cors = match args.environment.as_str() {
            // Read-only service; anything stricter than GET is pointless here
            "local" => Cors::permissive(),
            _ => Cors::default()
                .allow_any_origin()
                .allowed_methods(vec!["GET"])
                .allow_any_header()
                .max_age(3600),
        };
        App::new()
            .app_data(web::Data::new(config.clone()))
            .wrap(TracingLogger::default())
            .wrap(cors)
            .service(health)
            .service(configuration_by_name)
    })
    .bind(binding)?
    .run()
    .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn args_fall_back_to_documented_defaults() {
        // Env-backed args read the real environment; skip when it interferes
        for var in ["PORT", "MONGO_DB", "MONGO_COLLECTION", "ENVIRONMENT"] {
            if std::env::var(var).is_ok() {
                return;
            }
        }

        let args =
            Args::try_parse_from(["api", "--mongo-url", "mongodb://localhost:27017"]).unwrap();

        assert_eq!(args.port, 3000);
        assert_eq!(args.mongo_db, "serpents-config");
        assert_eq!(args.mongo_collection, "configurations");
        assert_eq!(args.environment, "local");
    }

    #[test]
    fn missing_database_uri_is_rejected() {
        // No --mongo-url and (normally) no MONGO_URL in the test environment
        if std::env::var("MONGO_URL").is_ok() {
            return;
        }
        assert!(Args::try_parse_from(["api"]).is_err());
    }
}
