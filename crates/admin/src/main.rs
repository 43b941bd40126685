// admin/main.rs - scripts for initializing the database and seeding configurations

use clap::{Parser, Subcommand};
use database::configurations::{
    create_configuration_name_index, model::ConfigurationModel, query::insert_configuration,
};
use dotenvy::dotenv;
use mongodb::bson::{Bson, Document};
use mongodb::Client;
use serde::Deserialize;
use std::collections::HashMap;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[clap(name = "admin")]
struct Args {
    #[clap(subcommand)]
    subcommand: Subcommands,
    #[arg(short, long, env = "ENVIRONMENT", default_value = "local")]
    environment: String,
    #[arg(long, env = "MONGO_URL", default_value = "mongodb://localhost:27017")]
    mongo_url: String,
    #[arg(long, env = "MONGO_DB", default_value = "serpents-config")]
    mongo_db: String,
    #[arg(long, env = "MONGO_COLLECTION", default_value = "configurations")]
    mongo_collection: String,
}

#[derive(Debug, Subcommand)]
enum Subcommands {
    #[clap(name = "init-db")]
    InitDatabase,
    #[clap(name = "add-configuration")]
    AddConfiguration {
        // Configuration name should match one under the provided environment
        // in the config file
        #[arg(short, long)]
        name: String,
    },
}

// Allows nesting configurations under a specific environment
// local -> prod-east -> free-form table of fields
#[derive(Debug, Deserialize)]
struct Config {
    configurations: HashMap<String, HashMap<String, toml::Value>>,
}

#[tokio::main]
async fn main() -> Result<(), String> {
    // Load environment variables from .env file
    dotenv().ok();

    // Parse CLI args, using ENV vars if not provided
    let args = Args::parse();

    // Set up tracing and parse args.
    let env_layer = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap();
    tracing_subscriber::fmt()
        .with_env_filter(env_layer)
        .with_target(true)
        .init();

    // Load the config file
    let config: Config = match std::fs::read_to_string("./crates/admin/config.toml") {
        Ok(config) => toml::from_str(&config).unwrap(),
        Err(_) => panic!("Failed to read config.toml file."),
    };

    // Create database client
    let db_client = Client::with_uri_str(args.mongo_url)
        .await
        .expect("Failed to connect to database.");

    // Perform subcommand logic
    match args.subcommand {
        Subcommands::InitDatabase => {
            // 1. Drop the database on the provided client
            db_client.database(&args.mongo_db).drop(None).await.unwrap();

            // 2. Create the unique name index the lookups rely on
            info!("Creating database indexes.");
            create_configuration_name_index(&db_client, &args.mongo_db, &args.mongo_collection)
                .await;

            // Get the configurations to add to the database from the
            // environment config
            let configurations = match config.configurations.get(&args.environment) {
                Some(configurations) => configurations,
                None => panic!("No configurations found for the environment."),
            };

            // Iterate through the configurations and insert them into the
            // database
            for (name, values) in configurations {
                info!("Inserting configuration into database: {}", name);

                insert_configuration(
                    &db_client,
                    &args.mongo_db,
                    &args.mongo_collection,
                    seed_configuration(name, values),
                )
                .await
                .map_err(|e| e.to_string())?;
            }

            info!("Database initialized.");
        }
        Subcommands::AddConfiguration { name } => {
            let values = config
                .configurations
                .get(&args.environment)
                .and_then(|configurations| configurations.get(&name));

            let values = match values {
                Some(values) => values,
                None => panic!("No configuration found in the config file for that name."),
            };

            debug!("Inserting configuration into database: {}", name);
            insert_configuration(
                &db_client,
                &args.mongo_db,
                &args.mongo_collection,
                seed_configuration(&name, values),
            )
            .await
            .map_err(|e| e.to_string())?;

            info!("Configuration added: {}", name);
        }
    }

    Ok(())
}

// Builds the document to insert, injecting configuration_name from the table
// key
fn seed_configuration(name: &str, values: &toml::Value) -> ConfigurationModel {
    ConfigurationModel {
        configuration_name: name.to_string(),
        values: table_to_document(values),
    }
}

fn table_to_document(value: &toml::Value) -> Document {
    let mut document = Document::new();

    if let toml::Value::Table(table) = value {
        for (key, value) in table {
            document.insert(key, value_to_bson(value));
        }
    }

    document
}

fn value_to_bson(value: &toml::Value) -> Bson {
    match value {
        toml::Value::String(s) => Bson::String(s.clone()),
        toml::Value::Integer(i) => Bson::Int64(*i),
        toml::Value::Float(f) => Bson::Double(*f),
        toml::Value::Boolean(b) => Bson::Boolean(*b),
        // Stored as text; the service passes fields through opaquely anyway
        toml::Value::Datetime(dt) => Bson::String(dt.to_string()),
        toml::Value::Array(values) => Bson::Array(values.iter().map(value_to_bson).collect()),
        toml::Value::Table(_) => Bson::Document(table_to_document(value)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_tables_convert_to_documents() {
        let raw = r#"
            region = "us-east-1"
            replicas = 3
            canary = false

            [limits]
            max_connections = 128
        "#;
        let values: toml::Value = toml::from_str(raw).unwrap();

        let configuration = seed_configuration("prod-east", &values);
        assert_eq!(configuration.configuration_name, "prod-east");

        let document = configuration.values;
        assert_eq!(document.get_str("region").unwrap(), "us-east-1");
        assert_eq!(document.get_i64("replicas").unwrap(), 3);
        assert!(!document.get_bool("canary").unwrap());
        assert_eq!(
            document
                .get_document("limits")
                .unwrap()
                .get_i64("max_connections")
                .unwrap(),
            128
        );
    }
}
