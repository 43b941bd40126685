// database/configurations/query.rs - query functions for the configurations collection

use super::model::ConfigurationModel;
use crate::error::QueryError;
use mongodb::bson::{doc, Document};
use mongodb::{Client, Collection};

// Fetch the first document whose configuration_name matches exactly. The
// document is returned raw so every stored field, including the
// store-assigned _id, passes through to the caller untouched.
pub async fn get_configuration(
    client: &Client,
    database: &str,
    collection: &str,
    name: &str,
) -> Result<Option<Document>, QueryError> {
    let collection: Collection<Document> = client.database(database).collection(collection);

    let result = collection
        .find_one(doc! { "configuration_name": name }, None)
        .await?;

    Ok(result)
}

// Check if a configuration with the given name exists
pub async fn configuration_exists(
    client: &Client,
    database: &str,
    collection: &str,
    name: &str,
) -> Result<bool, QueryError> {
    let collection: Collection<Document> = client.database(database).collection(collection);

    let result = collection
        .find_one(doc! { "configuration_name": name }, None)
        .await?;

    Ok(result.is_some())
}

// Insert a new configuration, refusing names that are already present
pub async fn insert_configuration(
    client: &Client,
    database: &str,
    collection: &str,
    configuration: ConfigurationModel,
) -> Result<(), QueryError> {
    if configuration_exists(client, database, collection, &configuration.configuration_name).await?
    {
        return Err(QueryError::Duplicate(configuration.configuration_name));
    }

    let collection: Collection<ConfigurationModel> =
        client.database(database).collection(collection);

    collection.insert_one(configuration, None).await?;

    Ok(())
}
