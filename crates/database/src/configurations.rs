// database/configurations.rs - helpers for the configurations collection

use mongodb::bson::{doc, Document};
use mongodb::options::IndexOptions;
use mongodb::{Client, Collection, IndexModel};

pub mod model;
pub mod query;

pub async fn create_configuration_name_index(client: &Client, database: &str, collection: &str) {
    // Lookups expect at most one document per name
    let options = IndexOptions::builder().unique(true).build();

    let model = IndexModel::builder()
        .keys(doc! { "configuration_name": 1 })
        .options(options)
        .build();

    let collection: Collection<Document> = client.database(database).collection(collection);

    collection
        .create_index(model, None)
        .await
        .expect("Failed to create configuration_name index.");
}
