// database/configurations/model.rs - model for the configurations collection

use mongodb::bson::Document;
use serde::{Deserialize, Serialize};

// A configuration is schema-less apart from its name; everything else is
// carried as-is in `values` and flattens to top-level fields in the store.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigurationModel {
    pub configuration_name: String,
    #[serde(flatten)]
    pub values: Document,
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{doc, to_document};

    #[test]
    fn values_flatten_to_top_level_fields() {
        let model = ConfigurationModel {
            configuration_name: "prod-east".to_string(),
            values: doc! { "region": "us-east-1", "replicas": 3 },
        };

        let document = to_document(&model).unwrap();

        assert_eq!(
            document.get_str("configuration_name").unwrap(),
            "prod-east"
        );
        assert_eq!(document.get_str("region").unwrap(), "us-east-1");
        assert!(document.get("values").is_none());
    }
}
