//! The property set sent with each annotation request.

use std::collections::BTreeMap;

use super::Annotators;

const ANNOTATORS_KEY: &str = "annotators";
const OUTPUT_FORMAT_KEY: &str = "outputFormat";

/// Annotator list plus any extra pipeline properties.
#[derive(Debug, Clone, PartialEq)]
pub struct Properties {
    annotators: Annotators,
    extra: BTreeMap<String, String>,
}

impl Properties {
    pub fn new(annotators: Annotators) -> Self {
        Self {
            annotators,
            extra: BTreeMap::new(),
        }
    }

    /// Add extra properties. `annotators` and `outputFormat` are reserved and skipped.
    pub fn with_extra(mut self, extra: &BTreeMap<String, String>) -> Self {
        for (key, value) in extra {
            self.set(key, value);
        }
        self
    }

    /// Set a single property, replacing any earlier value for `key`.
    pub fn with_property(mut self, key: &str, value: &str) -> Self {
        self.set(key, value);
        self
    }

    fn set(&mut self, key: &str, value: &str) {
        if key == ANNOTATORS_KEY || key == OUTPUT_FORMAT_KEY {
            tracing::warn!("Ignoring reserved pipeline property '{}'", key);
            return;
        }
        self.extra.insert(key.to_string(), value.to_string());
    }

    pub fn annotators(&self) -> &Annotators {
        &self.annotators
    }

    /// JSON object for the server's `properties` query parameter.
    pub fn to_json(&self) -> String {
        let mut map = serde_json::Map::new();
        for (key, value) in &self.extra {
            map.insert(key.clone(), serde_json::Value::String(value.clone()));
        }
        map.insert(
            ANNOTATORS_KEY.to_string(),
            serde_json::Value::String(self.annotators.to_string()),
        );
        map.insert(
            OUTPUT_FORMAT_KEY.to_string(),
            serde_json::Value::String("json".to_string()),
        );
        serde_json::Value::Object(map).to_string()
    }
}
