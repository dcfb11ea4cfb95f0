use super::collection::Collection;
use super::record::Record;
use serde::{Deserialize, Serialize};

/// One preference. Values are always strings (`"true"`, `"15"`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Setting {
    pub key: String,
    pub value: String,
}

impl Setting {
    pub fn new(key: &str, value: &str) -> Self {
        Self {
            key: key.to_string(),
            value: value.to_string(),
        }
    }
}

impl Record for Setting {
    const COLLECTION: Collection = Collection::Settings;

    fn key(&self) -> &str {
        &self.key
    }
}
