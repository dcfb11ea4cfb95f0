use super::collection::Collection;
use super::record::Record;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub color: String,
}

impl Category {
    pub fn new(id: &str, name: &str, color: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            color: color.to_string(),
        }
    }
}

impl Record for Category {
    const COLLECTION: Collection = Collection::Categories;

    fn key(&self) -> &str {
        &self.id
    }
}
