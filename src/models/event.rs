use super::collection::{Collection, Index};
use super::record::{Record, non_empty};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Calendar event, persisted in the `events` collection.
///
/// Dates and times are kept as the strings the client wrote
/// (`YYYY-MM-DD`, `HH:MM`); [`crate::core::range`] turns them into instants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    #[serde(default)]
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Fields written by other clients, kept so records round-trip.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Event {
    pub fn new(id: impl Into<String>, title: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            date: date.into(),
            time: None,
            start_date: None,
            start_time: None,
            end_date: None,
            end_time: None,
            category: String::new(),
            description: None,
            location: None,
            extra: Map::new(),
        }
    }

    pub fn at(mut self, time: impl Into<String>) -> Self {
        self.time = Some(time.into());
        self
    }

    pub fn ending(mut self, end_date: Option<String>, end_time: Option<String>) -> Self {
        self.end_date = end_date;
        self.end_time = end_time;
        self
    }

    pub fn in_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }
}

impl Record for Event {
    const COLLECTION: Collection = Collection::Events;

    fn key(&self) -> &str {
        &self.id
    }

    fn index_value(&self, index: Index) -> Option<&str> {
        match index {
            Index::Date => non_empty(&self.date),
            Index::Category => non_empty(&self.category),
            _ => None,
        }
    }
}
