use super::collection::{Collection, Index};
use serde::{Serialize, de::DeserializeOwned};

/// A record stored in one of the named collections.
///
/// The record is persisted as a JSON body keyed by [`Record::key`]; the
/// values returned by [`Record::index_value`] are mirrored into indexed
/// columns so `get_by_index` never has to decode bodies.
pub trait Record: Serialize + DeserializeOwned {
    const COLLECTION: Collection;

    fn key(&self) -> &str;

    /// Value for a secondary index. `None` keeps the record out of that index.
    fn index_value(&self, _index: Index) -> Option<&str> {
        None
    }
}

/// Treat empty strings like missing values.
pub(crate) fn non_empty(s: &str) -> Option<&str> {
    if s.trim().is_empty() { None } else { Some(s) }
}
