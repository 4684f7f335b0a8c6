#![forbid(unsafe_code)]

//! Page-session event collection.
//!
//! Starts empty and is filled by whatever loader fetches the calendar's
//! events. Records are kept as opaque JSON objects; nothing here depends on
//! their fields.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum EventStoreError {
    #[error("failed to parse events JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("events payload is not a JSON array")]
    NotAnArray,
    #[error("event at index {index} is not a JSON object")]
    NotAnObject { index: usize },
}

/// One event as delivered by the API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventRecord(Map<String, Value>);

impl EventRecord {
    #[must_use]
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    #[must_use]
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }
}

impl From<Map<String, Value>> for EventRecord {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}

/// Ordered, replaceable collection of [`EventRecord`]s.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventStore {
    records: Vec<EventRecord>,
}

impl EventStore {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Swap in a new sequence, dropping the old one.
    pub fn replace(&mut self, records: Vec<EventRecord>) {
        debug!(
            previous = self.records.len(),
            count = records.len(),
            "replacing events"
        );
        self.records = records;
    }

    /// Replace the contents with a JSON array of objects. On error the
    /// current contents are kept.
    pub fn load_json(&mut self, json: &str) -> Result<usize, EventStoreError> {
        let Value::Array(items) = serde_json::from_str::<Value>(json)? else {
            return Err(EventStoreError::NotAnArray);
        };
        let records = items
            .into_iter()
            .enumerate()
            .map(|(index, item)| match item {
                Value::Object(fields) => Ok(EventRecord(fields)),
                _ => Err(EventStoreError::NotAnObject { index }),
            })
            .collect::<Result<Vec<_>, _>>()?;
        let count = records.len();
        self.replace(records);
        Ok(count)
    }

    /// Serialize the collection back to a JSON array.
    pub fn to_json(&self) -> Result<String, EventStoreError> {
        Ok(serde_json::to_string(&self.records)?)
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&EventRecord> {
        self.records.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &EventRecord> + '_ {
        self.records.iter()
    }
}
