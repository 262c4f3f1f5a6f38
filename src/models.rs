use serde::{Deserialize, Serialize};
use serde_json::Value;

/// How much of each holiday event `list()` returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Provider event objects, untouched.
    #[default]
    Full,
    /// `{ name, date }` pairs.
    Minimal,
    /// Bare `YYYY-MM-DD` strings.
    DatesOnly,
}

/// Body of the events endpoint. Only `items` matters here.
///
/// Items stay as raw JSON so that full output hands back exactly what the provider sent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventsResponse {
    #[serde(default)]
    pub items: Option<Vec<Value>>,
}

/// The fields of an all-day event this crate relies on.
///
/// Only `start.date` is needed for sorting; `summary` is required by minimal output alone.
#[derive(Debug, Clone, Deserialize)]
pub struct EventItem {
    #[serde(default)]
    pub summary: Option<String>,
    pub start: EventStart,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EventStart {
    /// `YYYY-MM-DD`
    pub date: String,
}

/// Minimal holiday record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    pub name: String,
    pub date: String,
}

/// Result of `list()`; the variant follows the query's [`OutputMode`].
///
/// Serializes as a plain JSON array in every case.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Holidays {
    Full(Vec<Value>),
    Minimal(Vec<Holiday>),
    DatesOnly(Vec<String>),
}

impl Holidays {
    pub fn len(&self) -> usize {
        match self {
            Holidays::Full(v) => v.len(),
            Holidays::Minimal(v) => v.len(),
            Holidays::DatesOnly(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
