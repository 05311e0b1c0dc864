use serde::Deserialize;
use thiserror::Error;

use crate::StatusCode;

/// A job or instance as returned by the REST API or carried in an event.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StatusRecord {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub status: StatusCode,
    #[serde(default)]
    pub created: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventKind {
    NotebookStatus,
    InstanceStatus,
    Other(String),
}

impl EventKind {
    pub fn from_type(event_type: &str) -> Self {
        match event_type {
            "notebook_status" => Self::NotebookStatus,
            "instance_status" => Self::InstanceStatus,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn for_domain(domain: &str) -> Self {
        Self::from_type(&format!("{domain}_status"))
    }
}

impl<'de> Deserialize<'de> for EventKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::from_type(&raw))
    }
}

/// A pushed notification: `{"type": "instance_status", "data": {...}}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StatusEvent {
    #[serde(rename = "type")]
    pub kind: EventKind,
    pub data: StatusRecord,
}

#[derive(Debug, Error)]
pub enum RecordError {
    #[error("invalid record list: {0}")]
    Records(#[source] serde_json::Error),
    #[error("invalid event: {0}")]
    Event(#[source] serde_json::Error),
    #[error("invalid event on line {line}: {source}")]
    EventLine {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
}

pub fn parse_records(json: &str) -> Result<Vec<StatusRecord>, RecordError> {
    serde_json::from_str(json).map_err(RecordError::Records)
}

pub fn parse_event(json: &str) -> Result<StatusEvent, RecordError> {
    serde_json::from_str(json).map_err(RecordError::Event)
}

/// Parses newline-delimited events; blank lines are skipped, line numbers start at 1.
pub fn parse_events(ndjson: &str) -> Result<Vec<StatusEvent>, RecordError> {
    ndjson
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| {
            serde_json::from_str(line).map_err(|source| RecordError::EventLine {
                line: index + 1,
                source,
            })
        })
        .collect()
}
