//! Optional filters passed through to the event source.

use serde::{Deserialize, Serialize};

use crate::models::calendar_event::EventKind;

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventFilters {
    pub property_id: Option<String>,
    pub kind: Option<EventKind>,
    pub status: Option<String>,
}

impl EventFilters {
    pub fn is_empty(&self) -> bool {
        self.property_id.is_none() && self.kind.is_none() && self.status.is_none()
    }

    /// Query-string pairs for the filters that are set, in a stable order.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(ref property_id) = self.property_id {
            pairs.push(("propertyId", property_id.clone()));
        }
        if let Some(kind) = self.kind {
            pairs.push(("type", kind.as_str().to_string()));
        }
        if let Some(ref status) = self.status {
            pairs.push(("status", status.clone()));
        }
        pairs
    }
}
