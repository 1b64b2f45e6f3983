//! Outbound message document schema
//!
//! Messages queued for delivery to a recipient. Shape and lifecycle are
//! owned entirely by the mediation service; the bootstrap only guarantees
//! that the collection exists and attaches no indexes.

use bson::{oid::ObjectId, Document};
use mongodb::options::IndexOptions;
use serde::{Deserialize, Serialize};

use crate::db::mongo::{IndexConfig, IntoIndexes};

/// Collection name for outbound messages
pub const OUTBOUND_COLLECTION: &str = "messages.outbound";

/// Outbound message document, opaque beyond its ID
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct OutboundMessageDoc {
    /// MongoDB document ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub _id: Option<ObjectId>,

    /// Application-owned payload
    #[serde(flatten)]
    pub payload: Document,
}

impl IntoIndexes for OutboundMessageDoc {
    fn into_indices(_cfg: &IndexConfig) -> Vec<(Document, Option<IndexOptions>)> {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn outbound_declares_no_indexes() {
        let cfg = IndexConfig {
            message_ttl: Duration::from_secs(604_800),
        };
        assert!(OutboundMessageDoc::into_indices(&cfg).is_empty());
    }
}
