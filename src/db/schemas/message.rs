//! Stored message document schema
//!
//! Messages held by the mediator awaiting delivery or retained for audit.
//! Mediator-typed messages expire through a TTL index on `ts`; the engine's
//! background sweep deletes them once `ts` plus the configured duration has
//! elapsed. User-typed messages never expire automatically.

use bson::{doc, oid::ObjectId, DateTime, Document};
use mongodb::options::IndexOptions;
use serde::{Deserialize, Serialize};

use crate::db::mongo::{IndexConfig, IntoIndexes};

/// Collection name for stored messages
pub const MESSAGE_COLLECTION: &str = "messages";

/// Name of the TTL index on the message collection
pub const MESSAGE_TTL_INDEX: &str = "message-ttl-index";

/// Default message expiration: 7 days * 24 hours * 60 minutes * 60 seconds
pub const DEFAULT_MESSAGE_TTL_SECONDS: u64 = 7 * 24 * 60 * 60;

/// Who a stored message belongs to, which decides its retention
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MessageType {
    /// Mediator-internal message, expired by the TTL index
    #[default]
    Mediator,
    /// User message, retained until the application deletes it
    User,
}

/// Message document stored in MongoDB
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct MessageDoc {
    /// MongoDB document ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub _id: Option<ObjectId>,

    /// Creation timestamp the TTL index expires against
    pub ts: DateTime,

    /// Retention class of this message
    pub message_type: MessageType,

    /// Message payload, opaque to the bootstrap
    #[serde(default)]
    pub message: Document,
}

impl IntoIndexes for MessageDoc {
    fn into_indices(cfg: &IndexConfig) -> Vec<(Document, Option<IndexOptions>)> {
        vec![
            // TTL index scoped to Mediator-typed messages only. Deletion is
            // the engine's periodic background sweep, not a real-time
            // guarantee.
            (
                doc! { "ts": 1 },
                Some(
                    IndexOptions::builder()
                        .name(MESSAGE_TTL_INDEX.to_string())
                        .partial_filter_expression(doc! { "message_type": "Mediator" })
                        .expire_after(cfg.message_ttl)
                        .build(),
                ),
            ),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn cfg_with_ttl(secs: u64) -> IndexConfig {
        IndexConfig {
            message_ttl: Duration::from_secs(secs),
        }
    }

    #[test]
    fn ttl_index_matches_deployment_definition() {
        let indices = MessageDoc::into_indices(&cfg_with_ttl(DEFAULT_MESSAGE_TTL_SECONDS));
        assert_eq!(indices.len(), 1);

        let (keys, opts) = &indices[0];
        assert_eq!(keys, &doc! { "ts": 1 });

        let opts = opts.as_ref().unwrap();
        assert_eq!(opts.name.as_deref(), Some("message-ttl-index"));
        assert_eq!(opts.expire_after, Some(Duration::from_secs(604_800)));
        assert_eq!(
            opts.partial_filter_expression,
            Some(doc! { "message_type": "Mediator" })
        );
        // Uniqueness is never enforced on the message timestamp
        assert_eq!(opts.unique, None);
    }

    #[test]
    fn ttl_index_honors_configured_duration() {
        let indices = MessageDoc::into_indices(&cfg_with_ttl(3600));
        let (_, opts) = &indices[0];
        assert_eq!(
            opts.as_ref().unwrap().expire_after,
            Some(Duration::from_secs(3600))
        );
    }

    #[test]
    fn message_type_serializes_as_plain_strings() {
        assert_eq!(
            bson::to_bson(&MessageType::Mediator).unwrap(),
            bson::Bson::String("Mediator".to_string())
        );
        assert_eq!(
            bson::to_bson(&MessageType::User).unwrap(),
            bson::Bson::String("User".to_string())
        );
    }

    #[test]
    fn message_doc_round_trips() {
        let msg = MessageDoc {
            _id: None,
            ts: DateTime::now(),
            message_type: MessageType::User,
            message: doc! { "body": "hello", "attachments": [] },
        };

        let doc = bson::to_document(&msg).unwrap();
        assert_eq!(doc.get_str("message_type").unwrap(), "User");

        let back: MessageDoc = bson::from_document(doc).unwrap();
        assert_eq!(back.message_type, MessageType::User);
        assert_eq!(back.message.get_str("body").unwrap(), "hello");
    }
}
