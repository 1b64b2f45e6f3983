//! DID account document schema
//!
//! One record per decentralized identifier held by the mediator. Uniqueness
//! of `did` is enforced unconditionally; uniqueness of `alias` only applies
//! to non-empty arrays, via a partial index keyed on the first element.

use bson::{doc, oid::ObjectId, Document};
use mongodb::options::IndexOptions;
use serde::{Deserialize, Serialize};

use crate::db::mongo::{IndexConfig, IntoIndexes};

/// Collection name for DID accounts
pub const ACCOUNT_COLLECTION: &str = "user.account";

/// Account document stored in MongoDB
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct AccountDoc {
    /// MongoDB document ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub _id: Option<ObjectId>,

    /// Decentralized identifier, unique across all accounts
    pub did: String,

    /// Alternate identifiers for this account
    #[serde(default)]
    pub alias: Vec<String>,

    /// References into the message collection
    #[serde(rename = "messagesRef", default)]
    pub messages_ref: Vec<MessagesRef>,
}

/// Reference to a stored message, by content hash and recipient
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct MessagesRef {
    pub hash: String,
    pub recipient: String,
}

impl AccountDoc {
    /// Create a new account document for a freshly registered DID
    pub fn new(did: String) -> Self {
        Self {
            _id: None,
            did,
            alias: Vec::new(),
            messages_ref: Vec::new(),
        }
    }
}

impl IntoIndexes for AccountDoc {
    fn into_indices(_cfg: &IndexConfig) -> Vec<(Document, Option<IndexOptions>)> {
        vec![
            // Unique index on did
            (
                doc! { "did": 1 },
                Some(IndexOptions::builder().unique(true).build()),
            ),
            // Only enforce alias uniqueness on non-empty arrays: the partial
            // filter exempts documents without a first element, so absent or
            // empty alias arrays never collide
            (
                doc! { "alias": 1 },
                Some(
                    IndexOptions::builder()
                        .unique(true)
                        .partial_filter_expression(doc! { "alias.0": { "$exists": true } })
                        .build(),
                ),
            ),
            // Compound index for account lookup by message reference
            (
                doc! { "messagesRef.hash": 1, "messagesRef.recipient": 1 },
                None,
            ),
        ]
    }
}
