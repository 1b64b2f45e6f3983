//! Database schemas for the mediator datastore
//!
//! Defines the MongoDB document structures and index definitions for DID
//! accounts, stored messages, and outbound messages.

mod account;
mod message;
mod outbound;

pub use account::{AccountDoc, MessagesRef, ACCOUNT_COLLECTION};
pub use message::{
    MessageDoc, MessageType, DEFAULT_MESSAGE_TTL_SECONDS, MESSAGE_COLLECTION, MESSAGE_TTL_INDEX,
};
pub use outbound::{OutboundMessageDoc, OUTBOUND_COLLECTION};
