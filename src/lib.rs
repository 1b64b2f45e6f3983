//! mediator-setup - database bootstrap for the mediator datastore
//!
//! One-shot provisioning binary run at deployment time, before the
//! mediation service starts. Against a fresh MongoDB instance it creates
//! the application user, the three mediator collections, and the indexes
//! enforcing DID uniqueness, alias uniqueness on non-empty arrays, message
//! lookup, and automatic expiration of Mediator-typed messages.

pub mod bootstrap;
pub mod config;
pub mod db;
pub mod types;

pub use config::Args;
pub use db::{IndexConfig, IntoIndexes, MongoClient, MongoCollection};
pub use types::{Result, SetupError};
