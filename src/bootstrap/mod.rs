//! One-shot datastore bootstrap
//!
//! Provisions the mediator database in order: application user, collections,
//! indexes. Each step aborts the whole run on error; no partial-failure
//! recovery is attempted. Collection creation is the one step made
//! idempotent (a collection that already exists is a logged no-op), since
//! the engine would otherwise error on it. User creation is not: re-running
//! the bootstrap against an initialized instance fails there, which is the
//! expected behavior for a one-shot provisioning artifact.

use std::time::Duration;

use bson::doc;
use tracing::info;

use crate::config::Args;
use crate::db::schemas::{AccountDoc, MessageDoc, OutboundMessageDoc};
use crate::db::{IndexConfig, MongoClient};
use crate::types::{Result, SetupError};

/// Run the full bootstrap sequence against a fresh database instance
pub async fn run(args: &Args) -> Result<()> {
    args.validate().map_err(SetupError::Config)?;

    let mongo = MongoClient::new(&args.mongodb_uri, &args.mongodb_db).await?;

    create_admin_user(&mongo, args).await?;
    create_collections(&mongo, args).await?;
    create_indexes(&mongo, args).await?;

    info!("Bootstrap complete for database '{}'", mongo.db_name());
    Ok(())
}

/// Create the application user with readWrite scoped to the target database
///
/// The user is created in the target database itself. Fails if the user
/// already exists; the error propagates and aborts the run.
async fn create_admin_user(mongo: &MongoClient, args: &Args) -> Result<()> {
    let command = doc! {
        "createUser": &args.admin_username,
        "pwd": &args.admin_password,
        "roles": [
            { "role": "readWrite", "db": &args.mongodb_db }
        ],
    };

    mongo
        .inner()
        .database(&args.mongodb_db)
        .run_command(command)
        .await
        .map_err(|e| {
            SetupError::Database(format!(
                "Failed to create user '{}': {}",
                args.admin_username, e
            ))
        })?;

    info!(
        "Created user '{}' with readWrite on '{}'",
        args.admin_username, args.mongodb_db
    );
    Ok(())
}

/// Create the three collections, skipping any that already exist
async fn create_collections(mongo: &MongoClient, args: &Args) -> Result<()> {
    let db = mongo.inner().database(&args.mongodb_db);

    let existing = db
        .list_collection_names()
        .await
        .map_err(|e| SetupError::Database(format!("Failed to list collections: {}", e)))?;

    for name in args.collection_names() {
        if existing.iter().any(|c| c == name) {
            info!("Collection '{}' already exists, skipping", name);
            continue;
        }

        db.create_collection(name)
            .await
            .map_err(|e| {
                SetupError::Database(format!("Failed to create collection '{}': {}", name, e))
            })?;

        info!("Created collection '{}'", name);
    }

    Ok(())
}

/// Apply the schema-defined indexes on the account and message collections
async fn create_indexes(mongo: &MongoClient, args: &Args) -> Result<()> {
    let cfg = IndexConfig {
        message_ttl: Duration::from_secs(args.message_ttl_seconds),
    };

    mongo
        .collection::<AccountDoc>(&args.account_collection, &cfg)
        .await?;
    mongo
        .collection::<MessageDoc>(&args.message_collection, &cfg)
        .await?;
    // No indexes on the outbound collection; the handle still validates
    // that the schema declares none
    mongo
        .collection::<OutboundMessageDoc>(&args.outbound_collection, &cfg)
        .await?;

    Ok(())
}
