//! Configuration for the mediator datastore bootstrap
//!
//! CLI arguments and environment variable handling using clap.
//! Defaults mirror the values the mediator deployment has always shipped
//! with, so a run with no configuration provisions the same schema.

use clap::Parser;

use crate::db::schemas::{
    ACCOUNT_COLLECTION, DEFAULT_MESSAGE_TTL_SECONDS, MESSAGE_COLLECTION, OUTBOUND_COLLECTION,
};

/// mediator-setup - one-shot database bootstrap for the mediator datastore
#[derive(Parser, Debug, Clone)]
#[command(name = "mediator-setup")]
#[command(about = "Provisions the admin user, collections and indexes for the mediator datastore")]
pub struct Args {
    /// MongoDB connection URI (administrative connection)
    #[arg(long, env = "MONGODB_URI", default_value = "mongodb://localhost:27017")]
    pub mongodb_uri: String,

    /// Target database name
    #[arg(long, env = "MONGODB_DB", default_value = "mediator")]
    pub mongodb_db: String,

    /// Username of the application user to create
    #[arg(long, env = "MEDIATOR_ADMIN_USER", default_value = "admin")]
    pub admin_username: String,

    /// Password of the application user to create
    #[arg(long, env = "MEDIATOR_ADMIN_PASSWORD", default_value = "admin")]
    pub admin_password: String,

    /// Name of the DID account collection
    #[arg(long, env = "ACCOUNT_COLLECTION", default_value = ACCOUNT_COLLECTION)]
    pub account_collection: String,

    /// Name of the stored-message collection
    #[arg(long, env = "MESSAGE_COLLECTION", default_value = MESSAGE_COLLECTION)]
    pub message_collection: String,

    /// Name of the outbound-message collection
    #[arg(long, env = "OUTBOUND_COLLECTION", default_value = OUTBOUND_COLLECTION)]
    pub outbound_collection: String,

    /// Seconds after which Mediator-typed messages expire
    #[arg(long, env = "MESSAGE_TTL_SECONDS", default_value_t = DEFAULT_MESSAGE_TTL_SECONDS)]
    pub message_ttl_seconds: u64,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

impl Args {
    /// Collection names in creation order
    pub fn collection_names(&self) -> [&str; 3] {
        [
            &self.account_collection,
            &self.message_collection,
            &self.outbound_collection,
        ]
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.message_ttl_seconds == 0 {
            return Err("MESSAGE_TTL_SECONDS must be greater than zero".to_string());
        }

        let names = self.collection_names();
        if names.iter().any(|n| n.is_empty()) {
            return Err("collection names must not be empty".to_string());
        }
        for (i, a) in names.iter().enumerate() {
            if names[i + 1..].contains(a) {
                return Err(format!("collection names must be distinct, '{}' repeats", a));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Args {
        Args::parse_from(std::iter::once("mediator-setup").chain(argv.iter().copied()))
    }

    #[test]
    fn defaults_match_deployment_literals() {
        let args = parse(&[]);
        assert_eq!(args.mongodb_db, "mediator");
        assert_eq!(args.admin_username, "admin");
        assert_eq!(args.admin_password, "admin");
        assert_eq!(args.account_collection, "user.account");
        assert_eq!(args.message_collection, "messages");
        assert_eq!(args.outbound_collection, "messages.outbound");
        assert_eq!(args.message_ttl_seconds, 604_800);
        assert!(args.validate().is_ok());
    }

    #[test]
    fn zero_ttl_rejected() {
        let args = parse(&["--message-ttl-seconds", "0"]);
        assert!(args.validate().is_err());
    }

    #[test]
    fn duplicate_collection_names_rejected() {
        let args = parse(&["--outbound-collection", "messages"]);
        assert!(args.validate().is_err());
    }

    #[test]
    fn collection_names_in_creation_order() {
        let args = parse(&[]);
        assert_eq!(
            args.collection_names(),
            ["user.account", "messages", "messages.outbound"]
        );
    }
}
