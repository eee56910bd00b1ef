//! Configuration management
//!
//! This module handles loading and validating configuration from
//! environment variables: the provider application id, the provider API
//! endpoint, the single-chain allow-list, and the auto-provisioning policy.

use std::env;

use thiserror::Error;

use crate::wallet::ChainType;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Unsupported chain: '{0}'. Expected: stellar")]
    UnsupportedChain(String),
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Application identifier sent with every provider request
    pub app_id: String,

    /// Base URL of the wallet provider API
    pub provider_base_url: String,

    /// The single chain wallets are provisioned on
    pub chain: ChainType,

    /// Whether a wallet is provisioned automatically right after login
    pub create_wallet_on_login: bool,

    /// Log level (RUST_LOG)
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors)
        dotenvy::dotenv().ok();

        let app_id = env::var("PROVIDER_APP_ID")
            .map_err(|_| ConfigError::MissingEnvVar("PROVIDER_APP_ID".to_string()))?;

        let provider_base_url = env::var("PROVIDER_BASE_URL")
            .unwrap_or_else(|_| "http://localhost:4000".to_string());

        let chain = parse_chain(&env::var("ENABLED_CHAIN").unwrap_or_else(|_| "stellar".to_string()))?;

        let create_wallet_on_login = env::var("CREATE_WALLET_ON_LOGIN")
            .map(|v| parse_bool_flag(&v))
            .unwrap_or(false);

        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

        Ok(Config {
            app_id,
            provider_base_url,
            chain,
            create_wallet_on_login,
            log_level,
        })
    }
}

/// Parse the chain allow-list entry. Exactly one chain is supported.
fn parse_chain(value: &str) -> Result<ChainType, ConfigError> {
    match value.to_lowercase().as_str() {
        "stellar" => Ok(ChainType::Stellar),
        other => Err(ConfigError::UnsupportedChain(other.to_string())),
    }
}

fn parse_bool_flag(value: &str) -> bool {
    matches!(value.to_lowercase().as_str(), "1" | "true" | "yes")
}
