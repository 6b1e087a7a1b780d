//! Configuration for the billing console.

use chrono::Duration;
use tally_billing_core::BillingConfig;

/// Billing console configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Billing core configuration
    pub billing: BillingConfig,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let due_days: i64 = std::env::var("BILLING_DUE_DAYS")
            .unwrap_or_else(|_| "7".to_string())
            .parse()
            .map_err(|_| ConfigError::Invalid("BILLING_DUE_DAYS"))?;

        let first_invoice_no: u32 = std::env::var("BILLING_FIRST_INVOICE_NO")
            .unwrap_or_else(|_| "100".to_string())
            .parse()
            .map_err(|_| ConfigError::Invalid("BILLING_FIRST_INVOICE_NO"))?;

        Ok(Self {
            billing: BillingConfig::new()
                .with_due_in(Duration::days(due_days))
                .with_first_invoice_no(first_invoice_no),
        })
    }
}

/// Configuration error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable: {0}")]
    Invalid(&'static str),
}
