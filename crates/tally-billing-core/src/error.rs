//! Billing errors

use thiserror::Error;

use tally_types::{InvoiceNo, PlanId};

/// Billing errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BillingError {
    /// No invoice with the given number
    #[error("invoice not found: {0}")]
    InvoiceNotFound(InvoiceNo),

    /// A subscriber references a plan the catalog does not have
    #[error("plan not found: {0}")]
    PlanNotFound(PlanId),
}

impl BillingError {
    /// Check if this is a not found error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::InvoiceNotFound(_) | Self::PlanNotFound(_))
    }
}
