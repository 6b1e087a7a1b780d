//! Billing configuration

use chrono::Duration;

/// Billing service configuration
///
/// The defaults give invoices a 7-day payment window and number them
/// from 100.
#[derive(Debug, Clone)]
pub struct BillingConfig {
    /// How long after issue an invoice is due
    pub due_in: Duration,
    /// Number assigned to the first invoice; later invoices count up from it
    pub first_invoice_no: u32,
}

impl BillingConfig {
    /// Create a config with the default payment window and numbering
    pub fn new() -> Self {
        Self {
            due_in: Duration::days(7),
            first_invoice_no: 100,
        }
    }

    /// Set the payment window
    #[must_use]
    pub fn with_due_in(mut self, due_in: Duration) -> Self {
        self.due_in = due_in;
        self
    }

    /// Set the first invoice number
    #[must_use]
    pub fn with_first_invoice_no(mut self, first_invoice_no: u32) -> Self {
        self.first_invoice_no = first_invoice_no;
        self
    }
}

impl Default for BillingConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_give_a_week_to_pay_from_invoice_100() {
        let config = BillingConfig::default();
        assert_eq!(config.due_in, Duration::days(7));
        assert_eq!(config.first_invoice_no, 100);
    }

    #[test]
    fn builders_override_the_defaults() {
        let config = BillingConfig::new()
            .with_due_in(Duration::days(14))
            .with_first_invoice_no(1);
        assert_eq!(config.due_in, Duration::days(14));
        assert_eq!(config.first_invoice_no, 1);
    }
}
