//! Tally Billing Core - Billing business logic
//!
//! In-memory subscription billing: plan catalog lookups, invoice
//! generation with proration and discounts, payment recording, overdue
//! sweeps, and revenue totals.
//!
//! # Example
//!
//! ```rust,ignore
//! use rust_decimal_macros::dec;
//! use tally_billing_core::{BillingConfig, BillingService, PlanCatalog};
//! use tally_types::{BillingInterval, Plan, PlanId, Subscriber, SubscriberId};
//!
//! let catalog = PlanCatalog::new().with_plan(Plan::new(
//!     PlanId(1),
//!     "Basic Monthly",
//!     BillingInterval::Monthly,
//!     dec!(500),
//! ));
//! let alice = Subscriber::new(
//!     SubscriberId(101),
//!     "Alice",
//!     "alice@mail.com",
//!     catalog.get(PlanId(1)).unwrap(),
//! );
//!
//! let mut billing = BillingService::new(BillingConfig::default());
//! let invoice_no = billing.generate_invoice(&alice, &catalog)?.invoice_no();
//! billing.record_payment(invoice_no)?;
//! assert_eq!(billing.collected_revenue(), dec!(500));
//! ```

pub mod catalog;
pub mod clock;
pub mod config;
pub mod error;
pub mod service;

pub use catalog::PlanCatalog;
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::BillingConfig;
pub use error::BillingError;
pub use service::{BillingService, InvoiceOptions};

// Re-export the invoice types from tally-types for convenience
pub use tally_types::{Invoice, InvoiceNo, InvoiceState};
