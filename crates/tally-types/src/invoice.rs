//! Invoice types

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::SubscriberId;

/// Unique invoice number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InvoiceNo(pub u32);

impl InvoiceNo {
    /// Create a new invoice number
    pub const fn new(no: u32) -> Self {
        Self(no)
    }
}

impl std::fmt::Display for InvoiceNo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for InvoiceNo {
    fn from(no: u32) -> Self {
        Self(no)
    }
}

/// Invoice lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvoiceState {
    /// Issued and awaiting payment
    Pending,
    /// Payment recorded
    Paid,
    /// Due date passed without payment
    Overdue,
}

impl InvoiceState {
    /// Get the display name of this state
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Paid => "Paid",
            Self::Overdue => "Overdue",
        }
    }
}

impl std::fmt::Display for InvoiceState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An issued invoice
///
/// The number, subscriber, amount, and due date are fixed at construction;
/// only the state moves, through `mark_paid` and `mark_overdue`. Both
/// setters are unconditional: when to call them is billing-service policy,
/// not the invoice's.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Invoice {
    invoice_no: InvoiceNo,
    subscriber_id: SubscriberId,
    amount: Decimal,
    due_date: DateTime<Utc>,
    state: InvoiceState,
}

impl Invoice {
    /// Create a new pending invoice
    pub fn new(
        invoice_no: InvoiceNo,
        subscriber_id: SubscriberId,
        amount: Decimal,
        due_date: DateTime<Utc>,
    ) -> Self {
        Self {
            invoice_no,
            subscriber_id,
            amount,
            due_date,
            state: InvoiceState::Pending,
        }
    }

    /// Invoice number
    pub const fn invoice_no(&self) -> InvoiceNo {
        self.invoice_no
    }

    /// Subscriber the invoice was issued to
    pub const fn subscriber_id(&self) -> SubscriberId {
        self.subscriber_id
    }

    /// Billed amount
    pub const fn amount(&self) -> Decimal {
        self.amount
    }

    /// When payment is due
    pub const fn due_date(&self) -> DateTime<Utc> {
        self.due_date
    }

    /// Current state
    pub const fn state(&self) -> InvoiceState {
        self.state
    }

    /// Check if the invoice is awaiting payment
    pub fn is_pending(&self) -> bool {
        self.state == InvoiceState::Pending
    }

    /// Check if the invoice has been paid
    pub fn is_paid(&self) -> bool {
        self.state == InvoiceState::Paid
    }

    /// Check if the invoice is past due
    pub fn is_overdue(&self) -> bool {
        self.state == InvoiceState::Overdue
    }

    /// Record payment; settles overdue invoices too
    pub fn mark_paid(&mut self) {
        self.state = InvoiceState::Paid;
    }

    /// Flag the invoice as past due
    pub fn mark_overdue(&mut self) {
        self.state = InvoiceState::Overdue;
    }
}

impl std::fmt::Display for Invoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Invoice#{} | Subscriber: {} | Amount: {:.2} | Due: {} | State: {}",
            self.invoice_no,
            self.subscriber_id,
            self.amount,
            self.due_date.format("%Y-%m-%d"),
            self.state
        )
    }
}
