//! Billing service
//!
//! Owns the invoice ledger and the invoice-number counter. Construct one
//! per process and pass it explicitly; there is no global instance. All
//! mutation goes through `&mut self`, which keeps single-caller access a
//! compile-time guarantee.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::{debug, info, warn};

use tally_types::{Invoice, InvoiceNo, Subscriber};

use crate::catalog::PlanCatalog;
use crate::clock::{Clock, SystemClock};
use crate::config::BillingConfig;
use crate::error::BillingError;

/// Prorated invoices bill half the computed plan amount.
const PRORATION_FACTOR: Decimal = dec!(0.5);

/// Per-invoice generation options
///
/// The default is a plain invoice: full period, no discount.
#[derive(Debug, Clone, Copy, Default)]
pub struct InvoiceOptions {
    prorated: bool,
    discount: Decimal,
}

impl InvoiceOptions {
    /// Create default options: not prorated, no discount
    pub fn new() -> Self {
        Self::default()
    }

    /// Bill half the plan amount for a partial period
    #[must_use]
    pub fn prorated(mut self) -> Self {
        self.prorated = true;
        self
    }

    /// Apply a flat discount; values of zero or below are ignored
    #[must_use]
    pub fn with_discount(mut self, discount: Decimal) -> Self {
        self.discount = discount;
        self
    }
}

/// Billing service: generates invoices and tracks their lifecycle
///
/// Generic over the clock so due dates and overdue sweeps are testable
/// without real delays; production callers use the `SystemClock` default.
#[derive(Debug, Clone)]
pub struct BillingService<C = SystemClock> {
    config: BillingConfig,
    clock: C,
    invoices: Vec<Invoice>,
    next_invoice_no: u32,
}

impl BillingService {
    /// Create a billing service on the wall clock
    pub fn new(config: BillingConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }
}

impl<C: Clock> BillingService<C> {
    /// Create a billing service reading time from the given clock
    pub fn with_clock(config: BillingConfig, clock: C) -> Self {
        let next_invoice_no = config.first_invoice_no;
        Self {
            config,
            clock,
            invoices: Vec::new(),
            next_invoice_no,
        }
    }

    /// Generate a plain invoice for the subscriber's current plan
    ///
    /// Full period, no discount; use `generate_invoice_with` for options.
    pub fn generate_invoice(
        &mut self,
        subscriber: &Subscriber,
        catalog: &PlanCatalog,
    ) -> Result<&Invoice, BillingError> {
        self.generate_invoice_with(subscriber, catalog, InvoiceOptions::default())
    }

    /// Generate an invoice with proration and discount options
    ///
    /// The base amount comes from the subscriber's plan. Proration halves
    /// it, and a positive discount is then subtracted. Over-discounting
    /// can push the total negative; the amount is kept as computed and the
    /// invoice is flagged in the log, never clamped.
    pub fn generate_invoice_with(
        &mut self,
        subscriber: &Subscriber,
        catalog: &PlanCatalog,
        options: InvoiceOptions,
    ) -> Result<&Invoice, BillingError> {
        let plan_id = subscriber.plan_id();
        let plan = catalog
            .get(plan_id)
            .ok_or(BillingError::PlanNotFound(plan_id))?;

        let mut amount = plan.billing_amount();
        if options.prorated {
            amount *= PRORATION_FACTOR;
        }
        if options.discount > Decimal::ZERO {
            amount -= options.discount;
        }
        if amount < Decimal::ZERO {
            warn!(
                subscriber_id = %subscriber.id(),
                %amount,
                "Discount exceeds the billable amount, issuing a negative invoice"
            );
        }

        let invoice_no = self.next_invoice_no();
        let due_date = self.clock.now() + self.config.due_in;
        debug!(
            %invoice_no,
            subscriber_id = %subscriber.id(),
            plan = %plan.name(),
            %amount,
            due = %due_date,
            "Generated invoice"
        );

        self.invoices
            .push(Invoice::new(invoice_no, subscriber.id(), amount, due_date));
        Ok(self
            .invoices
            .last()
            .expect("ledger is non-empty after push"))
    }

    /// Record payment for an invoice by number
    ///
    /// Scans the ledger; an unknown number is a recoverable
    /// `InvoiceNotFound` and leaves the ledger untouched. Overdue invoices
    /// can still be paid.
    pub fn record_payment(&mut self, invoice_no: InvoiceNo) -> Result<&Invoice, BillingError> {
        let invoice = self
            .invoices
            .iter_mut()
            .find(|invoice| invoice.invoice_no() == invoice_no)
            .ok_or(BillingError::InvoiceNotFound(invoice_no))?;

        invoice.mark_paid();
        info!(%invoice_no, amount = %invoice.amount(), "Invoice paid");
        Ok(invoice)
    }

    /// Sweep the ledger and mark lapsed invoices overdue
    ///
    /// Every pending invoice whose due date is strictly before the current
    /// time moves to overdue. Idempotent: running the sweep again without
    /// the clock moving marks nothing further. Returns how many invoices
    /// were newly marked.
    pub fn check_overdues(&mut self) -> usize {
        let now = self.clock.now();
        let mut marked = 0;
        for invoice in &mut self.invoices {
            if invoice.is_pending() && invoice.due_date() < now {
                invoice.mark_overdue();
                info!(
                    invoice_no = %invoice.invoice_no(),
                    due = %invoice.due_date(),
                    "Invoice overdue"
                );
                marked += 1;
            }
        }
        if marked > 0 {
            debug!(count = marked, "Overdue sweep marked invoices");
        }
        marked
    }

    /// Total collected revenue: the sum over paid invoices only
    pub fn collected_revenue(&self) -> Decimal {
        self.invoices
            .iter()
            .filter(|invoice| invoice.is_paid())
            .map(Invoice::amount)
            .sum()
    }

    /// All invoices ever generated, in insertion order
    pub fn invoices(&self) -> impl Iterator<Item = &Invoice> + '_ {
        self.invoices.iter()
    }

    /// Look up a single invoice by number
    pub fn invoice(&self, invoice_no: InvoiceNo) -> Option<&Invoice> {
        self.invoices
            .iter()
            .find(|invoice| invoice.invoice_no() == invoice_no)
    }

    /// Assign the next invoice number, advancing the counter
    fn next_invoice_no(&mut self) -> InvoiceNo {
        let no = InvoiceNo(self.next_invoice_no);
        self.next_invoice_no += 1;
        no
    }
}
