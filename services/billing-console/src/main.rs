//! Tally Billing Console
//!
//! Walks a small subscriber base through one billing cycle: seed the plan
//! catalog, enroll subscribers, generate invoices (plain, prorated and
//! discounted), settle payments, sweep for overdues and report revenue.

mod config;

use rust_decimal_macros::dec;
use tally_billing_core::{BillingService, InvoiceOptions, PlanCatalog};
use tally_types::{BillingInterval, InvoiceNo, Plan, PlanId, Subscriber, SubscriberId};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive("billing_console=debug".parse()?))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Tally Billing Console");

    let config = Config::from_env()?;
    tracing::info!(
        due_days = config.billing.due_in.num_days(),
        first_invoice_no = config.billing.first_invoice_no,
        "Configuration loaded"
    );

    let basic = Plan::new(PlanId(1), "Basic Monthly", BillingInterval::Monthly, dec!(500))
        .with_features(["Feature A", "Feature B"])
        .with_trial_days(7);
    let premium = Plan::new(PlanId(2), "Premium Annual", BillingInterval::Annual, dec!(1000))
        .with_features(["Feature X", "Feature Y", "Feature Z"])
        .with_trial_days(14);

    println!("{basic}");
    println!("{premium}");

    let catalog = PlanCatalog::new()
        .with_plan(basic.clone())
        .with_plan(premium.clone());

    let mut alice = Subscriber::new(SubscriberId(101), "Alice", "alice@mail.com", &basic);
    let bob = Subscriber::new(SubscriberId(102), "Bob", "bob@mail.com", &premium);

    let mut billing = BillingService::new(config.billing);

    let first = billing.generate_invoice(&alice, &catalog)?.invoice_no();
    billing.generate_invoice_with(
        &bob,
        &catalog,
        InvoiceOptions::new().prorated().with_discount(dec!(100)),
    )?;

    for invoice in billing.invoices() {
        println!("{invoice}");
    }

    settle(&mut billing, first);
    settle(&mut billing, InvoiceNo(999));

    let overdue = billing.check_overdues();
    tracing::info!(overdue, "Overdue sweep complete");

    println!("Total Revenue Collected: {:.2}", billing.collected_revenue());

    let change = alice.change_plan(&premium);
    println!("{change}");

    Ok(())
}

fn settle(billing: &mut BillingService, invoice_no: InvoiceNo) {
    match billing.record_payment(invoice_no) {
        Ok(invoice) => println!("Invoice {} marked as Paid.", invoice.invoice_no()),
        Err(err) if err.is_not_found() => println!("Invoice not found."),
        Err(err) => tracing::error!(%err, "Payment failed"),
    }
}
