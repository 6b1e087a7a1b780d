//! Common test fixtures for tally-billing-core integration tests

use chrono::{TimeZone, Utc};
use rust_decimal_macros::dec;
use tally_billing_core::{BillingConfig, BillingService, ManualClock, PlanCatalog};
use tally_types::{BillingInterval, Plan, PlanId, Subscriber, SubscriberId};

/// Basic Monthly at 500 and Premium Annual at 1000
pub fn sample_catalog() -> PlanCatalog {
    PlanCatalog::new()
        .with_plan(
            Plan::new(PlanId(1), "Basic Monthly", BillingInterval::Monthly, dec!(500))
                .with_features(["Feature A", "Feature B"])
                .with_trial_days(7),
        )
        .with_plan(
            Plan::new(PlanId(2), "Premium Annual", BillingInterval::Annual, dec!(1000))
                .with_features(["Feature X", "Feature Y", "Feature Z"])
                .with_trial_days(14),
        )
}

/// Alice on Basic Monthly, Bob on Premium Annual
pub fn sample_subscribers(catalog: &PlanCatalog) -> (Subscriber, Subscriber) {
    let basic = catalog.get(PlanId(1)).expect("basic plan seeded");
    let premium = catalog.get(PlanId(2)).expect("premium plan seeded");
    (
        Subscriber::new(SubscriberId(101), "Alice", "alice@mail.com", basic),
        Subscriber::new(SubscriberId(102), "Bob", "bob@mail.com", premium),
    )
}

/// A billing service on a manual clock, plus a handle to move time
pub fn manual_service() -> (BillingService<ManualClock>, ManualClock) {
    let clock = ManualClock::new(Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0).unwrap());
    let billing = BillingService::with_clock(BillingConfig::default(), clock.clone());
    (billing, clock)
}
