//! Billing plan types

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Months billed up front on the annual cadence.
const MONTHS_PER_YEAR: Decimal = dec!(12);

/// Annual plans bill twelve months at a 10% discount.
const ANNUAL_DISCOUNT_FACTOR: Decimal = dec!(0.9);

/// Unique plan identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlanId(pub u32);

impl PlanId {
    /// Create a new plan ID
    pub const fn new(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for PlanId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for PlanId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

/// Billing cadence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BillingInterval {
    /// Billed every month at the listed price
    Monthly,
    /// Billed once a year, twelve months up front at a 10% discount
    Annual,
}

impl BillingInterval {
    /// Get the lowercase name of this cadence
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Monthly => "monthly",
            Self::Annual => "annual",
        }
    }
}

impl std::fmt::Display for BillingInterval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A billing plan
///
/// Immutable after construction: there are no public mutators, and the
/// catalog only ever hands out shared references. The monthly price is
/// expected to be non-negative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    id: PlanId,
    name: String,
    monthly_price: Decimal,
    features: Vec<String>,
    trial_days: u32,
    interval: BillingInterval,
}

impl Plan {
    /// Create a new plan with no features and no trial
    pub fn new(
        id: PlanId,
        name: impl Into<String>,
        interval: BillingInterval,
        monthly_price: Decimal,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            monthly_price,
            features: Vec::new(),
            trial_days: 0,
            interval,
        }
    }

    /// Set the included features
    #[must_use]
    pub fn with_features<I, S>(mut self, features: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.features = features.into_iter().map(Into::into).collect();
        self
    }

    /// Set the trial length in days
    #[must_use]
    pub fn with_trial_days(mut self, days: u32) -> Self {
        self.trial_days = days;
        self
    }

    /// Plan ID
    pub const fn id(&self) -> PlanId {
        self.id
    }

    /// Display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Monthly list price
    pub const fn monthly_price(&self) -> Decimal {
        self.monthly_price
    }

    /// Feature names included in the plan, in display order
    pub fn features(&self) -> &[String] {
        &self.features
    }

    /// Free trial length in days
    pub const fn trial_days(&self) -> u32 {
        self.trial_days
    }

    /// Billing cadence
    pub const fn interval(&self) -> BillingInterval {
        self.interval
    }

    /// Amount billed per invoice for this plan
    ///
    /// Monthly bills the list price as-is; Annual bills twelve months at
    /// a 10% discount.
    pub fn billing_amount(&self) -> Decimal {
        match self.interval {
            BillingInterval::Monthly => self.monthly_price,
            BillingInterval::Annual => {
                self.monthly_price * MONTHS_PER_YEAR * ANNUAL_DISCOUNT_FACTOR
            }
        }
    }
}

impl std::fmt::Display for Plan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Plan: {} | Price: {} | Trial: {} days",
            self.name, self.monthly_price, self.trial_days
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn basic_monthly() -> Plan {
        Plan::new(PlanId(1), "Basic Monthly", BillingInterval::Monthly, dec!(500))
            .with_features(["Feature A", "Feature B"])
            .with_trial_days(7)
    }

    #[test]
    fn monthly_bills_the_list_price() {
        assert_eq!(basic_monthly().billing_amount(), dec!(500));
    }

    #[test]
    fn annual_bills_a_discounted_year() {
        let plan = Plan::new(PlanId(2), "Premium Annual", BillingInterval::Annual, dec!(1000));
        assert_eq!(plan.billing_amount(), dec!(10800));
    }

    #[test]
    fn zero_price_plans_bill_zero() {
        let plan = Plan::new(PlanId(3), "Free", BillingInterval::Annual, Decimal::ZERO);
        assert_eq!(plan.billing_amount(), Decimal::ZERO);
    }

    #[test]
    fn builders_set_features_and_trial() {
        let plan = basic_monthly();
        assert_eq!(plan.features(), &["Feature A", "Feature B"]);
        assert_eq!(plan.trial_days(), 7);
        assert_eq!(plan.interval(), BillingInterval::Monthly);
    }

    #[test]
    fn display_shows_name_price_and_trial() {
        assert_eq!(
            basic_monthly().to_string(),
            "Plan: Basic Monthly | Price: 500 | Trial: 7 days"
        );
    }
}
