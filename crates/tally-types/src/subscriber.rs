//! Subscriber types

use serde::{Deserialize, Serialize};

use crate::{Plan, PlanId};

/// Unique subscriber identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubscriberId(pub u32);

impl SubscriberId {
    /// Create a new subscriber ID
    pub const fn new(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for SubscriberId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for SubscriberId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

/// Subscriber lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubscriberStatus {
    /// Billable; the status every new subscriber starts in
    Active,
    /// Paused by the operator
    Suspended,
    /// Closed by the operator
    Cancelled,
}

impl SubscriberStatus {
    /// Get the display name of this status
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Suspended => "Suspended",
            Self::Cancelled => "Cancelled",
        }
    }
}

impl std::fmt::Display for SubscriberStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Notification event emitted when a subscriber moves to a different plan
///
/// `Display` renders the console announcement line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanChange {
    /// Subscriber display name
    pub subscriber: String,
    /// New plan display name
    pub plan: String,
}

impl std::fmt::Display for PlanChange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} switched to {}", self.subscriber, self.plan)
    }
}

/// A subscriber enrolled in a plan
///
/// Holds the plan by ID only; resolve it through a plan catalog. Status
/// transitions never touch invoices already issued.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subscriber {
    id: SubscriberId,
    name: String,
    email: String,
    plan_id: PlanId,
    status: SubscriberStatus,
}

impl Subscriber {
    /// Create a new subscriber on the given plan, starting Active
    pub fn new(
        id: SubscriberId,
        name: impl Into<String>,
        email: impl Into<String>,
        plan: &Plan,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            plan_id: plan.id(),
            status: SubscriberStatus::Active,
        }
    }

    /// Subscriber ID
    pub const fn id(&self) -> SubscriberId {
        self.id
    }

    /// Display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Contact email
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Current plan reference
    pub const fn plan_id(&self) -> PlanId {
        self.plan_id
    }

    /// Lifecycle status
    pub const fn status(&self) -> SubscriberStatus {
        self.status
    }

    /// Check if the subscriber is currently active
    pub fn is_active(&self) -> bool {
        self.status == SubscriberStatus::Active
    }

    /// Put the subscriber on a plan and reactivate them
    pub fn subscribe(&mut self, plan: &Plan) {
        self.plan_id = plan.id();
        self.status = SubscriberStatus::Active;
    }

    /// Move the subscriber to a different plan, keeping their status
    ///
    /// Returns the notification event carrying both display names.
    pub fn change_plan(&mut self, plan: &Plan) -> PlanChange {
        self.plan_id = plan.id();
        PlanChange {
            subscriber: self.name.clone(),
            plan: plan.name().to_string(),
        }
    }

    /// Suspend the subscriber
    ///
    /// Unconditional: suspending an already suspended or cancelled
    /// subscriber just sets the status again.
    pub fn suspend(&mut self) {
        self.status = SubscriberStatus::Suspended;
    }

    /// Cancel the subscriber
    ///
    /// Unconditional, like `suspend`.
    pub fn cancel(&mut self) {
        self.status = SubscriberStatus::Cancelled;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BillingInterval;
    use rust_decimal_macros::dec;

    fn plans() -> (Plan, Plan) {
        (
            Plan::new(PlanId(1), "Basic Monthly", BillingInterval::Monthly, dec!(500)),
            Plan::new(PlanId(2), "Premium Annual", BillingInterval::Annual, dec!(1000)),
        )
    }

    #[test]
    fn new_subscribers_start_active() {
        let (basic, _) = plans();
        let alice = Subscriber::new(SubscriberId(101), "Alice", "alice@mail.com", &basic);
        assert_eq!(alice.status(), SubscriberStatus::Active);
        assert_eq!(alice.plan_id(), PlanId(1));
        assert!(alice.is_active());
    }

    #[test]
    fn subscribe_reactivates_a_suspended_subscriber() {
        let (basic, premium) = plans();
        let mut alice = Subscriber::new(SubscriberId(101), "Alice", "alice@mail.com", &basic);
        alice.suspend();

        alice.subscribe(&premium);
        assert_eq!(alice.plan_id(), PlanId(2));
        assert_eq!(alice.status(), SubscriberStatus::Active);
    }

    #[test]
    fn change_plan_keeps_status_and_reports_the_switch() {
        let (basic, premium) = plans();
        let mut alice = Subscriber::new(SubscriberId(101), "Alice", "alice@mail.com", &basic);
        alice.suspend();

        let change = alice.change_plan(&premium);
        assert_eq!(alice.plan_id(), PlanId(2));
        assert_eq!(alice.status(), SubscriberStatus::Suspended);
        assert_eq!(change.to_string(), "Alice switched to Premium Annual");
    }

    #[test]
    fn suspend_and_cancel_are_unconditional() {
        let (basic, _) = plans();
        let mut bob = Subscriber::new(SubscriberId(102), "Bob", "bob@mail.com", &basic);

        bob.cancel();
        bob.cancel();
        assert_eq!(bob.status(), SubscriberStatus::Cancelled);

        bob.suspend();
        assert_eq!(bob.status(), SubscriberStatus::Suspended);
        assert!(!bob.is_active());
    }
}
