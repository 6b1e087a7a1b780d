//! Plan catalog
//!
//! Subscribers reference plans by ID; the catalog is the lookup table that
//! resolves those references.

use std::collections::HashMap;

use tally_types::{Plan, PlanId};

/// Lookup table of available plans
#[derive(Debug, Clone, Default)]
pub struct PlanCatalog {
    plans: HashMap<PlanId, Plan>,
}

impl PlanCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a plan, replacing any previous plan with the same ID
    pub fn add(&mut self, plan: Plan) {
        self.plans.insert(plan.id(), plan);
    }

    /// Add a plan in builder style
    #[must_use]
    pub fn with_plan(mut self, plan: Plan) -> Self {
        self.add(plan);
        self
    }

    /// Look up a plan by ID
    pub fn get(&self, id: PlanId) -> Option<&Plan> {
        self.plans.get(&id)
    }

    /// Iterate over all plans, in no particular order
    pub fn plans(&self) -> impl Iterator<Item = &Plan> + '_ {
        self.plans.values()
    }

    /// Number of plans in the catalog
    pub fn len(&self) -> usize {
        self.plans.len()
    }

    /// Check if the catalog holds no plans
    pub fn is_empty(&self) -> bool {
        self.plans.is_empty()
    }
}
