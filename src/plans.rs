//! Static payment plan catalogue
//!
//! Plans are fixed at compile time and never mutated at runtime.

use serde::Serialize;

use crate::entity::subscription::BillingPeriod;

#[derive(Clone, Debug, Serialize)]
pub struct Plan {
  pub id: &'static str,
  pub name: &'static str,
  pub price: f64,
  pub currency: &'static str,
  pub billing_period: BillingPeriod,
  pub features: &'static [&'static str],
}

pub const PLANS: &[Plan] = &[
  Plan {
    id: "monthly",
    name: "Monthly Plan",
    price: 9.99,
    currency: "USD",
    billing_period: BillingPeriod::Monthly,
    features: &[
      "Unlimited course access",
      "All AI levels",
      "Certificate of completion",
    ],
  },
  Plan {
    id: "yearly",
    name: "Yearly Plan",
    price: 89.99,
    currency: "USD",
    billing_period: BillingPeriod::Yearly,
    features: &[
      "Unlimited course access",
      "All AI levels",
      "Certificate of completion",
      "Priority support",
    ],
  },
];

impl Plan {
  pub fn by_id(id: &str) -> Option<&'static Plan> {
    PLANS.iter().find(|plan| plan.id == id)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_catalogue() {
    assert_eq!(PLANS.len(), 2);

    let monthly = Plan::by_id("monthly").unwrap();
    assert_eq!(monthly.price, 9.99);
    assert_eq!(monthly.currency, "USD");
    assert_eq!(monthly.billing_period, BillingPeriod::Monthly);

    let yearly = Plan::by_id("yearly").unwrap();
    assert_eq!(yearly.billing_period, BillingPeriod::Yearly);
    assert!(yearly.features.contains(&"Priority support"));
  }

  #[test]
  fn test_unknown_plan() {
    assert!(Plan::by_id("lifetime").is_none());
    assert!(Plan::by_id("").is_none());
  }
}
