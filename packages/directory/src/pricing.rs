//! Static pricing catalog.

use serde::{Deserialize, Serialize};

/// Billing cycle for a pricing plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillingCycle {
    /// Billed monthly.
    Monthly,
    /// Billed yearly.
    Yearly,
}

/// A subscription plan shown on the pricing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingPlan {
    /// Plan id (e.g. "basic").
    pub id: String,
    /// Display name.
    pub name: String,
    /// Price in rupees per billing cycle.
    pub price: u32,
    /// Feature bullet list.
    pub features: Vec<String>,
    /// Whether the plan gets the "popular" highlight.
    pub popular: bool,
    /// Billing cycle.
    pub billing: BillingCycle,
}

/// Returns the static plan catalog.
#[must_use]
pub fn pricing_plans() -> Vec<PricingPlan> {
    vec![
        PricingPlan {
            id: "basic".to_string(),
            name: "Basic".to_string(),
            price: 999,
            features: vec![
                "Access to lawyer profiles".to_string(),
                "Basic search functionality".to_string(),
                "Email support".to_string(),
                "Save up to 5 lawyers".to_string(),
            ],
            popular: false,
            billing: BillingCycle::Monthly,
        },
        PricingPlan {
            id: "premium".to_string(),
            name: "Premium".to_string(),
            price: 4999,
            features: vec![
                "All Basic features".to_string(),
                "Direct contact with lawyers".to_string(),
                "Priority support".to_string(),
                "Detailed case history".to_string(),
                "Save unlimited lawyers".to_string(),
                "Document review (2 per month)".to_string(),
            ],
            popular: true,
            billing: BillingCycle::Monthly,
        },
        PricingPlan {
            id: "enterprise".to_string(),
            name: "Enterprise".to_string(),
            price: 9999,
            features: vec![
                "All Premium features".to_string(),
                "Dedicated relationship manager".to_string(),
                "24/7 phone support".to_string(),
                "Customized legal reports".to_string(),
                "Case strategy sessions".to_string(),
                "Document review (unlimited)".to_string(),
            ],
            popular: false,
            billing: BillingCycle::Monthly,
        },
    ]
}
