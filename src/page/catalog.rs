//! Product filter and pricing toggle

use serde::{Deserialize, Serialize};

use crate::format;

/// Filter value that shows every card
pub const ALL: &str = "all";

/// A product card with its category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductCard {
    pub name: String,
    pub category: String,
}

impl ProductCard {
    pub fn new(name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
        }
    }
}

/// Category filter buttons over the product grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductFilter {
    active: String,
}

impl Default for ProductFilter {
    fn default() -> Self {
        Self {
            active: ALL.to_string(),
        }
    }
}

impl ProductFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(&mut self, filter: impl Into<String>) {
        self.active = filter.into();
    }

    pub fn active(&self) -> &str {
        &self.active
    }

    pub fn shows(&self, card: &ProductCard) -> bool {
        self.active == ALL || card.category == self.active
    }

    /// Cards left visible by the active filter
    pub fn visible<'a>(&self, cards: &'a [ProductCard]) -> Vec<&'a ProductCard> {
        cards.iter().filter(|c| self.shows(c)).collect()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillingPeriod {
    #[default]
    Monthly,
    Yearly,
}

/// One plan's monthly and yearly prices
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingPlan {
    pub name: String,
    pub monthly: f64,
    pub yearly: f64,
}

impl PricingPlan {
    pub fn new(name: impl Into<String>, monthly: f64, yearly: f64) -> Self {
        Self {
            name: name.into(),
            monthly,
            yearly,
        }
    }

    pub fn price(&self, period: BillingPeriod) -> f64 {
        match period {
            BillingPeriod::Monthly => self.monthly,
            BillingPeriod::Yearly => self.yearly,
        }
    }
}

/// Monthly/yearly switch over the pricing table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PricingToggle {
    period: BillingPeriod,
}

impl PricingToggle {
    pub fn period(&self) -> BillingPeriod {
        self.period
    }

    /// Flip the switch; `checked` means yearly
    pub fn set_yearly(&mut self, checked: bool) {
        self.period = if checked {
            BillingPeriod::Yearly
        } else {
            BillingPeriod::Monthly
        };
    }

    pub fn display(&self, plan: &PricingPlan) -> String {
        format::price(plan.price(self.period))
    }
}
