//! Fixed credit package catalog.

use serde::{Deserialize, Serialize};

/// A purchasable credit package.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditPackage {
    /// Credits granted on settlement.
    pub credits: i64,

    /// Price in minor currency units (USD cents).
    pub amount_cents: i64,
}

/// The package catalog. Prices are fixed; anything not listed here is
/// rejected before any provider call.
pub const PACKAGES: [CreditPackage; 4] = [
    CreditPackage {
        credits: 10,
        amount_cents: 999,
    },
    CreditPackage {
        credits: 25,
        amount_cents: 1999,
    },
    CreditPackage {
        credits: 50,
        amount_cents: 3499,
    },
    CreditPackage {
        credits: 100,
        amount_cents: 5999,
    },
];

impl CreditPackage {
    /// Looks up a package by its credit count.
    pub fn for_credits(credits: i64) -> Option<Self> {
        PACKAGES.iter().copied().find(|p| p.credits == credits)
    }

    /// Display name shown on the checkout page, e.g. `"25 Credits"`.
    pub fn display_name(&self) -> String {
        format!("{} Credits", self.credits)
    }

    /// Line-item description for the checkout page.
    pub fn description(&self) -> String {
        format!("{} recipe generation credits", self.credits)
    }
}
