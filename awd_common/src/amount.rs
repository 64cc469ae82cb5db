use std::fmt::Display;

use serde::{Deserialize, Serialize};

//--------------------------------------     Amount       ------------------------------------------------------------
/// A monetary value as it travels on the Adyen wire: an ISO-4217 currency code and an integer
/// number of minor units (cents, pence, ...).
///
/// Checkout intents coming from the storefront carry *major* units; the PSP only ever sees minor
/// units. [`Amount::from_major`] is the single place where the scaling happens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Amount {
    pub currency: String,
    pub value: i64,
}

impl Amount {
    /// Build an amount from major units (whole euros, dollars, ...). The value is scaled by
    /// exactly 100, matching the PSP's minor-unit convention for the currencies this demo uses.
    pub fn from_major<S: Into<String>>(currency: S, major: i64) -> Self {
        Self { currency: currency.into(), value: major * 100 }
    }

    /// Build an amount that is already expressed in minor units. No scaling is applied.
    pub fn from_minor<S: Into<String>>(currency: S, minor: i64) -> Self {
        Self { currency: currency.into(), value: minor }
    }

    pub fn value(&self) -> i64 {
        self.value
    }
}

impl Display for Amount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.value, self.currency)
    }
}
