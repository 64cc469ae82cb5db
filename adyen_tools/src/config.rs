use std::{fmt::Display, str::FromStr};

use awd_common::Secret;
use log::*;

const CHECKOUT_TEST_URL: &str = "https://checkout-test.adyen.com/v71";
const CHECKOUT_LIVE_URL: &str = "https://checkout-live.adyen.com/checkout/v71";

/// The Adyen environment the client talks to. Selects the checkout API base URL.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Environment {
    #[default]
    Test,
    Live,
}

impl Environment {
    pub fn checkout_url(&self) -> &'static str {
        match self {
            Environment::Test => CHECKOUT_TEST_URL,
            Environment::Live => CHECKOUT_LIVE_URL,
        }
    }
}

impl FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "test" => Ok(Environment::Test),
            "live" => Ok(Environment::Live),
            other => Err(format!("{other} is not a valid Adyen environment. Use TEST or LIVE.")),
        }
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Test => write!(f, "TEST"),
            Environment::Live => write!(f, "LIVE"),
        }
    }
}

/// Merchant-level PSP credentials and environment selection. Created once at process start and
/// treated as immutable afterwards.
#[derive(Debug, Clone, Default)]
pub struct AdyenConfig {
    pub api_key: Secret<String>,
    pub merchant_account: String,
    /// Public client key handed to the browser widget.
    pub client_key: String,
    pub environment: Environment,
    /// Webhook HMAC key. Accepted for parity with the hosted configuration, but webhook
    /// signatures are not verified anywhere yet.
    pub hmac_key: Secret<String>,
}

impl AdyenConfig {
    pub fn new_from_env_or_default() -> Self {
        let api_key = Secret::new(std::env::var("ADYEN_API_KEY").unwrap_or_else(|_| {
            warn!("ADYEN_API_KEY not set, using (probably useless) default");
            "test_api_key_000000".to_string()
        }));
        let merchant_account = std::env::var("ADYEN_MERCHANT_ACCOUNT").unwrap_or_else(|_| {
            warn!("ADYEN_MERCHANT_ACCOUNT not set, using (probably useless) default");
            "TestMerchantAccount".to_string()
        });
        let client_key = std::env::var("ADYEN_CLIENT_KEY").unwrap_or_else(|_| {
            warn!("ADYEN_CLIENT_KEY not set, using (probably useless) default");
            "test_client_key_000000".to_string()
        });
        let environment = std::env::var("ADYEN_ENVIRONMENT")
            .ok()
            .map(|s| {
                s.parse::<Environment>().unwrap_or_else(|e| {
                    error!("Invalid value for ADYEN_ENVIRONMENT. {e} Using TEST instead.");
                    Environment::Test
                })
            })
            .unwrap_or_else(|| {
                warn!("ADYEN_ENVIRONMENT not set, using TEST as default");
                Environment::Test
            });
        let hmac_key = Secret::new(std::env::var("ADYEN_HMAC_KEY").unwrap_or_default());
        Self { api_key, merchant_account, client_key, environment, hmac_key }
    }
}
