use std::env;

use adyen_tools::AdyenConfig;
use log::*;

const DEFAULT_AWD_HOST: &str = "127.0.0.1";
const DEFAULT_AWD_PORT: u16 = 8080;

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// PSP credentials and environment. Immutable after startup.
    pub adyen: AdyenConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: DEFAULT_AWD_HOST.to_string(), port: DEFAULT_AWD_PORT, adyen: AdyenConfig::default() }
    }
}

impl ServerConfig {
    pub fn new(host: &str, port: u16) -> Self {
        Self { host: host.to_string(), port, ..Default::default() }
    }

    pub fn from_env_or_default() -> Self {
        let host = env::var("AWD_HOST").ok().unwrap_or_else(|| DEFAULT_AWD_HOST.into());
        let port = env::var("AWD_PORT")
            .map(|s| {
                s.parse::<u16>().unwrap_or_else(|e| {
                    error!("🪛️ {s} is not a valid port for AWD_PORT. {e} Using the default, {DEFAULT_AWD_PORT}, instead.");
                    DEFAULT_AWD_PORT
                })
            })
            .ok()
            .unwrap_or(DEFAULT_AWD_PORT);
        let adyen = AdyenConfig::new_from_env_or_default();
        info!("🪛️ Adyen environment: {}. Merchant account: {}", adyen.environment, adyen.merchant_account);
        Self { host, port, adyen }
    }
}
