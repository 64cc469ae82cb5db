//! Boundary DTOs: the JSON shapes the browser widget sends and receives.

use adyen_tools::data_objects::BrowserInfo;
use awd_common::Amount;
use serde::{Deserialize, Serialize};

use crate::orchestrator::PaymentMethod;

/// A shopper's stated intent to pay. `amount` is in *major* units here; the Sessions flow scales
/// it to minor units before it reaches the PSP.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutIntent {
    pub amount: i64,
    pub currency: String,
    pub country_code: String,
    #[serde(default)]
    pub return_url: Option<String>,
    #[serde(default)]
    pub shopper_reference: Option<String>,
    #[serde(default)]
    pub enable_recurring: bool,
}

impl CheckoutIntent {
    /// The shopper reference, if it carries anything other than whitespace. Recurring decisions
    /// treat a blank reference the same as an absent one.
    pub fn shopper_reference(&self) -> Option<&str> {
        self.shopper_reference.as_deref().filter(|s| !s.trim().is_empty())
    }
}

/// What the widget needs to mount a hosted session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionsFlowResponse {
    pub session_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_data: Option<String>,
    pub client_key: String,
}

/// Completion payload after an off-site redirect.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RedirectDetailsRequest {
    pub redirect_result: String,
    #[serde(default)]
    pub payment_data: Option<String>,
}

/// Completion payload after a native 3-D Secure challenge.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThreeDSDetailsRequest {
    #[serde(rename = "threeDSResult")]
    pub three_ds_result: String,
    #[serde(default)]
    pub payment_data: Option<String>,
}

/// Post-hoc lookup of a session's outcome.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResultRequest {
    pub session_id: String,
    pub session_result: String,
}

/// The widget's authorisation payload for the Advanced flow. The amount arrives already in minor
/// units and is not re-scaled.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvancedPaymentRequest {
    pub amount: Amount,
    pub payment_method: PaymentMethod,
    #[serde(default)]
    pub browser_info: Option<BrowserInfo>,
    #[serde(default)]
    pub return_url: Option<String>,
    #[serde(default)]
    pub shopper_reference: Option<String>,
    #[serde(default)]
    pub country_code: Option<String>,
    #[serde(default)]
    pub enable_recurring: bool,
}

impl AdvancedPaymentRequest {
    pub fn shopper_reference(&self) -> Option<&str> {
        self.shopper_reference.as_deref().filter(|s| !s.trim().is_empty())
    }
}

/// Details completion for the Advanced flow: either a redirect result or a 3DS result, plus the
/// optional `paymentData` blob.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvancedDetailsRequest {
    #[serde(default)]
    pub payment_data: Option<String>,
    #[serde(default)]
    pub redirect_result: Option<String>,
    #[serde(default, rename = "threeDSResult")]
    pub three_ds_result: Option<String>,
}
