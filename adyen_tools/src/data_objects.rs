//! The Adyen Checkout v71 wire model, limited to the fields this demo actually sends and reads.
//!
//! Field names follow the PSP's camelCase convention. Anything the PSP owns outright (the
//! `action` instruction, `order`, `donationToken`, individual payment-method entries) stays an
//! opaque [`Value`] and is forwarded verbatim.
use std::collections::HashMap;

use awd_common::Amount;
use serde::{Deserialize, Serialize};
use serde_json::Value;

//--------------------------------------    Flag enums    ------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShopperInteraction {
    #[serde(rename = "Ecommerce")]
    Ecommerce,
    #[serde(rename = "ContAuth")]
    ContAuth,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecurringProcessingModel {
    #[serde(rename = "CardOnFile")]
    CardOnFile,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StorePaymentMethodMode {
    Enabled,
    AskForConsent,
    Disabled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NativeThreeDS {
    Disabled,
    Preferred,
    Force,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Channel {
    #[serde(rename = "Web")]
    Web,
}

//--------------------------------------    3-D Secure    ------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThreeDSRequestData {
    #[serde(rename = "nativeThreeDS")]
    pub native_three_ds: NativeThreeDS,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthenticationData {
    #[serde(rename = "threeDSRequestData")]
    pub three_ds_request_data: ThreeDSRequestData,
}

impl AuthenticationData {
    /// Native challenge when the method supports it, redirect otherwise.
    pub fn native_preferred() -> Self {
        Self { three_ds_request_data: ThreeDSRequestData { native_three_ds: NativeThreeDS::Preferred } }
    }
}

//--------------------------------------    Browser info    ----------------------------------------------------------

/// Device fingerprint collected by the widget for 3DS risk decisions. All fields are optional so
/// that whatever subset the widget sends survives the round trip.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrowserInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accept_header: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_depth: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub screen_height: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub screen_width: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_zone_offset: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub java_enabled: Option<bool>,
}

//--------------------------------------    Sessions    --------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCheckoutSessionRequest {
    pub merchant_account: String,
    pub amount: Amount,
    pub return_url: String,
    pub reference: String,
    pub country_code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shopper_reference: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authentication_data: Option<AuthenticationData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recurring_processing_model: Option<RecurringProcessingModel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shopper_interaction: Option<ShopperInteraction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store_payment_method_mode: Option<StorePaymentMethodMode>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutSessionResponse {
    /// The PSP-assigned session identifier.
    pub id: String,
    /// Opaque blob the widget needs to resume the session. Never inspected server-side.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_data: Option<String>,
}

//--------------------------------------    Payment methods    -------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentMethodsRequest {
    pub merchant_account: String,
    pub amount: Amount,
    pub country_code: String,
    pub shopper_locale: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shopper_reference: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentMethodsResponse {
    #[serde(default)]
    pub payment_methods: Vec<Value>,
    #[serde(default)]
    pub stored_payment_methods: Vec<Value>,
}

//--------------------------------------    Payments (authorise)    --------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    pub merchant_account: String,
    pub amount: Amount,
    pub reference: String,
    pub return_url: String,
    /// The widget's payment-method blob, forwarded untouched.
    pub payment_method: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shopper_reference: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub browser_info: Option<BrowserInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shopper_interaction: Option<ShopperInteraction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recurring_processing_model: Option<RecurringProcessingModel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store_payment_method: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authentication_data: Option<AuthenticationData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel: Option<Channel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentResponse {
    #[serde(default)]
    pub result_code: Option<String>,
    #[serde(default)]
    pub psp_reference: Option<String>,
    #[serde(default)]
    pub merchant_reference: Option<String>,
    /// Present when the shopper must perform another step (redirect, challenge, QR, ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub donation_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_data: Option<HashMap<String, String>>,
}

//--------------------------------------    Payment details    -------------------------------------------------------

/// The completion payload for a prior action. Exactly one of the two fields is set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentCompletionDetails {
    #[serde(default, rename = "redirectResult", skip_serializing_if = "Option::is_none")]
    pub redirect_result: Option<String>,
    #[serde(default, rename = "threeDSResult", skip_serializing_if = "Option::is_none")]
    pub three_ds_result: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentDetailsRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_data: Option<String>,
    pub details: PaymentCompletionDetails,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentDetailsResponse {
    #[serde(default)]
    pub result_code: Option<String>,
    #[serde(default)]
    pub psp_reference: Option<String>,
    #[serde(default)]
    pub merchant_reference: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_data: Option<HashMap<String, String>>,
}

//--------------------------------------    Session result    --------------------------------------------------------

/// Session-level status. `Other` keeps statuses this demo does not know about readable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionStatus {
    #[serde(rename = "completed")]
    Completed,
    #[serde(rename = "paymentPending")]
    PaymentPending,
    #[serde(rename = "refused")]
    Refused,
    #[serde(rename = "canceled")]
    Canceled,
    #[serde(rename = "expired")]
    Expired,
    #[serde(rename = "active")]
    Active,
    #[serde(untagged)]
    Other(String),
}

impl std::fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionStatus::Completed => write!(f, "completed"),
            SessionStatus::PaymentPending => write!(f, "paymentPending"),
            SessionStatus::Refused => write!(f, "refused"),
            SessionStatus::Canceled => write!(f, "canceled"),
            SessionStatus::Expired => write!(f, "expired"),
            SessionStatus::Active => write!(f, "active"),
            SessionStatus::Other(s) => write!(f, "{s}"),
        }
    }
}

/// One constituent payment of a completed session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionPayment {
    #[serde(default)]
    pub result_code: Option<String>,
    #[serde(default)]
    pub psp_reference: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResultResponse {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub status: Option<SessionStatus>,
    #[serde(default)]
    pub reference: Option<String>,
    #[serde(default)]
    pub payments: Vec<SessionPayment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_data: Option<HashMap<String, String>>,
}
