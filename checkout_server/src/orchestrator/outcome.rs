use std::collections::HashMap;

use adyen_tools::data_objects::{PaymentDetailsResponse, PaymentResponse};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Result of an authorisation or details call, in the shape the browser widget expects.
///
/// An outcome that still carries an [`action`](Self::action) is *not* terminal: the widget must
/// perform the instructed step and exactly one details submission must follow. Terminal outcomes
/// are never mutated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentOutcome {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub psp_reference: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub merchant_reference: Option<String>,
    /// Forwarded verbatim from the PSP; the widget interprets it, this server never does.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub donation_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_data: Option<HashMap<String, String>>,
}

impl PaymentOutcome {
    pub fn is_terminal(&self) -> bool {
        self.action.is_none()
    }
}

impl From<PaymentResponse> for PaymentOutcome {
    fn from(response: PaymentResponse) -> Self {
        Self {
            result_code: response.result_code,
            psp_reference: response.psp_reference,
            merchant_reference: response.merchant_reference,
            action: response.action,
            order: response.order,
            donation_token: response.donation_token,
            additional_data: response.additional_data,
        }
    }
}

impl From<PaymentDetailsResponse> for PaymentOutcome {
    fn from(response: PaymentDetailsResponse) -> Self {
        Self {
            result_code: response.result_code,
            psp_reference: response.psp_reference,
            merchant_reference: response.merchant_reference,
            additional_data: response.additional_data,
            ..Default::default()
        }
    }
}
