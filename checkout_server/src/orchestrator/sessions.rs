//! The Sessions flow: the PSP hosts the multi-step interaction, this server bookends it.
//!
//! ```nocompile
//! [IDLE] --create_session()--> [SESSION_OPEN]
//! [SESSION_OPEN] --redirect / 3DS result--> [DETAILS_PENDING] --submit_details()--> [TERMINAL]
//! [SESSION_OPEN] --session_result lookup--> [TERMINAL]
//! ```

use adyen_tools::data_objects::{AuthenticationData, CreateCheckoutSessionRequest, SessionStatus};
use awd_common::Amount;
use log::*;

use super::{recurring_policy, Orchestrator, PaymentOutcome};
use crate::{
    data_objects::{CheckoutIntent, SessionsFlowResponse},
    errors::ServerError,
    gateway::PspGateway,
};

impl<G: PspGateway> Orchestrator<G> {
    /// Opens a PSP-hosted checkout session for the intent. The intent's amount is in major units
    /// and is scaled to minor units here; 3-D Secure is requested as `preferred`.
    pub async fn create_session(
        &self,
        intent: CheckoutIntent,
        return_url: String,
    ) -> Result<SessionsFlowResponse, ServerError> {
        let amount = Amount::from_major(&intent.currency, intent.amount);
        let policy = recurring_policy(intent.enable_recurring, intent.shopper_reference(), None);
        let reference = adyen_tools::order_reference();
        debug!(
            "💳️ Creating session {reference} for {amount} in {} (recurring: {})",
            intent.country_code, intent.enable_recurring
        );
        let request = CreateCheckoutSessionRequest {
            merchant_account: self.merchant_account().to_string(),
            amount,
            return_url,
            reference,
            country_code: intent.country_code.clone(),
            shopper_reference: intent.shopper_reference().map(str::to_string),
            authentication_data: Some(AuthenticationData::native_preferred()),
            recurring_processing_model: policy.recurring_processing_model,
            shopper_interaction: policy.shopper_interaction,
            store_payment_method_mode: policy.store_mode(),
        };
        let response = self.gateway().create_session(&request).await?;
        Ok(SessionsFlowResponse {
            session_id: response.id,
            session_data: response.session_data,
            client_key: self.client_key().to_string(),
        })
    }

    /// Fetches the definitive outcome of a session. A per-payment result code, when the PSP
    /// reports one, wins over the session-level status.
    pub async fn session_result(&self, session_id: &str, session_result: &str) -> Result<PaymentOutcome, ServerError> {
        let response = self.gateway().session_result(session_id, session_result).await?;
        let payment = response.payments.first();
        let result_code = payment
            .and_then(|p| p.result_code.clone())
            .or_else(|| response.status.as_ref().map(result_code_for_status));
        debug!(
            "💳️ Session {session_id} resolved to {}",
            result_code.as_deref().unwrap_or("none")
        );
        Ok(PaymentOutcome {
            result_code,
            psp_reference: payment.and_then(|p| p.psp_reference.clone()),
            merchant_reference: response.reference,
            additional_data: response.additional_data,
            ..Default::default()
        })
    }
}

/// Maps a session-level status onto the result-code vocabulary the widget understands. Unknown
/// statuses pass through as their raw string.
fn result_code_for_status(status: &SessionStatus) -> String {
    match status {
        SessionStatus::Completed => "Authorised".to_string(),
        SessionStatus::PaymentPending => "Pending".to_string(),
        SessionStatus::Refused => "Refused".to_string(),
        SessionStatus::Canceled => "Cancelled".to_string(),
        SessionStatus::Expired => "Expired".to_string(),
        other => other.to_string(),
    }
}
