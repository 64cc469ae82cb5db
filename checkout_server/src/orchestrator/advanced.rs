//! The Advanced flow: this server mediates every PSP round trip itself.
//!
//! ```nocompile
//! [IDLE] --payment_methods()--> [METHOD_CHOICE]
//! [METHOD_CHOICE] --authorise()--> terminal result | [ACTION_PENDING]
//! [ACTION_PENDING] --submit_details()--> terminal result | [ACTION_PENDING]
//! ```
//! Stacked challenges keep the attempt in `ACTION_PENDING`; the widget performs each action and
//! the shared details path resolves it.

use adyen_tools::data_objects::{AuthenticationData, Channel, PaymentMethodsRequest, PaymentRequest};
use awd_common::Amount;
use log::*;

use super::{recurring_policy, Orchestrator, PaymentOutcome};
use crate::{
    data_objects::{AdvancedPaymentRequest, CheckoutIntent},
    errors::ServerError,
    gateway::PspGateway,
};

const DEFAULT_SHOPPER_LOCALE: &str = "en-US";

impl<G: PspGateway> Orchestrator<G> {
    /// Enumerates the payment methods available for the intent. The intent's amount is in major
    /// units and is scaled to minor units, as in the Sessions flow.
    pub async fn payment_methods(
        &self,
        intent: CheckoutIntent,
    ) -> Result<adyen_tools::data_objects::PaymentMethodsResponse, ServerError> {
        let amount = Amount::from_major(&intent.currency, intent.amount);
        debug!("💳️ Listing payment methods for {amount} in {}", intent.country_code);
        let request = PaymentMethodsRequest {
            merchant_account: self.merchant_account().to_string(),
            amount,
            country_code: intent.country_code.clone(),
            shopper_locale: DEFAULT_SHOPPER_LOCALE.to_string(),
            shopper_reference: intent.shopper_reference().map(str::to_string),
        };
        Ok(self.gateway().payment_methods(&request).await?)
    }

    /// Submits one authorisation attempt. The widget supplies the amount already in minor units;
    /// it is transmitted unchanged. `origin` is the scheme-and-host of the page hosting the
    /// widget, needed for the 3DS device fingerprint exchange.
    pub async fn authorise(
        &self,
        attempt: AdvancedPaymentRequest,
        return_url: String,
        origin: String,
    ) -> Result<PaymentOutcome, ServerError> {
        let policy =
            recurring_policy(attempt.enable_recurring, attempt.shopper_reference(), Some(&attempt.payment_method));
        if let Some(id) = attempt.payment_method.stored_id() {
            info!("💳️ Using stored payment method {id}");
        }
        let reference = adyen_tools::order_reference();
        debug!("💳️ Authorising {reference} for {}", attempt.amount);
        let request = PaymentRequest {
            merchant_account: self.merchant_account().to_string(),
            amount: attempt.amount,
            reference,
            return_url,
            payment_method: attempt.payment_method.into_raw(),
            shopper_reference: attempt.shopper_reference.filter(|s| !s.trim().is_empty()),
            country_code: attempt.country_code,
            browser_info: attempt.browser_info,
            shopper_interaction: policy.shopper_interaction,
            recurring_processing_model: policy.recurring_processing_model,
            store_payment_method: policy.store_payment_method,
            authentication_data: Some(AuthenticationData::native_preferred()),
            channel: Some(Channel::Web),
            origin: Some(origin),
        };
        let response = self.gateway().payments(&request).await?;
        let outcome = PaymentOutcome::from(response);
        if outcome.is_terminal() {
            debug!("💳️ Authorisation terminal: {}", outcome.result_code.as_deref().unwrap_or("none"));
        } else {
            debug!("💳️ Authorisation needs another step; forwarding action to the widget");
        }
        Ok(outcome)
    }
}
