//! The payment orchestration layer.
//!
//! A single [`Orchestrator`] drives both purchase strategies:
//! * the **Sessions flow**, where the PSP hosts the multi-step interaction and this server only
//!   bookends it (create the session, later fetch the outcome), and
//! * the **Advanced flow**, where this server mediates every round trip (enumerate methods,
//!   authorise, complete challenges).
//!
//! The two flows share the details-submission path and the [`PaymentOutcome`] model; the
//! recurring/stored-method decision lives in one pure function in [`policy`].

mod advanced;
mod outcome;
mod payment_method;
mod policy;
mod sessions;

pub use outcome::PaymentOutcome;
pub use payment_method::PaymentMethod;
pub use policy::{recurring_policy, RecurringPolicy};

use adyen_tools::data_objects::{PaymentCompletionDetails, PaymentDetailsRequest};
use log::*;

use crate::{errors::ServerError, gateway::PspGateway};

/// Threads a single shopper purchase through the PSP round trips it needs. Holds the injected
/// gateway plus the two merchant-level values every outbound request carries.
#[derive(Clone)]
pub struct Orchestrator<G> {
    gateway: G,
    merchant_account: String,
    client_key: String,
}

impl<G: PspGateway> Orchestrator<G> {
    pub fn new(gateway: G, merchant_account: &str, client_key: &str) -> Self {
        Self { gateway, merchant_account: merchant_account.to_string(), client_key: client_key.to_string() }
    }

    pub fn client_key(&self) -> &str {
        &self.client_key
    }

    pub(crate) fn gateway(&self) -> &G {
        &self.gateway
    }

    pub(crate) fn merchant_account(&self) -> &str {
        &self.merchant_account
    }

    /// Completes a prior action. Shared by both flows and by all four details endpoints. Every
    /// call attaches a fresh idempotency key, retries included: the PSP's contract makes replays
    /// with the *same* key safe, and a reused key across distinct submissions would be wrong.
    pub async fn submit_details(&self, submission: DetailsSubmission) -> Result<PaymentOutcome, ServerError> {
        let request = submission.into_wire();
        let key = adyen_tools::idempotency_key();
        debug!(
            "💳️ Submitting payment details (redirect: {}, 3DS: {})",
            request.details.redirect_result.is_some(),
            request.details.three_ds_result.is_some()
        );
        let response = self.gateway.payments_details(&request, &key).await?;
        Ok(PaymentOutcome::from(response))
    }
}

/// Completion of a prior [action](PaymentOutcome::action): exactly one of a redirect result or a
/// 3-D Secure result, with the optional `paymentData` blob the widget carried over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailsSubmission {
    Redirect { redirect_result: String, payment_data: Option<String> },
    ThreeDS { three_ds_result: String, payment_data: Option<String> },
}

impl DetailsSubmission {
    fn into_wire(self) -> PaymentDetailsRequest {
        match self {
            DetailsSubmission::Redirect { redirect_result, payment_data } => PaymentDetailsRequest {
                payment_data: payment_data.filter(|s| !s.is_empty()),
                details: PaymentCompletionDetails { redirect_result: Some(redirect_result), three_ds_result: None },
            },
            DetailsSubmission::ThreeDS { three_ds_result, payment_data } => PaymentDetailsRequest {
                payment_data: payment_data.filter(|s| !s.is_empty()),
                details: PaymentCompletionDetails { redirect_result: None, three_ds_result: Some(three_ds_result) },
            },
        }
    }
}

impl TryFrom<crate::data_objects::AdvancedDetailsRequest> for DetailsSubmission {
    type Error = ServerError;

    fn try_from(value: crate::data_objects::AdvancedDetailsRequest) -> Result<Self, Self::Error> {
        match (value.redirect_result, value.three_ds_result) {
            (Some(redirect_result), None) => {
                Ok(DetailsSubmission::Redirect { redirect_result, payment_data: value.payment_data })
            },
            (None, Some(three_ds_result)) => {
                Ok(DetailsSubmission::ThreeDS { three_ds_result, payment_data: value.payment_data })
            },
            (None, None) => {
                Err(ServerError::InvalidInput("Details submission needs a redirectResult or a threeDSResult".into()))
            },
            (Some(_), Some(_)) => Err(ServerError::InvalidInput(
                "Details submission must carry exactly one of redirectResult and threeDSResult".into(),
            )),
        }
    }
}
