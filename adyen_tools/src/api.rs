use std::sync::Arc;

use log::*;
use reqwest::{
    header::{HeaderMap, HeaderValue},
    Client,
    Method,
};
use serde::{de::DeserializeOwned, Serialize};
use uuid::Uuid;

use crate::{
    config::AdyenConfig,
    data_objects::{
        CheckoutSessionResponse,
        CreateCheckoutSessionRequest,
        PaymentDetailsRequest,
        PaymentDetailsResponse,
        PaymentMethodsRequest,
        PaymentMethodsResponse,
        PaymentRequest,
        PaymentResponse,
        SessionResultResponse,
    },
    AdyenApiError,
};

/// Generates a fresh merchant reference for one authorisation attempt. References are never
/// reused: each call draws a new 128-bit random identifier.
pub fn order_reference() -> String {
    format!("ORDER-{}", Uuid::new_v4())
}

/// Generates a fresh idempotency key for one outbound details call. The PSP's retry contract is
/// "same key, same outcome", so a key must never be shared between distinct calls.
pub fn idempotency_key() -> String {
    Uuid::new_v4().to_string()
}

#[derive(Clone)]
pub struct AdyenApi {
    config: AdyenConfig,
    client: Arc<Client>,
}

impl AdyenApi {
    pub fn new(config: AdyenConfig) -> Result<Self, AdyenApiError> {
        let mut headers = HeaderMap::with_capacity(2);
        let val = HeaderValue::from_str(config.api_key.reveal().as_str())
            .map_err(|e| AdyenApiError::Initialization(e.to_string()))?;
        headers.insert("x-API-key", val);
        headers.insert("Content-Type", HeaderValue::from_static("application/json"));
        let client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| AdyenApiError::Initialization(e.to_string()))?;
        Ok(Self { config, client: Arc::new(client) })
    }

    pub fn merchant_account(&self) -> &str {
        &self.config.merchant_account
    }

    pub fn client_key(&self) -> &str {
        &self.config.client_key
    }

    /// One synchronous round trip to the checkout API. Success decodes the JSON body into `T`;
    /// any status outside the 2xx range surfaces as [`AdyenApiError::QueryError`] with the raw
    /// error payload so the caller can log it.
    pub async fn checkout_query<T: DeserializeOwned, B: Serialize>(
        &self,
        method: Method,
        path: &str,
        params: &[(&str, &str)],
        idempotency_key: Option<&str>,
        body: Option<B>,
    ) -> Result<T, AdyenApiError> {
        let url = self.url(path);
        trace!("Sending checkout query: {url}");
        let mut req = self.client.request(method, url);
        if !params.is_empty() {
            req = req.query(params);
        }
        if let Some(key) = idempotency_key {
            req = req.header("Idempotency-Key", key);
        }
        if let Some(body) = body {
            req = req.json(&body);
        }
        let response = req.send().await.map_err(|e| AdyenApiError::RequestError(e.to_string()))?;
        if response.status().is_success() {
            trace!("Checkout query successful. {}", response.status());
            response.json::<T>().await.map_err(|e| AdyenApiError::JsonError(e.to_string()))
        } else {
            let status = response.status().as_u16();
            let message = response.text().await.map_err(|e| AdyenApiError::ResponseError(e.to_string()))?;
            Err(AdyenApiError::QueryError { status, message })
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.config.environment.checkout_url())
    }

    /// Opens a PSP-hosted checkout session.
    pub async fn create_session(
        &self,
        request: &CreateCheckoutSessionRequest,
    ) -> Result<CheckoutSessionResponse, AdyenApiError> {
        debug!("Creating checkout session {} for {}", request.reference, request.amount);
        trace!("Session request: {}", serde_json::to_string(request).unwrap_or_default());
        let response: CheckoutSessionResponse =
            self.checkout_query(Method::POST, "/sessions", &[], None, Some(request)).await?;
        info!("Created checkout session {}", response.id);
        Ok(response)
    }

    /// Enumerates the payment methods available for the given amount and country.
    pub async fn payment_methods(
        &self,
        request: &PaymentMethodsRequest,
    ) -> Result<PaymentMethodsResponse, AdyenApiError> {
        debug!("Fetching payment methods for {} in {}", request.amount, request.country_code);
        let response: PaymentMethodsResponse =
            self.checkout_query(Method::POST, "/paymentMethods", &[], None, Some(request)).await?;
        debug!(
            "Fetched {} payment methods and {} stored methods",
            response.payment_methods.len(),
            response.stored_payment_methods.len()
        );
        Ok(response)
    }

    /// Submits one authorisation attempt.
    pub async fn payments(&self, request: &PaymentRequest) -> Result<PaymentResponse, AdyenApiError> {
        debug!("Authorising {} for {}", request.reference, request.amount);
        trace!("Payment request: {}", serde_json::to_string(request).unwrap_or_default());
        let response: PaymentResponse = self.checkout_query(Method::POST, "/payments", &[], None, Some(request)).await?;
        info!(
            "Authorisation {} resolved to {} (action: {})",
            request.reference,
            response.result_code.as_deref().unwrap_or("none"),
            response.action.is_some()
        );
        Ok(response)
    }

    /// Completes a prior action. `idempotency_key` must be fresh for every call; see
    /// [`idempotency_key`].
    pub async fn payments_details(
        &self,
        request: &PaymentDetailsRequest,
        idempotency_key: &str,
    ) -> Result<PaymentDetailsResponse, AdyenApiError> {
        debug!("Submitting payment details (redirect: {})", request.details.redirect_result.is_some());
        trace!("Details request: {}", serde_json::to_string(request).unwrap_or_default());
        let response: PaymentDetailsResponse =
            self.checkout_query(Method::POST, "/payments/details", &[], Some(idempotency_key), Some(request)).await?;
        info!("Details resolved to {}", response.result_code.as_deref().unwrap_or("none"));
        Ok(response)
    }

    /// Looks up the final outcome of a session after the fact.
    pub async fn session_result(
        &self,
        session_id: &str,
        session_result: &str,
    ) -> Result<SessionResultResponse, AdyenApiError> {
        debug!("Fetching session result for {session_id}");
        let path = format!("/sessions/{session_id}");
        let response: SessionResultResponse = self
            .checkout_query::<SessionResultResponse, ()>(
                Method::GET,
                &path,
                &[("sessionResult", session_result)],
                None,
                None,
            )
            .await?;
        info!(
            "Session {session_id} status: {}",
            response.status.as_ref().map(|s| s.to_string()).unwrap_or_else(|| "none".to_string())
        );
        Ok(response)
    }
}
