use adyen_tools::{
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
    AdyenApi,
    AdyenApiError,
};

/// The orchestrator's view of the remote PSP.
///
/// This trait is the only seam through which PSP round trips happen, so endpoint tests can swap
/// in a mock and stay hermetic. [`AdyenApi`] is the production implementation.
#[allow(async_fn_in_trait)]
pub trait PspGateway {
    /// Open a PSP-hosted checkout session.
    async fn create_session(
        &self,
        request: &CreateCheckoutSessionRequest,
    ) -> Result<CheckoutSessionResponse, AdyenApiError>;

    /// Enumerate available (and stored) payment methods.
    async fn payment_methods(&self, request: &PaymentMethodsRequest) -> Result<PaymentMethodsResponse, AdyenApiError>;

    /// Submit one authorisation attempt.
    async fn payments(&self, request: &PaymentRequest) -> Result<PaymentResponse, AdyenApiError>;

    /// Complete a prior action. Callers must pass a freshly generated idempotency key on every
    /// call, retries included.
    async fn payments_details(
        &self,
        request: &PaymentDetailsRequest,
        idempotency_key: &str,
    ) -> Result<PaymentDetailsResponse, AdyenApiError>;

    /// Look up the final outcome of a session.
    async fn session_result(
        &self,
        session_id: &str,
        session_result: &str,
    ) -> Result<SessionResultResponse, AdyenApiError>;
}

impl PspGateway for AdyenApi {
    async fn create_session(
        &self,
        request: &CreateCheckoutSessionRequest,
    ) -> Result<CheckoutSessionResponse, AdyenApiError> {
        AdyenApi::create_session(self, request).await
    }

    async fn payment_methods(&self, request: &PaymentMethodsRequest) -> Result<PaymentMethodsResponse, AdyenApiError> {
        AdyenApi::payment_methods(self, request).await
    }

    async fn payments(&self, request: &PaymentRequest) -> Result<PaymentResponse, AdyenApiError> {
        AdyenApi::payments(self, request).await
    }

    async fn payments_details(
        &self,
        request: &PaymentDetailsRequest,
        idempotency_key: &str,
    ) -> Result<PaymentDetailsResponse, AdyenApiError> {
        AdyenApi::payments_details(self, request, idempotency_key).await
    }

    async fn session_result(
        &self,
        session_id: &str,
        session_result: &str,
    ) -> Result<SessionResultResponse, AdyenApiError> {
        AdyenApi::session_result(self, session_id, session_result).await
    }
}
