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
    AdyenApiError,
};
use mockall::mock;

use crate::gateway::PspGateway;

mock! {
    pub Gateway {}
    impl PspGateway for Gateway {
        async fn create_session(&self, request: &CreateCheckoutSessionRequest) -> Result<CheckoutSessionResponse, AdyenApiError>;
        async fn payment_methods(&self, request: &PaymentMethodsRequest) -> Result<PaymentMethodsResponse, AdyenApiError>;
        async fn payments(&self, request: &PaymentRequest) -> Result<PaymentResponse, AdyenApiError>;
        async fn payments_details(&self, request: &PaymentDetailsRequest, idempotency_key: &str) -> Result<PaymentDetailsResponse, AdyenApiError>;
        async fn session_result(&self, session_id: &str, session_result: &str) -> Result<SessionResultResponse, AdyenApiError>;
    }
}
