use thiserror::Error;

#[derive(Debug, Error)]
pub enum AdyenApiError {
    #[error("Could not initialize client: {0}")]
    Initialization(String),
    #[error("Could not send request to Adyen: {0}")]
    RequestError(String),
    #[error("Invalid response from Adyen: {0}")]
    ResponseError(String),
    #[error("Could not deserialize JSON: {0}")]
    JsonError(String),
    #[error("Checkout query failed. Error {status}. {message}")]
    QueryError { status: u16, message: String },
}
