use adyen_tools::data_objects::{RecurringProcessingModel, ShopperInteraction, StorePaymentMethodMode};

use super::PaymentMethod;

/// The recurring flags to attach to an outbound session or authorisation. `None` everywhere means
/// the attempt carries no recurring semantics at all, and the fields are omitted from the wire
/// rather than sent as null.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RecurringPolicy {
    pub shopper_interaction: Option<ShopperInteraction>,
    pub recurring_processing_model: Option<RecurringProcessingModel>,
    pub store_payment_method: Option<bool>,
}

impl RecurringPolicy {
    /// Session creation expresses the store decision as a mode rather than a boolean.
    pub fn store_mode(&self) -> Option<StorePaymentMethodMode> {
        self.store_payment_method.and_then(|store| store.then_some(StorePaymentMethodMode::Enabled))
    }
}

/// Decides the recurring flags for one attempt. Both flows call this and nothing else.
///
/// * A stored payment method is a continued authorisation: `ContAuth` + `CardOnFile`, and the
///   method is never stored again.
/// * A fresh method with `enable_recurring` set and a non-empty shopper reference is stored on
///   file: `Ecommerce` + `CardOnFile` + store.
/// * `enable_recurring` without a shopper reference is silently suppressed. The PSP cannot file
///   a method under an anonymous shopper, and suppression is deliberately not an error.
pub fn recurring_policy(
    enable_recurring: bool,
    shopper_reference: Option<&str>,
    method: Option<&PaymentMethod>,
) -> RecurringPolicy {
    if method.is_some_and(PaymentMethod::is_stored) {
        return RecurringPolicy {
            shopper_interaction: Some(ShopperInteraction::ContAuth),
            recurring_processing_model: Some(RecurringProcessingModel::CardOnFile),
            store_payment_method: Some(false),
        };
    }
    let has_shopper = shopper_reference.is_some_and(|s| !s.trim().is_empty());
    if enable_recurring && has_shopper {
        return RecurringPolicy {
            shopper_interaction: Some(ShopperInteraction::Ecommerce),
            recurring_processing_model: Some(RecurringProcessingModel::CardOnFile),
            store_payment_method: Some(true),
        };
    }
    RecurringPolicy::default()
}
