use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// The widget's `paymentMethod` blob, classified for the recurring policy.
///
/// Classification only reads the fields the policy cares about; the raw JSON is preserved
/// untouched and is what gets transmitted to the PSP, so unknown method types and future fields
/// survive the round trip byte-for-byte.
#[derive(Debug, Clone, PartialEq)]
pub enum PaymentMethod {
    /// Carries a `storedPaymentMethodId` (or the legacy `recurringDetailReference`): a method the
    /// PSP already has on file for this shopper.
    Stored { id: String, raw: Value },
    /// A fresh card entry (`type == "scheme"`).
    Card(Value),
    /// Any other typed method: redirect-style wallets, bank transfers, and friends.
    Redirect(Value),
    /// No recognisable `type` field. Passed through untouched.
    Other(Value),
}

impl PaymentMethod {
    pub fn from_value(raw: Value) -> Self {
        let stored_id = raw
            .get("storedPaymentMethodId")
            .or_else(|| raw.get("recurringDetailReference"))
            .and_then(Value::as_str)
            .map(str::to_string);
        if let Some(id) = stored_id {
            return PaymentMethod::Stored { id, raw };
        }
        match raw.get("type").and_then(Value::as_str) {
            Some("scheme") => PaymentMethod::Card(raw),
            Some(_) => PaymentMethod::Redirect(raw),
            None => PaymentMethod::Other(raw),
        }
    }

    /// A stored method means this attempt is a continued authorisation.
    pub fn is_stored(&self) -> bool {
        matches!(self, PaymentMethod::Stored { .. })
    }

    pub fn stored_id(&self) -> Option<&str> {
        match self {
            PaymentMethod::Stored { id, .. } => Some(id),
            _ => None,
        }
    }

    pub fn raw(&self) -> &Value {
        match self {
            PaymentMethod::Stored { raw, .. }
            | PaymentMethod::Card(raw)
            | PaymentMethod::Redirect(raw)
            | PaymentMethod::Other(raw) => raw,
        }
    }

    pub fn into_raw(self) -> Value {
        match self {
            PaymentMethod::Stored { raw, .. }
            | PaymentMethod::Card(raw)
            | PaymentMethod::Redirect(raw)
            | PaymentMethod::Other(raw) => raw,
        }
    }
}

impl Serialize for PaymentMethod {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.raw().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for PaymentMethod {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Value::deserialize(deserializer)?;
        Ok(PaymentMethod::from_value(raw))
    }
}
