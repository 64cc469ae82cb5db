mod amount;
mod secret;

pub use amount::Amount;
pub use secret::Secret;
