//! Domain values shared by request parameters and bodies.

pub mod card_control;
pub mod money;
pub mod statement;

pub use card_control::CardControl;
pub use money::{CurrencyAndAmount, DEFAULT_CURRENCY};
pub use statement::StatementFormat;
