//! Utilities shared by the payment method crates.

pub mod consts;
pub mod errors;
pub mod ext_traits;
pub mod pii;

pub use errors::CustomResult;
pub use pii::Email;
