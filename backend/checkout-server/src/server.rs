pub mod checkout;
pub mod health_check;
pub mod payments;
