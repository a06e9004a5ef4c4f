pub mod checkout_config;
pub mod errors;
pub mod issuers;
pub mod order;
pub mod payment_address;
pub mod payment_info;
pub mod transaction;
pub mod types;
pub mod utils;
