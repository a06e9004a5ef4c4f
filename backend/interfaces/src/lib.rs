//! Extension points a payment method integration implements, and the host services it consumes.

pub mod api;
pub mod config_provider;
pub mod host;
