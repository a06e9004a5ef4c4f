pub mod config_providers;
pub mod helpers;
pub mod methods;
pub mod types;

#[cfg(test)]
pub(crate) mod test_utils;
