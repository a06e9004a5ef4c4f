//! Consolidated constants for the payment method workspace

// =============================================================================
// Payment method codes and configuration paths
// =============================================================================

/// Prefix shared by every payment method code registered with the host
pub const METHOD_CODE_PREFIX: &str = "buckaroo_magento2_";
/// Root of the per-method configuration paths
pub const PAYMENT_CONFIG_SECTION: &str = "payment";
/// Module that owns the static assets (issuer logos)
pub const ASSET_MODULE: &str = "Buckaroo_Magento2";

// =============================================================================
// Additional information keys
// =============================================================================

/// Issuer chosen by the customer
pub const ISSUER_KEY: &str = "issuer";
/// Skips issuer validation when truthy
pub const SKIP_VALIDATION_KEY: &str = "buckaroo_skip_validation";
/// Tells the push handler to ignore the first asynchronous notification
pub const SKIP_PUSH_KEY: &str = "skip_push";

// =============================================================================
// HTTP Headers
// =============================================================================

/// Header key for request ID
pub const X_REQUEST_ID: &str = "x-request-id";
/// Header key for store scope identification
pub const X_STORE_ID: &str = "x-store-id";

// =============================================================================
// Common values
// =============================================================================

/// A string constant representing a redacted or masked value
pub const REDACTED: &str = "Redacted";
/// Fee label used when neither the method nor the store configures one
pub const DEFAULT_PAYMENT_FEE_LABEL: &str = "Fee";

// =============================================================================
// Environment and Configuration
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Env {
    Development,
    Release,
}

impl Env {
    pub const fn current_env() -> Self {
        if cfg!(debug_assertions) {
            Self::Development
        } else {
            Self::Release
        }
    }

    pub const fn config_path(self) -> &'static str {
        match self {
            Self::Development => "development.toml",
            Self::Release => "production.toml",
        }
    }
}

impl std::fmt::Display for Env {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Release => write!(f, "release"),
        }
    }
}
