/// Prefix of environment variables overriding the configuration file
pub const CONFIG_ENV_PREFIX: &str = "PM";
/// Separator between nested keys of configuration environment variables
pub const CONFIG_ENV_SEPARATOR: &str = "__";

/// Workspace crates logged at the configured level, everything else at `WARN`.
pub const WORKSPACE_CRATES: [&str; 6] = [
    "checkout_server",
    "payment_methods",
    "interfaces",
    "domain_types",
    "pm_common_utils",
    "pm_common_enums",
];

pub const HEALTH_RESPONSE: &str = "health is good";
