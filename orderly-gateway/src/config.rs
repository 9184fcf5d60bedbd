//! Environment-driven gateway configuration.

use std::env;

/// Environment variable naming the socket address the gateway listens on.
pub const LISTEN_ADDR_ENV: &str = "ORDERLY_LISTEN_ADDR";

/// Environment variable naming the logical order table.
pub const TABLE_NAME_ENV: &str = "ORDERLY_TABLE_NAME";

/// Environment variable controlling the CORS layer (`permissive` or `disabled`).
pub const CORS_ENV: &str = "ORDERLY_CORS";

/// Listen address used when [`LISTEN_ADDR_ENV`] is unset.
pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:3000";

/// Table name used when [`TABLE_NAME_ENV`] is unset.
pub const DEFAULT_TABLE_NAME: &str = "sample-orders-table";

/// How the gateway answers cross-origin browser requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CorsMode {
    /// Allow any origin, method, and header. The browser frontend is served
    /// from a different origin than the API, so this is the default.
    Permissive,
    /// No CORS headers at all.
    Disabled,
}

impl CorsMode {
    /// Parses a mode from its environment-variable spelling.
    ///
    /// Anything other than `disabled` (case-insensitive) selects
    /// [`CorsMode::Permissive`].
    #[must_use]
    pub fn parse(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("disabled") {
            CorsMode::Disabled
        } else {
            CorsMode::Permissive
        }
    }
}

/// Runtime configuration resolved from the environment.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Socket address the HTTP listener binds.
    pub listen_addr: String,
    /// Logical table name handed to the order store.
    pub table_name: String,
    /// CORS behavior for the router.
    pub cors: CorsMode,
}

impl GatewayConfig {
    /// Reads the configuration from process environment variables, falling
    /// back to defaults for anything unset.
    #[must_use]
    pub fn from_env() -> Self {
        GatewayConfig {
            listen_addr: env::var(LISTEN_ADDR_ENV)
                .unwrap_or_else(|_| DEFAULT_LISTEN_ADDR.to_owned()),
            table_name: env::var(TABLE_NAME_ENV)
                .unwrap_or_else(|_| DEFAULT_TABLE_NAME.to_owned()),
            cors: CorsMode::parse(&env::var(CORS_ENV).unwrap_or_default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cors_mode_parse_is_case_insensitive() {
        assert_eq!(CorsMode::parse("disabled"), CorsMode::Disabled);
        assert_eq!(CorsMode::parse("DISABLED"), CorsMode::Disabled);
        assert_eq!(CorsMode::parse(" Disabled "), CorsMode::Disabled);
    }

    #[test]
    fn cors_mode_defaults_to_permissive() {
        assert_eq!(CorsMode::parse(""), CorsMode::Permissive);
        assert_eq!(CorsMode::parse("permissive"), CorsMode::Permissive);
        assert_eq!(CorsMode::parse("anything-else"), CorsMode::Permissive);
    }
}
