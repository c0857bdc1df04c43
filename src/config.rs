/// Configuration constants for the Merit API
pub mod api {
    /// Production API base URL
    pub const PRODUCTION_URL: &str = "https://api.merits.com/v2";

    /// Sandbox API base URL
    pub const SANDBOX_URL: &str = "https://sandbox-api.merits.com/v2";

    /// Lifetime of an org access token, in seconds
    pub const ACCESS_TOKEN_TTL_SECS: i64 = 3600;

    /// Default number of items requested by listing operations
    pub const DEFAULT_LIMIT: u32 = 100;

    /// Hard cap on pages fetched by a single listing call
    pub const MAX_PAGES: usize = 1000;

    /// Minimum length of an org search query
    pub const MIN_SEARCH_QUERY_LEN: usize = 3;

    /// Connect timeout for the HTTP client, in seconds
    pub const CONNECT_TIMEOUT_SECS: u64 = 10;

    /// Overall request timeout for the HTTP client, in seconds
    pub const REQUEST_TIMEOUT_SECS: u64 = 30;
}

/// Configuration constants for credentials
pub mod credentials {
    /// Environment variable holding the application ID
    pub const APP_ID_ENV: &str = "MERIT_APP_ID";

    /// Environment variable holding the application secret
    pub const APP_SECRET_ENV: &str = "MERIT_APP_SECRET";

    /// Environment variable holding the organization ID
    pub const ORG_ID_ENV: &str = "MERIT_ORG_ID";

    /// Environment variable selecting the sandbox environment
    pub const SANDBOX_ENV: &str = "MERIT_SANDBOX";
}

/// Default values for CLI
pub mod defaults {
    /// Default log level
    pub const LOG_LEVEL: &str = "warn";
}
