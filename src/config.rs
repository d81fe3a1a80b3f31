/// Configuration constants for the Cloud Foundry v2 API
pub mod api {
    /// Services endpoint (the only locator built locally)
    pub const SERVICES: &str = "/v2/services";

    /// Default page size for list requests
    pub const DEFAULT_PAGE_SIZE: u32 = 100;

    /// Maximum concurrent page requests when fetching remaining pages
    pub const MAX_CONCURRENT_PAGE_REQUESTS: usize = 8;
}

/// Configuration constants for session resolution
pub mod session {
    /// Environment variable holding the API endpoint
    pub const API_ENV_VAR: &str = "CF_API";

    /// Environment variable holding the access token
    pub const TOKEN_ENV_VAR: &str = "CF_TOKEN";

    /// Environment variable overriding the directory that contains `.cf/`
    pub const CF_HOME_ENV_VAR: &str = "CF_HOME";

    /// CF CLI config file path (relative to CF_HOME or the home directory)
    pub const CONFIG_FILE_PATH: &str = ".cf/config.json";
}

/// Default values for CLI
pub mod defaults {
    /// Default log level
    pub const LOG_LEVEL: &str = "warn";

    /// Default number of siblings resolved concurrently per level
    pub const CONCURRENCY: usize = 4;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_services_path_format() {
        assert!(api::SERVICES.starts_with("/v2/"));
    }

    #[test]
    fn test_config_file_path_is_relative() {
        assert!(!session::CONFIG_FILE_PATH.starts_with('/'));
        assert!(session::CONFIG_FILE_PATH.ends_with("config.json"));
    }

    #[test]
    fn test_default_concurrency_is_positive() {
        assert!(defaults::CONCURRENCY >= 1);
    }
}
