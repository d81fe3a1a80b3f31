//! API endpoint resolution from multiple sources

use log::debug;
use std::path::PathBuf;

use crate::cf::config_file::{default_config_path, CfConfigFile};
use crate::config::session;
use crate::error::{CfError, Result};

/// Resolved API endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    /// Base URL (scheme included)
    pub url: String,
    /// Skip TLS certificate verification
    pub skip_ssl_validation: bool,
}

/// Endpoint resolution with fallback logic
pub struct EndpointResolver {
    config_path: Option<PathBuf>,
}

impl Default for EndpointResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl EndpointResolver {
    /// Create a resolver that reads the default CF CLI config file
    pub fn new() -> Self {
        Self {
            config_path: default_config_path(),
        }
    }

    /// Create a resolver with a custom config path (for testing)
    pub fn with_config_path(path: PathBuf) -> Self {
        Self {
            config_path: Some(path),
        }
    }

    /// Resolve endpoint from multiple sources with fallback:
    /// 1. CLI argument (if provided)
    /// 2. Environment variable (CF_API)
    /// 3. CF CLI config file (`Target`)
    ///
    /// TLS verification is skipped when requested on the command line or
    /// when the config file was written by `cf api --skip-ssl-validation`
    /// for that same target.
    pub fn resolve(&self, cli_api: Option<&str>, skip_ssl_validation: bool) -> Result<Endpoint> {
        if let Some(api) = cli_api {
            debug!("Using API endpoint from CLI argument: {}", api);
            let config = self.load_config_lenient();
            return Ok(Self::endpoint(api, skip_ssl_validation, config.as_ref()));
        }

        if let Ok(api) = std::env::var(session::API_ENV_VAR) {
            if !api.trim().is_empty() {
                debug!(
                    "Using API endpoint from {} environment variable: {}",
                    session::API_ENV_VAR,
                    api
                );
                let config = self.load_config_lenient();
                return Ok(Self::endpoint(&api, skip_ssl_validation, config.as_ref()));
            }
        }

        let config = match &self.config_path {
            Some(path) => CfConfigFile::load(path)?,
            None => None,
        };

        match config.as_ref().and_then(|c| c.target()) {
            Some(target) => {
                debug!("Using API endpoint from CF config file: {}", target);
                Ok(Self::endpoint(target, skip_ssl_validation, config.as_ref()))
            }
            None => Err(CfError::EndpointNotFound(Self::endpoint_not_found_message(
                self.config_path.as_deref(),
            ))),
        }
    }

    /// Config file consulted only for `SSLDisabled`; unreadable counts as absent
    fn load_config_lenient(&self) -> Option<CfConfigFile> {
        let path = self.config_path.as_ref()?;
        match CfConfigFile::load(path) {
            Ok(config) => config,
            Err(e) => {
                debug!("Ignoring CF config file {}: {}", path.display(), e);
                None
            }
        }
    }

    fn endpoint(api: &str, skip_ssl_validation: bool, config: Option<&CfConfigFile>) -> Endpoint {
        let url = normalize_url(api);
        let config_skips = config
            .filter(|c| c.ssl_disabled)
            .and_then(|c| c.target())
            .is_some_and(|target| normalize_url(target) == url);
        Endpoint {
            url,
            skip_ssl_validation: skip_ssl_validation || config_skips,
        }
    }

    /// Generate helpful error message when no endpoint is configured
    fn endpoint_not_found_message(config_path: Option<&std::path::Path>) -> String {
        let file_info = match config_path {
            Some(p) => format!("\n   CF config file: {} (no target)", p.display()),
            None => "\n   CF config file: not found".to_string(),
        };

        format!(
            "No Cloud Foundry API endpoint specified. Please provide one using one of:\n\
             \n\
             1. CLI argument:      cf-service-use --api <URL>\n\
             2. Environment var:   export {}=<URL>\n\
             3. CF CLI target:     cf api <URL>\n\
             \n\
             Checked:{}\n",
            session::API_ENV_VAR,
            file_info
        )
    }
}

/// Add `https://` when no scheme is given and drop trailing slashes
pub fn normalize_url(api: &str) -> String {
    let api = api.trim().trim_end_matches('/');
    if api.starts_with("http://") || api.starts_with("https://") {
        api.to_string()
    } else {
        format!("https://{}", api)
    }
}
