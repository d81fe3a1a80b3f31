//! Access token resolution from multiple sources

use log::debug;
use std::path::PathBuf;

use crate::cf::config_file::{default_config_path, CfConfigFile};
use crate::config::session;
use crate::error::{CfError, Result};

/// Token resolution with fallback logic
pub struct TokenResolver {
    config_path: Option<PathBuf>,
}

impl Default for TokenResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenResolver {
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

    /// Resolve token from multiple sources with fallback:
    /// 1. CLI argument (if provided)
    /// 2. Environment variable (CF_TOKEN)
    /// 3. CF CLI config file (`AccessToken`, as written by `cf login`)
    pub fn resolve(&self, cli_token: Option<&str>) -> Result<String> {
        if let Some(token) = cli_token {
            debug!("Using token from CLI argument");
            return Ok(token.to_string());
        }

        if let Ok(token) = std::env::var(session::TOKEN_ENV_VAR) {
            if !token.trim().is_empty() {
                debug!(
                    "Using token from {} environment variable",
                    session::TOKEN_ENV_VAR
                );
                return Ok(token);
            }
        }

        debug!(
            "No token in CLI or {}, trying CF config file",
            session::TOKEN_ENV_VAR
        );
        self.read_from_config_file()
    }

    /// Read token from the CF CLI config file
    fn read_from_config_file(&self) -> Result<String> {
        let path = self
            .config_path
            .as_ref()
            .ok_or_else(|| CfError::TokenNotFound(Self::token_not_found_message(None)))?;

        let config = CfConfigFile::load(path)?;

        config
            .as_ref()
            .and_then(|c| c.access_token())
            .map(|token| {
                debug!("Using token from CF config file {}", path.display());
                token.to_string()
            })
            .ok_or_else(|| CfError::TokenNotFound(Self::token_not_found_message(Some(path))))
    }

    /// Generate helpful error message when token is not found
    fn token_not_found_message(config_path: Option<&std::path::Path>) -> String {
        let file_info = config_path
            .map(|p| format!(" and CF config file {}", p.display()))
            .unwrap_or_default();

        format!(
            "No access token found. Please provide a token using one of:\n\
             \n\
             1. CLI argument:      cf-service-use --token <TOKEN>\n\
             2. Environment var:   export {}=<TOKEN>\n\
             3. CF CLI login:      cf login -a <API>\n\
             \n\
             Checked: env var [{}]{}",
            session::TOKEN_ENV_VAR,
            session::TOKEN_ENV_VAR,
            file_info
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_cli_token_takes_precedence() {
        let resolver = TokenResolver::with_config_path(PathBuf::from("/nonexistent/config.json"));
        let result = resolver.resolve(Some("cli-token-123"));
        assert_eq!(result.unwrap(), "cli-token-123");
    }

    #[test]
    fn test_read_token_from_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "AccessToken": "bearer file-token" }}"#).unwrap();

        let resolver = TokenResolver::with_config_path(file.path().to_path_buf());
        assert_eq!(resolver.read_from_config_file().unwrap(), "bearer file-token");
    }

    #[test]
    fn test_missing_config_file_is_token_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let resolver = TokenResolver::with_config_path(dir.path().join("config.json"));

        match resolver.read_from_config_file() {
            Err(CfError::TokenNotFound(msg)) => assert!(msg.contains("config.json")),
            other => panic!("Expected TokenNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_config_without_token_is_token_not_found() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "Target": "https://api.example.com" }}"#).unwrap();

        let resolver = TokenResolver::with_config_path(file.path().to_path_buf());
        assert!(matches!(
            resolver.read_from_config_file(),
            Err(CfError::TokenNotFound(_))
        ));
    }

    #[test]
    fn test_token_not_found_message_format() {
        let msg = TokenResolver::token_not_found_message(None);
        assert!(msg.contains("cf-service-use --token"));
        assert!(msg.contains(session::TOKEN_ENV_VAR));
        assert!(msg.contains("cf login"));
    }
}
