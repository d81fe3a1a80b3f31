//! CF CLI config file (`~/.cf/config.json`)

use log::debug;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::session;
use crate::error::{CfError, Result};

/// The subset of the CF CLI config this tool reads
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(rename_all = "PascalCase")]
pub struct CfConfigFile {
    #[serde(default)]
    pub target: Option<String>,
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default, rename = "SSLDisabled")]
    pub ssl_disabled: bool,
}

impl CfConfigFile {
    /// Load from the given path
    ///
    /// A missing file is `Ok(None)`; an unreadable or corrupt one is an error.
    pub fn load(path: &Path) -> Result<Option<Self>> {
        debug!("Looking for CF config file at: {}", path.display());

        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(path).map_err(|e| {
            CfError::Credentials(format!(
                "Could not read CF config file {}: {}",
                path.display(),
                e
            ))
        })?;

        let config = serde_json::from_str(&content).map_err(|e| {
            CfError::Credentials(format!(
                "Could not parse CF config file {}: {}",
                path.display(),
                e
            ))
        })?;
        Ok(Some(config))
    }

    /// Non-empty target, if set
    pub fn target(&self) -> Option<&str> {
        self.target.as_deref().filter(|t| !t.trim().is_empty())
    }

    /// Non-empty access token, if set
    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref().filter(|t| !t.trim().is_empty())
    }
}

/// Default location of the CF CLI config file
///
/// `$CF_HOME/.cf/config.json`, falling back to the home directory.
pub fn default_config_path() -> Option<PathBuf> {
    std::env::var_os(session::CF_HOME_ENV_VAR)
        .map(PathBuf::from)
        .or_else(dirs::home_dir)
        .map(|home| home.join(session::CONFIG_FILE_PATH))
}
