use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";
pub const DEFAULT_DOMAIN: &str = "juice-sh.op";
pub const DEFAULT_USER: &str = "jim";
pub const DEFAULT_PASSWORD: &str = "ncc-1701";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Where the server lives and who to log in as.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CheckerConfig {
    pub base_url: String,

    /// Domain part of the login email (`<user>@<domain>`).
    pub domain: String,
    pub user: String,
    pub password: String,

    /// Per-request timeout applied by the HTTP client.
    pub timeout_secs: u64,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            domain: DEFAULT_DOMAIN.to_string(),
            user: DEFAULT_USER.to_string(),
            password: DEFAULT_PASSWORD.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl CheckerConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let bytes =
            std::fs::read(path).with_context(|| format!("read config {}", path.display()))?;
        let cfg: CheckerConfig = serde_json::from_slice(&bytes)
            .with_context(|| format!("parse config {}", path.display()))?;
        Ok(cfg.normalized())
    }

    /// Strips trailing slashes so `base_url + "/api/..."` never doubles up.
    pub fn normalized(mut self) -> Self {
        let trimmed = self.base_url.trim_end_matches('/').len();
        self.base_url.truncate(trimmed);
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            anyhow::bail!(
                "base_url must start with http:// or https:// (got {:?})",
                self.base_url
            );
        }
        if self.user.is_empty() || self.domain.is_empty() {
            anyhow::bail!("login user and domain must not be empty");
        }
        if self.timeout_secs == 0 {
            anyhow::bail!("timeout_secs must be greater than zero");
        }
        Ok(())
    }

    pub fn email(&self) -> String {
        format!("{}@{}", self.user, self.domain)
    }

    pub fn credentials(&self) -> Credentials {
        Credentials {
            email: self.email(),
            password: self.password.clone(),
        }
    }
}

/// Body of `POST /rest/user/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[cfg(test)]
#[path = "../tests/model/config_tests.rs"]
mod tests;
