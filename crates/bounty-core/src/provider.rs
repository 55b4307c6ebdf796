//! Hosted-VCS providers recognized by bounty-sync.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

/// A hosted-VCS provider, detected from a URL's host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Provider {
    Github,
    Gitlab,
}

impl Provider {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Github => "github",
            Self::Gitlab => "gitlab",
        }
    }

    /// Canonical web host for the provider.
    #[must_use]
    pub const fn host(self) -> &'static str {
        match self {
            Self::Github => "github.com",
            Self::Gitlab => "gitlab.com",
        }
    }

    /// Detect the provider by host suffix. `host` must already be lowercase.
    #[must_use]
    pub fn from_host(host: &str) -> Option<Self> {
        if host.ends_with(Self::Github.host()) {
            Some(Self::Github)
        } else if host.ends_with(Self::Gitlab.host()) {
            Some(Self::Gitlab)
        } else {
            None
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Provider {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "github" => Ok(Self::Github),
            "gitlab" => Ok(Self::Gitlab),
            other => Err(CoreError::UnknownProvider(other.to_string())),
        }
    }
}
