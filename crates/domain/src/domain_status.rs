use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Registration status of a domain as reported by a DAS server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DomainStatus {
    /// Registered and in use.
    Active,
    /// Free to register.
    Available,
    /// Not a well-formed or registrable name for this registry.
    Invalid,
    /// The reply could not be classified.
    Error,
}

impl DomainStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Available => "available",
            Self::Invalid => "invalid",
            Self::Error => "error",
        }
    }

    pub fn is_registered(&self) -> bool {
        matches!(self, Self::Active)
    }

    /// Picks the status from the markers found under `<status>`.
    ///
    /// Markers should be mutually exclusive, but when several are present the
    /// order is `active`, then `available`, then `invalid`.
    pub fn from_markers(active: bool, available: bool, invalid: bool) -> Self {
        if active {
            Self::Active
        } else if available {
            Self::Available
        } else if invalid {
            Self::Invalid
        } else {
            Self::Error
        }
    }
}

impl fmt::Display for DomainStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DomainStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "active" => Ok(Self::Active),
            "available" => Ok(Self::Available),
            "invalid" => Ok(Self::Invalid),
            "error" => Ok(Self::Error),
            other => Err(format!("Unknown domain status: {}", other)),
        }
    }
}
