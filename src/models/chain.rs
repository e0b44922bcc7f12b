use serde::{Deserialize, Serialize};

/// A supported blockchain network, identified by a stable id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chain {
    pub id: String,
    pub name: String,
}

impl Chain {
    /// Create a new chain entry
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Which chain set the registry serves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NetworkMode {
    Mainnet,
    Testnet,
}

impl NetworkMode {
    /// Parse a mode from a config string; anything but "testnet" is mainnet
    pub fn from_env_str(s: &str) -> Self {
        if s.eq_ignore_ascii_case("testnet") {
            Self::Testnet
        } else {
            Self::Mainnet
        }
    }

    pub fn is_testnet(&self) -> bool {
        matches!(self, Self::Testnet)
    }
}

impl Default for NetworkMode {
    fn default() -> Self {
        Self::Mainnet
    }
}

impl std::fmt::Display for NetworkMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Mainnet => write!(f, "mainnet"),
            Self::Testnet => write!(f, "testnet"),
        }
    }
}
