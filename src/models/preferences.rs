use serde::{Deserialize, Serialize};

/// Self-declared user expertise, drives the default chain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpertiseLevel {
    Easy,
    Expert,
}

/// User region, drives the default stablecoin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Region {
    Eu,
    Us,
    Global,
}

/// Supported stablecoins
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Token {
    Usdc,
    Eurc,
}

impl Token {
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Usdc => "USDC",
            Self::Eurc => "EURC",
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Per-user preference blob, persisted in the local key-value store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserPreferences {
    pub expertise: ExpertiseLevel,
    pub region: Region,
    pub address_hash: String,
    pub default_token: Token,
    pub default_chain: String,
}

impl UserPreferences {
    /// Derive preferences from the onboarding selections.
    ///
    /// EU users default to EURC, everyone else to USDC; easy mode defaults to
    /// ethereum, expert mode to flow.
    pub fn derive(
        expertise: ExpertiseLevel,
        region: Region,
        address_hash: impl Into<String>,
    ) -> Self {
        let default_token = match region {
            Region::Eu => Token::Eurc,
            _ => Token::Usdc,
        };
        let default_chain = match expertise {
            ExpertiseLevel::Easy => "ethereum",
            ExpertiseLevel::Expert => "flow",
        };

        Self {
            expertise,
            region,
            address_hash: address_hash.into(),
            default_token,
            default_chain: default_chain.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eu_easy_defaults() {
        let prefs = UserPreferences::derive(ExpertiseLevel::Easy, Region::Eu, "0xabc");
        assert_eq!(prefs.default_token, Token::Eurc);
        assert_eq!(prefs.default_chain, "ethereum");
    }

    #[test]
    fn non_eu_expert_defaults() {
        let prefs = UserPreferences::derive(ExpertiseLevel::Expert, Region::Global, "0xabc");
        assert_eq!(prefs.default_token, Token::Usdc);
        assert_eq!(prefs.default_chain, "flow");
    }

    #[test]
    fn serialization_round_trip() {
        let prefs = UserPreferences::derive(ExpertiseLevel::Easy, Region::Us, "0xdef");
        let json = serde_json::to_string(&prefs).unwrap();
        assert!(json.contains("\"USDC\""));
        assert!(json.contains("\"easy\""));

        let back: UserPreferences = serde_json::from_str(&json).unwrap();
        assert_eq!(back, prefs);
    }
}
