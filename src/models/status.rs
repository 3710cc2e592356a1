use std::fmt;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Verification status as reported by the service.
///
/// Statuses we don't act on (`not_found`, `expired`, ...) are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum VerificationStatus {
    #[default]
    NotStarted,
    Pending,
    Verified,
    Other(String),
}

impl VerificationStatus {
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "" | "not_started" => Self::NotStarted,
            "pending" => Self::Pending,
            "verified" => Self::Verified,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::NotStarted => "not_started",
            Self::Pending => "pending",
            Self::Verified => "verified",
            Self::Other(s) => s,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    pub fn is_verified(&self) -> bool {
        matches!(self, Self::Verified)
    }

    /// Human label: underscores become spaces
    pub fn label(&self) -> String {
        self.as_str().replace('_', " ")
    }
}

impl fmt::Display for VerificationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for VerificationStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for VerificationStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse(&raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_and_unknown_statuses() {
        assert_eq!(VerificationStatus::parse("pending"), VerificationStatus::Pending);
        assert_eq!(VerificationStatus::parse(""), VerificationStatus::NotStarted);
        let other = VerificationStatus::parse("not_found");
        assert_eq!(other, VerificationStatus::Other("not_found".to_string()));
        assert_eq!(other.as_str(), "not_found");
        assert_eq!(other.label(), "not found");
    }

    #[test]
    fn serde_uses_wire_strings() {
        let status: VerificationStatus = serde_json::from_str("\"verified\"").unwrap();
        assert!(status.is_verified());
        assert_eq!(serde_json::to_string(&VerificationStatus::NotStarted).unwrap(), "\"not_started\"");
    }
}
