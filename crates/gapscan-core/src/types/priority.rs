//! Field priority — the closed four-value set.

use serde::{Deserialize, Serialize};

use crate::errors::GapError;

/// Priority of a catalog field for downstream questionnaire building.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldPriority {
    Critical,
    High,
    Medium,
    Low,
}

impl FieldPriority {
    pub const ALL: [FieldPriority; 4] = [Self::Critical, Self::High, Self::Medium, Self::Low];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl std::str::FromStr for FieldPriority {
    type Err = GapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "critical" => Ok(Self::Critical),
            "high" => Ok(Self::High),
            "medium" => Ok(Self::Medium),
            "low" => Ok(Self::Low),
            other => Err(GapError::InvalidPriority {
                value: other.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for FieldPriority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
