use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Data-quality tier assigned to every observation by the backend.
///
/// Variants are declared from lowest to highest so the derived `Ord`
/// follows the tier ranking: `Poor < Questionable < Good < Excellent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QualityLevel {
    Poor,
    Questionable,
    Good,
    Excellent,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown quality level: {0}")]
pub struct UnknownQualityLevel(pub String);

impl QualityLevel {
    /// Display order, best tier first.
    pub const ALL: [QualityLevel; 4] = [
        QualityLevel::Excellent,
        QualityLevel::Good,
        QualityLevel::Questionable,
        QualityLevel::Poor,
    ];

    /// Wire name (`quality_threshold` value, `quality` record field).
    pub fn as_str(&self) -> &'static str {
        match self {
            QualityLevel::Excellent => "excellent",
            QualityLevel::Good => "good",
            QualityLevel::Questionable => "questionable",
            QualityLevel::Poor => "poor",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            QualityLevel::Excellent => "Excellent",
            QualityLevel::Good => "Good",
            QualityLevel::Questionable => "Questionable",
            QualityLevel::Poor => "Poor",
        }
    }

    /// Confidence weight the backend applies to observations of this tier.
    pub fn weight(&self) -> f64 {
        match self {
            QualityLevel::Excellent => 1.0,
            QualityLevel::Good => 0.8,
            QualityLevel::Questionable => 0.5,
            QualityLevel::Poor => 0.3,
        }
    }

    /// Chart color for this tier.
    pub fn color(&self) -> &'static str {
        match self {
            QualityLevel::Excellent => "#2E7D32",
            QualityLevel::Good => "#7CB342",
            QualityLevel::Questionable => "#F9A825",
            QualityLevel::Poor => "#C62828",
        }
    }
}

impl fmt::Display for QualityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QualityLevel {
    type Err = UnknownQualityLevel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "excellent" => Ok(QualityLevel::Excellent),
            "good" => Ok(QualityLevel::Good),
            "questionable" => Ok(QualityLevel::Questionable),
            "poor" => Ok(QualityLevel::Poor),
            _ => Err(UnknownQualityLevel(s.to_string())),
        }
    }
}
