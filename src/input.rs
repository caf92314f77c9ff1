use serde::{Deserialize, Deserializer};
use std::path::Path;
use tracing::debug;

use crate::dimension::Dimension;

/// Raw protocol data supplied by the caller.
///
/// Missing or unusable values become 0 when scored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(from = "ProtocolFile")]
pub struct ProtocolInput {
    pub name: Option<String>,
    pub decentralization: Option<i64>,
    pub transaction_monitoring: Option<i64>,
    pub user_identification: Option<i64>,
    pub token_classification: Option<i64>,
    pub jurisdictional_exposure: Option<i64>,
    pub governance_disclosure: Option<i64>,
}

/// On-disk shape: every dimension may be spelled with or without the
/// `_score` suffix. When both are present the suffixed key wins.
#[derive(Deserialize)]
struct ProtocolFile {
    #[serde(default)]
    name: Option<String>,
    #[serde(default, deserialize_with = "lenient_score")]
    decentralization_score: Option<i64>,
    #[serde(default, deserialize_with = "lenient_score")]
    decentralization: Option<i64>,
    #[serde(default, deserialize_with = "lenient_score")]
    transaction_monitoring_score: Option<i64>,
    #[serde(default, deserialize_with = "lenient_score")]
    transaction_monitoring: Option<i64>,
    #[serde(default, deserialize_with = "lenient_score")]
    user_identification_score: Option<i64>,
    #[serde(default, deserialize_with = "lenient_score")]
    user_identification: Option<i64>,
    #[serde(default, deserialize_with = "lenient_score")]
    token_classification_score: Option<i64>,
    #[serde(default, deserialize_with = "lenient_score")]
    token_classification: Option<i64>,
    #[serde(default, deserialize_with = "lenient_score")]
    jurisdictional_exposure_score: Option<i64>,
    #[serde(default, deserialize_with = "lenient_score")]
    jurisdictional_exposure: Option<i64>,
    #[serde(default, deserialize_with = "lenient_score")]
    governance_disclosure_score: Option<i64>,
    #[serde(default, deserialize_with = "lenient_score")]
    governance_disclosure: Option<i64>,
}

fn prefer_suffixed(key: &str, suffixed: Option<i64>, bare: Option<i64>) -> Option<i64> {
    if let (Some(s), Some(b)) = (suffixed, bare) {
        if s != b {
            debug!("{}: both {}_score={} and {}={} given, using {}_score", key, key, s, key, b, key);
        }
    }
    suffixed.or(bare)
}

impl From<ProtocolFile> for ProtocolInput {
    fn from(f: ProtocolFile) -> Self {
        Self {
            name: f.name,
            decentralization: prefer_suffixed(
                "decentralization",
                f.decentralization_score,
                f.decentralization,
            ),
            transaction_monitoring: prefer_suffixed(
                "transaction_monitoring",
                f.transaction_monitoring_score,
                f.transaction_monitoring,
            ),
            user_identification: prefer_suffixed(
                "user_identification",
                f.user_identification_score,
                f.user_identification,
            ),
            token_classification: prefer_suffixed(
                "token_classification",
                f.token_classification_score,
                f.token_classification,
            ),
            jurisdictional_exposure: prefer_suffixed(
                "jurisdictional_exposure",
                f.jurisdictional_exposure_score,
                f.jurisdictional_exposure,
            ),
            governance_disclosure: prefer_suffixed(
                "governance_disclosure",
                f.governance_disclosure_score,
                f.governance_disclosure,
            ),
        }
    }
}

impl ProtocolInput {
    pub fn new(name: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            ..Self::default()
        }
    }

    pub fn with_score(mut self, dim: Dimension, raw: i64) -> Self {
        *self.slot_mut(dim) = Some(raw);
        self
    }

    /// Raw value for a dimension, 0 when absent
    pub fn raw(&self, dim: Dimension) -> i64 {
        let value = match dim {
            Dimension::Decentralization => self.decentralization,
            Dimension::TransactionMonitoring => self.transaction_monitoring,
            Dimension::UserIdentification => self.user_identification,
            Dimension::TokenClassification => self.token_classification,
            Dimension::JurisdictionalExposure => self.jurisdictional_exposure,
            Dimension::GovernanceDisclosure => self.governance_disclosure,
        };
        value.unwrap_or(0)
    }

    fn slot_mut(&mut self, dim: Dimension) -> &mut Option<i64> {
        match dim {
            Dimension::Decentralization => &mut self.decentralization,
            Dimension::TransactionMonitoring => &mut self.transaction_monitoring,
            Dimension::UserIdentification => &mut self.user_identification,
            Dimension::TokenClassification => &mut self.token_classification,
            Dimension::JurisdictionalExposure => &mut self.jurisdictional_exposure,
            Dimension::GovernanceDisclosure => &mut self.governance_disclosure,
        }
    }

    /// Load protocol data from a `.json` or TOML file
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read input file '{}': {}", path, e))?;

        let is_json = Path::new(path)
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        let input: ProtocolInput = if is_json {
            serde_json::from_str(&content)
                .map_err(|e| anyhow::anyhow!("Failed to parse input '{}': {}", path, e))?
        } else {
            toml::from_str(&content)
                .map_err(|e| anyhow::anyhow!("Failed to parse input '{}': {}", path, e))?
        };
        Ok(input)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawScore {
    Int(i64),
    Float(f64),
    Text(String),
    Other(serde::de::IgnoredAny),
}

impl RawScore {
    fn to_i64(&self) -> Option<i64> {
        match self {
            RawScore::Int(v) => Some(*v),
            // `as` truncates toward zero and saturates
            RawScore::Float(v) if v.is_finite() => Some(*v as i64),
            RawScore::Float(_) => None,
            RawScore::Text(s) => {
                let s = s.trim();
                s.parse::<i64>()
                    .ok()
                    .or_else(|| s.parse::<f64>().ok().filter(|v| v.is_finite()).map(|v| v as i64))
            }
            RawScore::Other(_) => None,
        }
    }
}

/// Accept integers, floats, numeric strings; anything else is treated as absent
fn lenient_score<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = RawScore::deserialize(deserializer)?;
    Ok(raw.to_i64())
}
