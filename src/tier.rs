use serde::Serialize;
use std::fmt;

/// Risk tier derived from the total compliance score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskTier {
    Low,
    Moderate,
    High,
    /// Only reachable for totals outside [0, 100]
    Unknown,
}

/// Ordered, inclusive (low, high, tier) ranges. First match wins.
const TIER_RANGES: [(u32, u32, RiskTier); 3] = [
    (61, 100, RiskTier::Low),
    (31, 60, RiskTier::Moderate),
    (0, 30, RiskTier::High),
];

impl RiskTier {
    pub fn from_total(total: u32) -> Self {
        TIER_RANGES
            .iter()
            .find(|(low, high, _)| (*low..=*high).contains(&total))
            .map(|(_, _, tier)| *tier)
            .unwrap_or(RiskTier::Unknown)
    }

    pub fn label(&self) -> &'static str {
        match self {
            RiskTier::Low => "LOW",
            RiskTier::Moderate => "MODERATE",
            RiskTier::High => "HIGH",
            RiskTier::Unknown => "UNKNOWN",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            RiskTier::Low => {
                "Strong compliance posture – well-positioned for regulated environments"
            }
            RiskTier::Moderate => "Partial measures in place – significant gaps remain",
            RiskTier::High => "Critical compliance gaps – high regulatory enforcement risk",
            RiskTier::Unknown => "Invalid score range",
        }
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundaries_inclusive() {
        assert_eq!(RiskTier::from_total(0), RiskTier::High);
        assert_eq!(RiskTier::from_total(30), RiskTier::High);
        assert_eq!(RiskTier::from_total(31), RiskTier::Moderate);
        assert_eq!(RiskTier::from_total(60), RiskTier::Moderate);
        assert_eq!(RiskTier::from_total(61), RiskTier::Low);
        assert_eq!(RiskTier::from_total(100), RiskTier::Low);
    }

    #[test]
    fn test_out_of_range_is_unknown() {
        let tier = RiskTier::from_total(101);
        assert_eq!(tier, RiskTier::Unknown);
        assert_eq!(tier.description(), "Invalid score range");
    }

    #[test]
    fn test_serializes_uppercase() {
        let json = serde_json::to_string(&RiskTier::Moderate).unwrap();
        assert_eq!(json, "\"MODERATE\"");
        assert_eq!(RiskTier::Low.to_string(), "LOW");
    }
}
