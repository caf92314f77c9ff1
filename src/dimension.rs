use serde::Serialize;

/// Compliance dimensions - 6つの固定カテゴリ
///
/// 宣言順がそのままレポートと推奨事項の並び順になる。
/// 最大スコアの合計は常に 100。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Decentralization,
    TransactionMonitoring,
    UserIdentification,
    TokenClassification,
    JurisdictionalExposure,
    GovernanceDisclosure,
}

/// Sum of all dimension maxima
pub const TOTAL_MAX: u32 = 100;

impl Dimension {
    pub const ALL: [Dimension; 6] = [
        Dimension::Decentralization,
        Dimension::TransactionMonitoring,
        Dimension::UserIdentification,
        Dimension::TokenClassification,
        Dimension::JurisdictionalExposure,
        Dimension::GovernanceDisclosure,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Dimension::Decentralization => "decentralization",
            Dimension::TransactionMonitoring => "transaction_monitoring",
            Dimension::UserIdentification => "user_identification",
            Dimension::TokenClassification => "token_classification",
            Dimension::JurisdictionalExposure => "jurisdictional_exposure",
            Dimension::GovernanceDisclosure => "governance_disclosure",
        }
    }

    pub fn max_score(&self) -> u32 {
        match self {
            Dimension::Decentralization => 20,
            Dimension::TransactionMonitoring => 20,
            Dimension::UserIdentification => 15,
            Dimension::TokenClassification => 15,
            Dimension::JurisdictionalExposure => 15,
            Dimension::GovernanceDisclosure => 15,
        }
    }

    /// Human-readable name, e.g. "Transaction Monitoring"
    pub fn display_name(&self) -> String {
        self.key()
            .split('_')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Fixed advisory text shown when the dimension underperforms
    pub fn advisory(&self) -> &'static str {
        match self {
            Dimension::Decentralization => {
                "Further decentralize governance (remove multisigs/admin keys) and reduce frontend dependency."
            }
            Dimension::TransactionMonitoring => {
                "Integrate sanctions oracles (Chainalysis/Refinitiv) and on-chain anomaly detection."
            }
            Dimension::UserIdentification => {
                "Implement privacy-preserving KYC (ZK-proofs, credential attestation) or optional verified tiers."
            }
            Dimension::TokenClassification => {
                "Enhance utility focus, issue legal opinions, reduce perceived investment expectations."
            }
            Dimension::JurisdictionalExposure => {
                "Add geo-blocking, enforceable ToS restrictions, and multi-jurisdiction compliance layers."
            }
            Dimension::GovernanceDisclosure => {
                "Establish compliance committee, publish risk/transparency reports, add incident response plans."
            }
        }
    }

    /// Clamp a raw score into [0, max_score]
    pub fn clamp(&self, raw: i64) -> u32 {
        raw.clamp(0, self.max_score() as i64) as u32
    }

    /// Strictly below half of the maximum. Exactly 50% does not count.
    pub fn is_underperforming(&self, score: u32) -> bool {
        score * 2 < self.max_score()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_maxima_sum_to_total() {
        let sum: u32 = Dimension::ALL.iter().map(|d| d.max_score()).sum();
        assert_eq!(sum, TOTAL_MAX);
    }

    #[test]
    fn test_display_names() {
        assert_eq!(Dimension::Decentralization.display_name(), "Decentralization");
        assert_eq!(
            Dimension::TransactionMonitoring.display_name(),
            "Transaction Monitoring"
        );
        assert_eq!(
            Dimension::JurisdictionalExposure.display_name(),
            "Jurisdictional Exposure"
        );
    }

    #[test]
    fn test_clamp_stays_in_range() {
        for dim in Dimension::ALL {
            let max = dim.max_score();
            for raw in [-1_000, -1, 0, 1, max as i64 - 1, max as i64, max as i64 + 1, 1_000] {
                let clamped = dim.clamp(raw);
                assert!(clamped <= max, "{} clamped {} to {}", dim.key(), raw, clamped);
            }
            assert_eq!(dim.clamp(-5), 0);
            assert_eq!(dim.clamp(max as i64), max);
            assert_eq!(dim.clamp(i64::MAX), max);
        }
    }

    #[test]
    fn test_half_max_boundary() {
        let dim = Dimension::Decentralization;
        assert!(dim.is_underperforming(9));
        assert!(!dim.is_underperforming(10));

        // 15 * 0.5 = 7.5
        let dim = Dimension::UserIdentification;
        assert!(dim.is_underperforming(7));
        assert!(!dim.is_underperforming(8));
    }

    #[test]
    fn test_half_max_matches_fractional_rule() {
        for dim in Dimension::ALL {
            let max = dim.max_score();
            for score in 0..=max {
                assert_eq!(
                    dim.is_underperforming(score),
                    (score as f64) < max as f64 * 0.5,
                    "{} at {}/{}",
                    dim.key(),
                    score,
                    max
                );
            }
        }
    }
}
