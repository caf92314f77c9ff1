use serde::Serialize;
use tracing::{debug, warn};

use crate::dimension::{Dimension, TOTAL_MAX};
use crate::input::ProtocolInput;
use crate::tier::RiskTier;

pub const DEFAULT_PROTOCOL_NAME: &str = "Unknown Protocol";
pub const STRONG_POSTURE_MESSAGE: &str = "Strong across most dimensions – maintain and monitor.";

/// Clamped score of a single dimension
#[derive(Debug, Clone, Serialize)]
pub struct DimensionScore {
    pub dimension: Dimension,
    pub score: u32,
    pub max_score: u32,
}

impl DimensionScore {
    pub fn percentage(&self) -> f64 {
        round1(self.score as f64 / self.max_score as f64 * 100.0)
    }
}

/// Result of scoring one protocol. Immutable once built.
#[derive(Debug, Clone, Serialize)]
pub struct Assessment {
    pub protocol_name: String,
    pub total_score: u32,
    pub max_score: u32,
    pub percentage: f64,
    pub risk_level: RiskTier,
    pub risk_description: String,
    /// In dimension declaration order
    pub scores_breakdown: Vec<DimensionScore>,
    pub recommendations: Vec<String>,
}

/// Score a protocol.
///
/// Never fails: out-of-range values are clamped, missing values count as 0
/// and a missing name becomes "Unknown Protocol".
pub fn score(input: &ProtocolInput) -> Assessment {
    let scores_breakdown: Vec<DimensionScore> = Dimension::ALL
        .iter()
        .map(|dim| {
            let raw = input.raw(*dim);
            let score = dim.clamp(raw);
            if score as i64 != raw {
                warn!("{}: raw score {} clamped to {}", dim.key(), raw, score);
            }
            DimensionScore {
                dimension: *dim,
                score,
                max_score: dim.max_score(),
            }
        })
        .collect();

    let total_score: u32 = scores_breakdown.iter().map(|s| s.score).sum();
    let risk_level = RiskTier::from_total(total_score);
    let recommendations = recommend(&scores_breakdown);

    let assessment = Assessment {
        protocol_name: input
            .name
            .clone()
            .unwrap_or_else(|| DEFAULT_PROTOCOL_NAME.to_string()),
        total_score,
        max_score: TOTAL_MAX,
        percentage: round1(total_score as f64 / TOTAL_MAX as f64 * 100.0),
        risk_level,
        risk_description: risk_level.description().to_string(),
        scores_breakdown,
        recommendations,
    };

    debug!(
        "Assessed {}: {}/{} ({}) with {} recommendation(s)",
        assessment.protocol_name,
        assessment.total_score,
        assessment.max_score,
        assessment.risk_level,
        assessment.recommendations.len()
    );

    assessment
}

/// One line per underperforming dimension in declaration order,
/// or the generic message when none underperform
fn recommend(scores: &[DimensionScore]) -> Vec<String> {
    let recs: Vec<String> = scores
        .iter()
        .filter(|s| s.dimension.is_underperforming(s.score))
        .map(|s| {
            format!(
                "{}: {} (Score: {}/{})",
                s.dimension.display_name(),
                s.dimension.advisory(),
                s.score,
                s.max_score
            )
        })
        .collect();

    if recs.is_empty() {
        vec![STRONG_POSTURE_MESSAGE.to_string()]
    } else {
        recs
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
