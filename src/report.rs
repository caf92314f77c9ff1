use chrono::Utc;

use crate::config::{ReportConfig, ReportFormat};
use crate::scorer::Assessment;

pub const TITLE: &str = "  DEFI PROTOCOL REGULATORY RISK ASSESSMENT  ";

/// Reporter - Assessment をコンソール向けテキスト/JSON に整形する
///
/// ビジネスロジックは持たない。
pub struct Reporter {
    config: ReportConfig,
}

impl Reporter {
    pub fn new(config: &ReportConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    pub fn render(&self, assessment: &Assessment) -> anyhow::Result<String> {
        match self.config.format {
            ReportFormat::Text => Ok(self.format_text(assessment)),
            ReportFormat::Json => self.format_json(assessment),
        }
    }

    /// Fixed-width text report
    pub fn format_text(&self, assessment: &Assessment) -> String {
        let width = self.config.width;
        let banner = "=".repeat(width);
        let rule = "-".repeat(width);
        let mut lines: Vec<String> = Vec::new();

        lines.push(String::new());
        lines.push(banner.clone());
        lines.push(format!("{:^width$}", TITLE, width = width));
        lines.push(banner.clone());
        lines.push(String::new());
        lines.push(format!("Protocol: {}", assessment.protocol_name));
        lines.push(format!(
            "Overall Score: {}/{} ({:.1}%)",
            assessment.total_score, assessment.max_score, assessment.percentage
        ));
        lines.push(format!("Risk Level:   {}", assessment.risk_level));
        lines.push(format!("Description:  {}", assessment.risk_description));
        lines.push(String::new());

        lines.push(rule.clone());
        lines.push("SCORES BREAKDOWN".to_string());
        lines.push(rule.clone());
        for s in &assessment.scores_breakdown {
            lines.push(format!(
                "{:28} {:3}/{:3}  ({:5.1}%)",
                s.dimension.display_name(),
                s.score,
                s.max_score,
                s.percentage()
            ));
        }

        lines.push(String::new());
        lines.push(rule.clone());
        lines.push("RECOMMENDATIONS FOR IMPROVEMENT".to_string());
        lines.push(rule);
        for rec in &assessment.recommendations {
            lines.push(format!("• {}", rec));
        }

        if self.config.timestamp {
            lines.push(String::new());
            lines.push(format!(
                "Generated: {}",
                Utc::now().format("%Y-%m-%dT%H:%M:%S%.3fZ")
            ));
        }

        lines.push(String::new());
        lines.push(banner);

        let mut out = lines.join("\n");
        out.push('\n');
        out
    }

    pub fn format_json(&self, assessment: &Assessment) -> anyhow::Result<String> {
        let mut value = serde_json::to_value(assessment)?;
        if self.config.timestamp {
            value["generated_at"] = serde_json::Value::String(
                Utc::now().format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string(),
            );
        }
        Ok(serde_json::to_string_pretty(&value)?)
    }
}
