use super::tier::*;
use crate::{
    Result,
    api::{Prediction, PredictionResponse},
};
use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

pub const DISCLAIMER: &str = "This assessment is for informational purposes only and should not replace professional medical advice. Always consult with qualified healthcare providers for medical decisions and personalized health recommendations.";

/// Everything the result card shows for one successful prediction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssessmentReport {
    pub prediction: PredictionText,
    pub threshold: f64,
    pub tier: RiskTier,
    pub tier_heading: &'static str,
    pub tone: Tone,
    pub icon: Icon,
    pub probability_percent: i64,
    pub interpretation: &'static str,
    pub disclaimer: &'static str,
    pub technical: TechnicalDetails,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TechnicalDetails {
    pub probability: String,
    pub threshold: f64,
    pub binary_prediction: &'static str,
    pub assessment_date: NaiveDate,
}

impl AssessmentReport {
    pub fn from_response(response: &PredictionResponse, assessed_on: NaiveDate) -> Self {
        let classification = classify(response.probability);
        let tier = classification.tier;

        Self {
            prediction: prediction_text(response.prediction),
            threshold: response.threshold,
            tier,
            tier_heading: tier.heading(),
            tone: tier.tone(),
            icon: tier.icon(),
            probability_percent: probability_percent(response.probability),
            interpretation: tier.interpretation(),
            disclaimer: DISCLAIMER,
            technical: TechnicalDetails {
                probability: format!("{:.4}", response.probability),
                threshold: response.threshold,
                binary_prediction: match response.prediction {
                    Prediction::Positive => "Positive",
                    Prediction::Negative => "Negative",
                },
                assessment_date: assessed_on,
            },
        }
    }
}

impl AssessmentReport {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl fmt::Display for AssessmentReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Stroke Risk Assessment Results")?;
        writeln!(f)?;
        writeln!(f, "Prediction Result: {}", self.prediction.title)?;
        writeln!(f, "  Based on threshold: {}", self.threshold)?;
        writeln!(f, "  {}", self.prediction.description)?;
        writeln!(f)?;
        writeln!(
            f,
            "Risk Probability: {}% ({} Risk Level)",
            self.probability_percent,
            self.tier.label()
        )?;
        writeln!(f)?;
        writeln!(f, "Risk Interpretation: {}", self.tier_heading)?;
        writeln!(f, "  {}", self.interpretation)?;
        writeln!(f)?;
        writeln!(f, "Important Medical Disclaimer")?;
        writeln!(f, "  {}", self.disclaimer)?;
        writeln!(f)?;
        writeln!(f, "Technical Details")?;
        writeln!(f, "  Model Probability: {}", self.technical.probability)?;
        writeln!(f, "  Prediction Threshold: {}", self.technical.threshold)?;
        writeln!(f, "  Binary Prediction: {}", self.technical.binary_prediction)?;
        write!(
            f,
            "  Assessment Date: {}",
            self.technical.assessment_date.format("%Y-%m-%d")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 14).unwrap()
    }

    #[test]
    fn test_high_positive_report() {
        let response = PredictionResponse {
            probability: 0.73,
            prediction: Prediction::Positive,
            threshold: 0.5,
        };
        let report = AssessmentReport::from_response(&response, date());

        assert_eq!(report.tier, RiskTier::High);
        assert_eq!(report.prediction.title, "Positive Risk Indication");
        assert_eq!(report.probability_percent, 73);
        assert_eq!(report.technical.probability, "0.7300");
        assert_eq!(report.technical.binary_prediction, "Positive");
        assert_eq!(report.icon, Icon::AlertTriangle);
    }

    #[test]
    fn test_tier_and_prediction_are_independent() {
        let response = PredictionResponse {
            probability: 0.35,
            prediction: Prediction::Positive,
            threshold: 0.3,
        };
        let report = AssessmentReport::from_response(&response, date());

        assert_eq!(report.tier, RiskTier::Moderate);
        assert_eq!(report.prediction.title, "Positive Risk Indication");
    }

    #[test]
    fn test_json_report_uses_snake_case_tones() {
        let response = PredictionResponse {
            probability: 0.25,
            prediction: Prediction::Negative,
            threshold: 0.5,
        };
        let json = AssessmentReport::from_response(&response, date())
            .to_json()
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["tier"], "Moderate");
        assert_eq!(value["tone"], "warning");
        assert_eq!(value["probability_percent"], 25);
        assert_eq!(value["technical"]["assessment_date"], "2024-03-14");
    }

    #[test]
    fn test_display_contains_card_sections() {
        let response = PredictionResponse {
            probability: 0.05,
            prediction: Prediction::Negative,
            threshold: 0.5,
        };
        let text = AssessmentReport::from_response(&response, date()).to_string();

        assert!(text.contains("Negative Risk Indication"));
        assert!(text.contains("Risk Probability: 5% (Low Risk Level)"));
        assert!(text.contains("Risk Interpretation: Low Risk"));
        assert!(text.contains("Assessment Date: 2024-03-14"));
    }
}
