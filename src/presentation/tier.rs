use crate::api::Prediction;
use serde::Serialize;

const MODERATE_FROM: f64 = 0.2;
const HIGH_FROM: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RiskTier {
    Low,
    Moderate,
    High,
}

/// Visual emphasis of a tier or notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Success,
    Warning,
    Destructive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Icon {
    CheckCircle,
    Info,
    AlertTriangle,
}

impl RiskTier {
    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Moderate => "Moderate",
            Self::High => "High",
        }
    }

    pub fn heading(self) -> &'static str {
        match self {
            Self::Low => "Low Risk",
            Self::Moderate => "Moderate Risk",
            Self::High => "Higher Risk",
        }
    }

    pub fn tone(self) -> Tone {
        match self {
            Self::Low => Tone::Success,
            Self::Moderate => Tone::Warning,
            Self::High => Tone::Destructive,
        }
    }

    pub fn icon(self) -> Icon {
        match self {
            Self::Low => Icon::CheckCircle,
            Self::Moderate => Icon::Info,
            Self::High => Icon::AlertTriangle,
        }
    }

    pub fn interpretation(self) -> &'static str {
        match self {
            Self::Low => {
                "The assessment indicates a lower probability of stroke risk. Continue maintaining healthy lifestyle choices and regular medical check-ups."
            }
            Self::Moderate => {
                "The assessment indicates moderate stroke risk factors. Consider discussing prevention strategies with your healthcare provider."
            }
            Self::High => {
                "The assessment indicates elevated stroke risk factors. It's recommended to consult with a healthcare professional for comprehensive evaluation and prevention planning."
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RiskClassification {
    pub tier: RiskTier,
    pub label: &'static str,
}

/// Maps a probability to its tier. Lower bounds are inclusive: 0.2 is
/// Moderate and 0.5 is High.
pub fn classify(probability: f64) -> RiskClassification {
    let tier = if probability < MODERATE_FROM {
        RiskTier::Low
    } else if probability < HIGH_FROM {
        RiskTier::Moderate
    } else {
        RiskTier::High
    };

    RiskClassification {
        tier,
        label: tier.label(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PredictionText {
    pub title: &'static str,
    pub description: &'static str,
}

pub fn prediction_text(prediction: Prediction) -> PredictionText {
    match prediction {
        Prediction::Positive => PredictionText {
            title: "Positive Risk Indication",
            description: "The model indicates elevated stroke risk factors based on the provided information.",
        },
        Prediction::Negative => PredictionText {
            title: "Negative Risk Indication",
            description: "The model indicates lower stroke risk based on the provided information.",
        },
    }
}

/// Whole-number percent, halves rounded away from zero.
pub fn probability_percent(probability: f64) -> i64 {
    (probability * 100.0).round() as i64
}
