use serde::{Deserialize, Serialize};

/// Binary outcome returned by the service: positive when the probability
/// reached the threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Prediction {
    Negative,
    Positive,
}

impl Prediction {
    pub fn is_positive(self) -> bool {
        matches!(self, Self::Positive)
    }
}

impl TryFrom<u8> for Prediction {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Negative),
            1 => Ok(Self::Positive),
            other => Err(format!("prediction must be 0 or 1, got {other}")),
        }
    }
}

impl From<Prediction> for u8 {
    fn from(prediction: Prediction) -> Self {
        match prediction {
            Prediction::Negative => 0,
            Prediction::Positive => 1,
        }
    }
}

/// Body of a successful prediction call. The probability is taken as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResponse {
    pub probability: f64,
    pub prediction: Prediction,
    pub threshold: f64,
}
