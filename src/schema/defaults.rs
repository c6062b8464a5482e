//! The one place optional request fields receive their defaults.
//!
//! Runs after validation and before serialization:
//! - `threshold` absent becomes [`DEFAULT_THRESHOLD`].
//! - `smoking_status` absent stays absent and is transmitted as `null`, which
//!   the prediction service reads as "Unknown".

use super::types::PredictionRequest;

pub const DEFAULT_THRESHOLD: f64 = 0.5;

pub fn apply_defaults(mut request: PredictionRequest) -> PredictionRequest {
    request.threshold.get_or_insert(DEFAULT_THRESHOLD);
    request
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{EverMarried, Flag, Gender, ResidenceType, WorkType};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn request(threshold: Option<f64>) -> PredictionRequest {
        PredictionRequest {
            gender: Gender::Male,
            age: 58.0,
            hypertension: Flag::Yes,
            heart_disease: Flag::No,
            ever_married: EverMarried::Yes,
            work_type: WorkType::GovtJob,
            residence_type: ResidenceType::Rural,
            avg_glucose_level: 87.96,
            bmi: 39.2,
            smoking_status: None,
            threshold,
        }
    }

    #[test]
    fn test_missing_threshold_defaults_to_half() {
        assert_eq!(apply_defaults(request(None)).threshold, Some(0.5));
    }

    #[test]
    fn test_explicit_threshold_is_kept() {
        assert_eq!(apply_defaults(request(Some(0.3))).threshold, Some(0.3));
    }

    #[test]
    fn test_defaulted_request_wire_shape() {
        let body = serde_json::to_value(apply_defaults(request(None))).unwrap();
        assert_eq!(
            body,
            json!({
                "gender": "Male",
                "age": 58.0,
                "hypertension": 1,
                "heart_disease": 0,
                "ever_married": "Yes",
                "work_type": "Govt_job",
                "Residence_type": "Rural",
                "avg_glucose_level": 87.96,
                "bmi": 39.2,
                "smoking_status": null,
                "threshold": 0.5
            })
        );
    }
}
