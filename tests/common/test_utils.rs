use serde_json::{Value, json};
use stroke_risk::{
    api::{Prediction, PredictionResponse},
    config::ApiConfig,
    schema::FormInput,
};

/// A complete, in-range form
pub fn sample_form() -> FormInput {
    FormInput {
        gender: Some("Male".into()),
        age: Some(67.0.into()),
        hypertension: Some(0_i64.into()),
        heart_disease: Some(1_i64.into()),
        ever_married: Some("Yes".into()),
        work_type: Some("Private".into()),
        residence_type: Some("Urban".into()),
        avg_glucose_level: Some(228.69.into()),
        bmi: Some(36.6.into()),
        smoking_status: Some("formerly smoked".into()),
        threshold: None,
    }
}

/// Wire body the service should receive for `sample_form()` after defaults
pub fn sample_request_body() -> Value {
    json!({
        "gender": "Male",
        "age": 67.0,
        "hypertension": 0,
        "heart_disease": 1,
        "ever_married": "Yes",
        "work_type": "Private",
        "Residence_type": "Urban",
        "avg_glucose_level": 228.69,
        "bmi": 36.6,
        "smoking_status": "formerly smoked",
        "threshold": 0.5
    })
}

pub fn sample_response(probability: f64, prediction: Prediction) -> PredictionResponse {
    PredictionResponse {
        probability,
        prediction,
        threshold: 0.5,
    }
}

pub fn api_config(base_url: impl Into<String>) -> ApiConfig {
    ApiConfig {
        base_url: base_url.into(),
    }
}

/// Base URL of a local port with nothing listening on it
pub fn closed_port_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind an ephemeral port");
    let port = listener.local_addr().expect("No local address").port();
    drop(listener);
    format!("http://127.0.0.1:{port}")
}
