use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use stroke_risk::{
    ApiError,
    api::{PredictionApi, PredictionResponse},
    schema::PredictionRequest,
};

/// Canned reply for the mock prediction service.
#[derive(Debug, Clone)]
pub enum MockReply {
    Success(PredictionResponse),
    ServiceError { status: u16, message: String },
}

/// Mock prediction client for testing
#[derive(Debug, Clone)]
pub struct MockPredictionApi {
    pub replies: Arc<Mutex<Vec<MockReply>>>,
    pub requests: Arc<Mutex<Vec<PredictionRequest>>>,
}

impl MockPredictionApi {
    pub fn new() -> Self {
        Self {
            replies: Arc::new(Mutex::new(Vec::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_replies(self, replies: Vec<MockReply>) -> Self {
        *self.replies.lock().unwrap() = replies;
        self
    }

    pub fn get_requests(&self) -> Vec<PredictionRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

impl Default for MockPredictionApi {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PredictionApi for MockPredictionApi {
    async fn predict(
        &self,
        request: &PredictionRequest,
    ) -> Result<PredictionResponse, ApiError> {
        self.requests.lock().unwrap().push(request.clone());

        let mut replies = self.replies.lock().unwrap();
        if replies.is_empty() {
            return Err(ApiError::Service {
                status: 500,
                message: "No more mock replies available".to_string(),
                details: None,
            });
        }

        match replies.remove(0) {
            MockReply::Success(response) => Ok(response),
            MockReply::ServiceError { status, message } => Err(ApiError::Service {
                status,
                details: Some(serde_json::json!({ "message": message.clone() })),
                message,
            }),
        }
    }
}
