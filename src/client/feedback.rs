use validator::Validate;

use crate::client::{ApiClient, ClientResult, ListData};
use crate::dto::feedback::AddFeedbackRequest;
use crate::models::Feedback;

/// Customer feedback form state.
pub struct FeedbackStore {
    client: ApiClient,
    pub feedback: Vec<Feedback>,
}

impl FeedbackStore {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            feedback: Vec::new(),
        }
    }

    pub async fn refresh(&mut self) -> ClientResult<()> {
        let data: ListData<Feedback> = self.client.get("/api/feedback/mine").await?;
        self.feedback = data.items;
        Ok(())
    }

    /// Submit the form. An out-of-range rating or malformed field never
    /// reaches the wire.
    pub async fn submit(&mut self, request: AddFeedbackRequest) -> ClientResult<Feedback> {
        request.validate()?;
        let feedback: Feedback = self.client.post("/api/feedback", &request).await?;
        self.feedback.push(feedback.clone());
        Ok(feedback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::ClientError;

    fn request() -> AddFeedbackRequest {
        AddFeedbackRequest {
            name: "Jane Doe".into(),
            email: "jane@mail.org".into(),
            rating: 5,
            comment: "Great service".into(),
        }
    }

    fn store() -> FeedbackStore {
        FeedbackStore::new(ApiClient::new("http://127.0.0.1:1"))
    }

    #[tokio::test]
    async fn submit_rejects_rating_above_five_before_any_request() {
        let mut store = store();
        let mut bad = request();
        bad.rating = 6;
        let result = store.submit(bad).await;
        assert!(matches!(result, Err(ClientError::Validation(_))));
        assert!(store.feedback.is_empty());
    }

    #[tokio::test]
    async fn submit_rejects_rating_below_one() {
        let mut store = store();
        let mut bad = request();
        bad.rating = 0;
        let result = store.submit(bad).await;
        assert!(matches!(result, Err(ClientError::Validation(_))));
    }

    #[tokio::test]
    async fn submit_rejects_numeric_comment() {
        let mut store = store();
        let mut bad = request();
        bad.comment = "Rated 5 stars".into();
        let result = store.submit(bad).await;
        assert!(matches!(result, Err(ClientError::Validation(_))));
    }
}
