use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::Feedback;
use crate::validation::{COMMENT_RE, EMAIL_RE, NAME_RE};

#[derive(Debug, Deserialize, Serialize, Validate, ToSchema)]
pub struct AddFeedbackRequest {
    #[validate(regex(path = *NAME_RE, message = "name must contain only letters and spaces"))]
    pub name: String,
    #[validate(regex(path = *EMAIL_RE, message = "email must start with a letter and contain '@'"))]
    pub email: String,
    #[validate(range(min = 1, max = 5, message = "rating must be between 1 and 5"))]
    pub rating: i32,
    #[validate(regex(path = *COMMENT_RE, message = "comment must contain only letters and spaces"))]
    pub comment: String,
}

#[derive(Debug, Deserialize, Serialize, Validate, ToSchema)]
pub struct ReplyRequest {
    #[validate(length(min = 1, message = "reply cannot be empty"))]
    pub reply: String,
}

/// Feedback with the owning user's identity populated inline.
#[derive(Debug, Serialize, ToSchema)]
pub struct FeedbackWithUser {
    pub id: Uuid,
    pub user_id: Uuid,
    pub date: DateTime<Utc>,
    pub name: String,
    pub email: String,
    pub rating: i32,
    pub comment: String,
    pub reply: Option<String>,
    pub username: String,
    pub user_email: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct FeedbackList {
    pub items: Vec<Feedback>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct FeedbackWithUserList {
    pub items: Vec<FeedbackWithUser>,
}
