use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

use crate::{
    audit::log_audit,
    dto::feedback::{
        AddFeedbackRequest, FeedbackList, FeedbackWithUser, FeedbackWithUserList, ReplyRequest,
    },
    entity::feedback::{
        ActiveModel as FeedbackActive, Column as FeedbackCol, Entity as FeedbackEntity,
        Model as FeedbackModel,
    },
    error::{AppError, AppResult},
    middleware::auth::{AuthUser, ensure_admin},
    models::Feedback,
    response::{ApiResponse, Meta},
    state::AppState,
};

pub async fn add_feedback(
    state: &AppState,
    user: &AuthUser,
    payload: AddFeedbackRequest,
) -> AppResult<ApiResponse<Feedback>> {
    payload.validate()?;

    let feedback = FeedbackActive {
        id: Set(Uuid::new_v4()),
        user_id: Set(user.user_id),
        date: NotSet,
        name: Set(payload.name),
        email: Set(payload.email),
        rating: Set(payload.rating),
        comment: Set(payload.comment),
        // reply stays unset until an admin writes one
        reply: Set(None),
    }
    .insert(&state.orm)
    .await?;

    if let Err(err) = log_audit(
        &state.pool,
        Some(user.user_id),
        "feedback_added",
        Some("feedback"),
        Some(serde_json::json!({ "feedback_id": feedback.id })),
    )
    .await
    {
        tracing::warn!(error = %err, "audit log failed");
    }

    Ok(ApiResponse::success(
        "Feedback submitted",
        feedback_from_entity(feedback),
        Some(Meta::empty()),
    ))
}

pub async fn list_own_feedback(
    state: &AppState,
    user: &AuthUser,
) -> AppResult<ApiResponse<FeedbackList>> {
    let items: Vec<Feedback> = FeedbackEntity::find()
        .filter(FeedbackCol::UserId.eq(user.user_id))
        .order_by_desc(FeedbackCol::Date)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(feedback_from_entity)
        .collect();

    let total = items.len() as i64;
    Ok(ApiResponse::success(
        "Feedback",
        FeedbackList { items },
        Some(Meta::total_only(total)),
    ))
}

#[derive(FromRow)]
struct FeedbackUserRow {
    id: Uuid,
    user_id: Uuid,
    date: DateTime<Utc>,
    name: String,
    email: String,
    rating: i32,
    comment: String,
    reply: Option<String>,
    username: String,
    user_email: String,
}

/// Every feedback document with the owner's identity populated inline.
pub async fn list_all_feedback(
    state: &AppState,
    user: &AuthUser,
) -> AppResult<ApiResponse<FeedbackWithUserList>> {
    ensure_admin(user)?;

    let rows = sqlx::query_as::<_, FeedbackUserRow>(
        r#"
        SELECT f.id, f.user_id, f.date, f.name, f.email, f.rating, f.comment, f.reply,
               u.username, u.email AS user_email
        FROM feedback f
        JOIN users u ON u.id = f.user_id
        ORDER BY f.date DESC
        "#,
    )
    .fetch_all(&state.pool)
    .await?;

    let items: Vec<FeedbackWithUser> = rows
        .into_iter()
        .map(|row| FeedbackWithUser {
            id: row.id,
            user_id: row.user_id,
            date: row.date,
            name: row.name,
            email: row.email,
            rating: row.rating,
            comment: row.comment,
            reply: row.reply,
            username: row.username,
            user_email: row.user_email,
        })
        .collect();

    let total = items.len() as i64;
    Ok(ApiResponse::success(
        "Feedback",
        FeedbackWithUserList { items },
        Some(Meta::total_only(total)),
    ))
}

pub async fn set_reply(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
    payload: ReplyRequest,
) -> AppResult<ApiResponse<Feedback>> {
    ensure_admin(user)?;
    payload.validate()?;

    let feedback = update_reply(state, id, Some(payload.reply)).await?;

    if let Err(err) = log_audit(
        &state.pool,
        Some(user.user_id),
        "feedback_reply_set",
        Some("feedback"),
        Some(serde_json::json!({ "feedback_id": id })),
    )
    .await
    {
        tracing::warn!(error = %err, "audit log failed");
    }

    Ok(ApiResponse::success(
        "Reply saved",
        feedback,
        Some(Meta::empty()),
    ))
}

/// Clearing an already-empty reply succeeds and leaves it null.
pub async fn clear_reply(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
) -> AppResult<ApiResponse<Feedback>> {
    ensure_admin(user)?;

    let feedback = update_reply(state, id, None).await?;

    if let Err(err) = log_audit(
        &state.pool,
        Some(user.user_id),
        "feedback_reply_cleared",
        Some("feedback"),
        Some(serde_json::json!({ "feedback_id": id })),
    )
    .await
    {
        tracing::warn!(error = %err, "audit log failed");
    }

    Ok(ApiResponse::success(
        "Reply cleared",
        feedback,
        Some(Meta::empty()),
    ))
}

/// A missing id is a NotFound, never a silently-null success.
async fn update_reply(
    state: &AppState,
    id: Uuid,
    reply: Option<String>,
) -> AppResult<Feedback> {
    let existing = FeedbackEntity::find_by_id(id).one(&state.orm).await?;
    let existing = match existing {
        Some(f) => f,
        None => return Err(AppError::NotFound),
    };

    let mut active: FeedbackActive = existing.into();
    active.reply = Set(reply);
    let feedback = active.update(&state.orm).await?;

    Ok(feedback_from_entity(feedback))
}

pub(crate) fn feedback_from_entity(model: FeedbackModel) -> Feedback {
    Feedback {
        id: model.id,
        user_id: model.user_id,
        date: model.date.with_timezone(&Utc),
        name: model.name,
        email: model.email,
        rating: model.rating,
        comment: model.comment,
        reply: model.reply,
    }
}
