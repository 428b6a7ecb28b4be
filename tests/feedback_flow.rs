use axum_storeops_api::{
    db::{create_orm_conn, create_pool, run_migrations},
    dto::feedback::{AddFeedbackRequest, ReplyRequest},
    entity::users::ActiveModel as UserActive,
    error::AppError,
    middleware::auth::AuthUser,
    services::feedback_service,
    state::AppState,
};
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, ConnectionTrait, Set, Statement};
use uuid::Uuid;

// Integration flow: customer submits feedback; admin reads the full list
// with owner details, replies, then clears the reply again.
#[tokio::test]
async fn submit_reply_and_clear_flow() -> anyhow::Result<()> {
    let database_url = match std::env::var("TEST_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
    {
        Ok(url) => url,
        Err(_) => {
            eprintln!(
                "Skipping test: set TEST_DATABASE_URL or DATABASE_URL to run integration flow tests."
            );
            return Ok(());
        }
    };

    let state = setup_state(&database_url).await?;

    let user_id = create_user(&state, "user", "customer@example.com", "shopper").await?;
    let admin_id = create_user(&state, "admin", "admin@example.com", "manager").await?;

    let auth_user = AuthUser {
        user_id,
        role: "user".into(),
    };
    let auth_admin = AuthUser {
        user_id: admin_id,
        role: "admin".into(),
    };

    // The server mirrors the client rules: a rating of 6 never lands.
    let rejected = feedback_service::add_feedback(
        &state,
        &auth_user,
        AddFeedbackRequest {
            name: "Jane Doe".into(),
            email: "jane@mail.org".into(),
            rating: 6,
            comment: "Great service".into(),
        },
    )
    .await;
    assert!(matches!(rejected, Err(AppError::Validation(_))));

    let submitted = feedback_service::add_feedback(
        &state,
        &auth_user,
        AddFeedbackRequest {
            name: "Jane Doe".into(),
            email: "jane@mail.org".into(),
            rating: 4,
            comment: "Great service".into(),
        },
    )
    .await?;
    let feedback = submitted.data.expect("submitted feedback");
    assert_eq!(feedback.user_id, user_id);
    assert!(feedback.reply.is_none());

    // Owner-scoped listing sees it; the admin's own listing does not.
    let mine = feedback_service::list_own_feedback(&state, &auth_user).await?;
    assert_eq!(mine.data.expect("own feedback").items.len(), 1);
    let admins_own = feedback_service::list_own_feedback(&state, &auth_admin).await?;
    assert!(admins_own.data.expect("admin feedback").items.is_empty());

    // The admin list carries the owner's identity inline.
    let all = feedback_service::list_all_feedback(&state, &auth_admin).await?;
    let all = all.data.expect("all feedback");
    let row = all
        .items
        .iter()
        .find(|f| f.id == feedback.id)
        .expect("feedback in admin list");
    assert_eq!(row.username, "shopper");
    assert_eq!(row.user_email, "customer@example.com");

    // Reply set, then cleared back to null; clearing twice stays null.
    let replied = feedback_service::set_reply(
        &state,
        &auth_admin,
        feedback.id,
        ReplyRequest {
            reply: "Thank you for the kind words".into(),
        },
    )
    .await?;
    assert_eq!(
        replied.data.expect("replied feedback").reply.as_deref(),
        Some("Thank you for the kind words")
    );

    let cleared = feedback_service::clear_reply(&state, &auth_admin, feedback.id).await?;
    assert!(cleared.data.expect("cleared feedback").reply.is_none());
    let cleared_again = feedback_service::clear_reply(&state, &auth_admin, feedback.id).await?;
    assert!(cleared_again.data.expect("cleared feedback").reply.is_none());

    // Replying to a missing id is a NotFound, not a silent success.
    let missing = feedback_service::set_reply(
        &state,
        &auth_admin,
        Uuid::new_v4(),
        ReplyRequest {
            reply: "Hello".into(),
        },
    )
    .await;
    assert!(matches!(missing, Err(AppError::NotFound)));

    Ok(())
}

async fn setup_state(database_url: &str) -> anyhow::Result<AppState> {
    let pool = create_pool(database_url, 5).await?;
    let orm = create_orm_conn(database_url).await?;
    run_migrations(&orm).await?;

    let backend = orm.get_database_backend();
    orm.execute(Statement::from_string(
        backend,
        "TRUNCATE TABLE orders, feedback, deliveries, suppliers, audit_logs, users RESTART IDENTITY CASCADE",
    ))
    .await?;

    Ok(AppState { pool, orm })
}

async fn create_user(
    state: &AppState,
    role: &str,
    email: &str,
    username: &str,
) -> anyhow::Result<Uuid> {
    let user = UserActive {
        id: Set(Uuid::new_v4()),
        username: Set(username.to_string()),
        first_name: Set("Test".into()),
        last_name: Set("Account".into()),
        email: Set(email.to_string()),
        mobile: Set("0770000000".into()),
        password_hash: Set("dummy".into()),
        role: Set(role.into()),
        created_at: NotSet,
    }
    .insert(&state.orm)
    .await?;

    Ok(user.id)
}
