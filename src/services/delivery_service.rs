use chrono::Utc;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set};
use uuid::Uuid;
use validator::Validate;

use crate::{
    audit::log_audit,
    dto::deliveries::{DeliveryList, SaveDeliveryRequest},
    entity::deliveries::{
        ActiveModel as DeliveryActive, Column as DeliveryCol, Entity as Deliveries,
        Model as DeliveryModel,
    },
    error::{AppError, AppResult},
    middleware::auth::{AuthUser, ensure_admin},
    models::Delivery,
    response::{ApiResponse, Meta},
    state::AppState,
};

pub async fn list_deliveries(
    state: &AppState,
    user: &AuthUser,
) -> AppResult<ApiResponse<DeliveryList>> {
    ensure_admin(user)?;

    let items: Vec<Delivery> = Deliveries::find()
        .order_by_asc(DeliveryCol::Name)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(delivery_from_entity)
        .collect();

    let total = items.len() as i64;
    Ok(ApiResponse::success(
        "Deliveries",
        DeliveryList { items },
        Some(Meta::total_only(total)),
    ))
}

pub async fn create_delivery(
    state: &AppState,
    user: &AuthUser,
    payload: SaveDeliveryRequest,
) -> AppResult<ApiResponse<Delivery>> {
    ensure_admin(user)?;
    payload.validate()?;
    ensure_name_free(state, &payload.name, None).await?;

    let delivery = DeliveryActive {
        id: Set(Uuid::new_v4()),
        name: Set(payload.name),
        address: Set(payload.address),
        mobile: Set(payload.mobile),
        vehicle_id: Set(payload.vehicle_id),
        category: Set(payload.category),
        order_status: Set(payload.order_status),
        assigned_orders: Set(serde_json::json!(payload.assigned_orders)),
        created_at: NotSet,
    }
    .insert(&state.orm)
    .await?;

    if let Err(err) = log_audit(
        &state.pool,
        Some(user.user_id),
        "delivery_created",
        Some("deliveries"),
        Some(serde_json::json!({ "delivery_id": delivery.id })),
    )
    .await
    {
        tracing::warn!(error = %err, "audit log failed");
    }

    Ok(ApiResponse::success(
        "Driver added",
        delivery_from_entity(delivery),
        Some(Meta::empty()),
    ))
}

pub async fn update_delivery(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
    payload: SaveDeliveryRequest,
) -> AppResult<ApiResponse<Delivery>> {
    ensure_admin(user)?;
    payload.validate()?;

    let existing = Deliveries::find_by_id(id).one(&state.orm).await?;
    let existing = match existing {
        Some(d) => d,
        None => return Err(AppError::NotFound),
    };

    ensure_name_free(state, &payload.name, Some(id)).await?;

    let mut active: DeliveryActive = existing.into();
    active.name = Set(payload.name);
    active.address = Set(payload.address);
    active.mobile = Set(payload.mobile);
    active.vehicle_id = Set(payload.vehicle_id);
    active.category = Set(payload.category);
    active.order_status = Set(payload.order_status);
    active.assigned_orders = Set(serde_json::json!(payload.assigned_orders));
    let delivery = active.update(&state.orm).await?;

    if let Err(err) = log_audit(
        &state.pool,
        Some(user.user_id),
        "delivery_updated",
        Some("deliveries"),
        Some(serde_json::json!({ "delivery_id": delivery.id })),
    )
    .await
    {
        tracing::warn!(error = %err, "audit log failed");
    }

    Ok(ApiResponse::success(
        "Driver updated",
        delivery_from_entity(delivery),
        Some(Meta::empty()),
    ))
}

pub async fn delete_delivery(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
) -> AppResult<ApiResponse<serde_json::Value>> {
    ensure_admin(user)?;

    let result = Deliveries::delete_by_id(id).exec(&state.orm).await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound);
    }

    if let Err(err) = log_audit(
        &state.pool,
        Some(user.user_id),
        "delivery_deleted",
        Some("deliveries"),
        Some(serde_json::json!({ "delivery_id": id })),
    )
    .await
    {
        tracing::warn!(error = %err, "audit log failed");
    }

    Ok(ApiResponse::success(
        "Driver deleted",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}

/// Uniqueness lives in the store (backed by the unique index), not in
/// whatever list a client happens to have loaded.
async fn ensure_name_free(
    state: &AppState,
    name: &str,
    exclude: Option<Uuid>,
) -> AppResult<()> {
    let existing: Option<(Uuid,)> =
        sqlx::query_as("SELECT id FROM deliveries WHERE lower(name) = lower($1)")
            .bind(name)
            .fetch_optional(&state.pool)
            .await?;

    match existing {
        Some((id,)) if Some(id) != exclude => {
            Err(AppError::BadRequest("Driver name is already taken".into()))
        }
        _ => Ok(()),
    }
}

pub(crate) fn delivery_from_entity(model: DeliveryModel) -> Delivery {
    Delivery {
        id: model.id,
        name: model.name,
        address: model.address,
        mobile: model.mobile,
        vehicle_id: model.vehicle_id,
        category: model.category,
        order_status: model.order_status,
        assigned_orders: serde_json::from_value(model.assigned_orders).unwrap_or_default(),
        created_at: model.created_at.with_timezone(&Utc),
    }
}
