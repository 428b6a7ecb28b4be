use chrono::Utc;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set};
use uuid::Uuid;
use validator::Validate;

use crate::{
    audit::log_audit,
    dto::suppliers::{SaveSupplierRequest, SupplierList},
    entity::suppliers::{
        ActiveModel as SupplierActive, Column as SupplierCol, Entity as Suppliers,
        Model as SupplierModel,
    },
    error::{AppError, AppResult},
    middleware::auth::{AuthUser, ensure_admin},
    models::Supplier,
    response::{ApiResponse, Meta},
    state::AppState,
};

pub async fn list_suppliers(
    state: &AppState,
    user: &AuthUser,
) -> AppResult<ApiResponse<SupplierList>> {
    ensure_admin(user)?;

    let items: Vec<Supplier> = Suppliers::find()
        .order_by_asc(SupplierCol::Name)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(supplier_from_entity)
        .collect();

    let total = items.len() as i64;
    Ok(ApiResponse::success(
        "Suppliers",
        SupplierList { items },
        Some(Meta::total_only(total)),
    ))
}

pub async fn create_supplier(
    state: &AppState,
    user: &AuthUser,
    payload: SaveSupplierRequest,
) -> AppResult<ApiResponse<Supplier>> {
    ensure_admin(user)?;
    payload.validate()?;
    ensure_name_free(state, &payload.name, None).await?;

    let supplier = SupplierActive {
        id: Set(Uuid::new_v4()),
        name: Set(payload.name),
        address: Set(payload.address),
        mobile: Set(payload.mobile),
        item_id: Set(payload.item_id),
        email: Set(payload.email),
        company: Set(payload.company),
        created_at: NotSet,
    }
    .insert(&state.orm)
    .await?;

    if let Err(err) = log_audit(
        &state.pool,
        Some(user.user_id),
        "supplier_created",
        Some("suppliers"),
        Some(serde_json::json!({ "supplier_id": supplier.id })),
    )
    .await
    {
        tracing::warn!(error = %err, "audit log failed");
    }

    Ok(ApiResponse::success(
        "Supplier added",
        supplier_from_entity(supplier),
        Some(Meta::empty()),
    ))
}

pub async fn update_supplier(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
    payload: SaveSupplierRequest,
) -> AppResult<ApiResponse<Supplier>> {
    ensure_admin(user)?;
    payload.validate()?;

    let existing = Suppliers::find_by_id(id).one(&state.orm).await?;
    let existing = match existing {
        Some(s) => s,
        None => return Err(AppError::NotFound),
    };

    ensure_name_free(state, &payload.name, Some(id)).await?;

    let mut active: SupplierActive = existing.into();
    active.name = Set(payload.name);
    active.address = Set(payload.address);
    active.mobile = Set(payload.mobile);
    active.item_id = Set(payload.item_id);
    active.email = Set(payload.email);
    active.company = Set(payload.company);
    let supplier = active.update(&state.orm).await?;

    if let Err(err) = log_audit(
        &state.pool,
        Some(user.user_id),
        "supplier_updated",
        Some("suppliers"),
        Some(serde_json::json!({ "supplier_id": supplier.id })),
    )
    .await
    {
        tracing::warn!(error = %err, "audit log failed");
    }

    Ok(ApiResponse::success(
        "Supplier updated",
        supplier_from_entity(supplier),
        Some(Meta::empty()),
    ))
}

pub async fn delete_supplier(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
) -> AppResult<ApiResponse<serde_json::Value>> {
    ensure_admin(user)?;

    let result = Suppliers::delete_by_id(id).exec(&state.orm).await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound);
    }

    if let Err(err) = log_audit(
        &state.pool,
        Some(user.user_id),
        "supplier_deleted",
        Some("suppliers"),
        Some(serde_json::json!({ "supplier_id": id })),
    )
    .await
    {
        tracing::warn!(error = %err, "audit log failed");
    }

    Ok(ApiResponse::success(
        "Supplier deleted",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}

async fn ensure_name_free(
    state: &AppState,
    name: &str,
    exclude: Option<Uuid>,
) -> AppResult<()> {
    let existing: Option<(Uuid,)> =
        sqlx::query_as("SELECT id FROM suppliers WHERE lower(name) = lower($1)")
            .bind(name)
            .fetch_optional(&state.pool)
            .await?;

    match existing {
        Some((id,)) if Some(id) != exclude => {
            Err(AppError::BadRequest("Supplier name is already taken".into()))
        }
        _ => Ok(()),
    }
}

pub(crate) fn supplier_from_entity(model: SupplierModel) -> Supplier {
    Supplier {
        id: model.id,
        name: model.name,
        address: model.address,
        mobile: model.mobile,
        item_id: model.item_id,
        email: model.email,
        company: model.company,
        created_at: model.created_at.with_timezone(&Utc),
    }
}
