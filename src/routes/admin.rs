use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::{delete, get, patch, put},
};
use uuid::Uuid;

use crate::{
    dto::{
        deliveries::{DeliveryList, SaveDeliveryRequest},
        feedback::{FeedbackWithUserList, ReplyRequest},
        orders::{AssignDriverRequest, OrderList, UpdateOrderStatusRequest},
        suppliers::{SaveSupplierRequest, SupplierList},
    },
    error::AppResult,
    middleware::auth::AuthUser,
    models::{Delivery, Feedback, Order, Supplier},
    response::ApiResponse,
    routes::params::OrderListQuery,
    services::{delivery_service, feedback_service, order_service, supplier_service},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/orders", get(list_all_orders))
        .route("/orders/{id}/status", patch(update_order_status))
        .route("/orders/{id}/driver", patch(assign_driver))
        .route("/orders/{id}", delete(delete_order))
        .route("/feedback", get(list_all_feedback))
        .route(
            "/feedback/{id}/reply",
            put(set_reply).delete(clear_reply),
        )
        .route("/deliveries", get(list_deliveries).post(create_delivery))
        .route(
            "/deliveries/{id}",
            put(update_delivery).delete(delete_delivery),
        )
        .route("/suppliers", get(list_suppliers).post(create_supplier))
        .route(
            "/suppliers/{id}",
            put(update_supplier).delete(delete_supplier),
        )
}

#[utoipa::path(
    get,
    path = "/api/admin/orders",
    params(
        ("page" = Option<i64>, Query, description = "Page number, default 1"),
        ("per_page" = Option<i64>, Query, description = "Items per page, default 20"),
        ("status" = Option<String>, Query, description = "Filter by status"),
        ("sort_order" = Option<String>, Query, description = "Sort order: asc, desc")
    ),
    responses(
        (status = 200, description = "Get all orders (admin only)", body = ApiResponse<OrderList>),
        (status = 403, description = "Forbidden"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn list_all_orders(
    State(state): State<AppState>,
    user: AuthUser,
    Query(query): Query<OrderListQuery>,
) -> AppResult<Json<ApiResponse<OrderList>>> {
    let resp = order_service::list_all_orders(&state, &user, query).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    patch,
    path = "/api/admin/orders/{id}/status",
    params(
        ("id" = Uuid, Path, description = "Order ID")
    ),
    request_body = UpdateOrderStatusRequest,
    responses(
        (status = 200, description = "Update order status", body = ApiResponse<Order>),
        (status = 400, description = "Invalid status"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Not Found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn update_order_status(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateOrderStatusRequest>,
) -> AppResult<Json<ApiResponse<Order>>> {
    let resp = order_service::update_order_status(&state, &user, id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    patch,
    path = "/api/admin/orders/{id}/driver",
    params(
        ("id" = Uuid, Path, description = "Order ID")
    ),
    request_body = AssignDriverRequest,
    responses(
        (status = 200, description = "Assign a driver to the order", body = ApiResponse<Order>),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Not Found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn assign_driver(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<AssignDriverRequest>,
) -> AppResult<Json<ApiResponse<Order>>> {
    let resp = order_service::assign_driver(&state, &user, id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/admin/orders/{id}",
    params(
        ("id" = Uuid, Path, description = "Order ID")
    ),
    responses(
        (status = 200, description = "Delete order", body = ApiResponse<serde_json::Value>),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Not Found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn delete_order(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let resp = order_service::delete_order(&state, &user, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/admin/feedback",
    responses(
        (status = 200, description = "All feedback with owner populated", body = ApiResponse<FeedbackWithUserList>),
        (status = 403, description = "Forbidden"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn list_all_feedback(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<ApiResponse<FeedbackWithUserList>>> {
    let resp = feedback_service::list_all_feedback(&state, &user).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    put,
    path = "/api/admin/feedback/{id}/reply",
    params(
        ("id" = Uuid, Path, description = "Feedback ID")
    ),
    request_body = ReplyRequest,
    responses(
        (status = 200, description = "Set or update the reply", body = ApiResponse<Feedback>),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Not Found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn set_reply(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<ReplyRequest>,
) -> AppResult<Json<ApiResponse<Feedback>>> {
    let resp = feedback_service::set_reply(&state, &user, id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/admin/feedback/{id}/reply",
    params(
        ("id" = Uuid, Path, description = "Feedback ID")
    ),
    responses(
        (status = 200, description = "Clear the reply", body = ApiResponse<Feedback>),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Not Found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn clear_reply(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<Feedback>>> {
    let resp = feedback_service::clear_reply(&state, &user, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/admin/deliveries",
    responses(
        (status = 200, description = "List drivers", body = ApiResponse<DeliveryList>),
        (status = 403, description = "Forbidden"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn list_deliveries(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<ApiResponse<DeliveryList>>> {
    let resp = delivery_service::list_deliveries(&state, &user).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/admin/deliveries",
    request_body = SaveDeliveryRequest,
    responses(
        (status = 201, description = "Add a driver", body = ApiResponse<Delivery>),
        (status = 400, description = "Validation failed or name taken"),
        (status = 403, description = "Forbidden"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn create_delivery(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<SaveDeliveryRequest>,
) -> AppResult<Json<ApiResponse<Delivery>>> {
    let resp = delivery_service::create_delivery(&state, &user, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    put,
    path = "/api/admin/deliveries/{id}",
    params(
        ("id" = Uuid, Path, description = "Delivery ID")
    ),
    request_body = SaveDeliveryRequest,
    responses(
        (status = 200, description = "Update a driver", body = ApiResponse<Delivery>),
        (status = 400, description = "Validation failed or name taken"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Not Found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn update_delivery(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<SaveDeliveryRequest>,
) -> AppResult<Json<ApiResponse<Delivery>>> {
    let resp = delivery_service::update_delivery(&state, &user, id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/admin/deliveries/{id}",
    params(
        ("id" = Uuid, Path, description = "Delivery ID")
    ),
    responses(
        (status = 200, description = "Delete a driver", body = ApiResponse<serde_json::Value>),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Not Found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn delete_delivery(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let resp = delivery_service::delete_delivery(&state, &user, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/admin/suppliers",
    responses(
        (status = 200, description = "List suppliers", body = ApiResponse<SupplierList>),
        (status = 403, description = "Forbidden"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn list_suppliers(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<ApiResponse<SupplierList>>> {
    let resp = supplier_service::list_suppliers(&state, &user).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/admin/suppliers",
    request_body = SaveSupplierRequest,
    responses(
        (status = 201, description = "Add a supplier", body = ApiResponse<Supplier>),
        (status = 400, description = "Validation failed or name taken"),
        (status = 403, description = "Forbidden"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn create_supplier(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<SaveSupplierRequest>,
) -> AppResult<Json<ApiResponse<Supplier>>> {
    let resp = supplier_service::create_supplier(&state, &user, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    put,
    path = "/api/admin/suppliers/{id}",
    params(
        ("id" = Uuid, Path, description = "Supplier ID")
    ),
    request_body = SaveSupplierRequest,
    responses(
        (status = 200, description = "Update a supplier", body = ApiResponse<Supplier>),
        (status = 400, description = "Validation failed or name taken"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Not Found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn update_supplier(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<SaveSupplierRequest>,
) -> AppResult<Json<ApiResponse<Supplier>>> {
    let resp = supplier_service::update_supplier(&state, &user, id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/admin/suppliers/{id}",
    params(
        ("id" = Uuid, Path, description = "Supplier ID")
    ),
    responses(
        (status = 200, description = "Delete a supplier", body = ApiResponse<serde_json::Value>),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Not Found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn delete_supplier(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let resp = supplier_service::delete_supplier(&state, &user, id).await?;
    Ok(Json(resp))
}
