use utoipa::{
    Modify, OpenApi,
    openapi::{
        self,
        OpenApi as OpenApiSpec,
        security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    },
};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        auth,
        deliveries::{DeliveryList, SaveDeliveryRequest},
        feedback::{AddFeedbackRequest, FeedbackList, FeedbackWithUser, FeedbackWithUserList, ReplyRequest},
        orders::{AssignDriverRequest, OrderList, PlaceOrderRequest, UpdateOrderStatusRequest},
        suppliers::{SaveSupplierRequest, SupplierList},
    },
    models::{Delivery, Feedback, Order, Supplier, User},
    response::{ApiResponse, Meta},
    routes::{admin, auth as auth_routes, feedback as feedback_routes, health, orders, params},
};

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        auth_routes::register,
        auth_routes::login,
        orders::place_order,
        orders::my_orders,
        feedback_routes::add_feedback,
        feedback_routes::my_feedback,
        admin::list_all_orders,
        admin::update_order_status,
        admin::assign_driver,
        admin::delete_order,
        admin::list_all_feedback,
        admin::set_reply,
        admin::clear_reply,
        admin::list_deliveries,
        admin::create_delivery,
        admin::update_delivery,
        admin::delete_delivery,
        admin::list_suppliers,
        admin::create_supplier,
        admin::update_supplier,
        admin::delete_supplier
    ),
    components(
        schemas(
            User,
            Order,
            Feedback,
            Delivery,
            Supplier,
            auth::RegisterRequest,
            auth::LoginRequest,
            auth::LoginResponse,
            PlaceOrderRequest,
            UpdateOrderStatusRequest,
            AssignDriverRequest,
            OrderList,
            AddFeedbackRequest,
            ReplyRequest,
            FeedbackList,
            FeedbackWithUser,
            FeedbackWithUserList,
            SaveDeliveryRequest,
            DeliveryList,
            SaveSupplierRequest,
            SupplierList,
            params::Pagination,
            params::OrderListQuery,
            Meta,
            ApiResponse<Order>,
            ApiResponse<OrderList>,
            ApiResponse<Feedback>,
            ApiResponse<FeedbackList>,
            ApiResponse<FeedbackWithUserList>,
            ApiResponse<Delivery>,
            ApiResponse<DeliveryList>,
            ApiResponse<Supplier>,
            ApiResponse<SupplierList>
        )
    ),
    security(
        ("bearer_auth" = [])
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Auth", description = "Authentication endpoints"),
        (name = "Orders", description = "Customer order endpoints"),
        (name = "Feedback", description = "Customer feedback endpoints"),
        (name = "Admin", description = "Admin endpoints"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
