use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::Order;
use crate::validation::{ADDRESS_RE, MOBILE_RE, NAME_RE};

#[derive(Debug, Deserialize, Serialize, Validate, ToSchema)]
pub struct PlaceOrderRequest {
    #[validate(regex(path = *NAME_RE, message = "name must contain only letters and spaces"))]
    pub name: String,
    #[validate(regex(path = *ADDRESS_RE, message = "address must look like '12, Main Street, Springfield'"))]
    pub address: String,
    #[validate(regex(path = *MOBILE_RE, message = "mobile must be 10 digits starting with 0"))]
    pub mobile: String,
    #[validate(range(min = 0, message = "total amount cannot be negative"))]
    pub total_amount: i64,
    #[validate(length(min = 1, message = "an order needs at least one item"))]
    pub items: Vec<String>,
}

/// Status is the only field an admin can change through this request;
/// everything else on the order is left untouched.
#[derive(Debug, Deserialize, Serialize, Validate, ToSchema)]
pub struct UpdateOrderStatusRequest {
    #[validate(custom(function = crate::validation::order_status, message = "unknown order status"))]
    pub status: String,
}

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct AssignDriverRequest {
    pub driver_id: Uuid,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderList {
    pub items: Vec<Order>,
}
