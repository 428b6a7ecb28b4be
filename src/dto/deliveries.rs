use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::Delivery;
use crate::validation::{ADDRESS_RE, MOBILE_RE, NAME_RE, VEHICLE_ID_RE};

/// Used for both create and update; the full record is sent each time,
/// mirroring how the admin form submits.
#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
pub struct SaveDeliveryRequest {
    #[validate(regex(path = *NAME_RE, message = "name must contain only letters and spaces"))]
    pub name: String,
    #[validate(regex(path = *ADDRESS_RE, message = "address must look like '12, Main Street, Springfield'"))]
    pub address: String,
    #[validate(regex(path = *MOBILE_RE, message = "mobile must be 10 digits starting with 0"))]
    pub mobile: String,
    #[validate(regex(path = *VEHICLE_ID_RE, message = "vehicle id must be two letters followed by four digits"))]
    pub vehicle_id: String,
    #[validate(custom(function = crate::validation::delivery_category, message = "category must be car, bike or truck"))]
    pub category: String,
    #[validate(custom(function = crate::validation::delivery_order_status, message = "order status must be pending, in-progress or completed"))]
    pub order_status: String,
    #[serde(default)]
    pub assigned_orders: Vec<Uuid>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DeliveryList {
    pub items: Vec<Delivery>,
}
