use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::Supplier;
use crate::validation::{ADDRESS_RE, EMAIL_RE, MOBILE_RE, NAME_RE};

#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
pub struct SaveSupplierRequest {
    #[validate(regex(path = *NAME_RE, message = "name must contain only letters and spaces"))]
    pub name: String,
    #[validate(regex(path = *ADDRESS_RE, message = "address must look like '12, Main Street, Springfield'"))]
    pub address: String,
    #[validate(regex(path = *MOBILE_RE, message = "mobile must be 10 digits starting with 0"))]
    pub mobile: String,
    #[validate(length(min = 1, message = "item id cannot be empty"))]
    pub item_id: String,
    #[validate(regex(path = *EMAIL_RE, message = "email must start with a letter and contain '@'"))]
    pub email: String,
    #[validate(length(min = 1, message = "company cannot be empty"))]
    pub company: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SupplierList {
    pub items: Vec<Supplier>,
}
