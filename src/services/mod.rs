pub mod auth_service;
pub mod delivery_service;
pub mod feedback_service;
pub mod order_service;
pub mod supplier_service;
