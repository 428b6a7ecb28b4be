pub mod auth;
pub mod deliveries;
pub mod feedback;
pub mod orders;
pub mod suppliers;
