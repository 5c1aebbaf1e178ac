pub mod health_handlers;
pub mod shape_handlers;
