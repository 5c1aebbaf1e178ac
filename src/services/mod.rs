pub mod marshaller;
pub mod request;
pub mod shape_service;
