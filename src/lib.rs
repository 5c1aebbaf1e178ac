//! Client-side request and response shapes for the EC2 and Snowball APIs.
//!
//! - [`services::marshaller`] turns request shapes into query-protocol
//!   parameters with 1-based list indices.
//! - [`models`] holds the shapes themselves, including the Snowball
//!   [`JobMetadata`](models::job_metadata::JobMetadata) record.
//! - [`routes`] exposes a small local preview service over both.

pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
