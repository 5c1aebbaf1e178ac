//! Defines routes for the shape preview service.
//!
//! ## Structure
//! - `GET  /healthz` — liveness
//! - `POST /ec2/describe-network-interfaces` — JSON request in, form body out
//! - `POST /snowball/job-metadata/describe` — JSON job metadata in, summary out

use crate::{
    handlers::{
        health_handlers::healthz,
        shape_handlers::{describe_job_metadata, describe_network_interfaces},
    },
    services::shape_service::ShapeService,
};
use axum::{
    Router,
    routing::{get, post},
};

/// Build and return the router. Every handler shares the `ShapeService` state.
pub fn routes() -> Router<ShapeService> {
    Router::new()
        .route("/healthz", get(healthz))
        .route(
            "/ec2/describe-network-interfaces",
            post(describe_network_interfaces),
        )
        .route(
            "/snowball/job-metadata/describe",
            post(describe_job_metadata),
        )
}
