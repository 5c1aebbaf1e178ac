//! Preview handlers: show what the SDK would put on the wire.
//!
//! - POST /ec2/describe-network-interfaces   -> form-encoded request body
//! - POST /snowball/job-metadata/describe    -> one-line job summary

use crate::{
    errors::AppError,
    models::{
        describe_network_interfaces::DescribeNetworkInterfacesRequest, job_metadata::JobMetadata,
    },
    services::{
        request::FORM_CONTENT_TYPE,
        shape_service::{JobSummary, ShapeService},
    },
};
use axum::{Json, extract::State, http::header, response::IntoResponse};
use tracing::warn;

/// `POST /ec2/describe-network-interfaces`
///
/// Takes the request as JSON (`null` is accepted and rejected by the
/// marshaller with 400) and answers with the exact form body the SDK sends.
pub async fn describe_network_interfaces(
    State(service): State<ShapeService>,
    Json(request): Json<Option<DescribeNetworkInterfacesRequest>>,
) -> Result<impl IntoResponse, AppError> {
    let body = service
        .describe_network_interfaces_body(request.as_ref())
        .inspect_err(|err| warn!("marshalling DescribeNetworkInterfaces failed: {}", err))?;

    Ok(([(header::CONTENT_TYPE, FORM_CONTENT_TYPE)], body))
}

/// `POST /snowball/job-metadata/describe`
pub async fn describe_job_metadata(
    State(service): State<ShapeService>,
    Json(job): Json<JobMetadata>,
) -> Json<JobSummary> {
    Json(service.summarize_job(&job))
}
