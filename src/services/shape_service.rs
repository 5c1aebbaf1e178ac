//! ShapeService — what the preview endpoints and the CLI call into.
//!
//! Marshals EC2 requests to their form-encoded body and summarises Snowball
//! job metadata. Nothing here talks to the real services.

use crate::{
    models::{
        describe_network_interfaces::DescribeNetworkInterfacesRequest, job_metadata::JobMetadata,
    },
    services::marshaller::{
        DescribeNetworkInterfacesRequestMarshaller, MarshallResult, Marshaller,
    },
};
use bytes::Bytes;
use serde::Serialize;
use tracing::{debug, info};

#[derive(Clone, Debug, Default)]
pub struct ShapeService {
    network_interfaces: DescribeNetworkInterfacesRequestMarshaller,
}

/// Short description of a job for clients that only need the headline.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct JobSummary {
    pub job_id: Option<String>,
    pub job_state: Option<String>,
    /// Whether `job_state` is one of the states this build knows about.
    pub known_state: bool,
    pub summary: String,
}

impl ShapeService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marshal a `DescribeNetworkInterfaces` request and encode its body.
    pub fn describe_network_interfaces_body(
        &self,
        request: Option<&DescribeNetworkInterfacesRequest>,
    ) -> MarshallResult<Bytes> {
        let marshalled = self.network_interfaces.marshall(request)?;
        let body = marshalled.form_body()?;
        info!(
            parameters = marshalled.parameters().len(),
            bytes = body.len(),
            "encoded DescribeNetworkInterfaces body"
        );
        Ok(body)
    }

    pub fn summarize_job(&self, job: &JobMetadata) -> JobSummary {
        let known_state = matches!(job.parsed_job_state(), Some(Ok(_)));
        if !known_state {
            debug!(job_state = ?job.job_state(), "job state not recognised");
        }
        JobSummary {
            job_id: job.job_id().map(str::to_string),
            job_state: job.job_state().map(str::to_string),
            known_state,
            summary: job.to_string(),
        }
    }
}
