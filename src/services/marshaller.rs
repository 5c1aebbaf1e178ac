//! Query-protocol marshallers.
//!
//! A marshaller turns a request shape into an [`SdkRequest`]: the action and
//! API version parameters, then one parameter per list element, keyed with
//! 1-based indices. It performs no I/O and keeps no state.

use crate::{
    models::{describe_network_interfaces::DescribeNetworkInterfacesRequest, sdk_list::SdkList},
    services::request::SdkRequest,
};
use axum::http::Method;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum MarshallError {
    #[error("Invalid argument passed to marshall(...)")]
    InvalidArgument,
    #[error("failed to form-encode request parameters: {0}")]
    Encode(#[from] serde_urlencoded::ser::Error),
}

pub type MarshallResult<T> = Result<T, MarshallError>;

/// Converts a request shape into its wire form.
///
/// `None` stands for a missing request and is always rejected with
/// [`MarshallError::InvalidArgument`].
pub trait Marshaller<In> {
    type Output;

    fn marshall(&self, input: Option<&In>) -> MarshallResult<Self::Output>;
}

const EC2_SERVICE_NAME: &str = "AmazonEC2";
const EC2_API_VERSION: &str = "2016-09-15";

#[derive(Debug, Clone, Copy, Default)]
pub struct DescribeNetworkInterfacesRequestMarshaller;

impl Marshaller<DescribeNetworkInterfacesRequest> for DescribeNetworkInterfacesRequestMarshaller {
    type Output = SdkRequest<DescribeNetworkInterfacesRequest>;

    fn marshall(
        &self,
        input: Option<&DescribeNetworkInterfacesRequest>,
    ) -> MarshallResult<Self::Output> {
        let input = input.ok_or(MarshallError::InvalidArgument)?;

        let mut request = SdkRequest::new(input.clone(), EC2_SERVICE_NAME);
        request.add_parameter("Action", "DescribeNetworkInterfaces");
        request.add_parameter("Version", EC2_API_VERSION);
        request.set_http_method(Method::POST);

        marshall_string_list(
            &mut request,
            "NetworkInterfaceId",
            input.network_interface_ids(),
        );

        let filters = input.filters();
        if filters.should_marshall() {
            for (index, filter) in (1usize..).zip(filters.iter()) {
                if let Some(name) = filter.name() {
                    request.add_parameter(format!("Filter.{index}.Name"), name);
                }
                marshall_string_list(
                    &mut request,
                    &format!("Filter.{index}.Value"),
                    filter.values(),
                );
            }
        }

        debug!(
            action = "DescribeNetworkInterfaces",
            parameters = request.parameters().len(),
            "marshalled request"
        );
        Ok(request)
    }
}

/// Emit `<prefix>.<n>` for each element. `None` elements are skipped but
/// still consume their index.
fn marshall_string_list<T>(
    request: &mut SdkRequest<T>,
    prefix: &str,
    list: &SdkList<Option<String>>,
) {
    if !list.should_marshall() {
        return;
    }
    for (index, value) in (1usize..).zip(list.iter()) {
        if let Some(value) = value {
            request.add_parameter(format!("{prefix}.{index}"), value.as_str());
        }
    }
}
