//! The marshalled form of an API call, ready to hand to an HTTP client.

use crate::services::marshaller::MarshallError;
use axum::http::Method;
use bytes::Bytes;

pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded; charset=utf-8";

/// An API call after marshalling: target service, HTTP method and the
/// ordered query parameters.
///
/// Parameters form an ordered multi-map. Order is insertion order and is part
/// of the wire contract.
#[derive(Clone, Debug)]
pub struct SdkRequest<T> {
    original: T,
    service_name: &'static str,
    http_method: Method,
    parameters: Vec<(String, String)>,
}

impl<T> SdkRequest<T> {
    pub fn new(original: T, service_name: &'static str) -> Self {
        Self {
            original,
            service_name,
            http_method: Method::POST,
            parameters: Vec::new(),
        }
    }

    /// The request value this was marshalled from.
    pub fn original(&self) -> &T {
        &self.original
    }

    pub fn service_name(&self) -> &'static str {
        self.service_name
    }

    pub fn http_method(&self) -> &Method {
        &self.http_method
    }

    pub fn set_http_method(&mut self, method: Method) {
        self.http_method = method;
    }

    pub fn add_parameter(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.parameters.push((name.into(), value.into()));
    }

    pub fn parameters(&self) -> &[(String, String)] {
        &self.parameters
    }

    /// First value recorded under `name`.
    pub fn parameter(&self, name: &str) -> Option<&str> {
        self.parameters
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn parameter_values<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.parameters
            .iter()
            .filter(move |(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Encode the parameters, in order, as an
    /// `application/x-www-form-urlencoded` body.
    pub fn form_body(&self) -> Result<Bytes, MarshallError> {
        let encoded = serde_urlencoded::to_string(&self.parameters)?;
        Ok(Bytes::from(encoded))
    }
}
