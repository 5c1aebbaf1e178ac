//! Request and response shapes for the EC2 and Snowball APIs.
//!
//! Request shapes keep the caller's list intent in [`sdk_list::SdkList`] so
//! the marshaller can reproduce the query protocol exactly. Response shapes
//! deserialize from the JSON protocol and render a one-line diagnostic form
//! through `Display`.

pub mod data_transfer;
pub mod describe_network_interfaces;
pub(crate) mod display;
pub mod enums;
pub mod filter;
pub mod job_logs;
pub mod job_metadata;
pub mod job_resource;
pub mod notification;
pub mod sdk_list;
pub mod shipping;
pub mod timestamp;
