//! Input of the EC2 `DescribeNetworkInterfaces` action.

use crate::models::{filter::Filter, sdk_list::SdkList};
use serde::{Deserialize, Serialize};

/// Which network interfaces to describe.
///
/// Both lists start out auto-constructed. Setting or appending to a list
/// marks it as caller-supplied, which the marshaller can observe even when
/// the list ends up empty.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeNetworkInterfacesRequest {
    #[serde(default, skip_serializing_if = "SdkList::is_unset")]
    network_interface_ids: SdkList<Option<String>>,
    #[serde(default, skip_serializing_if = "SdkList::is_unset")]
    filters: SdkList<Filter>,
}

impl DescribeNetworkInterfacesRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn network_interface_ids(&self) -> &SdkList<Option<String>> {
        &self.network_interface_ids
    }

    /// Replace the ids. `None` resets the list to its auto-constructed state.
    pub fn set_network_interface_ids(&mut self, ids: Option<Vec<Option<String>>>) {
        self.network_interface_ids = SdkList::from(ids);
    }

    /// Append one interface id, e.g. `eni-0a1b2c3d`.
    pub fn with_network_interface_id(mut self, id: impl Into<String>) -> Self {
        self.network_interface_ids.push(Some(id.into()));
        self
    }

    pub fn with_network_interface_ids<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for id in ids {
            self.network_interface_ids.push(Some(id.into()));
        }
        self
    }

    pub fn filters(&self) -> &SdkList<Filter> {
        &self.filters
    }

    pub fn set_filters(&mut self, filters: Option<Vec<Filter>>) {
        self.filters = SdkList::from(filters);
    }

    pub fn with_filter(mut self, filter: Filter) -> Self {
        self.filters.push(filter);
        self
    }
}
