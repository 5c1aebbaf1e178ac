//! Name/values filter used by EC2 `Describe*` calls.

use crate::models::sdk_list::SdkList;
use serde::{Deserialize, Serialize};

/// A filter narrowing a describe call, e.g. `status` = `available`.
///
/// Values may contain `None` holes; the marshaller skips them but keeps
/// their index slot.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "PascalCase")]
pub struct Filter {
    name: Option<String>,
    #[serde(default, skip_serializing_if = "SdkList::is_unset")]
    values: SdkList<Option<String>>,
}

impl Filter {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            values: SdkList::default(),
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn set_name(&mut self, name: Option<String>) {
        self.name = name;
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.set_name(Some(name.into()));
        self
    }

    pub fn values(&self) -> &SdkList<Option<String>> {
        &self.values
    }

    /// Replace the values. `None` resets the list to its auto-constructed state.
    pub fn set_values(&mut self, values: Option<Vec<Option<String>>>) {
        self.values = SdkList::from(values);
    }

    /// Append one value.
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.values.push(Some(value.into()));
        self
    }

    /// Append several values.
    pub fn with_values<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for value in values {
            self.values.push(Some(value.into()));
        }
        self
    }
}
