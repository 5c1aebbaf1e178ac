//! List values that remember whether the caller ever touched them.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::ops::Deref;

/// A list field of a request shape.
///
/// Query-protocol marshalling distinguishes a list the SDK created on the
/// caller's behalf (auto-constructed) from one the caller supplied, even when
/// both are empty. That gives three states: unset, explicitly empty, and
/// non-empty.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SdkList<T> {
    items: Vec<T>,
    auto_construct: bool,
}

impl<T> SdkList<T> {
    /// An empty list standing in for a field the caller never set.
    pub fn auto_constructed() -> Self {
        Self {
            items: Vec::new(),
            auto_construct: true,
        }
    }

    /// A list supplied by the caller. May be empty.
    pub fn explicit(items: impl IntoIterator<Item = T>) -> Self {
        Self {
            items: items.into_iter().collect(),
            auto_construct: false,
        }
    }

    pub fn is_auto_construct(&self) -> bool {
        self.auto_construct
    }

    /// True for the "never set" state: empty and auto-constructed.
    pub fn is_unset(&self) -> bool {
        self.auto_construct && self.items.is_empty()
    }

    /// Whether the marshaller walks this list at all.
    pub fn should_marshall(&self) -> bool {
        !self.items.is_empty() || !self.auto_construct
    }

    /// Append an element. The list counts as caller-supplied afterwards.
    pub fn push(&mut self, item: T) {
        self.items.push(item);
        self.auto_construct = false;
    }

    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

impl<T> Default for SdkList<T> {
    fn default() -> Self {
        Self::auto_constructed()
    }
}

impl<T> Deref for SdkList<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.items
    }
}

impl<T> From<Vec<T>> for SdkList<T> {
    fn from(items: Vec<T>) -> Self {
        Self::explicit(items)
    }
}

/// `None` resets the field to the auto-constructed state.
impl<T> From<Option<Vec<T>>> for SdkList<T> {
    fn from(items: Option<Vec<T>>) -> Self {
        match items {
            Some(items) => Self::explicit(items),
            None => Self::auto_constructed(),
        }
    }
}

impl<'a, T> IntoIterator for &'a SdkList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T: Serialize> Serialize for SdkList<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.is_unset() {
            serializer.serialize_none()
        } else {
            serializer.serialize_some(&self.items)
        }
    }
}

/// Absent or `null` deserializes as auto-constructed, `[]` as explicitly empty.
impl<'de, T: Deserialize<'de>> Deserialize<'de> for SdkList<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<Vec<T>>::deserialize(deserializer).map(Self::from)
    }
}
