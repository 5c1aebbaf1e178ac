//! Progress snapshot of a running transfer.

use crate::models::display::ShapeWriter;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Bytes and objects moved so far, against the job totals.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "PascalCase")]
pub struct DataTransfer {
    pub bytes_transferred: Option<i64>,
    pub objects_transferred: Option<i64>,
    pub total_bytes: Option<i64>,
    pub total_objects: Option<i64>,
}

impl fmt::Display for DataTransfer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeWriter::new(f)
            .field("BytesTransferred", self.bytes_transferred.as_ref())
            .field("ObjectsTransferred", self.objects_transferred.as_ref())
            .field("TotalBytes", self.total_bytes.as_ref())
            .field("TotalObjects", self.total_objects.as_ref())
            .finish()
    }
}
