//! The S3 buckets and Lambda functions a Snowball job moves data for.

use crate::models::display::ShapeWriter;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Resources associated with a job.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "PascalCase")]
pub struct JobResource {
    /// Buckets (and optional key ranges) the job imports into or exports from.
    pub s3_resources: Option<Vec<S3Resource>>,

    /// Functions triggered as objects land in the buckets.
    pub lambda_resources: Option<Vec<LambdaResource>>,
}

/// A bucket, optionally narrowed to a key range.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "PascalCase")]
pub struct S3Resource {
    pub bucket_arn: Option<String>,
    pub key_range: Option<KeyRange>,
}

/// Inclusive key bounds for an export job. Either end may be open.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "PascalCase")]
pub struct KeyRange {
    pub begin_marker: Option<String>,
    pub end_marker: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "PascalCase")]
pub struct LambdaResource {
    pub lambda_arn: Option<String>,
    pub event_triggers: Option<Vec<EventTriggerDefinition>>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct EventTriggerDefinition {
    #[serde(rename = "EventResourceARN")]
    pub event_resource_arn: Option<String>,
}

impl fmt::Display for JobResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeWriter::new(f)
            .list("S3Resources", self.s3_resources.as_deref())
            .list("LambdaResources", self.lambda_resources.as_deref())
            .finish()
    }
}

impl fmt::Display for S3Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeWriter::new(f)
            .field("BucketArn", self.bucket_arn.as_deref())
            .field("KeyRange", self.key_range.as_ref())
            .finish()
    }
}

impl fmt::Display for KeyRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeWriter::new(f)
            .field("BeginMarker", self.begin_marker.as_deref())
            .field("EndMarker", self.end_marker.as_deref())
            .finish()
    }
}

impl fmt::Display for LambdaResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeWriter::new(f)
            .field("LambdaArn", self.lambda_arn.as_deref())
            .list("EventTriggers", self.event_triggers.as_deref())
            .finish()
    }
}

impl fmt::Display for EventTriggerDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeWriter::new(f)
            .field("EventResourceARN", self.event_resource_arn.as_deref())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_render() {
        let json = r#"{
            "S3Resources": [
                {"BucketArn": "arn:aws:s3:::photos", "KeyRange": {"BeginMarker": "a"}}
            ],
            "LambdaResources": [
                {"LambdaArn": "arn:aws:lambda:fn", "EventTriggers": [{"EventResourceARN": "arn:aws:s3:::photos"}]}
            ]
        }"#;
        let resource: JobResource = serde_json::from_str(json).unwrap();

        assert_eq!(
            resource.to_string(),
            "{S3Resources: [{BucketArn: arn:aws:s3:::photos,KeyRange: {BeginMarker: a}}],\
             LambdaResources: [{LambdaArn: arn:aws:lambda:fn,EventTriggers: [{EventResourceARN: arn:aws:s3:::photos}]}]}"
        );
    }
}
