//! Status snapshot of a Snowball job, as returned by `DescribeJob`.

use crate::models::{
    data_transfer::DataTransfer,
    display::ShapeWriter,
    enums::{JobState, JobType, ModelError, SnowballCapacity},
    job_logs::JobLogs,
    job_resource::JobResource,
    notification::Notification,
    shipping::ShippingDetails,
    timestamp::{epoch_seconds_option, truncate_to_millis},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, sync::Arc};

/// Everything the service reports about one job.
///
/// Every field is optional. Nested shapes sit behind [`Arc`], so `clone()` is
/// a field-wise shallow copy: the clone shares them with the original.
/// Equality and hashing cover all fourteen fields, nested shapes by value.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "PascalCase")]
pub struct JobMetadata {
    job_id: Option<String>,
    job_state: Option<String>,
    job_type: Option<String>,
    #[serde(default, with = "epoch_seconds_option")]
    creation_date: Option<DateTime<Utc>>,
    resources: Option<Arc<JobResource>>,
    description: Option<String>,
    #[serde(rename = "KmsKeyARN")]
    kms_key_arn: Option<String>,
    #[serde(rename = "RoleARN")]
    role_arn: Option<String>,
    address_id: Option<String>,
    shipping_details: Option<Arc<ShippingDetails>>,
    snowball_capacity_preference: Option<String>,
    notification: Option<Arc<Notification>>,
    data_transfer_progress: Option<Arc<DataTransfer>>,
    job_log_info: Option<Arc<JobLogs>>,
}

impl JobMetadata {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn job_id(&self) -> Option<&str> {
        self.job_id.as_deref()
    }

    pub fn set_job_id(&mut self, job_id: Option<String>) {
        self.job_id = job_id;
    }

    pub fn with_job_id(mut self, job_id: impl Into<String>) -> Self {
        self.set_job_id(Some(job_id.into()));
        self
    }

    /// Raw wire string, which may be a state this SDK does not know yet.
    pub fn job_state(&self) -> Option<&str> {
        self.job_state.as_deref()
    }

    pub fn parsed_job_state(&self) -> Option<Result<JobState, ModelError>> {
        self.job_state().map(str::parse)
    }

    pub fn set_job_state(&mut self, job_state: Option<String>) {
        self.job_state = job_state;
    }

    /// Accepts a raw string or a [`JobState`].
    pub fn with_job_state(mut self, job_state: impl Into<String>) -> Self {
        self.set_job_state(Some(job_state.into()));
        self
    }

    pub fn job_type(&self) -> Option<&str> {
        self.job_type.as_deref()
    }

    pub fn parsed_job_type(&self) -> Option<Result<JobType, ModelError>> {
        self.job_type().map(str::parse)
    }

    pub fn set_job_type(&mut self, job_type: Option<String>) {
        self.job_type = job_type;
    }

    /// Accepts a raw string or a [`JobType`].
    pub fn with_job_type(mut self, job_type: impl Into<String>) -> Self {
        self.set_job_type(Some(job_type.into()));
        self
    }

    pub fn creation_date(&self) -> Option<DateTime<Utc>> {
        self.creation_date
    }

    /// Stored at millisecond precision, the precision of the wire format.
    pub fn set_creation_date(&mut self, creation_date: Option<DateTime<Utc>>) {
        self.creation_date = creation_date.map(truncate_to_millis);
    }

    pub fn with_creation_date(mut self, creation_date: DateTime<Utc>) -> Self {
        self.set_creation_date(Some(creation_date));
        self
    }

    pub fn resources(&self) -> Option<&Arc<JobResource>> {
        self.resources.as_ref()
    }

    pub fn set_resources(&mut self, resources: Option<Arc<JobResource>>) {
        self.resources = resources;
    }

    pub fn with_resources(mut self, resources: impl Into<Arc<JobResource>>) -> Self {
        self.set_resources(Some(resources.into()));
        self
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn set_description(&mut self, description: Option<String>) {
        self.description = description;
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.set_description(Some(description.into()));
        self
    }

    pub fn kms_key_arn(&self) -> Option<&str> {
        self.kms_key_arn.as_deref()
    }

    pub fn set_kms_key_arn(&mut self, kms_key_arn: Option<String>) {
        self.kms_key_arn = kms_key_arn;
    }

    pub fn with_kms_key_arn(mut self, kms_key_arn: impl Into<String>) -> Self {
        self.set_kms_key_arn(Some(kms_key_arn.into()));
        self
    }

    pub fn role_arn(&self) -> Option<&str> {
        self.role_arn.as_deref()
    }

    pub fn set_role_arn(&mut self, role_arn: Option<String>) {
        self.role_arn = role_arn;
    }

    pub fn with_role_arn(mut self, role_arn: impl Into<String>) -> Self {
        self.set_role_arn(Some(role_arn.into()));
        self
    }

    pub fn address_id(&self) -> Option<&str> {
        self.address_id.as_deref()
    }

    pub fn set_address_id(&mut self, address_id: Option<String>) {
        self.address_id = address_id;
    }

    pub fn with_address_id(mut self, address_id: impl Into<String>) -> Self {
        self.set_address_id(Some(address_id.into()));
        self
    }

    pub fn shipping_details(&self) -> Option<&Arc<ShippingDetails>> {
        self.shipping_details.as_ref()
    }

    pub fn set_shipping_details(&mut self, shipping_details: Option<Arc<ShippingDetails>>) {
        self.shipping_details = shipping_details;
    }

    pub fn with_shipping_details(
        mut self,
        shipping_details: impl Into<Arc<ShippingDetails>>,
    ) -> Self {
        self.set_shipping_details(Some(shipping_details.into()));
        self
    }

    pub fn snowball_capacity_preference(&self) -> Option<&str> {
        self.snowball_capacity_preference.as_deref()
    }

    pub fn parsed_snowball_capacity_preference(
        &self,
    ) -> Option<Result<SnowballCapacity, ModelError>> {
        self.snowball_capacity_preference().map(str::parse)
    }

    pub fn set_snowball_capacity_preference(&mut self, capacity: Option<String>) {
        self.snowball_capacity_preference = capacity;
    }

    /// Accepts a raw string or a [`SnowballCapacity`].
    pub fn with_snowball_capacity_preference(mut self, capacity: impl Into<String>) -> Self {
        self.set_snowball_capacity_preference(Some(capacity.into()));
        self
    }

    pub fn notification(&self) -> Option<&Arc<Notification>> {
        self.notification.as_ref()
    }

    pub fn set_notification(&mut self, notification: Option<Arc<Notification>>) {
        self.notification = notification;
    }

    pub fn with_notification(mut self, notification: impl Into<Arc<Notification>>) -> Self {
        self.set_notification(Some(notification.into()));
        self
    }

    pub fn data_transfer_progress(&self) -> Option<&Arc<DataTransfer>> {
        self.data_transfer_progress.as_ref()
    }

    pub fn set_data_transfer_progress(&mut self, progress: Option<Arc<DataTransfer>>) {
        self.data_transfer_progress = progress;
    }

    pub fn with_data_transfer_progress(mut self, progress: impl Into<Arc<DataTransfer>>) -> Self {
        self.set_data_transfer_progress(Some(progress.into()));
        self
    }

    pub fn job_log_info(&self) -> Option<&Arc<JobLogs>> {
        self.job_log_info.as_ref()
    }

    pub fn set_job_log_info(&mut self, job_log_info: Option<Arc<JobLogs>>) {
        self.job_log_info = job_log_info;
    }

    pub fn with_job_log_info(mut self, job_log_info: impl Into<Arc<JobLogs>>) -> Self {
        self.set_job_log_info(Some(job_log_info.into()));
        self
    }
}

impl fmt::Display for JobMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeWriter::new(f)
            .field("JobId", self.job_id())
            .field("JobState", self.job_state())
            .field("JobType", self.job_type())
            .field("CreationDate", self.creation_date.as_ref())
            .field("Resources", self.resources.as_deref())
            .field("Description", self.description())
            .field("KmsKeyARN", self.kms_key_arn())
            .field("RoleARN", self.role_arn())
            .field("AddressId", self.address_id())
            .field("ShippingDetails", self.shipping_details.as_deref())
            .field(
                "SnowballCapacityPreference",
                self.snowball_capacity_preference(),
            )
            .field("Notification", self.notification.as_deref())
            .field("DataTransferProgress", self.data_transfer_progress.as_deref())
            .field("JobLogInfo", self.job_log_info.as_deref())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::shipping::Shipment;
    use chrono::TimeZone;
    use std::{
        collections::hash_map::DefaultHasher,
        hash::{Hash, Hasher},
    };

    fn hash_of(job: &JobMetadata) -> u64 {
        let mut hasher = DefaultHasher::new();
        job.hash(&mut hasher);
        hasher.finish()
    }

    fn full_job() -> JobMetadata {
        JobMetadata::new()
            .with_job_id("JID123e4567-e89b-12d3-a456-426655440000")
            .with_job_state(JobState::InProgress)
            .with_job_type(JobType::Import)
            .with_creation_date(Utc.with_ymd_and_hms(2016, 10, 19, 8, 30, 0).unwrap())
            .with_resources(JobResource {
                s3_resources: Some(Vec::new()),
                lambda_resources: None,
            })
            .with_description("quarterly archive")
            .with_kms_key_arn("arn:aws:kms:us-west-2:000000000000:key/abc")
            .with_role_arn("arn:aws:iam::000000000000:role/snowball")
            .with_address_id("ADID1234ab12-3eec-4eb3-9be6-9374c10eb51b")
            .with_shipping_details(ShippingDetails {
                shipping_option: Some("SECOND_DAY".into()),
                inbound_shipment: None,
                outbound_shipment: Some(Shipment {
                    status: Some("Delivered".into()),
                    tracking_number: Some("1Z999".into()),
                }),
            })
            .with_snowball_capacity_preference(SnowballCapacity::T80)
            .with_notification(Notification {
                sns_topic_arn: Some("arn:aws:sns:us-west-2:000000000000:jobs".into()),
                job_states_to_notify: None,
                notify_all: Some(true),
            })
            .with_data_transfer_progress(DataTransfer {
                bytes_transferred: Some(1024),
                objects_transferred: Some(3),
                total_bytes: Some(4096),
                total_objects: Some(12),
            })
            .with_job_log_info(JobLogs {
                job_completion_report_uri: Some("https://logs/report".into()),
                job_success_log_uri: None,
                job_failure_log_uri: None,
            })
    }

    #[test]
    fn test_identical_fields_equal_and_hash_equal() {
        let a = full_job();
        let b = full_job();
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));

        assert_eq!(JobMetadata::new(), JobMetadata::default());
        assert_eq!(hash_of(&JobMetadata::new()), hash_of(&JobMetadata::default()));
    }

    #[test]
    fn test_any_single_mutation_breaks_equality() {
        let mutations: [fn(&mut JobMetadata); 14] = [
            |j| j.set_job_id(None),
            |j| j.set_job_state(Some("Complete".into())),
            |j| j.set_job_type(None),
            |j| j.set_creation_date(Some(Utc.timestamp_opt(0, 0).unwrap())),
            |j| j.set_resources(Some(Arc::new(JobResource::default()))),
            |j| j.set_description(Some("other".into())),
            |j| j.set_kms_key_arn(None),
            |j| j.set_role_arn(Some("arn:aws:iam::1:role/x".into())),
            |j| j.set_address_id(None),
            |j| j.set_shipping_details(None),
            |j| j.set_snowball_capacity_preference(Some("T50".into())),
            |j| j.set_notification(Some(Arc::new(Notification::default()))),
            |j| j.set_data_transfer_progress(None),
            |j| j.set_job_log_info(Some(Arc::new(JobLogs::default()))),
        ];

        let original = full_job();
        for (i, mutate) in mutations.iter().enumerate() {
            let mut changed = full_job();
            mutate(&mut changed);
            assert_ne!(original, changed, "mutation {i} left the record equal");
        }
    }

    #[test]
    fn test_null_vs_set_is_unequal() {
        let empty = JobMetadata::new();
        let with_id = JobMetadata::new().with_job_id("JID1");
        assert_ne!(empty, with_id);
        assert_ne!(with_id, empty);
    }

    #[test]
    fn test_nested_equality_is_structural() {
        let a = JobMetadata::new().with_data_transfer_progress(DataTransfer {
            total_bytes: Some(10),
            ..Default::default()
        });
        let b = JobMetadata::new().with_data_transfer_progress(DataTransfer {
            total_bytes: Some(10),
            ..Default::default()
        });
        assert!(!Arc::ptr_eq(
            a.data_transfer_progress().unwrap(),
            b.data_transfer_progress().unwrap()
        ));
        assert_eq!(a, b);
    }

    #[test]
    fn test_clone_is_shallow() {
        let original = full_job();
        let copy = original.clone();
        assert_eq!(original, copy);

        assert!(Arc::ptr_eq(original.resources().unwrap(), copy.resources().unwrap()));
        assert!(Arc::ptr_eq(
            original.shipping_details().unwrap(),
            copy.shipping_details().unwrap()
        ));
        assert!(Arc::ptr_eq(
            original.notification().unwrap(),
            copy.notification().unwrap()
        ));
        assert!(Arc::ptr_eq(
            original.data_transfer_progress().unwrap(),
            copy.data_transfer_progress().unwrap()
        ));
        assert!(Arc::ptr_eq(
            original.job_log_info().unwrap(),
            copy.job_log_info().unwrap()
        ));
    }

    #[test]
    fn test_clone_then_set_leaves_original() {
        let original = full_job();
        let mut copy = original.clone();
        copy.set_description(None);
        assert_eq!(original.description(), Some("quarterly archive"));
        assert_ne!(original, copy);
    }

    #[test]
    fn test_enum_and_raw_setters_agree() {
        let typed = JobMetadata::new().with_job_state(JobState::WithAws);
        let raw = JobMetadata::new().with_job_state("WithAWS");
        assert_eq!(typed, raw);
        assert_eq!(typed.parsed_job_state(), Some(Ok(JobState::WithAws)));

        let future = JobMetadata::new().with_job_type("TRANSFER");
        assert!(matches!(future.parsed_job_type(), Some(Err(_))));
        assert_eq!(
            JobMetadata::new().parsed_snowball_capacity_preference(),
            None
        );
    }

    #[test]
    fn test_display_only_set_fields_in_order() {
        let job = JobMetadata::new()
            .with_description("pilot")
            .with_job_id("JID1")
            .with_data_transfer_progress(DataTransfer {
                bytes_transferred: Some(5),
                ..Default::default()
            });
        assert_eq!(
            job.to_string(),
            "{JobId: JID1,Description: pilot,DataTransferProgress: {BytesTransferred: 5}}"
        );
        assert_eq!(JobMetadata::new().to_string(), "{}");
    }

    #[test]
    fn test_display_full_record_is_single_line() {
        let rendered = full_job().to_string();
        assert!(!rendered.contains('\n'));
        assert!(rendered.starts_with("{JobId: JID123e4567"));
        assert!(rendered.contains("CreationDate: 2016-10-19 08:30:00 UTC"));
        assert!(rendered.ends_with("JobLogInfo: {JobCompletionReportURI: https://logs/report}}"));
    }

    #[test]
    fn test_creation_date_survives_json_round_trip() {
        let precise = DateTime::from_timestamp(1476835200, 987_654_321).unwrap();
        let job = JobMetadata::new().with_creation_date(precise);
        assert_eq!(job.creation_date().unwrap().timestamp_subsec_millis(), 987);

        let json = serde_json::to_string(&job).unwrap();
        let parsed: JobMetadata = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, job);
        assert_eq!(hash_of(&parsed), hash_of(&job));
    }

    #[test]
    fn test_deserialize_describe_job_payload() {
        let json = r#"{
            "JobId": "JID1",
            "JobState": "Complete",
            "JobType": "EXPORT",
            "CreationDate": 1476835200,
            "KmsKeyARN": "arn:kms",
            "RoleARN": "arn:role",
            "SnowballCapacityPreference": "T50",
            "Notification": {"SnsTopicARN": "arn:sns", "JobStatesToNotify": ["Complete"], "NotifyAll": false},
            "JobLogInfo": {"JobSuccessLogURI": "https://logs/ok"}
        }"#;
        let job: JobMetadata = serde_json::from_str(json).unwrap();

        assert_eq!(job.job_id(), Some("JID1"));
        assert_eq!(job.parsed_job_type(), Some(Ok(JobType::Export)));
        assert_eq!(
            job.creation_date(),
            Some(Utc.with_ymd_and_hms(2016, 10, 19, 0, 0, 0).unwrap())
        );
        assert_eq!(job.kms_key_arn(), Some("arn:kms"));
        assert_eq!(job.role_arn(), Some("arn:role"));
        assert_eq!(
            job.parsed_snowball_capacity_preference(),
            Some(Ok(SnowballCapacity::T50))
        );
        let notification = job.notification().unwrap();
        assert_eq!(notification.sns_topic_arn.as_deref(), Some("arn:sns"));
        assert_eq!(notification.notify_all, Some(false));
        assert_eq!(
            job.job_log_info().unwrap().job_success_log_uri.as_deref(),
            Some("https://logs/ok")
        );
        assert!(job.resources().is_none());
        assert!(job.address_id().is_none());
    }
}
