use crate::models::{
    display::ShapeWriter,
    enums::{JobState, ModelError},
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// SNS settings for job state change notifications.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "PascalCase")]
pub struct Notification {
    #[serde(rename = "SnsTopicARN")]
    pub sns_topic_arn: Option<String>,

    /// Wire strings of [`JobState`](crate::models::enums::JobState) values.
    pub job_states_to_notify: Option<Vec<String>>,

    /// Notify on every state change, overriding `job_states_to_notify`.
    pub notify_all: Option<bool>,
}

impl Notification {
    /// Typed view of `job_states_to_notify`; fails on the first unknown state.
    pub fn parsed_job_states_to_notify(&self) -> Option<Result<Vec<JobState>, ModelError>> {
        self.job_states_to_notify
            .as_ref()
            .map(|states| states.iter().map(|state| state.parse()).collect())
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeWriter::new(f)
            .field("SnsTopicARN", self.sns_topic_arn.as_deref())
            .list("JobStatesToNotify", self.job_states_to_notify.as_deref())
            .field("NotifyAll", self.notify_all.as_ref())
            .finish()
    }
}
