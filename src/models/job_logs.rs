use crate::models::display::ShapeWriter;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Links to the reports produced once a job finishes.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct JobLogs {
    #[serde(rename = "JobCompletionReportURI")]
    pub job_completion_report_uri: Option<String>,

    #[serde(rename = "JobSuccessLogURI")]
    pub job_success_log_uri: Option<String>,

    #[serde(rename = "JobFailureLogURI")]
    pub job_failure_log_uri: Option<String>,
}

impl fmt::Display for JobLogs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeWriter::new(f)
            .field("JobCompletionReportURI", self.job_completion_report_uri.as_deref())
            .field("JobSuccessLogURI", self.job_success_log_uri.as_deref())
            .field("JobFailureLogURI", self.job_failure_log_uri.as_deref())
            .finish()
    }
}
