//! Append-only CSV metrics for processed requests.
//!
//! One data row per successfully processed review. The file and its parent
//! directory are created on first use, with a header row. Writers are not
//! coordinated; the service is low-throughput and a request appends at most
//! one row.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

use chrono::Utc;
use serde::Serialize;

use crate::error::MetricsError;

pub const METRICS_FILE_NAME: &str = "Metrics.csv";

/// A single metrics row. Field order matches the CSV header:
/// `datetime,request_id,user_id,review_text,sentiment,average_confidence_score,execution_time`
#[derive(Debug, Serialize)]
pub struct MetricsRecord {
    pub datetime: String,
    pub request_id: String,
    pub user_id: String,
    pub review_text: String,
    pub sentiment: String,
    pub average_confidence_score: i64,
    pub execution_time: f64,
}

impl MetricsRecord {
    pub fn new(
        request_id: &str,
        user_id: &str,
        review_text: &str,
        sentiment: &str,
        average_confidence_score: i64,
        execution_time: f64,
    ) -> Self {
        Self {
            datetime: Utc::now().to_rfc3339(),
            request_id: request_id.to_string(),
            user_id: user_id.to_string(),
            review_text: review_text.to_string(),
            sentiment: sentiment.to_string(),
            average_confidence_score,
            execution_time,
        }
    }
}

#[derive(Clone)]
pub struct MetricsSink {
    path: PathBuf,
}

impl MetricsSink {
    pub fn new(metrics_dir: &Path) -> Self {
        Self {
            path: metrics_dir.join(METRICS_FILE_NAME),
        }
    }

    pub fn append(&self, record: &MetricsRecord) -> Result<(), MetricsError> {
        if let Some(dir) = self.path.parent() {
            std::fs::create_dir_all(dir)?;
        }

        let file_exists = self.path.is_file();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(!file_exists)
            .from_writer(file);
        writer.serialize(record).map_err(|e| {
            tracing::error!(
                request_id = %record.request_id,
                "failed to write metrics record: {}",
                e
            );
            e
        })?;
        writer.flush()?;

        tracing::info!(
            request_id = %record.request_id,
            path = %self.path.display(),
            "metrics record written"
        );
        Ok(())
    }
}
