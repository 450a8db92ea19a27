use std::env;
use std::path::PathBuf;

use crate::models::AttendedLabels;

#[derive(Clone, Debug)]
pub struct Config {
    pub export_dir: PathBuf,
    pub attended_labels: AttendedLabels,
    pub log_filter: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            export_dir: env::var("GYMFLOW_EXPORT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("exports")),
            attended_labels: env::var("GYMFLOW_ATTENDED_LABELS")
                .ok()
                .and_then(|s| AttendedLabels::parse(&s))
                .unwrap_or_default(),
            log_filter: env::var("GYMFLOW_LOG").unwrap_or_else(|_| "gymflow=info".to_string()),
        }
    }

    pub fn default_export_path(&self, file_name: &str) -> PathBuf {
        self.export_dir.join(file_name)
    }
}
