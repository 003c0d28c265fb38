//! Frontend Models
//!
//! Data structures matching the file entries sent by the host.

use serde::{Deserialize, Serialize};
use view_filter::{FilterStatus, ViewFileEntity};

/// One row of the file list (matches host JSON)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewFile {
    pub name: String,
    pub status: FilterStatus,
    #[serde(default)]
    pub is_dir: bool,
    /// Bytes present locally, if any
    #[serde(default)]
    pub local_size: Option<u64>,
    /// Bytes on the remote side, if the file exists there
    #[serde(default)]
    pub remote_size: Option<u64>,
    /// Bytes per second while downloading
    #[serde(default)]
    pub downloading_speed: Option<u64>,
    /// Seconds remaining while downloading
    #[serde(default)]
    pub eta: Option<u64>,
}

impl ViewFile {
    /// Fraction downloaded in `0.0..=1.0`, when both sizes are known
    pub fn progress(&self) -> Option<f64> {
        match (self.local_size, self.remote_size) {
            (Some(local), Some(remote)) if remote > 0 => Some((local as f64 / remote as f64).min(1.0)),
            _ => None,
        }
    }
}

impl ViewFileEntity for ViewFile {
    fn status(&self) -> FilterStatus {
        self.status
    }

    fn name(&self) -> &str {
        &self.name
    }
}
