//! File Status
//!
//! Lifecycle status of a file as shown in the file list.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Lifecycle status a file can be filtered by.
///
/// "All statuses" is not a member: it is expressed as `None` wherever an
/// `Option<FilterStatus>` is taken, and is distinct from [`FilterStatus::Default`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FilterStatus {
    /// Known but not acted on yet
    #[default]
    Default,
    Queued,
    Downloading,
    Downloaded,
    Extracting,
    Extracted,
    Stopped,
}

/// Returned when a status name is not one of the known lowercase names
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown file status: {0:?}")]
pub struct ParseStatusError(pub String);

impl FilterStatus {
    /// Every status, in the order the filter buttons are laid out
    pub const ALL: &'static [FilterStatus] = &[
        FilterStatus::Default,
        FilterStatus::Queued,
        FilterStatus::Downloading,
        FilterStatus::Downloaded,
        FilterStatus::Extracting,
        FilterStatus::Extracted,
        FilterStatus::Stopped,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FilterStatus::Default => "default",
            FilterStatus::Queued => "queued",
            FilterStatus::Downloading => "downloading",
            FilterStatus::Downloaded => "downloaded",
            FilterStatus::Extracting => "extracting",
            FilterStatus::Extracted => "extracted",
            FilterStatus::Stopped => "stopped",
        }
    }

    /// Human readable label for buttons and badges
    pub fn label(&self) -> &'static str {
        match self {
            FilterStatus::Default => "Default",
            FilterStatus::Queued => "Queued",
            FilterStatus::Downloading => "Downloading",
            FilterStatus::Downloaded => "Downloaded",
            FilterStatus::Extracting => "Extracting",
            FilterStatus::Extracted => "Extracted",
            FilterStatus::Stopped => "Stopped",
        }
    }
}

impl fmt::Display for FilterStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FilterStatus::ALL
            .iter()
            .copied()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| ParseStatusError(s.to_string()))
    }
}
