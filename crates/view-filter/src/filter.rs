//! Filter Snapshot
//!
//! Immutable view of the active filter criteria and the predicate they define.

use serde::{Deserialize, Serialize};
use crate::status::FilterStatus;

/// Anything the file list can show and the filter can test
pub trait ViewFileEntity {
    fn status(&self) -> FilterStatus;
    fn name(&self) -> &str;
}

/// Filter criteria at one point in time.
///
/// Criteria combine with AND. `status: None` places no status restriction and an
/// empty `name` places no name restriction. `name` is stored lower-cased.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ViewFilter {
    pub status: Option<FilterStatus>,
    pub name: String,
}

impl ViewFilter {
    pub fn new(status: Option<FilterStatus>, name: &str) -> Self {
        Self {
            status,
            name: normalize_name(name),
        }
    }

    /// Copy of this snapshot with a different status restriction
    pub fn with_status(&self, status: Option<FilterStatus>) -> Self {
        Self {
            status,
            name: self.name.clone(),
        }
    }

    /// Copy of this snapshot with a different name restriction
    pub fn with_name(&self, name: &str) -> Self {
        Self {
            status: self.status,
            name: normalize_name(name),
        }
    }

    /// True when no criterion is active and every file passes
    pub fn is_unrestricted(&self) -> bool {
        self.status.is_none() && self.name.is_empty()
    }

    pub fn matches<F: ViewFileEntity + ?Sized>(&self, file: &F) -> bool {
        let status_ok = self.status.map_or(true, |status| file.status() == status);
        status_ok && (self.name.is_empty() || file.name().to_lowercase().contains(&self.name))
    }
}

pub(crate) fn normalize_name(name: &str) -> String {
    name.to_lowercase()
}
