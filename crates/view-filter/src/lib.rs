//! View Filter
//!
//! Status and name filtering for the file list.
//!
//! - status: the closed set of file statuses
//! - filter: immutable filter snapshots and the match predicate
//! - service: the shared filter state and its snapshot stream
//! - controls: UI event handlers that drive the service

mod controls;
mod filter;
mod service;
mod status;

pub use controls::FilterControls;
pub use filter::{ViewFileEntity, ViewFilter};
pub use service::{FilterService, FilterStream, Subscription};
pub use status::{FilterStatus, ParseStatusError};

#[cfg(test)]
mod tests;
