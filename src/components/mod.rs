//! UI Components
//!
//! Reusable Leptos components.

mod file_options;
mod file_list;

pub use file_options::FileOptions;
pub use file_list::FileList;
