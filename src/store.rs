//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;
use crate::models::ViewFile;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Every file reported by the host, unfiltered
    pub files: Vec<ViewFile>,
    /// True while a file list request is in flight
    pub loading: bool,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// Replace the file list with a fresh copy from the host
pub fn store_replace_files(store: &AppStore, files: Vec<ViewFile>) {
    *store.files().write() = files;
}
