//! SeedSync Frontend App
//!
//! File list page with the filter bar on top.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;
use view_filter::FilterService;

use crate::commands;
use crate::components::{FileList, FileOptions};
use crate::context::FilterContext;
use crate::store::{store_replace_files, AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::default());
    provide_context(store);
    provide_context(FilterContext::new(FilterService::new()));

    // Load files on mount
    Effect::new(move |_| {
        store.loading().set(true);
        spawn_local(async move {
            match commands::list_view_files().await {
                Ok(files) => {
                    log::info!("[App] loaded {} files", files.len());
                    store_replace_files(&store, files);
                }
                Err(e) => log::error!("[App] failed to load files: {}", e),
            }
            store.loading().set(false);
        });
    });

    view! {
        <div class="app-layout">
            <main class="main-content">
                <h1>"SeedSync"</h1>
                <FileOptions />
                <FileList />
            </main>
        </div>
    }
}
