use leptos::prelude::*;
use crate::context::{use_filter_context, use_filter_signal};
use crate::models::ViewFile;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn FileList() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_filter_context();
    let filter = use_filter_signal(ctx.stream());

    // Re-filter whenever the file list or the filter changes
    let visible = Memo::new(move |_| {
        filter.track();
        let files = store.files().get();
        ctx.service.with_value(|service| {
            files.into_iter().filter(|file| service.matches(file)).collect::<Vec<ViewFile>>()
        })
    });

    let total = move || store.files().with(|files| files.len());

    view! {
        <div class="file-list-container">
            <Show when=move || store.loading().get()>
                <div class="loading">"Loading..."</div>
            </Show>

            <p class="file-count">{move || format!("{} of {} files", visible.get().len(), total())}</p>

            <div class="file-list">
                <For
                    each=move || visible.get()
                    key=|file| file.name.clone()
                    children=move |file| view! { <FileRow file=file /> }
                />
            </div>

            <Show when=move || { nothing_matches(visible.with(|files| files.len()), total()) }>
                <div class="no-files-message">"No files match the current filter"</div>
            </Show>
        </div>
    }
}

#[component]
fn FileRow(file: ViewFile) -> impl IntoView {
    let icon = if file.is_dir { "📁" } else { "📄" };
    let status = file.status;
    let size = file.remote_size.or(file.local_size).map(format_size).unwrap_or_default();
    let progress = file
        .progress()
        .map(|p| format!("{:.0}%", p * 100.0))
        .unwrap_or_default();

    view! {
        <div class="file-row" class:directory=file.is_dir>
            <div class="file-icon">{icon}</div>
            <div class="file-name" title={file.name.clone()}>{file.name.clone()}</div>
            <span class=format!("file-status status-{}", status.as_str())>{status.label()}</span>
            <span class="file-progress">{progress}</span>
            <span class="file-size">{size}</span>
        </div>
    }
}

/// Files exist but the filter hides all of them
fn nothing_matches(visible: usize, total: usize) -> bool {
    visible == 0 && total > 0
}

fn format_size(size: u64) -> String {
    if size < 1024 { format!("{} B", size) }
    else if size < 1024 * 1024 { format!("{:.1} KB", size as f64 / 1024.0) }
    else if size < 1024 * 1024 * 1024 { format!("{:.1} MB", size as f64 / (1024.0 * 1024.0)) }
    else { format!("{:.1} GB", size as f64 / (1024.0 * 1024.0 * 1024.0)) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nothing_matches_only_when_files_are_hidden() {
        assert!(nothing_matches(0, 3));
        assert!(!nothing_matches(0, 0));
        assert!(!nothing_matches(2, 3));
    }

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(1536), "1.5 KB");
        assert_eq!(format_size(5 * 1024 * 1024), "5.0 MB");
        assert_eq!(format_size(3 * 1024 * 1024 * 1024), "3.0 GB");
    }
}
