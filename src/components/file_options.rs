//! File Options Component
//!
//! Filter bar above the file list: status buttons and a name search box.

use leptos::prelude::*;
use view_filter::FilterStatus;

use crate::context::{use_filter_context, use_filter_signal};

/// Status filter buttons, `None` being "All"
pub const STATUS_OPTIONS: &[(Option<FilterStatus>, &str)] = &[
    (None, "All"),
    (Some(FilterStatus::Default), "Default"),
    (Some(FilterStatus::Queued), "Queued"),
    (Some(FilterStatus::Downloading), "Downloading"),
    (Some(FilterStatus::Downloaded), "Downloaded"),
    (Some(FilterStatus::Extracting), "Extracting"),
    (Some(FilterStatus::Extracted), "Extracted"),
    (Some(FilterStatus::Stopped), "Stopped"),
];

const NAME_PLACEHOLDER: &str = "Filter by name...";

/// Status and name filter controls
#[component]
pub fn FileOptions() -> impl IntoView {
    let ctx = use_filter_context();
    let controls = ctx.controls;
    let filter = use_filter_signal(ctx.stream());
    // The input owns the live text; the controls keep it for remounts
    let initial_name = controls.with_value(|c| c.name_filter());

    view! {
        <div class="file-options">
            <div class="status-filter">
                {STATUS_OPTIONS.iter().map(|(status, label)| {
                    let status = *status;
                    let is_active = move || filter.get().status == status;
                    view! {
                        <button
                            class=move || if is_active() { "status-btn active" } else { "status-btn" }
                            on:click=move |_| controls.with_value(|c| c.select_status(status))
                        >
                            {*label}
                        </button>
                    }
                }).collect_view()}
            </div>
            <input
                type="search"
                class="name-filter"
                placeholder=NAME_PLACEHOLDER
                prop:value=initial_name
                on:input=move |ev| {
                    let text = event_target_value(&ev);
                    controls.with_value(|c| c.set_name_filter(&text));
                }
            />
        </div>
    }
}
