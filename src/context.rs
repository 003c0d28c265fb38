//! Application Context
//!
//! Filter state provided via Leptos Context API.

use leptos::prelude::*;
use view_filter::{FilterControls, FilterService, FilterStream, ViewFilter};

/// Filter service and its controls, shared by the filter bar and the file list.
///
/// Both are single-threaded handles, so they live in local storage.
#[derive(Clone, Copy)]
pub struct FilterContext {
    pub service: StoredValue<FilterService, LocalStorage>,
    pub controls: StoredValue<FilterControls, LocalStorage>,
}

impl FilterContext {
    pub fn new(service: FilterService) -> Self {
        let controls = FilterControls::new(service.clone());
        Self {
            service: StoredValue::new_local(service),
            controls: StoredValue::new_local(controls),
        }
    }

    /// Read side of the filter stream
    pub fn stream(&self) -> FilterStream {
        self.service.with_value(|service| service.current_filter())
    }
}

/// Get the filter context
pub fn use_filter_context() -> FilterContext {
    expect_context::<FilterContext>()
}

/// Mirror the filter stream into a signal for the current component.
///
/// The subscription is released when the component is torn down.
pub fn use_filter_signal(stream: FilterStream) -> ReadSignal<ViewFilter> {
    let (filter, set_filter) = signal(stream.latest());
    let subscription = stream.subscribe(move |snapshot| set_filter.set(snapshot.clone()));
    let subscription = StoredValue::new_local(Some(subscription));
    on_cleanup(move || {
        let _ = subscription.try_update_value(Option::take);
    });
    filter
}
