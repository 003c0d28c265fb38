//! Filter Controls
//!
//! Translates user actions on the filter bar into [`FilterService`] calls.

use std::cell::RefCell;
use std::rc::Rc;

use crate::service::{FilterService, FilterStream};
use crate::status::FilterStatus;

/// Event handlers behind the status buttons and the name input.
///
/// Keeps the raw name text as typed so the input can echo it back; the service
/// only ever sees the normalized form.
#[derive(Clone, Debug)]
pub struct FilterControls {
    service: FilterService,
    name_buffer: Rc<RefCell<String>>,
}

impl FilterControls {
    pub fn new(service: FilterService) -> Self {
        Self {
            service,
            name_buffer: Rc::new(RefCell::new(String::new())),
        }
    }

    /// Status button clicked. `None` is the "All" button.
    pub fn select_status(&self, status: Option<FilterStatus>) {
        self.service.set_status(status);
    }

    /// Name input changed
    pub fn set_name_filter(&self, text: &str) {
        *self.name_buffer.borrow_mut() = text.to_string();
        self.service.set_name(text);
    }

    /// Name text exactly as last entered
    pub fn name_filter(&self) -> String {
        self.name_buffer.borrow().clone()
    }

    /// Stream to render the active state from
    pub fn filter_stream(&self) -> FilterStream {
        self.service.current_filter()
    }
}
