//! Filter Scenario Tests
//!
//! End-to-end walks through the controls, the service and the predicate.

#[cfg(test)]
mod tests {
    use crate::{FilterControls, FilterService, FilterStatus, ViewFileEntity, ViewFilter};
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, Clone)]
    struct TestFile {
        name: String,
        status: FilterStatus,
    }

    impl TestFile {
        fn new(name: &str, status: FilterStatus) -> Self {
            Self {
                name: name.to_string(),
                status,
            }
        }
    }

    impl ViewFileEntity for TestFile {
        fn status(&self) -> FilterStatus {
            self.status
        }

        fn name(&self) -> &str {
            &self.name
        }
    }

    fn sample_files() -> Vec<TestFile> {
        vec![
            TestFile::new("Annual Report 2023.pdf", FilterStatus::Extracted),
            TestFile::new("report-draft.zip", FilterStatus::Queued),
            TestFile::new("holiday.mkv", FilterStatus::Extracted),
            TestFile::new("REPORTS", FilterStatus::Extracted),
            TestFile::new("notes.txt", FilterStatus::Default),
        ]
    }

    #[test]
    fn test_status_then_name_scenario() {
        let service = FilterService::new();
        let files = sample_files();

        assert!(files.iter().all(|f| service.matches(f)));

        service.set_status(Some(FilterStatus::Extracted));
        assert!(service.matches(&TestFile::new("x", FilterStatus::Extracted)));
        assert!(!service.matches(&TestFile::new("x", FilterStatus::Queued)));

        service.set_name("report");
        let visible: Vec<&str> = service.filter(&files).iter().map(|f| f.name.as_str()).collect();
        assert_eq!(visible, vec!["Annual Report 2023.pdf", "REPORTS"]);
    }

    #[test]
    fn test_clearing_status_ignores_file_status() {
        let service = FilterService::new();
        service.set_status(Some(FilterStatus::Stopped));
        service.set_status(None);

        for status in FilterStatus::ALL {
            assert!(service.matches(&TestFile::new("any", *status)));
        }
    }

    #[test]
    fn test_clearing_name_ignores_file_name() {
        let service = FilterService::new();
        service.set_name("nothing matches this");
        assert!(!service.matches(&TestFile::new("notes.txt", FilterStatus::Default)));

        service.set_name("");
        assert!(service.matches(&TestFile::new("notes.txt", FilterStatus::Default)));
    }

    #[test]
    fn test_controls_and_list_share_one_stream() {
        let service = FilterService::new();
        let controls = FilterControls::new(service.clone());
        let files = sample_files();

        // Stand-in for the file list renderer
        let visible = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&visible);
        let list_files = files.clone();
        let list_sub = service.current_filter().subscribe(move |filter: &ViewFilter| {
            *sink.borrow_mut() = list_files
                .iter()
                .filter(|f| filter.matches(*f))
                .map(|f| f.name.clone())
                .collect::<Vec<_>>();
        });
        assert_eq!(visible.borrow().len(), files.len());

        controls.select_status(Some(FilterStatus::Queued));
        assert_eq!(*visible.borrow(), vec!["report-draft.zip".to_string()]);

        controls.set_name_filter("HOLIDAY");
        assert!(visible.borrow().is_empty());

        controls.select_status(None);
        assert_eq!(*visible.borrow(), vec!["holiday.mkv".to_string()]);

        // List torn down: later changes no longer reach it
        drop(list_sub);
        controls.set_name_filter("");
        assert_eq!(*visible.borrow(), vec!["holiday.mkv".to_string()]);
        assert_eq!(service.subscriber_count(), 0);
    }

    #[test]
    fn test_default_status_differs_from_all() {
        let service = FilterService::new();
        let plain = TestFile::new("plain", FilterStatus::Default);
        let queued = TestFile::new("queued", FilterStatus::Queued);

        service.set_status(Some(FilterStatus::Default));
        assert!(service.matches(&plain));
        assert!(!service.matches(&queued));

        service.set_status(None);
        assert!(service.matches(&plain));
        assert!(service.matches(&queued));
    }

    #[test]
    fn test_service_starting_from_snapshot() {
        let service = FilterService::with_filter(ViewFilter::new(Some(FilterStatus::Queued), "Iso"));
        assert_eq!(service.current_filter().latest().name, "iso");
        assert!(service.matches(&TestFile::new("disk.ISO", FilterStatus::Queued)));
        assert!(!service.matches(&TestFile::new("disk.ISO", FilterStatus::Default)));
    }
}
