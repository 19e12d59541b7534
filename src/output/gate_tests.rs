//! Tests for output gates.

use serde_json::json;

use super::{AlwaysEmit, EventFilter, OutputGate};
use crate::event::Event;

fn tagged(event_type: &str, tags: &[&str]) -> Event {
    Event::new()
        .with_field("message", "x")
        .with_field("type", event_type)
        .with_field("tags", json!(tags))
}

mod always_emit {
    use super::*;

    #[test]
    fn emits_everything() {
        assert!(AlwaysEmit.should_emit(&Event::new()));
        assert!(AlwaysEmit.should_emit(&tagged("syslog", &["noise"])));
    }
}

mod event_filter {
    use super::*;

    #[test]
    fn empty_filter_emits_everything() {
        let filter = EventFilter::new();

        assert!(filter.is_empty());
        assert!(filter.should_emit(&Event::new()));
    }

    #[test]
    fn type_must_match() {
        let filter = EventFilter::new().with_type("nginx");

        assert!(filter.should_emit(&tagged("nginx", &[])));
        assert!(!filter.should_emit(&tagged("syslog", &[])));
        assert!(!filter.should_emit(&Event::new()));
    }

    #[test]
    fn non_string_type_does_not_match() {
        let filter = EventFilter::new().with_type("1");
        let event = Event::new().with_field("type", 1);

        assert!(!filter.should_emit(&event));
    }

    #[test]
    fn all_required_tags_must_be_present() {
        let filter = EventFilter::new().with_tags(["alert", "prod"]);

        assert!(filter.should_emit(&tagged("any", &["prod", "alert", "db"])));
        assert!(!filter.should_emit(&tagged("any", &["alert"])));
        assert!(!filter.should_emit(&Event::new()));
    }

    #[test]
    fn any_excluded_tag_rejects() {
        let filter = EventFilter::new().with_exclude_tags(["muted", "test"]);

        assert!(filter.should_emit(&tagged("any", &["prod"])));
        assert!(filter.should_emit(&Event::new()));
        assert!(!filter.should_emit(&tagged("any", &["prod", "test"])));
    }

    #[test]
    fn conditions_combine() {
        let filter = EventFilter::new()
            .with_type("nginx")
            .with_tags(["alert"])
            .with_exclude_tags(["muted"]);

        assert!(filter.should_emit(&tagged("nginx", &["alert"])));
        assert!(!filter.should_emit(&tagged("nginx", &["alert", "muted"])));
        assert!(!filter.should_emit(&tagged("syslog", &["alert"])));
    }

    #[test]
    fn display_summarizes_conditions() {
        assert_eq!(EventFilter::new().to_string(), "none");
        assert_eq!(
            EventFilter::new()
                .with_tags(["a", "b"])
                .with_exclude_tags(["c"])
                .to_string(),
            "type=*, tags=[a,b], exclude_tags=[c]"
        );
    }
}
