use proptest::prelude::*;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use zonekit_core::{CanvasPoint, EventBus, EventCategory, EventFilter, LayoutEvent, ZoneEvent};
use zonekit_layout::ZoneRegistry;

#[test]
fn test_upsert_moves_name_to_end() {
    let mut registry = ZoneRegistry::new();
    registry.upsert("1A", 0.0, 0.0, 10.0, 10.0);
    registry.upsert("1B", 20.0, 0.0, 10.0, 10.0);
    registry.upsert("1A", 5.0, 5.0, 10.0, 10.0);

    let names: Vec<&str> = registry.iter().map(|z| z.name.as_str()).collect();
    assert_eq!(names, vec!["1B", "1A"]);
    assert_eq!(registry.find("1A").unwrap().left, 5.0);
}

#[test]
fn test_names_are_case_sensitive() {
    let mut registry = ZoneRegistry::new();
    registry.upsert("1a", 0.0, 0.0, 1.0, 1.0);
    registry.upsert("1A", 0.0, 0.0, 1.0, 1.0);
    assert_eq!(registry.len(), 2);
}

#[test]
fn test_remove_unknown_is_noop() {
    let mut registry = ZoneRegistry::new();
    registry.upsert("1A", 0.0, 0.0, 1.0, 1.0);
    assert!(registry.remove("2A").is_none());
    assert_eq!(registry.len(), 1);
}

#[test]
fn test_rename_replaces_other_owner() {
    let mut registry = ZoneRegistry::new();
    registry.upsert("1A", 0.0, 0.0, 1.0, 1.0);
    registry.upsert("1B", 10.0, 0.0, 1.0, 1.0);
    registry.upsert("1C", 20.0, 0.0, 1.0, 1.0);

    let renamed = registry.rename("1A", "1C").unwrap();
    assert_eq!(renamed.left, 0.0);
    let names: Vec<&str> = registry.iter().map(|z| z.name.as_str()).collect();
    assert_eq!(names, vec!["1C", "1B"]);
}

#[test]
fn test_hit_test_prefers_topmost() {
    let mut registry = ZoneRegistry::new();
    registry.upsert("under", 0.0, 0.0, 50.0, 50.0);
    registry.upsert("over", 10.0, 10.0, 10.0, 10.0);

    assert_eq!(
        registry.hit_test(CanvasPoint::new(15.0, 15.0)).map(|z| z.name.as_str()),
        Some("over")
    );
    assert_eq!(
        registry.hit_test(CanvasPoint::new(50.0, 50.0)).map(|z| z.name.as_str()),
        Some("under")
    );
    assert!(registry.hit_test(CanvasPoint::new(60.0, 0.0)).is_none());
}

#[test]
fn test_structural_changes_are_published() {
    let bus = Arc::new(EventBus::new());
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    bus.subscribe(EventFilter::Categories(vec![EventCategory::Zone]), move |event| {
        if let LayoutEvent::Zone(zone_event) = event {
            sink.lock().unwrap().push(zone_event);
        }
    });

    let mut registry = ZoneRegistry::with_event_bus(Arc::clone(&bus));
    registry.upsert("1A", 0.0, 0.0, 1.0, 1.0);
    registry.upsert("1A", 2.0, 0.0, 1.0, 1.0);
    registry.remove("1A");

    let events = seen.lock().unwrap();
    assert_eq!(events.len(), 4);
    assert!(matches!(events[0], ZoneEvent::Added(_)));
    assert!(matches!(events[1], ZoneEvent::Removed { .. }));
    assert!(matches!(events[2], ZoneEvent::Added(ref z) if z.left == 2.0));
    assert!(matches!(events[3], ZoneEvent::Removed { .. }));
}

fn upsert_ops() -> impl Strategy<Value = Vec<(String, f64)>> {
    prop::collection::vec(("[1-4][A-C]", 0.0f64..500.0), 0..40)
}

proptest! {
    #[test]
    fn prop_find_returns_last_write(ops in upsert_ops()) {
        let mut registry = ZoneRegistry::new();
        let mut expected = HashMap::new();
        for (name, left) in &ops {
            registry.upsert(name.clone(), *left, 0.0, 10.0, 10.0);
            expected.insert(name.clone(), *left);
        }

        prop_assert_eq!(registry.len(), expected.len());
        for (name, left) in &expected {
            prop_assert_eq!(registry.find(name).map(|z| z.left), Some(*left));
        }
    }

    #[test]
    fn prop_list_order_is_last_write_order(ops in upsert_ops()) {
        let mut registry = ZoneRegistry::new();
        for (name, left) in &ops {
            registry.upsert(name.clone(), *left, 0.0, 10.0, 10.0);
        }

        let mut order: Vec<&str> = Vec::new();
        for (name, _) in ops.iter().rev() {
            if !order.contains(&name.as_str()) {
                order.push(name);
            }
        }
        order.reverse();
        let listed: Vec<&str> = registry.list().iter().map(|z| z.name.as_str()).collect();
        prop_assert_eq!(listed, order);
    }
}
