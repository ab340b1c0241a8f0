use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use crate::config::{AlertSink, ConfigError, HeaderConfig, MenuItemConfig};
use crate::core::Theme;

/// Helper: Alert sink that records every message
fn recording_sink() -> (AlertSink, Rc<RefCell<Vec<String>>>) {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let log = seen.clone();
    let sink: AlertSink = Rc::new(move |message: &str| log.borrow_mut().push(message.to_string()));
    (sink, seen)
}

#[test]
fn test_defaults_match_stock_header() {
    let config = HeaderConfig::default();

    assert_eq!(config.leave_duration(), Duration::from_millis(150));
    assert_eq!(config.theme, Theme::Light);
    assert_eq!(config.search_placeholder, "Search for projects");

    let labels: Vec<&str> = config.notifications.iter().map(|i| i.label.as_str()).collect();
    assert_eq!(labels, vec!["Messages", "Sales", "Alerts"]);
    assert_eq!(config.notifications[0].badge, Some(13));
    assert_eq!(config.notifications[1].badge, Some(2));

    let labels: Vec<&str> = config.profile.iter().map(|i| i.label.as_str()).collect();
    assert_eq!(labels, vec!["Profile", "Settings", "Log out"]);
}

#[test]
fn test_overlay_options() {
    let config = HeaderConfig {
        leave_duration_ms: 90,
        close_on_activate: false,
        ..HeaderConfig::default()
    };
    let options = config.overlay_options();
    assert_eq!(options.leave_duration, Duration::from_millis(90));
    assert!(!options.close_on_activate);
}

#[test]
fn test_validate_rejects_long_duration() {
    let config = HeaderConfig {
        leave_duration_ms: HeaderConfig::MAX_LEAVE_DURATION_MS + 1,
        ..HeaderConfig::default()
    };
    assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
}

#[test]
fn test_validate_rejects_empty_label() {
    let mut config = HeaderConfig::default();
    config.profile.push(MenuItemConfig {
        label: "   ".to_string(),
        badge: None,
        href: None,
        icon: None,
        alert: None,
    });
    assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
}

#[test]
fn test_alert_items_raise_through_sink() {
    let (sink, seen) = recording_sink();
    let content = HeaderConfig::default().notifications_content(&sink);

    assert_eq!(content.len(), 3);
    assert!(!content.get(0).unwrap().has_action(), "Links carry no action");

    content.get(2).unwrap().activate().unwrap();
    assert_eq!(*seen.borrow(), vec!["Alerts!".to_string()]);
}

#[test]
fn test_profile_content_carries_icons() {
    let (sink, seen) = recording_sink();
    let content = HeaderConfig::default().profile_content(&sink);

    assert!(content.items().iter().all(|item| item.icon.is_some()));
    content.get(2).unwrap().activate().unwrap();
    assert_eq!(*seen.borrow(), vec!["Log out!".to_string()]);
}

#[test]
fn test_json_skips_empty_fields() {
    let json = HeaderConfig::default().to_json().unwrap();
    assert!(json.contains("\"leave_duration_ms\": 150"));
    assert!(json.contains("\"theme\": \"light\""));
    assert!(!json.contains("null"), "Absent optionals should be omitted");
}
