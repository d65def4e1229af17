//! Test the store boundary
//!
//! Verifies dispatching decoded action records, subscriber notification,
//! and stores seeded from configuration.

use std::sync::{Arc, Mutex};

use libeditsite::store::selectors;
use libeditsite::{Action, Config, DeviceType, EntityId, Store};

#[test]
fn test_replaying_action_records() {
    let records = [
        r#"{"type":"SET_TEMPLATE","templateId":"tt1//index"}"#,
        r#"{"type":"OPEN_NAVIGATION_PANEL_TO_MENU","menu":"templates"}"#,
        r#"{"type":"SET_PREVIEW_DEVICE_TYPE","deviceType":"Tablet"}"#,
        r#"{"type":"NOT_AN_ACTION"}"#,
        r#"{"type":"SET_INSERTER_OPEN","isOpen":true}"#,
        r#"{"type":"UPDATE_SETTINGS","settings":{"siteTitle":"Demo"}}"#,
    ];

    let mut store = Store::new();
    let changed = store.dispatch_all(records.iter().map(|r| Action::from_json(r)));

    assert_eq!(changed, 5);
    assert_eq!(
        store.select(|s| selectors::get_edited_post_id(s).cloned()),
        Some(EntityId::from("tt1//index"))
    );
    assert_eq!(store.state().device_type, DeviceType::Tablet);
    assert!(!store.select(selectors::get_navigation_is_open));
    assert!(store.select(selectors::get_inserter_is_open));
    assert_eq!(store.state().navigation_panel.menu, "templates");
}

#[test]
fn test_subscribers_receive_full_snapshots() {
    let mut store = Store::new();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    store.subscribe(move |state| {
        sink.lock()
            .unwrap()
            .push((state.navigation_panel.is_open, state.block_inserter_panel));
    });

    store.dispatch(Action::open_navigation_panel_to_menu("root"));
    store.dispatch(Action::set_is_inserter_opened(true));
    store.dispatch(Action::set_is_inserter_opened(false));

    assert_eq!(
        *seen.lock().unwrap(),
        vec![(true, false), (false, true), (false, false)]
    );
}

#[test]
fn test_store_from_config() {
    let mut config = Config::default();
    config.editor.device_type = DeviceType::Mobile;
    config.preferences.features.insert("focusMode".to_string(), true);

    let mut store = Store::with_state(config.initial_state());
    assert_eq!(store.state().device_type, DeviceType::Mobile);
    assert!(store.select(|s| selectors::is_feature_active(s, "focusMode")));

    store.dispatch(Action::toggle_feature("focusMode"));
    assert!(!store.select(|s| selectors::is_feature_active(s, "focusMode")));
}

#[test]
fn test_snapshot_serializes_with_slice_names() {
    let mut store = Store::new();
    store.dispatch(Action::set_is_inserter_opened(true));

    let value = serde_json::to_value(store.state().as_ref()).unwrap();
    assert_eq!(value["blockInserterPanel"], serde_json::json!(true));
    assert_eq!(value["deviceType"], serde_json::json!("Desktop"));
    assert_eq!(value["templateType"], serde_json::json!("wp_template"));
    assert_eq!(value["navigationPanel"]["menu"], serde_json::json!("root"));
    assert_eq!(value["preferences"]["features"]["welcomeGuide"], serde_json::json!(true));
}
