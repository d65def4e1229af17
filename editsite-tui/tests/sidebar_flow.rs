//! Sidebar and popover behavior driven through the same commands the
//! keyboard produces

use editsite_tui::ui::left_sidebar::{close_inserter, sidebar_content, SidebarContent};
use editsite_tui::ui::navigation_panel::{TEMPLATES_MENU, TEMPLATE_PARTS_MENU};
use editsite_tui::ui::template_details::{show_template_in_sidebar, TemplateDetails};
use editsite_tui::{App, Catalog, Command, Overlay};
use libeditsite::store::selectors;
use libeditsite::{Action, Config, EntityId, Store, TemplateType};

fn app() -> App {
    App::new(&Config::default())
}

/// Open the navigation panel and edit the template at `index` in the
/// templates menu
fn edit_template(app: &mut App, index: usize) {
    app.handle(Command::ToggleNavigation);
    app.handle(Command::Activate);
    for _ in 0..index {
        app.handle(Command::Down);
    }
    app.handle(Command::Activate);
}

#[test]
fn test_sidebar_shows_navigation_before_inserter() {
    let mut store = Store::new();
    assert_eq!(sidebar_content(store.state()), None);

    store.dispatch(Action::set_is_inserter_opened(true));
    assert_eq!(sidebar_content(store.state()), Some(SidebarContent::Inserter));

    store.dispatch(Action::open_navigation_panel_to_menu(TEMPLATES_MENU));
    assert_eq!(sidebar_content(store.state()), Some(SidebarContent::Navigation));
}

#[test]
fn test_close_inserter_control() {
    let mut store = Store::new();
    store.dispatch(Action::set_is_inserter_opened(true));

    assert!(close_inserter(&mut store));
    assert_eq!(sidebar_content(store.state()), None);
    assert!(!close_inserter(&mut store));
}

#[test]
fn test_toggle_commands_keep_panels_exclusive() {
    let mut app = app();

    app.handle(Command::ToggleInserter);
    assert_eq!(sidebar_content(app.state()), Some(SidebarContent::Inserter));

    app.handle(Command::ToggleNavigation);
    assert!(selectors::get_navigation_is_open(app.state()));
    assert!(!selectors::get_inserter_is_open(app.state()));

    app.handle(Command::ToggleInserter);
    assert!(selectors::get_inserter_is_open(app.state()));
    assert!(!selectors::get_navigation_is_open(app.state()));
}

#[test]
fn test_activating_template_edits_it() {
    let mut app = app();
    edit_template(&mut app, 2);

    let state = app.state();
    assert_eq!(selectors::get_edited_post_type(state), TemplateType::WpTemplate);
    assert_eq!(
        selectors::get_edited_post_id(state),
        Some(&EntityId::from("demo//single"))
    );
    assert_eq!(app.status.as_deref(), Some("Editing Single Post"));
    assert_eq!(
        app.edited_template().and_then(|t| t.title.as_deref()),
        Some("Single Post")
    );
}

#[test]
fn test_activating_template_part_switches_type() {
    let mut app = app();
    app.handle(Command::ToggleNavigation);
    app.handle(Command::Down);
    app.handle(Command::Activate);
    assert_eq!(
        selectors::get_navigation_panel_active_menu(app.state()),
        TEMPLATE_PARTS_MENU
    );

    app.handle(Command::Down);
    app.handle(Command::Activate);

    let state = app.state();
    assert_eq!(selectors::get_edited_post_type(state), TemplateType::WpTemplatePart);
    assert_eq!(
        selectors::get_edited_post_id(state),
        Some(&EntityId::from("demo//footer"))
    );
}

#[test]
fn test_back_returns_to_root_menu() {
    let mut app = app();
    app.handle(Command::ToggleNavigation);
    app.handle(Command::Activate);
    assert_eq!(selectors::get_navigation_panel_active_menu(app.state()), TEMPLATES_MENU);

    app.handle(Command::Back);
    assert_eq!(selectors::get_navigation_panel_active_menu(app.state()), "root");
    assert!(selectors::get_navigation_is_open(app.state()));
}

#[test]
fn test_template_details_requires_edited_template() {
    let mut app = app();
    app.handle(Command::ShowTemplateDetails);

    assert!(app.overlay.is_none());
    assert_eq!(app.status.as_deref(), Some("No template is being edited"));
}

#[test]
fn test_view_in_navigation_closes_popover_and_opens_templates() {
    let mut app = app();
    edit_template(&mut app, 0);
    app.handle(Command::Escape);
    assert!(!selectors::get_navigation_is_open(app.state()));

    app.handle(Command::ToggleInserter);
    app.handle(Command::ShowTemplateDetails);
    assert_eq!(app.overlay, Some(Overlay::TemplateDetails));

    app.handle(Command::Activate);

    assert!(app.overlay.is_none());
    let state = app.state();
    assert!(selectors::get_navigation_is_open(state));
    assert_eq!(selectors::get_navigation_panel_active_menu(state), TEMPLATES_MENU);
    assert!(!selectors::get_inserter_is_open(state));
}

#[test]
fn test_show_template_in_sidebar_calls_close_first() {
    let mut store = Store::new();
    let mut closed = false;

    show_template_in_sidebar(&mut store, || closed = true);

    assert!(closed);
    assert!(selectors::get_navigation_is_open(store.state()));
    assert_eq!(
        selectors::get_navigation_panel_active_menu(store.state()),
        TEMPLATES_MENU
    );
}

#[test]
fn test_escape_closes_innermost_first() {
    let mut app = app();
    edit_template(&mut app, 1);
    app.handle(Command::ShowTemplateDetails);

    app.handle(Command::Escape);
    assert!(app.overlay.is_none());
    assert!(selectors::get_navigation_is_open(app.state()));

    app.handle(Command::Escape);
    assert_eq!(sidebar_content(app.state()), None);
}

#[test]
fn test_details_use_catalog_entry() {
    let catalog = Catalog::demo();
    let template = catalog.find(TemplateType::WpTemplate, &EntityId::from("demo//front-page"));
    let details = TemplateDetails::new(template, &Default::default()).unwrap();

    assert_eq!(details.info().title.as_deref(), Some("Front Page"));
    assert_eq!(
        details.info().description.as_deref(),
        Some("The homepage of your site.")
    );
}

#[test]
fn test_device_and_feature_commands() {
    let mut app = app();

    app.handle(Command::CycleDevice);
    assert_eq!(selectors::get_preview_device_type(app.state()).as_str(), "Tablet");
    assert_eq!(app.status.as_deref(), Some("Previewing Tablet"));

    assert!(!selectors::is_feature_active(app.state(), "fixedToolbar"));
    app.handle(Command::ToggleFeature("fixedToolbar"));
    assert!(selectors::is_feature_active(app.state(), "fixedToolbar"));
}

#[test]
fn test_quit() {
    let mut app = app();
    app.handle(Command::Quit);
    assert!(app.should_quit);
}

#[test]
fn test_catalog_and_features_come_from_config() {
    let mut config = Config::default();
    config.settings.insert(
        "templates".to_string(),
        serde_json::json!([
            { "id": "tt1//home", "slug": "home", "title": "Home", "type": "wp_template" },
            { "id": "tt1//header", "slug": "header", "type": "wp_template_part" }
        ]),
    );
    config.preferences.features.insert("focusMode".to_string(), true);

    let mut app = App::new(&config);
    assert_eq!(app.catalog.len(), 2);
    assert!(selectors::is_feature_active(app.state(), "focusMode"));

    edit_template(&mut app, 0);
    assert_eq!(app.status.as_deref(), Some("Editing Home"));
    assert_eq!(
        selectors::get_edited_post_id(app.state()),
        Some(&EntityId::from("tt1//home"))
    );
}
