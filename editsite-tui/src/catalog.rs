//! Templates the navigation panel can list
//!
//! Taken from the `templates` setting when present (an array of template
//! records), otherwise a small built-in theme so the UI has something to
//! show.

use libeditsite::{EntityId, Settings, Template, TemplateType};

/// Settings key holding the template records
pub const TEMPLATES_SETTING: &str = "templates";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    templates: Vec<Template>,
}

impl Catalog {
    pub fn new(templates: Vec<Template>) -> Self {
        Self { templates }
    }

    /// Built-in sample theme
    pub fn demo() -> Self {
        Self::new(vec![
            Template::new("demo//index", "index")
                .with_title("Index")
                .with_description("Displays posts."),
            Template::new("demo//front-page", "front-page")
                .with_title("Front Page")
                .with_description("The homepage of your site."),
            Template::new("demo//single", "single")
                .with_title("Single Post")
                .with_description("Displays a single post."),
            Template::new("demo//404", "404").with_title("404"),
            Template::part("demo//header", "header").with_title("Header"),
            Template::part("demo//footer", "footer").with_title("Footer"),
        ])
    }

    /// Catalog from the `templates` setting, falling back to [`Catalog::demo`]
    pub fn from_settings(settings: &Settings) -> Self {
        let Some(value) = settings.get(TEMPLATES_SETTING) else {
            return Self::demo();
        };

        match serde_json::from_value::<Vec<Template>>(value.clone()) {
            Ok(templates) => Self::new(templates),
            Err(err) => {
                tracing::warn!(error = %err, "Ignoring malformed templates setting");
                Self::demo()
            }
        }
    }

    pub fn of_type(&self, template_type: TemplateType) -> Vec<&Template> {
        self.templates
            .iter()
            .filter(|template| template.template_type == template_type)
            .collect()
    }

    pub fn find(&self, template_type: TemplateType, id: &EntityId) -> Option<&Template> {
        self.templates
            .iter()
            .find(|template| template.template_type == template_type && &template.id == id)
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}
