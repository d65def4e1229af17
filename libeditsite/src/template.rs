//! Template records and the display info derived from them

use serde::{Deserialize, Serialize};

use crate::types::{EntityId, Settings, TemplateType};

/// Settings key holding the theme's built-in template types
pub const DEFAULT_TEMPLATE_TYPES: &str = "defaultTemplateTypes";

/// A template or template part as the editor lists it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    pub id: EntityId,
    pub slug: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, rename = "type")]
    pub template_type: TemplateType,
}

impl Template {
    pub fn new(id: impl Into<EntityId>, slug: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            slug: slug.into(),
            title: None,
            description: None,
            template_type: TemplateType::WpTemplate,
        }
    }

    pub fn part(id: impl Into<EntityId>, slug: impl Into<String>) -> Self {
        Self {
            template_type: TemplateType::WpTemplatePart,
            ..Self::new(id, slug)
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Title and description shown for a template
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateInfo {
    pub title: Option<String>,
    pub description: Option<String>,
}

/// Entry of the `defaultTemplateTypes` setting
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DefaultTemplateType {
    pub slug: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Look up the theme's default entry for `slug`
///
/// A missing or malformed setting simply yields `None`.
pub fn default_template_type(settings: &Settings, slug: &str) -> Option<DefaultTemplateType> {
    let entries = settings.get(DEFAULT_TEMPLATE_TYPES)?.as_array()?;
    entries
        .iter()
        .filter_map(|entry| serde_json::from_value::<DefaultTemplateType>(entry.clone()).ok())
        .find(|entry| entry.slug == slug)
}

/// Title and description to display for `template`
///
/// The template's own title wins unless it is empty or just repeats the
/// slug; then the default template type's title is used, then the slug.
/// The description falls back the same way, minus the slug.
pub fn template_info(template: &Template, settings: &Settings) -> TemplateInfo {
    let defaults = default_template_type(settings, &template.slug);
    let non_empty = |value: &Option<String>| value.clone().filter(|text| !text.is_empty());

    let title = non_empty(&template.title)
        .filter(|title| *title != template.slug)
        .or_else(|| defaults.as_ref().and_then(|d| non_empty(&d.title)))
        .or_else(|| Some(template.slug.clone()).filter(|slug| !slug.is_empty()));

    let description = non_empty(&template.description)
        .or_else(|| defaults.as_ref().and_then(|d| non_empty(&d.description)));

    TemplateInfo { title, description }
}
