//! Core value types shared by the state slices

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Editor configuration, merged key by key
pub type Settings = BTreeMap<String, Value>;

/// Identifier of a template, template part, or post entity
///
/// Entity ids arrive either as strings (`"theme//index"`) or as numeric
/// post ids; both are kept in their textual form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct EntityId(String);

impl EntityId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EntityId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for EntityId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<u64> for EntityId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl<'de> Deserialize<'de> for EntityId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Number(u64),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Text(id) => EntityId(id),
            Raw::Number(id) => EntityId(id.to_string()),
        })
    }
}

/// Preview viewport of the editing canvas
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DeviceType {
    #[default]
    Desktop,
    Tablet,
    Mobile,
    /// Any viewport name the editor does not know about
    Other(String),
}

impl DeviceType {
    pub fn as_str(&self) -> &str {
        match self {
            DeviceType::Desktop => "Desktop",
            DeviceType::Tablet => "Tablet",
            DeviceType::Mobile => "Mobile",
            DeviceType::Other(name) => name,
        }
    }

    /// Next viewport in the Desktop -> Tablet -> Mobile cycle
    pub fn next(&self) -> DeviceType {
        match self {
            DeviceType::Desktop => DeviceType::Tablet,
            DeviceType::Tablet => DeviceType::Mobile,
            DeviceType::Mobile | DeviceType::Other(_) => DeviceType::Desktop,
        }
    }
}

impl From<String> for DeviceType {
    fn from(name: String) -> Self {
        match name.as_str() {
            "Desktop" => DeviceType::Desktop,
            "Tablet" => DeviceType::Tablet,
            "Mobile" => DeviceType::Mobile,
            _ => DeviceType::Other(name),
        }
    }
}

impl From<DeviceType> for String {
    fn from(device: DeviceType) -> Self {
        match device {
            DeviceType::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl FromStr for DeviceType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(DeviceType::from(s.to_string()))
    }
}

impl fmt::Display for DeviceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which of the template / template-part ids is authoritative
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TemplateType {
    #[default]
    #[serde(rename = "wp_template")]
    WpTemplate,
    #[serde(rename = "wp_template_part")]
    WpTemplatePart,
}

impl TemplateType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateType::WpTemplate => "wp_template",
            TemplateType::WpTemplatePart => "wp_template_part",
        }
    }
}

impl fmt::Display for TemplateType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Page being edited: its path and the entity context it resolves to
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Page {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default)]
    pub context: BTreeMap<String, Value>,
}

impl Page {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: Some(path.into()),
            context: BTreeMap::new(),
        }
    }

    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }
}
