use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::config::AppParams;
use crate::validate::ValidatedApp;

/// Registry contents keyed by application key, in file order.
pub type Registry = IndexMap<String, RegistryEntry>;

/// One registry value: the JSON exactly as stored, plus its typed view.
///
/// Serializes back to the stored JSON, so entries a run does not replace keep
/// explicit nulls, unknown fields and field order.
#[derive(Debug, Clone, PartialEq)]
pub struct RegistryEntry {
    descriptor: AppDescriptor,
    raw: Value,
}

impl RegistryEntry {
    pub fn new(descriptor: AppDescriptor) -> serde_json::Result<Self> {
        let raw = serde_json::to_value(&descriptor)?;
        Ok(Self { descriptor, raw })
    }

    pub fn descriptor(&self) -> &AppDescriptor {
        &self.descriptor
    }
}

impl<'de> Deserialize<'de> for RegistryEntry {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Value::deserialize(deserializer)?;
        let descriptor = AppDescriptor::deserialize(&raw).map_err(serde::de::Error::custom)?;
        Ok(Self { descriptor, raw })
    }
}

impl Serialize for RegistryEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.raw.serialize(serializer)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppDescriptor {
    /// Registry key.
    pub name: String,
    pub title: String,
    /// Import map specifier; equal to `name` for entries created by `add`.
    pub package: String,
    #[serde(default)]
    pub priority: i64,
    pub filename: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default)]
    pub module: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub build: Option<String>,
    #[serde(default)]
    pub routes: RouteConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RouteConfig {
    #[serde(default)]
    pub routes: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
}

impl AppDescriptor {
    pub fn from_params(app: &ValidatedApp<'_>, params: &AppParams) -> Self {
        let key = app.key.as_str().to_string();
        Self {
            name: key.clone(),
            title: app.title.to_string(),
            package: key,
            priority: params.priority.as_deref().map(parse_priority).unwrap_or(0),
            filename: params
                .artifact_name
                .clone()
                .unwrap_or_else(|| app.filename.to_string()),
            description: params.description.clone(),
            version: params.version.clone(),
            icon: params.icon.clone(),
            module: params.is_module,
            build: params.commit.clone(),
            routes: RouteConfig {
                routes: params.routes.as_deref().map(split_routes),
                mode: params.routes_match_mode.clone(),
            },
        }
    }
}

/// Reads the leading integer of `raw` (after optional whitespace and sign);
/// anything without leading digits, or out of range, is 0.
pub fn parse_priority(raw: &str) -> i64 {
    let trimmed = raw.trim_start();
    let (sign, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => ("-", &trimmed[1..]),
        Some(b'+') => ("", &trimmed[1..]),
        _ => ("", trimmed),
    };
    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return 0;
    }
    format!("{sign}{}", &rest[..digits_len])
        .parse::<i64>()
        .unwrap_or(0)
}

pub fn split_routes(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|route| !route.is_empty())
        .map(str::to_string)
        .collect()
}
