use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// Top-level keys the renderer dereferences.
pub const HERO_KEY: &str = "hero";
pub const ABOUT_KEY: &str = "about";
pub const SERVICES_KEY: &str = "services";
pub const STATS_KEY: &str = "stats";
pub const CONTACT_EMAIL_KEY: &str = "contact_email";
pub const CONTACT_PHONE_KEY: &str = "contact_phone";

/// Hero banner at the top of the landing page.
///
/// Missing fields deserialize to the empty string: a stored section replaces
/// the default section as a whole, it is never filled in field by field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeroSection {
    pub badge: String,
    pub headline_part1: String,
    pub headline_highlight: String,
    pub subheadline: String,
    pub cta_primary: String,
    pub cta_secondary: String,
}

/// "About" block. `description` keeps its line breaks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AboutSection {
    pub badge: String,
    pub headline: String,
    pub description: String,
    pub image_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceItem {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatItem {
    pub value: String,
    pub label: String,
}

/// The always-complete document the landing page renders from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentDocument {
    pub hero: HeroSection,
    pub about: AboutSection,
    pub services: Vec<ServiceItem>,
    pub stats: Vec<StatItem>,
    pub contact_email: String,
    pub contact_phone: String,
    /// Top-level keys this schema does not know about, carried through untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Whatever the store actually holds, with explicit presence per top-level key.
///
/// JSON `null` counts as absent, and so does a known key whose value has the
/// wrong shape. Such keys are listed in `rejected`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoredDocument {
    pub hero: Option<HeroSection>,
    pub about: Option<AboutSection>,
    pub services: Option<Vec<ServiceItem>>,
    pub stats: Option<Vec<StatItem>>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub extra: Map<String, Value>,
    pub rejected: Vec<String>,
}

#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("stored document must be a JSON object, got {0}")]
    NotAnObject(&'static str),
    #[error("section `{key}` has the wrong shape: {source}")]
    Section {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

impl StoredDocument {
    /// Validate a raw store payload into a stored document.
    ///
    /// Only a non-object payload is an error. A badly shaped section is
    /// dropped on its own and every well-formed section is kept.
    pub fn from_value(value: Value) -> Result<Self, SchemaError> {
        let mut map = match value {
            Value::Object(map) => map,
            other => return Err(SchemaError::NotAnObject(json_kind(&other))),
        };

        let mut rejected = Vec::new();
        Ok(Self {
            hero: take_section(&mut map, HERO_KEY, &mut rejected),
            about: take_section(&mut map, ABOUT_KEY, &mut rejected),
            services: take_section(&mut map, SERVICES_KEY, &mut rejected),
            stats: take_section(&mut map, STATS_KEY, &mut rejected),
            contact_email: take_section(&mut map, CONTACT_EMAIL_KEY, &mut rejected),
            contact_phone: take_section(&mut map, CONTACT_PHONE_KEY, &mut rejected),
            extra: map,
            rejected,
        })
    }

    /// True when no top-level key is present at all.
    pub fn is_empty(&self) -> bool {
        self.hero.is_none()
            && self.about.is_none()
            && self.services.is_none()
            && self.stats.is_none()
            && self.contact_email.is_none()
            && self.contact_phone.is_none()
            && self.extra.is_empty()
    }

    /// Documents written before the about section existed.
    pub fn is_legacy(&self) -> bool {
        !self.is_empty() && self.about.is_none()
    }
}

impl From<ContentDocument> for StoredDocument {
    fn from(doc: ContentDocument) -> Self {
        Self {
            hero: Some(doc.hero),
            about: Some(doc.about),
            services: Some(doc.services),
            stats: Some(doc.stats),
            contact_email: Some(doc.contact_email),
            contact_phone: Some(doc.contact_phone),
            extra: doc.extra,
            rejected: Vec::new(),
        }
    }
}

fn take_section<T: serde::de::DeserializeOwned>(
    map: &mut Map<String, Value>,
    key: &str,
    rejected: &mut Vec<String>,
) -> Option<T> {
    let value = match map.remove(key) {
        None | Some(Value::Null) => return None,
        Some(value) => value,
    };
    match serde_json::from_value(value) {
        Ok(section) => Some(section),
        Err(source) => {
            let err = SchemaError::Section {
                key: key.to_string(),
                source,
            };
            tracing::warn!(key, error = %err, "dropping malformed stored section");
            rejected.push(key.to_string());
            None
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn null_sections_count_as_absent() {
        let stored = StoredDocument::from_value(json!({ "about": null, "contact_phone": "1" }))
            .unwrap();
        assert!(stored.about.is_none());
        assert_eq!(stored.contact_phone.as_deref(), Some("1"));
        assert!(stored.is_legacy());
    }

    #[test]
    fn partial_section_fills_empty_strings() {
        let stored = StoredDocument::from_value(json!({ "hero": { "badge": "X" } })).unwrap();
        let hero = stored.hero.unwrap();
        assert_eq!(hero.badge, "X");
        assert_eq!(hero.headline_part1, "");
        assert_eq!(hero.cta_secondary, "");
    }

    #[test]
    fn unknown_keys_are_kept() {
        let stored = StoredDocument::from_value(json!({ "advantage": { "title": "Why us" } }))
            .unwrap();
        assert_eq!(stored.extra["advantage"]["title"], "Why us");
        assert!(!stored.is_empty());
    }

    #[test]
    fn rejects_non_object() {
        let err = StoredDocument::from_value(json!([1, 2])).unwrap_err();
        assert!(matches!(err, SchemaError::NotAnObject("an array")));
    }

    #[test]
    fn wrongly_shaped_section_is_dropped_alone() {
        let stored = StoredDocument::from_value(json!({
            "services": "none",
            "contact_phone": 919872180369u64,
            "hero": { "badge": "Kept" },
            "contact_email": "sales@example.com"
        }))
        .unwrap();
        assert!(stored.services.is_none());
        assert!(stored.contact_phone.is_none());
        assert_eq!(stored.rejected, vec!["services", "contact_phone"]);
        assert_eq!(stored.hero.unwrap().badge, "Kept");
        assert_eq!(stored.contact_email.as_deref(), Some("sales@example.com"));
        assert!(!stored.extra.contains_key("services"));
    }
}
