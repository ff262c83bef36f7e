use std::{collections::BTreeMap, fmt};

use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{IgnoredAny, MapAccess, Visitor},
    ser::SerializeMap,
};

use super::{StyleAttrs, StyleKey};

/// Style configuration: attributes per [`StyleKey`].
///
/// Supplied by the caller on every render. Keys that are not recognised are
/// dropped with a debug log, never rejected.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleConfig {
    entries: BTreeMap<StyleKey, StyleAttrs>,
}

impl StyleConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a configuration from free-form key names.
    pub fn from_entries<K, I>(entries: I) -> Self
    where
        K: AsRef<str>,
        I: IntoIterator<Item = (K, StyleAttrs)>,
    {
        let mut config = StyleConfig::default();
        for (name, attrs) in entries {
            match name.as_ref().parse::<StyleKey>() {
                Ok(key) => config.overlay_key(key, &attrs),
                Err(err) => tracing::debug!(%err, "ignoring style entry"),
            }
        }
        config
    }

    pub fn get(&self, key: StyleKey) -> Option<&StyleAttrs> {
        self.entries.get(&key)
    }

    /// The attributes for `key`, or defaults when unset.
    pub fn resolve(&self, key: StyleKey) -> StyleAttrs {
        self.get(key).cloned().unwrap_or_default()
    }

    pub fn set(&mut self, key: StyleKey, attrs: StyleAttrs) {
        self.entries.insert(key, attrs);
    }

    pub fn with(mut self, key: StyleKey, attrs: StyleAttrs) -> Self {
        self.set(key, attrs);
        self
    }

    /// Overlays `overrides` attribute by attribute.
    pub fn merge(mut self, overrides: &StyleConfig) -> Self {
        for (key, attrs) in &overrides.entries {
            self.overlay_key(*key, attrs);
        }
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (StyleKey, &StyleAttrs)> {
        self.entries.iter().map(|(k, v)| (*k, v))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn overlay_key(&mut self, key: StyleKey, attrs: &StyleAttrs) {
        let current = self.entries.remove(&key).unwrap_or_default();
        self.entries.insert(key, current.overlay(attrs));
    }
}

impl Serialize for StyleConfig {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, attrs) in &self.entries {
            map.serialize_entry(key.as_str(), attrs)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for StyleConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct EntriesVisitor;

        impl<'de> Visitor<'de> for EntriesVisitor {
            type Value = StyleConfig;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of style keys to style attributes")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut config = StyleConfig::default();
                while let Some(name) = map.next_key::<String>()? {
                    match name.parse::<StyleKey>() {
                        Ok(key) => {
                            let attrs = map.next_value::<StyleAttrs>()?;
                            config.overlay_key(key, &attrs);
                        }
                        Err(err) => {
                            tracing::debug!(%err, "ignoring style entry");
                            map.next_value::<IgnoredAny>()?;
                        }
                    }
                }
                Ok(config)
            }
        }

        deserializer.deserialize_map(EntriesVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn colored(c: &str) -> StyleAttrs {
        StyleAttrs {
            color: Some(c.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn resolve_defaults_when_unset() {
        let config = StyleConfig::new();
        assert_eq!(config.resolve(StyleKey::Link), StyleAttrs::default());
        assert!(config.get(StyleKey::Link).is_none());
    }

    #[test]
    fn from_entries_ignores_unknown_keys() {
        let config = StyleConfig::from_entries([
            ("heading1", colored("#f00")),
            ("heading9", colored("#0f0")),
            ("sparkle", colored("#00f")),
        ]);
        assert_eq!(config.iter().count(), 1);
        assert_eq!(config.resolve(StyleKey::Heading1), colored("#f00"));
    }

    #[test]
    fn alias_and_canonical_key_overlay() {
        let config = StyleConfig::from_entries([
            (
                "code_inline",
                StyleAttrs {
                    font_family: Some("mono".into()),
                    ..Default::default()
                },
            ),
            ("code_span", colored("#abc")),
        ]);
        let code = config.resolve(StyleKey::CodeSpan);
        assert_eq!(code.font_family.as_deref(), Some("mono"));
        assert_eq!(code.color.as_deref(), Some("#abc"));
    }

    #[test]
    fn merge_overlays_attribute_by_attribute() {
        let base = StyleConfig::new().with(
            StyleKey::Link,
            StyleAttrs {
                color: Some("#007acc".into()),
                text_decoration: Some("underline".into()),
                ..Default::default()
            },
        );
        let overrides = StyleConfig::new()
            .with(StyleKey::Link, colored("#ff0000"))
            .with(StyleKey::Bold, colored("#000"));

        let merged = base.merge(&overrides);
        let link = merged.resolve(StyleKey::Link);
        assert_eq!(link.color.as_deref(), Some("#ff0000"));
        assert_eq!(link.text_decoration.as_deref(), Some("underline"));
        assert_eq!(merged.resolve(StyleKey::Bold), colored("#000"));
    }
}
