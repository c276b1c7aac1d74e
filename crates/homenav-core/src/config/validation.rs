//! Config validation - warns about unknown fields

use serde_json::Value;
use std::collections::{HashMap, HashSet};
use tracing::warn;

/// Validate JSON config and warn about unknown fields.
pub fn warn_unknown_fields(content: &str, config_name: &str) {
    let Ok(value) = serde_json::from_str::<Value>(content) else {
        return;
    };

    let expected = expected_config_keys();
    let unknowns = find_unknown_keys(&value, &expected, "");

    for path in unknowns {
        warn!("Unknown config field in {config_name}: {path}");
    }
}

/// Find unknown keys in JSON value compared to expected keys.
/// Returns paths like "homeMenu.unknownField" or "apps[2].nmae" for unknown fields.
fn find_unknown_keys(value: &Value, expected: &ExpectedKeys, prefix: &str) -> Vec<String> {
    let mut unknowns = Vec::new();

    let Value::Object(obj) = value else {
        return unknowns;
    };

    for (key, child) in obj {
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}.{key}")
        };

        if let Some(nested) = expected.nested.get(key.as_str()) {
            unknowns.extend(find_unknown_keys(child, nested, &path));
        } else if let Some(item_keys) = expected.items.get(key.as_str()) {
            if let Value::Array(items) = child {
                for (i, item) in items.iter().enumerate() {
                    let item_path = format!("{path}[{i}]");
                    unknowns.extend(find_unknown_keys(item, item_keys, &item_path));
                }
            }
        } else if !expected.fields.contains(key.as_str()) {
            unknowns.push(path);
        }
    }

    unknowns
}

/// Expected keys for a config section.
/// `fields` are leaf fields, `nested` are nested objects with their own expected keys,
/// `items` are arrays whose object elements share one set of expected keys.
struct ExpectedKeys {
    fields: HashSet<&'static str>,
    nested: HashMap<&'static str, ExpectedKeys>,
    items: HashMap<&'static str, ExpectedKeys>,
}

impl ExpectedKeys {
    fn new(fields: &[&'static str]) -> Self {
        Self {
            fields: fields.iter().copied().collect(),
            nested: HashMap::new(),
            items: HashMap::new(),
        }
    }

    fn with_nested(mut self, key: &'static str, nested: ExpectedKeys) -> Self {
        self.nested.insert(key, nested);
        self
    }

    fn with_items(mut self, key: &'static str, items: ExpectedKeys) -> Self {
        self.items.insert(key, items);
        self
    }
}

/// Expected keys for Config (settings.rs)
fn expected_config_keys() -> ExpectedKeys {
    // Icons are an externally tagged enum, one of the two keys
    let icon_keys = ExpectedKeys::new(&["data", "url"]);
    let app_keys = ExpectedKeys::new(&["id", "name", "actionId"]).with_nested("icon", icon_keys);

    let home_menu_keys = ExpectedKeys::new(&[
        "background",
        "searchPlaceholder",
        "emptyMessage",
        "openOnStart",
    ]);

    ExpectedKeys::new(&["startApp"])
        .with_items("apps", app_keys)
        .with_nested("homeMenu", home_menu_keys)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unknowns_in(json: &str) -> Vec<String> {
        let value: Value = serde_json::from_str(json).unwrap();
        find_unknown_keys(&value, &expected_config_keys(), "")
    }

    #[test]
    fn test_valid_config_no_warnings() {
        let unknowns = unknowns_in(
            r#"{
                "apps": [
                    {"id": "sales", "name": "Sales", "actionId": "a1", "icon": {"url": "/s.png"}}
                ],
                "homeMenu": {"background": "forest", "openOnStart": false},
                "startApp": "sales"
            }"#,
        );

        assert!(
            unknowns.is_empty(),
            "Expected no unknowns, got: {unknowns:?}"
        );
    }

    #[test]
    fn test_unknown_top_level_field() {
        let unknowns = unknowns_in(r#"{"homeMenu": {}, "unknownSection": {}}"#);
        assert_eq!(unknowns, vec!["unknownSection"]);
    }

    #[test]
    fn test_unknown_nested_field() {
        let unknowns = unknowns_in(r#"{"homeMenu": {"background": "ocean", "typoField": 1}}"#);
        assert_eq!(unknowns, vec!["homeMenu.typoField"]);
    }

    #[test]
    fn test_unknown_field_in_array_item() {
        let unknowns = unknowns_in(
            r#"{"apps": [
                {"id": "a", "name": "A", "actionId": "x"},
                {"id": "b", "nmae": "B", "actionId": "y"}
            ]}"#,
        );
        assert_eq!(unknowns, vec!["apps[1].nmae"]);
    }

    #[test]
    fn test_unknown_icon_kind() {
        let unknowns = unknowns_in(
            r#"{"apps": [{"id": "a", "name": "A", "actionId": "x", "icon": {"svg": "..."}}]}"#,
        );
        assert_eq!(unknowns, vec!["apps[0].icon.svg"]);
    }

    #[test]
    fn test_multiple_unknown_fields() {
        let unknowns = unknowns_in(r#"{"homeMenu": {"typo1": 1, "typo2": 2}, "badSection": {}}"#);

        assert!(unknowns.contains(&"homeMenu.typo1".to_string()));
        assert!(unknowns.contains(&"homeMenu.typo2".to_string()));
        assert!(unknowns.contains(&"badSection".to_string()));
    }

    #[test]
    fn test_warn_unknown_fields_does_not_panic_on_invalid_json() {
        warn_unknown_fields("not valid json", "test");
    }

    #[test]
    fn test_empty_config_no_warnings() {
        assert!(unknowns_in("{}").is_empty());
    }
}
