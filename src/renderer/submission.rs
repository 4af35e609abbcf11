// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use indexmap::map::Entry;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Value submitted under one key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SubmittedValue {
    Single(String),
    /// Produced once a key is submitted a second time
    Multiple(Vec<String>),
}

impl SubmittedValue {
    pub fn as_single(&self) -> Option<&str> {
        match self {
            SubmittedValue::Single(s) => Some(s),
            SubmittedValue::Multiple(_) => None,
        }
    }

    /// Every value under the key, in submission order.
    pub fn values(&self) -> Vec<&str> {
        match self {
            SubmittedValue::Single(s) => vec![s.as_str()],
            SubmittedValue::Multiple(v) => v.iter().map(String::as_str).collect(),
        }
    }
}

/// Flat `name -> value(s)` mapping handed to the submit callback.
///
/// Keys keep the order of their first submission. The first entry for a key
/// is stored as a single string, the second turns it into a list and later
/// ones append. Presence decides, so an empty string still counts as an entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubmittedValues {
    entries: IndexMap<String, SubmittedValue>,
}

impl SubmittedValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, key: &str, value: impl Into<String>) {
        let value = value.into();
        match self.entries.entry(key.to_string()) {
            Entry::Occupied(mut slot) => {
                let existing = slot.get_mut();
                match existing {
                    SubmittedValue::Multiple(values) => values.push(value),
                    SubmittedValue::Single(first) => {
                        let first = std::mem::take(first);
                        *existing = SubmittedValue::Multiple(vec![first, value]);
                    }
                }
            }
            Entry::Vacant(slot) => {
                slot.insert(SubmittedValue::Single(value));
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&SubmittedValue> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &SubmittedValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aggregation_rule() {
        struct TestCase {
            name: &'static str,
            entries: Vec<(&'static str, &'static str)>,
            expected_json: &'static str,
        }

        let test_cases = vec![
            TestCase {
                name: "single entry stays a string",
                entries: vec![("color", "red")],
                expected_json: r#"{"color":"red"}"#,
            },
            TestCase {
                name: "second entry makes a list",
                entries: vec![("color", "red"), ("color", "blue")],
                expected_json: r#"{"color":["red","blue"]}"#,
            },
            TestCase {
                name: "later entries append",
                entries: vec![("c", "1"), ("c", "2"), ("c", "3")],
                expected_json: r#"{"c":["1","2","3"]}"#,
            },
            TestCase {
                name: "empty first value is still present",
                entries: vec![("note", ""), ("note", "x")],
                expected_json: r#"{"note":["","x"]}"#,
            },
            TestCase {
                name: "keys keep first-submission order",
                entries: vec![("b", "1"), ("a", "2"), ("b", "3")],
                expected_json: r#"{"b":["1","3"],"a":"2"}"#,
            },
            TestCase {
                name: "nothing submitted",
                entries: vec![],
                expected_json: "{}",
            },
        ];

        for tc in test_cases {
            let mut values = SubmittedValues::new();
            for (k, v) in tc.entries {
                values.append(k, v);
            }
            assert_eq!(values.to_json().unwrap(), tc.expected_json, "Test case '{}' failed", tc.name);
        }
    }

    #[test]
    fn test_lookup() {
        let mut values = SubmittedValues::new();
        values.append("role", "Admin");
        values.append("colors", "red");
        values.append("colors", "green");

        assert_eq!(values.get("role").and_then(SubmittedValue::as_single), Some("Admin"));
        assert_eq!(values.get("colors").unwrap().values(), vec!["red", "green"]);
        assert!(!values.contains_key("missing"));
        assert_eq!(values.keys().collect::<Vec<_>>(), vec!["role", "colors"]);
    }

    #[test]
    fn test_values_read_back_in_submission_order() {
        let parsed: SubmittedValues = serde_json::from_str(r#"{"role":"Admin","colors":["red","blue"]}"#).unwrap();
        assert_eq!(parsed.keys().collect::<Vec<_>>(), vec!["role", "colors"]);
        assert_eq!(parsed.to_json().unwrap(), r#"{"role":"Admin","colors":["red","blue"]}"#);
    }

    #[test]
    fn test_submitted_value_deserializes_untagged() {
        let single: SubmittedValue = serde_json::from_str(r#""x""#).unwrap();
        let multiple: SubmittedValue = serde_json::from_str(r#"["x","y"]"#).unwrap();
        assert_eq!(single, SubmittedValue::Single("x".into()));
        assert_eq!(multiple.values(), vec!["x", "y"]);
    }
}
