//! Forgiving decoder for the session document
//!
//! Keys match their field case-insensitively (an exact match wins). A value
//! of the wrong type resets only that field to its default and decoding
//! carries on; the first such error is returned next to the result.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{Map, Value};

use super::model::{Configuration, SessionSpec, WindowSpec};
use crate::error::ConfigError;

const SESSION_DATA_KEY: &str = "SessionData";
const NAME_KEY: &str = "Name";
const PATH_KEY: &str = "Path";
const WINDOWS_KEY: &str = "Windows";

/// Decode the `SessionData` list, keeping every entry that is an object
pub(super) fn decode_document(document: Value) -> (Configuration, Option<ConfigError>) {
    let mut configuration = Configuration::default();

    let Value::Object(mut root) = document else {
        return (
            configuration,
            Some(ConfigError::Invalid(
                "expected an object at the top level".to_string(),
            )),
        );
    };
    canonicalize_keys(&mut root, &[SESSION_DATA_KEY]);

    let entries = match root.remove(SESSION_DATA_KEY) {
        None | Some(Value::Null) => return (configuration, None),
        Some(Value::Array(entries)) => entries,
        Some(_) => {
            return (
                configuration,
                Some(ConfigError::Invalid("SessionData must be a list".to_string())),
            )
        }
    };

    let mut first_error = None;
    for (index, entry) in entries.into_iter().enumerate() {
        if let Some(session) = decode_session(index, entry, &mut first_error) {
            configuration.sessions.push(session);
        }
    }

    (configuration, first_error)
}

fn decode_session(
    index: usize,
    entry: Value,
    first_error: &mut Option<ConfigError>,
) -> Option<SessionSpec> {
    let Value::Object(mut fields) = entry else {
        tracing::debug!("Skipping SessionData[{}]: not an object", index);
        first_error.get_or_insert_with(|| {
            ConfigError::Invalid(format!("SessionData[{}] is not an object", index))
        });
        return None;
    };

    canonicalize_keys(&mut fields, &[NAME_KEY, PATH_KEY, WINDOWS_KEY]);
    if let Some(Value::Array(windows)) = fields.get_mut(WINDOWS_KEY) {
        for window in windows.iter_mut() {
            if let Value::Object(window) = window {
                canonicalize_keys(window, &[NAME_KEY, PATH_KEY]);
            }
        }
    }

    let entry = Value::Object(fields);
    match SessionSpec::deserialize(&entry) {
        Ok(session) => Some(session),
        Err(e) => {
            tracing::debug!("SessionData[{}] partially decoded: {}", index, e);
            first_error.get_or_insert_with(|| e.into());
            let Value::Object(mut fields) = entry else {
                return None;
            };
            Some(SessionSpec {
                name: field_or_default(&mut fields, NAME_KEY),
                path: field_or_default(&mut fields, PATH_KEY),
                windows: windows_or_default(fields.remove(WINDOWS_KEY)),
            })
        }
    }
}

/// Decode window entries one field at a time, dropping non-objects
fn windows_or_default(value: Option<Value>) -> Vec<WindowSpec> {
    let Some(Value::Array(entries)) = value else {
        return Vec::new();
    };

    entries
        .into_iter()
        .filter_map(|entry| match entry {
            Value::Object(mut fields) => Some(WindowSpec {
                name: field_or_default(&mut fields, NAME_KEY),
                path: field_or_default(&mut fields, PATH_KEY),
            }),
            _ => None,
        })
        .collect()
}

/// Take a field, falling back to the default when missing, null or mistyped
fn field_or_default<T>(fields: &mut Map<String, Value>, key: &str) -> T
where
    T: DeserializeOwned + Default,
{
    fields
        .remove(key)
        .and_then(|value| serde_json::from_value::<Option<T>>(value).ok().flatten())
        .unwrap_or_default()
}

/// Rename keys that differ from a known field only in case
fn canonicalize_keys(fields: &mut Map<String, Value>, known: &[&str]) {
    for &name in known {
        if fields.contains_key(name) {
            continue;
        }
        let found = fields
            .keys()
            .find(|key| key.eq_ignore_ascii_case(name))
            .cloned();
        if let Some(value) = found.and_then(|key| fields.remove(&key)) {
            fields.insert(name.to_string(), value);
        }
    }
}
