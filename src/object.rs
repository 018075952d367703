//! Helpers for arbitrarily shaped records held as [`serde_json::Value`].
//!
//! Paths are dot-separated keys (`profile.address.city`); reads also accept
//! an array index on a segment (`tags[1]`).

use crate::error::{Error, Result};
use lazy_static::lazy_static;
use log::debug;
use regex::Regex;
use serde_json::{Map, Value};

lazy_static! {
    static ref ARRAY_SEGMENT: Regex = Regex::new(r"^(\w+)\[(\d+)\]$").unwrap();
    static ref PATH_SEGMENT: Regex = Regex::new(r"^[a-zA-Z0-9_.-]+$").unwrap();
}

/// Structural copy of a value. Nothing in the copy aliases the original.
pub fn deep_copy(value: &Value) -> Value {
    match value {
        Value::Array(items) => Value::Array(items.iter().map(deep_copy).collect()),
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(key, value)| (key.clone(), deep_copy(value)))
                .collect(),
        ),
        scalar => scalar.clone(),
    }
}

/// Look up a nested value by path.
///
/// ```
/// use recase::get_value_by_path;
/// use serde_json::json;
///
/// let user = json!({ "profile": { "address": { "city": "New York" } }, "tags": ["a", "b"] });
/// assert_eq!(get_value_by_path(&user, "profile.address.city"), Some(&json!("New York")));
/// assert_eq!(get_value_by_path(&user, "tags[1]"), Some(&json!("b")));
/// assert_eq!(get_value_by_path(&user, "profile.phone"), None);
/// ```
pub fn get_value_by_path<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = value;

    for key in path.split('.') {
        current = match ARRAY_SEGMENT.captures(key) {
            Some(caps) => {
                let index: usize = caps[2].parse().ok()?;
                current.get(&caps[1])?.as_array()?.get(index)?
            }
            None => current.as_object()?.get(key)?,
        };
    }

    Some(current)
}

/// Flatten nested objects into a single map keyed by dotted paths.
///
/// Arrays and scalars are kept as leaves, null entries are dropped.
pub fn object_to_path_value_set(object: &Map<String, Value>) -> Map<String, Value> {
    let mut result = Map::new();
    flatten_into(object, &mut Vec::new(), &mut result);
    result
}

fn flatten_into<'a>(
    object: &'a Map<String, Value>,
    path: &mut Vec<&'a str>,
    result: &mut Map<String, Value>,
) {
    for (key, value) in object {
        path.push(key);
        match value {
            Value::Object(nested) => flatten_into(nested, path, result),
            Value::Null => {}
            leaf => {
                result.insert(path.join("."), leaf.clone());
            }
        }
        path.pop();
    }
}

/// Rebuild a nested object from dotted keys, skipping keys that are not
/// valid paths.
pub fn path_value_set_to_object(path_value_set: &Map<String, Value>) -> Map<String, Value> {
    let mut object = Map::new();

    for (path, value) in path_value_set {
        if !is_valid_path(path) {
            debug!("Skipping invalid path '{}'", path);
            continue;
        }
        set_path(&mut object, path, value.clone());
    }

    object
}

/// Rebuild a nested object from dotted keys, failing on the first key that
/// is not a valid path.
///
/// ```
/// use recase::{path_to_object, Error};
/// use serde_json::{json, Map, Value};
///
/// let filters: Map<String, Value> = json!({ "user.name": "John" }).as_object().unwrap().clone();
/// assert_eq!(Value::Object(path_to_object(&filters).unwrap()), json!({ "user": { "name": "John" } }));
///
/// let bad: Map<String, Value> = json!({ "user name": "John" }).as_object().unwrap().clone();
/// assert_eq!(path_to_object(&bad), Err(Error::InvalidPath("user name".to_string())));
/// ```
pub fn path_to_object(flat: &Map<String, Value>) -> Result<Map<String, Value>> {
    let mut object = Map::new();

    for (path, value) in flat {
        if !is_valid_path(path) {
            return Err(Error::InvalidPath(path.clone()));
        }
        set_path(&mut object, path, value.clone());
    }

    Ok(object)
}

fn is_valid_path(path: &str) -> bool {
    path.split('.').all(|segment| PATH_SEGMENT.is_match(segment))
}

fn set_path(object: &mut Map<String, Value>, path: &str, value: Value) {
    match path.split_once('.') {
        None => {
            object.insert(path.to_string(), value);
        }
        Some((first, rest)) => {
            let slot = object
                .entry(first)
                .or_insert_with(|| Value::Object(Map::new()));
            if !slot.is_object() {
                *slot = Value::Object(Map::new());
            }
            if let Value::Object(nested) = slot {
                set_path(nested, rest, value);
            }
        }
    }
}

/// Copy of `value` without null and empty-string entries, applied at every
/// depth. Arrays come back as objects keyed by index; anything that is not
/// an object or array prunes to an empty map.
pub fn prune(value: &Value) -> Map<String, Value> {
    let entries: Vec<(String, &Value)> = match value {
        Value::Object(map) => map.iter().map(|(k, v)| (k.clone(), v)).collect(),
        Value::Array(items) => items.iter().enumerate().map(|(i, v)| (i.to_string(), v)).collect(),
        _ => return Map::new(),
    };

    let mut pruned = Map::new();
    for (key, value) in entries {
        match value {
            Value::Object(_) | Value::Array(_) => {
                pruned.insert(key, Value::Object(prune(value)));
            }
            Value::Null => {}
            Value::String(s) if s.is_empty() => {}
            leaf => {
                pruned.insert(key, leaf.clone());
            }
        }
    }
    pruned
}

/// Copy of `object` without the listed keys and without null entries.
pub fn omit(object: &Map<String, Value>, keys: &[&str]) -> Map<String, Value> {
    object
        .iter()
        .filter(|(key, value)| !value.is_null() && !keys.contains(&key.as_str()))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}
