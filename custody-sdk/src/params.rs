// Copyright (c) 2026 The Custody SDK Authors
//
// SPDX-License-Identifier: Apache-2.0
//

//! Checks on caller parameters, run before anything goes on the wire.

use serde_json::Value;

use crate::{Error, Payload, Result};

/// `null`, an empty string and an empty array count as absent.
pub(crate) fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        _ => false,
    }
}

/// Every field must be present and not blank.
pub(crate) fn require(params: &Payload, fields: &[&str]) -> Result<()> {
    for field in fields {
        if params.get(*field).map_or(true, is_blank) {
            return Err(Error::invalid_field(
                field,
                format!("required parameters: {}", fields.join(", ")),
            ));
        }
    }
    Ok(())
}

/// Every field must be present, any value accepted.
pub(crate) fn require_keys(params: &Payload, fields: &[&str]) -> Result<()> {
    for field in fields {
        if !params.contains_key(*field) {
            return Err(Error::invalid_field(
                field,
                format!("required parameters: {}", fields.join(", ")),
            ));
        }
    }
    Ok(())
}

/// Copy `fields` that are present, blank values included.
pub(crate) fn pick(params: &Payload, fields: &[&str]) -> Payload {
    fields
        .iter()
        .filter_map(|field| params.get(*field).map(|v| (field.to_string(), v.clone())))
        .collect()
}

/// Copy `fields` that are present and not blank.
pub(crate) fn pick_present(params: &Payload, fields: &[&str]) -> Payload {
    fields
        .iter()
        .filter_map(|field| match params.get(*field) {
            Some(v) if !is_blank(v) => Some((field.to_string(), v.clone())),
            _ => None,
        })
        .collect()
}

/// Integer view of a field given as a number or numeric string.
pub(crate) fn int_field(params: &Payload, field: &str) -> Option<i64> {
    match params.get(field)? {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

pub(crate) fn flag(params: &Payload, field: &str) -> bool {
    match params.get(field) {
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_i64().is_some_and(|n| n != 0),
        Some(Value::String(s)) => matches!(s.as_str(), "1" | "true"),
        _ => false,
    }
}

/// `{"ids": "a,b,c"}`, refusing an empty list.
pub(crate) fn ids<I: ToString>(field: &str, ids: &[I]) -> Result<Payload> {
    if ids.is_empty() {
        return Err(Error::invalid_field(
            field,
            format!("parameter `{field}` must be a non-empty list"),
        ));
    }

    let joined = ids
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",");
    Ok(Payload::from_iter([("ids".to_string(), Value::from(joined))]))
}

/// `{"max_id": max_id}`
pub(crate) fn max_id(max_id: i64) -> Payload {
    Payload::from_iter([("max_id".to_string(), Value::from(max_id))])
}
