// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Course record and payload validation.
//!
//! Write requests arrive as raw JSON and pass through
//! [`CoursePayload::from_value`] before they can touch the registry.
//! Validation is explicit: every missing or mistyped field is collected
//! into a [`ValidationError`] rather than failing on the first problem.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A stored course record.
///
/// `id` is assigned by the server on creation (UUID v4 text) and is
/// immutable for the lifetime of the record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: String,
    pub name: String,
    pub duration_label: Option<String>,
    pub level: String,
    pub duration_hours: i64,
}

/// Validated body of a create or update request.
///
/// Carries everything except the `id`: whatever `id` the client put in the
/// body is discarded, and the registry stamps its own.
#[derive(Debug, Clone, PartialEq)]
pub struct CoursePayload {
    pub name: String,
    pub duration_label: Option<String>,
    pub level: String,
    pub duration_hours: i64,
}

/// Schema violations found in a request body.
#[derive(Debug)]
pub struct ValidationError {
    pub problems: Vec<String>,
}

impl CoursePayload {
    /// Check field presence and JSON types against the Course schema.
    ///
    /// Unknown extra fields are ignored, as is any `id` field.
    pub fn from_value(body: &Value) -> Result<Self, ValidationError> {
        let obj = match body.as_object() {
            Some(obj) => obj,
            None => {
                return Err(ValidationError {
                    problems: vec!["body: expected a JSON object".to_string()],
                })
            }
        };

        let mut problems = Vec::new();
        let name = require_string(obj, "name", &mut problems);
        let level = require_string(obj, "level", &mut problems);
        let duration_hours = require_integer(obj, "duration_hours", &mut problems);
        let duration_label = optional_string(obj, "duration_label", &mut problems);

        match (name, level, duration_hours, duration_label) {
            (Some(name), Some(level), Some(duration_hours), Some(duration_label)) => Ok(Self {
                name,
                duration_label,
                level,
                duration_hours,
            }),
            _ => Err(ValidationError { problems }),
        }
    }

    /// Build the stored record by stamping `id` onto this payload.
    pub fn into_course(self, id: String) -> Course {
        Course {
            id,
            name: self.name,
            duration_label: self.duration_label,
            level: self.level,
            duration_hours: self.duration_hours,
        }
    }
}

fn require_string(obj: &Map<String, Value>, field: &str, problems: &mut Vec<String>) -> Option<String> {
    match obj.get(field) {
        Some(Value::String(s)) => Some(s.clone()),
        Some(_) => {
            problems.push(format!("{field}: expected a string"));
            None
        }
        None => {
            problems.push(format!("{field}: missing required field"));
            None
        }
    }
}

fn require_integer(obj: &Map<String, Value>, field: &str, problems: &mut Vec<String>) -> Option<i64> {
    match obj.get(field) {
        // as_i64 is None for floats and out-of-range values
        Some(Value::Number(n)) => match n.as_i64() {
            Some(v) => Some(v),
            None => {
                problems.push(format!("{field}: expected an integer"));
                None
            }
        },
        Some(_) => {
            problems.push(format!("{field}: expected an integer"));
            None
        }
        None => {
            problems.push(format!("{field}: missing required field"));
            None
        }
    }
}

fn optional_string(
    obj: &Map<String, Value>,
    field: &str,
    problems: &mut Vec<String>,
) -> Option<Option<String>> {
    match obj.get(field) {
        Some(Value::String(s)) => Some(Some(s.clone())),
        Some(Value::Null) | None => Some(None),
        Some(_) => {
            problems.push(format!("{field}: expected a string or null"));
            None
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
