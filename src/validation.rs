//! Field-level validation for incoming documents.
//!
//! Inputs are checked before anything touches the database. Every problem
//! with a document is collected so the caller can report all of them at
//! once instead of failing on the first.

use serde::Serialize;
use std::fmt;
use utoipa::ToSchema;

/// One offending field and a human readable explanation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct FieldError {
    /// Name of the field as it appears in the JSON document
    pub field: String,
    pub message: String,
}

/// Non-empty list of field errors produced by a failed validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns true if `field` failed validation.
    pub fn has_field(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }

    pub fn push(&mut self, field: &str, message: impl Into<String>) {
        self.errors.push(FieldError {
            field: field.to_string(),
            message: message.into(),
        });
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<&str> = self.errors.iter().map(|e| e.message.as_str()).collect();
        write!(f, "{}", messages.join(", "))
    }
}

impl std::error::Error for ValidationErrors {}

/// Accumulates errors while a document is being checked.
#[derive(Debug, Default)]
pub struct Validator {
    errors: ValidationErrors,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes a required string. Missing and empty values are both rejected;
    /// the returned string is empty in that case and must not be used unless
    /// `finish` succeeds.
    pub fn required(&mut self, field: &str, value: Option<String>) -> String {
        match value {
            Some(v) if !v.is_empty() => v,
            _ => {
                self.errors.push(field, required_message(field));
                String::new()
            }
        }
    }

    /// Takes a required JSON payload. `null` counts as missing.
    pub fn required_json(
        &mut self,
        field: &str,
        value: Option<serde_json::Value>,
    ) -> serde_json::Value {
        match value {
            Some(v) if !v.is_null() => v,
            _ => {
                self.errors.push(field, required_message(field));
                serde_json::Value::Null
            }
        }
    }

    /// Checks a required value against a fixed set of allowed names.
    pub fn one_of<T, F>(&mut self, field: &str, value: Option<String>, parse: F) -> Option<T>
    where
        F: FnOnce(&str) -> Option<T>,
    {
        let raw = match value {
            Some(v) if !v.is_empty() => v,
            _ => {
                self.errors.push(field, required_message(field));
                return None;
            }
        };
        let parsed = parse(&raw);
        if parsed.is_none() {
            self.errors.push(field, enum_message(field, &raw));
        }
        parsed
    }

    pub fn finish(self) -> Result<(), ValidationErrors> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self.errors)
        }
    }
}

pub fn required_message(field: &str) -> String {
    format!("Path `{}` is required.", field)
}

pub fn enum_message(field: &str, value: &str) -> String {
    format!("`{}` is not a valid enum value for path `{}`.", value, field)
}
