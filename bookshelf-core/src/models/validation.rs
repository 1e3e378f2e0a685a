//! Declarative input validation.
//!
//! Each input shape describes its constraints as a static table of
//! [`FieldRule`]s. [`validate`] checks a raw JSON body against such a table
//! before it is deserialized into a typed input, so every violation can be
//! reported with the name of the offending field.

use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    TextList,
}

impl FieldKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "a string",
            Self::TextList => "an array of strings",
        }
    }
}

/// Constraints for a single body field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRule {
    pub name: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub min_len: Option<usize>,
    pub max_len: Option<usize>,
    pub non_empty: bool,
}

impl FieldRule {
    pub const fn required(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: true,
            min_len: None,
            max_len: None,
            non_empty: false,
        }
    }

    pub const fn optional(name: &'static str, kind: FieldKind) -> Self {
        Self {
            required: false,
            ..Self::required(name, kind)
        }
    }

    pub const fn min_len(mut self, len: usize) -> Self {
        self.min_len = Some(len);
        self
    }

    pub const fn max_len(mut self, len: usize) -> Self {
        self.max_len = Some(len);
        self
    }

    pub const fn non_empty(mut self) -> Self {
        self.non_empty = true;
        self
    }

    fn check(&self, value: Option<&Value>, errors: &mut Vec<FieldError>) {
        // null counts as absent
        let value = match value {
            None | Some(Value::Null) => {
                if self.required {
                    errors.push(FieldError::new(
                        self.name,
                        ErrorCode::Required,
                        format!("{} is required", self.name),
                    ));
                }
                return;
            }
            Some(value) => value,
        };

        match self.kind {
            FieldKind::Text => match value.as_str() {
                Some(text) => self.check_length(text, errors),
                None => errors.push(self.type_error()),
            },
            FieldKind::TextList => {
                let Some(items) = value.as_array() else {
                    errors.push(self.type_error());
                    return;
                };
                if self.non_empty && items.is_empty() {
                    errors.push(FieldError::new(
                        self.name,
                        ErrorCode::NonEmpty,
                        format!("{} should not be empty", self.name),
                    ));
                }
                if items.iter().any(|item| !item.is_string()) {
                    errors.push(self.type_error());
                }
            }
        }
    }

    fn check_length(&self, text: &str, errors: &mut Vec<FieldError>) {
        let len = text.chars().count();
        if let Some(min) = self.min_len {
            if len < min {
                errors.push(FieldError::new(
                    self.name,
                    ErrorCode::MinLength,
                    format!(
                        "{} must be longer than or equal to {} characters",
                        self.name, min
                    ),
                ));
            }
        }
        if let Some(max) = self.max_len {
            if len > max {
                errors.push(FieldError::new(
                    self.name,
                    ErrorCode::MaxLength,
                    format!(
                        "{} must be shorter than or equal to {} characters",
                        self.name, max
                    ),
                ));
            }
        }
    }

    fn type_error(&self) -> FieldError {
        FieldError::new(
            self.name,
            ErrorCode::Type,
            format!("{} must be {}", self.name, self.kind.as_str()),
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    Required,
    Type,
    MinLength,
    MaxLength,
    NonEmpty,
}

/// A field-level validation error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
    pub code: ErrorCode,
}

impl FieldError {
    pub fn new(field: impl Into<String>, code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            code,
        }
    }
}

/// All violations found in one body, in schema order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[error("validation failed for {}", fields_list(.errors))]
pub struct ValidationErrors {
    pub errors: Vec<FieldError>,
}

fn fields_list(errors: &[FieldError]) -> String {
    let mut fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
    fields.dedup();
    fields.join(", ")
}

impl ValidationErrors {
    #[cfg(test)]
    pub(crate) fn has_field(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }
}

/// Input shapes that carry a validation schema.
pub trait Validate {
    const SCHEMA: &'static [FieldRule];

    fn validate_json(body: &Value) -> Result<(), ValidationErrors> {
        validate(Self::SCHEMA, body)
    }
}

/// Checks `body` against `schema`, collecting every violation.
pub fn validate(schema: &[FieldRule], body: &Value) -> Result<(), ValidationErrors> {
    let fields = match body {
        Value::Object(fields) => fields,
        _ => {
            return Err(ValidationErrors {
                errors: vec![FieldError::new(
                    "body",
                    ErrorCode::Type,
                    "request body must be a JSON object",
                )],
            })
        }
    };

    let mut errors = Vec::new();
    for rule in schema {
        rule.check(fields.get(rule.name), &mut errors);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationErrors { errors })
    }
}
