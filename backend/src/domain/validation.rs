//! Field-level validation shared by the puppy, toy and feeding forms.
//!
//! Form constructors collect every failing field rather than stopping at the
//! first problem so adapters can re-render the form with all messages.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use utoipa::ToSchema;

/// Per-field validation messages keyed by form field name.
///
/// # Examples
/// ```
/// use puppy_collector::domain::FieldErrors;
///
/// let mut errors = FieldErrors::default();
/// errors.push("name", "This field is required.");
/// assert!(!errors.is_empty());
/// assert_eq!(errors.get("name"), Some(&["This field is required.".to_owned()][..]));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, ToSchema)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    /// Record a message against `field`.
    pub fn push(&mut self, field: &str, message: impl Into<String>) {
        self.0
            .entry(field.to_owned())
            .or_default()
            .push(message.into());
    }

    /// Messages recorded for `field`, if any.
    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    /// True when no field has an error.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Names of the fields that failed validation.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Resolve to `value` when no errors were recorded.
    pub(crate) fn finish<T>(self, value: impl FnOnce() -> T) -> Result<T, Self> {
        if self.is_empty() {
            Ok(value())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, messages) in &self.0 {
            for message in messages {
                if !first {
                    f.write_str("; ")?;
                }
                write!(f, "{field}: {message}")?;
                first = false;
            }
        }
        Ok(())
    }
}

impl std::error::Error for FieldErrors {}

pub(crate) const REQUIRED: &str = "This field is required.";

/// Trim `raw` and check it against `min..=max` characters.
pub(crate) fn text_field(
    errors: &mut FieldErrors,
    field: &str,
    raw: &str,
    min: usize,
    max: usize,
) -> String {
    let value = raw.trim();
    let length = value.chars().count();
    if length == 0 && min > 0 {
        errors.push(field, REQUIRED);
    } else if length > max {
        errors.push(
            field,
            format!("Ensure this value has at most {max} characters (it has {length})."),
        );
    }
    value.to_owned()
}

/// Parse a whole number within `min..=max`.
pub(crate) fn integer_field(
    errors: &mut FieldErrors,
    field: &str,
    raw: &str,
    min: i32,
    max: i32,
) -> i32 {
    let value = raw.trim();
    if value.is_empty() {
        errors.push(field, REQUIRED);
        return 0;
    }
    match value.parse::<i32>() {
        Ok(parsed) if parsed < min => {
            errors.push(
                field,
                format!("Ensure this value is greater than or equal to {min}."),
            );
            parsed
        }
        Ok(parsed) if parsed > max => {
            errors.push(
                field,
                format!("Ensure this value is less than or equal to {max}."),
            );
            parsed
        }
        Ok(parsed) => parsed,
        Err(_) => {
            errors.push(field, "Enter a whole number.");
            0
        }
    }
}
