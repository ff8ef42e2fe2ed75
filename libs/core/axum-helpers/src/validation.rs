//! Declarative field validation for JSON request bodies.
//!
//! A [`Schema`] is an ordered list of [`FieldRule`]s built once at startup and
//! shared read-only by handlers. Validation checks every rule in declaration
//! order and reports all violations instead of stopping at the first.
//!
//! ```rust
//! use axum_helpers::validation::{FieldRule, Schema};
//! use serde_json::json;
//!
//! let schema = Schema::new()
//!     .field(FieldRule::new("name").required())
//!     .field(FieldRule::new("price").required().gt(0.0));
//!
//! let errors = schema.check(&json!({ "price": -1 })).unwrap_err();
//! let messages: Vec<_> = errors.messages().collect();
//! assert_eq!(messages, ["name is required", "price must be greater than 0"]);
//! ```

use axum::http::StatusCode;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt;
use utoipa::ToSchema;

use crate::errors::ErrorKind;

/// Field name used for violations that are not tied to a single field.
pub const BODY_FIELD: &str = "body";

/// Numeric lower bound for a field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bound {
    Gt(f64),
    Gte(f64),
}

impl Bound {
    fn admits(self, value: f64) -> bool {
        match self {
            Bound::Gt(threshold) => value > threshold,
            Bound::Gte(threshold) => value >= threshold,
        }
    }

    fn message(self, field: &str) -> String {
        match self {
            Bound::Gt(threshold) => format!("{field} must be greater than {threshold}"),
            Bound::Gte(threshold) => {
                format!("{field} must be greater than or equal to {threshold}")
            }
        }
    }
}

/// Constraint set for one named field of a payload.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldRule {
    pub name: String,
    pub required: bool,
    pub bound: Option<Bound>,
}

impl FieldRule {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            required: false,
            bound: None,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn gt(mut self, threshold: f64) -> Self {
        self.bound = Some(Bound::Gt(threshold));
        self
    }

    pub fn gte(mut self, threshold: f64) -> Self {
        self.bound = Some(Bound::Gte(threshold));
        self
    }

    fn evaluate(&self, payload: &Value) -> Option<FieldViolation> {
        let value = payload.get(&self.name).filter(|v| !v.is_null());

        // A failed presence check suppresses the bound check for the same field.
        if self.required && value.is_none_or(is_zero_value) {
            return Some(FieldViolation::new(
                &self.name,
                ErrorKind::FieldRequired,
                format!("{} is required", self.name),
            ));
        }

        let (bound, value) = (self.bound?, value?);
        match value.as_f64() {
            Some(number) if bound.admits(number) => None,
            Some(_) => Some(FieldViolation::new(
                &self.name,
                ErrorKind::FieldOutOfRange,
                bound.message(&self.name),
            )),
            None => Some(FieldViolation::new(
                &self.name,
                ErrorKind::FieldOutOfRange,
                format!("{} must be a number", self.name),
            )),
        }
    }
}

/// Zero values count as absent for `required`: empty strings, numeric zero and `false`.
fn is_zero_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::Bool(b) => !b,
        Value::Array(_) | Value::Object(_) => false,
    }
}

/// One failed rule.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct FieldViolation {
    pub field: String,
    pub kind: ErrorKind,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: impl Into<String>, kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            kind,
            message: message.into(),
        }
    }
}

/// Ordered, immutable collection of violations from one validation run.
#[derive(Debug, Clone, PartialEq, Default, Serialize, ToSchema)]
#[serde(transparent)]
pub struct ValidationErrorSet {
    violations: Vec<FieldViolation>,
}

impl ValidationErrorSet {
    pub fn violations(&self) -> &[FieldViolation] {
        &self.violations
    }

    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.violations.iter().map(|v| v.message.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// Validation failures are always client errors.
    pub fn status(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }
}

impl From<Vec<FieldViolation>> for ValidationErrorSet {
    fn from(violations: Vec<FieldViolation>) -> Self {
        Self { violations }
    }
}

impl IntoIterator for ValidationErrorSet {
    type Item = FieldViolation;
    type IntoIter = std::vec::IntoIter<FieldViolation>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.into_iter()
    }
}

impl fmt::Display for ValidationErrorSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<_> = self.messages().collect();
        write!(f, "validation failed: {}", messages.join("; "))
    }
}

impl std::error::Error for ValidationErrorSet {}

/// Ordered set of field rules for one payload shape.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Schema {
    rules: Vec<FieldRule>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, rule: FieldRule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn rules(&self) -> &[FieldRule] {
        &self.rules
    }

    /// Runs every rule against `payload` and collects the violations.
    pub fn check(&self, payload: &Value) -> Result<(), ValidationErrorSet> {
        let violations: Vec<_> = self
            .rules
            .iter()
            .filter_map(|rule| rule.evaluate(payload))
            .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations.into())
        }
    }

    /// Checks `payload` and decodes it into `T` when every rule holds.
    ///
    /// A payload that satisfies the rules but does not fit `T` yields a single
    /// violation on the [`BODY_FIELD`] pseudo-field.
    pub fn validate<T: DeserializeOwned>(&self, payload: &Value) -> Result<T, ValidationErrorSet> {
        self.check(payload)?;

        T::deserialize(payload).map_err(|e| {
            vec![FieldViolation::new(
                BODY_FIELD,
                ErrorKind::FieldOutOfRange,
                format!("invalid request body: {e}"),
            )]
            .into()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Item {
        name: String,
        #[serde(default)]
        description: String,
        price: f64,
    }

    fn item_schema() -> Schema {
        Schema::new()
            .field(FieldRule::new("name").required())
            .field(FieldRule::new("description"))
            .field(FieldRule::new("price").required().gt(0.0))
    }

    fn messages(err: &ValidationErrorSet) -> Vec<&str> {
        err.messages().collect()
    }

    #[test]
    fn test_valid_payload_decodes() {
        let item: Item = item_schema()
            .validate(&json!({ "name": "Lamp", "price": 19.5 }))
            .unwrap();
        assert_eq!(
            item,
            Item {
                name: "Lamp".into(),
                description: String::new(),
                price: 19.5
            }
        );
    }

    #[test]
    fn test_empty_object_reports_every_required_field_in_order() {
        let err = item_schema().check(&json!({})).unwrap_err();
        assert_eq!(messages(&err), ["name is required", "price is required"]);
        assert!(
            err.violations()
                .iter()
                .all(|v| v.kind == ErrorKind::FieldRequired)
        );
    }

    #[test]
    fn test_zero_values_count_as_missing() {
        let err = item_schema()
            .check(&json!({ "name": "", "price": 0 }))
            .unwrap_err();
        assert_eq!(messages(&err), ["name is required", "price is required"]);
    }

    #[test]
    fn test_null_counts_as_missing() {
        let err = item_schema()
            .check(&json!({ "name": null, "price": 3 }))
            .unwrap_err();
        assert_eq!(messages(&err), ["name is required"]);
    }

    #[test]
    fn test_missing_name_is_the_only_violation() {
        let err = item_schema()
            .check(&json!({ "description": "d", "price": 10 }))
            .unwrap_err();
        assert_eq!(err.len(), 1);

        let violation = &err.violations()[0];
        assert_eq!(violation.field, "name");
        assert_eq!(violation.kind, ErrorKind::FieldRequired);
        assert_eq!(violation.message, "name is required");
        assert_ne!(violation.message, violation.kind.to_string());
    }

    #[test]
    fn test_bound_violation_message() {
        let err = item_schema()
            .check(&json!({ "name": "Lamp", "price": -1 }))
            .unwrap_err();
        assert_eq!(err.len(), 1);
        assert_eq!(err.violations()[0].field, "price");
        assert_eq!(err.violations()[0].kind, ErrorKind::FieldOutOfRange);
        assert_eq!(messages(&err), ["price must be greater than 0"]);
    }

    #[test]
    fn test_gte_bound_admits_threshold() {
        let schema = Schema::new().field(FieldRule::new("stock").gte(0.0));
        assert!(schema.check(&json!({ "stock": 0 })).is_ok());

        let err = schema.check(&json!({ "stock": -0.5 })).unwrap_err();
        assert_eq!(messages(&err), ["stock must be greater than or equal to 0"]);
    }

    #[test]
    fn test_fractional_threshold_in_message() {
        let schema = Schema::new().field(FieldRule::new("weight").gt(1.5));
        let err = schema.check(&json!({ "weight": 1 })).unwrap_err();
        assert_eq!(messages(&err), ["weight must be greater than 1.5"]);
    }

    #[test]
    fn test_optional_field_skips_bound_when_absent() {
        let schema = Schema::new().field(FieldRule::new("price").gt(0.0));
        assert!(schema.check(&json!({})).is_ok());
        assert!(schema.check(&json!({ "price": null })).is_ok());
    }

    #[test]
    fn test_optional_field_checks_bound_when_present() {
        let schema = Schema::new().field(FieldRule::new("price").gt(0.0));
        let err = schema.check(&json!({ "price": 0 })).unwrap_err();
        assert_eq!(messages(&err), ["price must be greater than 0"]);
    }

    #[test]
    fn test_non_numeric_bounded_field() {
        let err = item_schema()
            .check(&json!({ "name": "Lamp", "price": "cheap" }))
            .unwrap_err();
        assert_eq!(messages(&err), ["price must be a number"]);
    }

    #[test]
    fn test_type_mismatch_after_rules_is_body_violation() {
        let err = item_schema()
            .validate::<Item>(&json!({ "name": 42, "price": 3 }))
            .unwrap_err();
        assert_eq!(err.len(), 1);
        assert_eq!(err.violations()[0].field, BODY_FIELD);
        assert!(err.violations()[0].message.starts_with("invalid request body"));
    }

    #[test]
    fn test_non_object_payload() {
        let err = item_schema().check(&json!(["Lamp", 3])).unwrap_err();
        assert_eq!(messages(&err), ["name is required", "price is required"]);
    }

    #[test]
    fn test_error_set_status_and_display() {
        let err = item_schema().check(&json!({})).unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            err.to_string(),
            "validation failed: name is required; price is required"
        );
    }
}
