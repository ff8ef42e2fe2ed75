//! Field rules for product payloads, built once at startup.

use axum_helpers::validation::{FieldRule, Schema};
use serde_json::Value;

use crate::error::{ProductError, ProductResult};
use crate::models::{ProductInput, ProductPatch};

#[derive(Debug, Clone, PartialEq)]
pub struct ProductSchemas {
    input: Schema,
    patch: Schema,
}

impl ProductSchemas {
    pub fn new() -> Self {
        Self {
            input: Schema::new()
                .field(FieldRule::new("name").required())
                .field(FieldRule::new("description"))
                .field(FieldRule::new("price").required().gt(0.0)),
            patch: Schema::new()
                .field(FieldRule::new("name"))
                .field(FieldRule::new("description"))
                .field(FieldRule::new("price").gt(0.0)),
        }
    }

    /// Validates a create or replace body.
    pub fn input(&self, payload: &Value) -> ProductResult<ProductInput> {
        self.input.validate(payload).map_err(ProductError::Validation)
    }

    /// Validates a partial update body.
    pub fn patch(&self, payload: &Value) -> ProductResult<ProductPatch> {
        self.patch.validate(payload).map_err(ProductError::Validation)
    }
}

impl Default for ProductSchemas {
    fn default() -> Self {
        Self::new()
    }
}
