use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// A product as stored and returned to clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// Assigned by the store on creation
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub price: f64,
}

impl Product {
    pub fn new(id: Uuid, input: ProductInput) -> Self {
        Self {
            id,
            name: input.name,
            description: input.description,
            price: input.price,
        }
    }

    /// Copy of the client-writable fields.
    pub fn to_input(&self) -> ProductInput {
        ProductInput {
            name: self.name.clone(),
            description: self.description.clone(),
            price: self.price,
        }
    }
}

/// Body of create and full-replace requests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductInput {
    #[schema(example = "Desk lamp")]
    pub name: String,
    #[serde(default)]
    #[schema(example = "Adjustable LED lamp")]
    pub description: String,
    #[schema(example = 24.99)]
    pub price: f64,
}

/// Body of partial updates. Absent or empty fields keep their current value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

impl ProductPatch {
    /// True when no field would change anything.
    pub fn is_empty(&self) -> bool {
        self.name.as_deref().is_none_or(str::is_empty)
            && self.description.as_deref().is_none_or(str::is_empty)
            && self.price.is_none_or(|p| p == 0.0)
    }

    pub fn apply_to(self, product: &mut Product) {
        if let Some(name) = self.name.filter(|n| !n.is_empty()) {
            product.name = name;
        }
        if let Some(description) = self.description.filter(|d| !d.is_empty()) {
            product.description = description;
        }
        if let Some(price) = self.price.filter(|p| *p != 0.0) {
            product.price = price;
        }
    }
}
