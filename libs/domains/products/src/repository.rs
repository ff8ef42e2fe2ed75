use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{ProductError, ProductResult};
use crate::models::{Product, ProductInput};

/// Repository trait for Product persistence
///
/// Implementations must be safe for concurrent use. Lookups by an unknown id
/// fail with [`ProductError::NotFound`]; any other failure is reported as
/// [`ProductError::Store`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// One page of products in insertion order, plus the total number stored
    async fn list(&self, limit: u32, offset: u64) -> ProductResult<(Vec<Product>, u64)>;

    async fn get_by_id(&self, id: Uuid) -> ProductResult<Product>;

    /// Store a new product and return its assigned id
    async fn create(&self, input: ProductInput) -> ProductResult<Uuid>;

    /// Replace every writable field of an existing product
    async fn update(&self, id: Uuid, input: ProductInput) -> ProductResult<Product>;

    async fn delete(&self, id: Uuid) -> ProductResult<()>;
}

#[derive(Default)]
struct Inventory {
    products: HashMap<Uuid, Product>,
    order: Vec<Uuid>,
}

/// In-memory implementation of ProductRepository
#[derive(Clone, Default)]
pub struct InMemoryProductRepository {
    inventory: Arc<RwLock<Inventory>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn list(&self, limit: u32, offset: u64) -> ProductResult<(Vec<Product>, u64)> {
        let inventory = self.inventory.read().await;
        let skip = usize::try_from(offset).unwrap_or(usize::MAX);

        let page = inventory
            .order
            .iter()
            .skip(skip)
            .take(limit as usize)
            .filter_map(|id| inventory.products.get(id).cloned())
            .collect();

        Ok((page, inventory.order.len() as u64))
    }

    async fn get_by_id(&self, id: Uuid) -> ProductResult<Product> {
        let inventory = self.inventory.read().await;
        inventory
            .products
            .get(&id)
            .cloned()
            .ok_or(ProductError::NotFound(id))
    }

    async fn create(&self, input: ProductInput) -> ProductResult<Uuid> {
        let mut inventory = self.inventory.write().await;

        let product = Product::new(Uuid::now_v7(), input);
        let id = product.id;
        inventory.order.push(id);
        inventory.products.insert(id, product);

        tracing::info!(product_id = %id, "Created product");
        Ok(id)
    }

    async fn update(&self, id: Uuid, input: ProductInput) -> ProductResult<Product> {
        let mut inventory = self.inventory.write().await;
        let product = inventory
            .products
            .get_mut(&id)
            .ok_or(ProductError::NotFound(id))?;

        *product = Product::new(id, input);
        Ok(product.clone())
    }

    async fn delete(&self, id: Uuid) -> ProductResult<()> {
        let mut inventory = self.inventory.write().await;
        if inventory.products.remove(&id).is_none() {
            return Err(ProductError::NotFound(id));
        }
        inventory.order.retain(|existing| *existing != id);

        tracing::info!(product_id = %id, "Deleted product");
        Ok(())
    }
}
