//! Product Service - Business logic layer

use axum_helpers::{ErrorKind, PaginationMeta, PaginationParams};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tracing::instrument;
use uuid::Uuid;

use crate::error::{ProductError, ProductResult};
use crate::models::{Product, ProductInput, ProductPatch};
use crate::repository::ProductRepository;
use crate::schema::ProductSchemas;

pub const DEFAULT_STORE_TIMEOUT: Duration = Duration::from_secs(5);

/// Product service providing business logic operations
///
/// Every store call runs under a deadline; one that does not finish in time
/// fails with [`ProductError::Timeout`].
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
    schemas: ProductSchemas,
    store_timeout: Duration,
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
            schemas: ProductSchemas::new(),
            store_timeout: DEFAULT_STORE_TIMEOUT,
        }
    }

    pub fn with_store_timeout(mut self, store_timeout: Duration) -> Self {
        self.store_timeout = store_timeout;
        self
    }

    pub fn schemas(&self) -> &ProductSchemas {
        &self.schemas
    }

    async fn bounded<T>(
        &self,
        operation: &'static str,
        call: impl Future<Output = ProductResult<T>>,
    ) -> ProductResult<T> {
        let result = tokio::time::timeout(self.store_timeout, call)
            .await
            .unwrap_or(Err(ProductError::Timeout(self.store_timeout)));

        if let Err(e) = &result {
            if e.kind() == Some(ErrorKind::StoreFailure) {
                tracing::error!(
                    operation,
                    kind = ErrorKind::StoreFailure.as_str(),
                    error = %e,
                    "store call failed"
                );
            }
        }
        result
    }

    /// One page of products with its pagination metadata
    #[instrument(skip(self))]
    pub async fn list_products(
        &self,
        page: PaginationParams,
    ) -> ProductResult<(Vec<Product>, PaginationMeta)> {
        let (products, total) = self
            .bounded("list", self.repository.list(page.limit, page.offset))
            .await?;

        let meta = PaginationMeta::new(page, total, products.len());
        Ok((products, meta))
    }

    #[instrument(skip(self))]
    pub async fn get_product(&self, id: Uuid) -> ProductResult<Product> {
        self.bounded("get", self.repository.get_by_id(id)).await
    }

    #[instrument(skip(self, input), fields(product_name = %input.name))]
    pub async fn create_product(&self, input: ProductInput) -> ProductResult<Product> {
        let id = self
            .bounded("create", self.repository.create(input.clone()))
            .await?;
        Ok(Product::new(id, input))
    }

    #[instrument(skip(self, input))]
    pub async fn update_product(&self, id: Uuid, input: ProductInput) -> ProductResult<Product> {
        self.bounded("update", self.repository.update(id, input))
            .await
    }

    /// Apply the provided fields of `patch` on top of the stored product
    #[instrument(skip(self, patch))]
    pub async fn patch_product(&self, id: Uuid, patch: ProductPatch) -> ProductResult<Product> {
        if patch.is_empty() {
            return Err(ProductError::NoFieldsToUpdate);
        }

        let mut product = self.get_product(id).await?;
        patch.apply_to(&mut product);

        self.update_product(id, product.to_input()).await
    }

    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: Uuid) -> ProductResult<()> {
        self.bounded("delete", self.repository.delete(id)).await
    }
}
