//! Product Service - Business logic layer

use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::error::{ProductError, ProductResult};
use crate::models::{
    CreateProduct, PageRequest, Product, ProductCategory, ProductSortField, UpdateProduct,
};
use crate::repository::ProductRepository;

/// Product service providing business logic operations
///
/// Mediates every mutation path: sku uniqueness on create/update, the
/// whitelist merge on update, soft vs hard deletion, and stock adjustment
/// through the store's atomic primitive.
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    /// Create a new ProductService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// List a page of active products
    #[instrument(skip(self))]
    pub async fn list(
        &self,
        page: u32,
        size: u32,
        sort: ProductSortField,
        ascending: bool,
    ) -> ProductResult<Vec<Product>> {
        let page_request = PageRequest::new(page as u64, size as u64, sort, ascending);
        self.repository.find_active(&page_request).await
    }

    /// Total number of active products, for page metadata
    #[instrument(skip(self))]
    pub async fn count(&self) -> ProductResult<u64> {
        self.repository.count_active().await
    }

    /// Active products whose name contains the given substring
    #[instrument(skip(self))]
    pub async fn find_by_name(&self, search: &str) -> ProductResult<Vec<Product>> {
        self.repository.find_by_name_contains(search).await
    }

    /// Active products in the given category
    #[instrument(skip(self))]
    pub async fn find_by_category(
        &self,
        category: ProductCategory,
    ) -> ProductResult<Vec<Product>> {
        self.repository.find_by_category(category).await
    }

    /// Get a product by id, failing with NotFound when absent
    #[instrument(skip(self))]
    pub async fn get_product(&self, id: i64) -> ProductResult<Product> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(ProductError::NotFound(id))
    }

    /// Exact sku lookup across all products; absence is a valid outcome
    #[instrument(skip(self))]
    pub async fn find_by_sku(&self, sku: &str) -> ProductResult<Option<Product>> {
        self.repository.find_by_sku(sku).await
    }

    /// Create a new product
    ///
    /// Fails with DuplicateSku when the supplied sku is already held by
    /// another record. The DTO carries no id, so identity is always
    /// assigned by the store.
    #[instrument(skip(self, input), fields(product_name = %input.name))]
    pub async fn create_product(&self, input: CreateProduct) -> ProductResult<Product> {
        input
            .validate()
            .map_err(|e| ProductError::Validation(e.to_string()))?;

        if let Some(ref sku) = input.sku {
            if self.repository.find_by_sku(sku).await?.is_some() {
                return Err(ProductError::DuplicateSku(sku.clone()));
            }
        }

        self.repository.save(Product::new(input)).await
    }

    /// Update an existing product
    ///
    /// Applies the whitelist merge onto the stored record; `id` and
    /// `created_at` survive untouched. Changing the sku to one held by a
    /// *different* record fails with DuplicateSku.
    #[instrument(skip(self, input))]
    pub async fn update_product(&self, id: i64, input: UpdateProduct) -> ProductResult<Product> {
        input
            .validate()
            .map_err(|e| ProductError::Validation(e.to_string()))?;

        let mut existing = self.get_product(id).await?;

        if let Some(ref new_sku) = input.sku {
            if existing.sku.as_ref() != Some(new_sku) {
                if let Some(holder) = self.repository.find_by_sku(new_sku).await? {
                    if holder.id != Some(id) {
                        return Err(ProductError::DuplicateSku(new_sku.clone()));
                    }
                }
            }
        }

        existing.apply_update(input);
        self.repository.save(existing).await
    }

    /// Soft-delete a product
    ///
    /// Flips the active flag; the record remains reachable by id and sku
    /// but disappears from active listings and counts.
    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: i64) -> ProductResult<()> {
        let mut existing = self.get_product(id).await?;

        existing.active = false;
        existing.updated_at = chrono::Utc::now();
        self.repository.save(existing).await?;

        tracing::info!(product_id = id, "Deactivated product");
        Ok(())
    }

    /// Permanently remove a product; its id is never reassigned
    #[instrument(skip(self))]
    pub async fn delete_product_hard(&self, id: i64) -> ProductResult<()> {
        if !self.repository.delete_by_id(id).await? {
            return Err(ProductError::NotFound(id));
        }
        Ok(())
    }

    /// Apply a stock delta through the store's atomic adjustment
    #[instrument(skip(self))]
    pub async fn update_stock(&self, id: i64, delta: i32) -> ProductResult<Product> {
        self.repository.adjust_stock(id, delta).await
    }
}

impl<R: ProductRepository> Clone for ProductService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}
