//! In-memory implementation of ProductRepository

use async_trait::async_trait;
use std::cmp::Ordering as CmpOrdering;
use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{ProductError, ProductResult};
use crate::models::{PageRequest, Product, ProductCategory, ProductSortField};
use crate::repository::ProductRepository;

/// In-memory implementation of the ProductRepository
///
/// Mirrors the PostgreSQL store's semantics on an `RwLock`-protected map
/// with an atomic id sequence starting at 1. `adjust_stock` performs its
/// check-and-apply under the write lock, so readers never observe a
/// partially applied value.
#[derive(Debug, Clone)]
pub struct InMemoryProductRepository {
    entries: Arc<RwLock<HashMap<i64, Product>>>,
    sequence: Arc<AtomicI64>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
            sequence: Arc::new(AtomicI64::new(1)),
        }
    }

    fn compare(a: &Product, b: &Product, sort: ProductSortField) -> CmpOrdering {
        match sort {
            ProductSortField::Name => a.name.cmp(&b.name),
            ProductSortField::Price => a.price_cents.cmp(&b.price_cents),
            ProductSortField::Stock => a.stock.cmp(&b.stock),
            ProductSortField::CreatedAt => a.created_at.cmp(&b.created_at),
            ProductSortField::Id => a.id.cmp(&b.id),
        }
    }
}

impl Default for InMemoryProductRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn find_all(&self) -> ProductResult<Vec<Product>> {
        let entries = self.entries.read().await;
        let mut products: Vec<Product> = entries.values().cloned().collect();
        products.sort_by_key(|p| p.id);
        Ok(products)
    }

    async fn find_by_id(&self, id: i64) -> ProductResult<Option<Product>> {
        let entries = self.entries.read().await;
        Ok(entries.get(&id).cloned())
    }

    async fn save(&self, mut product: Product) -> ProductResult<Product> {
        let id = match product.id {
            Some(id) => id,
            None => self.sequence.fetch_add(1, Ordering::SeqCst),
        };
        product.id = Some(id);

        let mut entries = self.entries.write().await;
        entries.insert(id, product.clone());

        tracing::debug!(product_id = id, "Saved product");
        Ok(product)
    }

    async fn exists_by_id(&self, id: i64) -> ProductResult<bool> {
        let entries = self.entries.read().await;
        Ok(entries.contains_key(&id))
    }

    async fn delete_by_id(&self, id: i64) -> ProductResult<bool> {
        let mut entries = self.entries.write().await;
        Ok(entries.remove(&id).is_some())
    }

    async fn find_active(&self, page: &PageRequest) -> ProductResult<Vec<Product>> {
        let entries = self.entries.read().await;

        let mut products: Vec<Product> = entries.values().filter(|p| p.active).cloned().collect();

        products.sort_by(|a, b| {
            let ord = Self::compare(a, b, page.sort);
            let ord = if page.ascending { ord } else { ord.reverse() };
            // Ties resolve by id so page boundaries are stable
            ord.then_with(|| a.id.cmp(&b.id))
        });

        Ok(products
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.size as usize)
            .collect())
    }

    async fn find_by_name_contains(&self, name: &str) -> ProductResult<Vec<Product>> {
        let needle = name.trim().to_lowercase();
        if needle.is_empty() {
            return Err(ProductError::Validation(
                "search name must not be blank".to_string(),
            ));
        }

        let entries = self.entries.read().await;
        let mut products: Vec<Product> = entries
            .values()
            .filter(|p| p.active && p.name.to_lowercase().contains(&needle))
            .cloned()
            .collect();
        products.sort_by_key(|p| p.id);
        Ok(products)
    }

    async fn find_by_category(&self, category: ProductCategory) -> ProductResult<Vec<Product>> {
        let entries = self.entries.read().await;
        let mut products: Vec<Product> = entries
            .values()
            .filter(|p| p.active && p.category == category)
            .cloned()
            .collect();
        products.sort_by_key(|p| p.id);
        Ok(products)
    }

    async fn find_by_sku(&self, sku: &str) -> ProductResult<Option<Product>> {
        let entries = self.entries.read().await;
        Ok(entries
            .values()
            .find(|p| p.sku.as_deref() == Some(sku))
            .cloned())
    }

    async fn count_active(&self) -> ProductResult<u64> {
        let entries = self.entries.read().await;
        Ok(entries.values().filter(|p| p.active).count() as u64)
    }

    async fn adjust_stock(&self, id: i64, delta: i32) -> ProductResult<Product> {
        let mut entries = self.entries.write().await;

        let product = entries.get_mut(&id).ok_or(ProductError::NotFound(id))?;

        let new_stock = product.stock + delta;
        if new_stock < 0 {
            return Err(ProductError::InsufficientStock {
                available: product.stock,
                requested: delta,
            });
        }

        product.stock = new_stock;
        product.updated_at = chrono::Utc::now();

        tracing::debug!(product_id = id, stock = new_stock, "Adjusted stock");
        Ok(product.clone())
    }
}
