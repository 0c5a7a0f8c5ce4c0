use async_trait::async_trait;

use crate::error::ProductResult;
use crate::models::{PageRequest, Product, ProductCategory};

/// Repository trait for Product persistence
///
/// One polymorphic capability with two implementations: the PostgreSQL
/// store and an in-memory store. Besides the id-keyed contract (save with
/// sequence-assigned ids, copies on read, delete reporting existence), it
/// carries the query layer: active-only listings with deterministic
/// ordering, filters, sku lookup across all records, and an atomic stock
/// adjustment.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// All stored products, active or not, as copies
    async fn find_all(&self) -> ProductResult<Vec<Product>>;

    /// Look up a product by id; absence is a valid outcome, not an error
    async fn find_by_id(&self, id: i64) -> ProductResult<Option<Product>>;

    /// Insert or overwrite a product
    ///
    /// When `product.id` is `None` the store atomically assigns the next
    /// sequence value; otherwise the existing slot is overwritten.
    async fn save(&self, product: Product) -> ProductResult<Product>;

    /// Check whether a product with the given id exists
    async fn exists_by_id(&self, id: i64) -> ProductResult<bool>;

    /// Remove a product permanently; returns whether a record existed
    async fn delete_by_id(&self, id: i64) -> ProductResult<bool>;

    /// Active products only, ordered by the requested field and direction
    /// with ties broken by id, restricted to the requested page
    async fn find_active(&self, page: &PageRequest) -> ProductResult<Vec<Product>>;

    /// Active products whose name contains the given substring,
    /// case-insensitively; fails with a validation error for blank input
    async fn find_by_name_contains(&self, name: &str) -> ProductResult<Vec<Product>>;

    /// Active products in the given category
    async fn find_by_category(&self, category: ProductCategory) -> ProductResult<Vec<Product>>;

    /// Exact sku lookup across all products, active or not
    async fn find_by_sku(&self, sku: &str) -> ProductResult<Option<Product>>;

    /// Number of active products; consistent with `find_active`
    async fn count_active(&self) -> ProductResult<u64>;

    /// Atomically apply a stock delta
    ///
    /// A single read-modify-write at the store boundary: fails NotFound
    /// for a missing id and InsufficientStock when the delta would push
    /// stock below zero, leaving the record untouched in both cases.
    async fn adjust_stock(&self, id: i64, delta: i32) -> ProductResult<Product>;
}
