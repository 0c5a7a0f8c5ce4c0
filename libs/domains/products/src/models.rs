use chrono::{DateTime, Utc};
use sea_orm::{DeriveActiveEnum, EnumIter};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Product category
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    Default,
    DeriveActiveEnum,
    EnumIter,
    ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "product_category")]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ProductCategory {
    #[sea_orm(string_value = "electronics")]
    Electronics,
    #[sea_orm(string_value = "clothing")]
    Clothing,
    #[sea_orm(string_value = "food")]
    Food,
    #[sea_orm(string_value = "books")]
    Books,
    #[sea_orm(string_value = "home")]
    Home,
    #[sea_orm(string_value = "sports")]
    Sports,
    #[default]
    #[sea_orm(string_value = "other")]
    Other,
}

/// Sortable fields for product listings
///
/// A whitelist instead of a free-form column string, so unknown sort keys
/// are rejected at query deserialization rather than leaking into SQL.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, Default, ToSchema,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ProductSortField {
    #[default]
    Name,
    Price,
    Stock,
    CreatedAt,
    Id,
}

/// Pagination and sort parameters, constructed per request
#[derive(Debug, Clone)]
pub struct PageRequest {
    /// Zero-based page number
    pub page: u64,
    /// Page size; a size of 0 yields an empty page
    pub size: u64,
    pub sort: ProductSortField,
    pub ascending: bool,
}

impl PageRequest {
    pub fn new(page: u64, size: u64, sort: ProductSortField, ascending: bool) -> Self {
        Self {
            page,
            size,
            sort,
            ascending,
        }
    }

    /// Number of records to skip
    pub fn offset(&self) -> u64 {
        self.page * self.size
    }
}

/// Product entity
///
/// `id` is `None` until the store assigns one on first save. `active` is
/// the soft-delete flag: inactive products stay reachable by id and sku
/// but are excluded from active listings and counts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// Unique identifier assigned by the store
    pub id: Option<i64>,
    /// Product name
    pub name: String,
    /// Optional description
    pub description: Option<String>,
    /// Price in cents
    pub price_cents: i64,
    /// Units in stock
    pub stock: i32,
    /// Stock keeping unit - the secondary unique key
    pub sku: Option<String>,
    /// Product category
    pub category: ProductCategory,
    /// Optional image URL
    pub image_url: Option<String>,
    /// Soft-delete flag
    pub active: bool,
    /// Creation timestamp, server-managed
    pub created_at: DateTime<Utc>,
    /// Last update timestamp, server-managed
    pub updated_at: DateTime<Utc>,
}

/// DTO for creating a new product
///
/// Carries no id: identity is always server-assigned. New products start
/// out active.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateProduct {
    #[validate(length(min = 3, max = 100))]
    pub name: String,
    #[validate(length(max = 500))]
    pub description: Option<String>,
    /// Price in cents
    #[validate(range(min = 1))]
    pub price_cents: i64,
    #[validate(range(min = 0))]
    #[serde(default)]
    pub stock: i32,
    #[validate(length(min = 1, max = 50))]
    pub sku: Option<String>,
    #[serde(default)]
    pub category: ProductCategory,
    pub image_url: Option<String>,
}

/// DTO for updating an existing product
///
/// A PUT-style replacement of the mutable business fields; `id` and
/// `created_at` are never client-writable.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateProduct {
    #[validate(length(min = 3, max = 100))]
    pub name: String,
    #[validate(length(max = 500))]
    pub description: Option<String>,
    /// Price in cents
    #[validate(range(min = 1))]
    pub price_cents: i64,
    #[validate(range(min = 0))]
    pub stock: i32,
    #[validate(length(min = 1, max = 50))]
    pub sku: Option<String>,
    pub category: ProductCategory,
    pub image_url: Option<String>,
    #[serde(default = "default_true")]
    pub active: bool,
}

/// Query parameters for the product listing endpoint
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct ListProductsQuery {
    /// Zero-based page number
    #[serde(default)]
    pub page: u32,
    /// Page size
    #[serde(default = "default_page_size")]
    pub size: u32,
    /// Field to sort by
    #[serde(default)]
    pub sort: ProductSortField,
    /// Ascending (true) or descending (false)
    #[serde(default = "default_true")]
    pub asc: bool,
    /// Filter by name substring (bypasses pagination)
    pub name: Option<String>,
    /// Filter by category (bypasses pagination)
    pub category: Option<ProductCategory>,
}

fn default_page_size() -> u32 {
    10
}

fn default_true() -> bool {
    true
}

impl Product {
    /// Create a new product from the CreateProduct DTO, identity unassigned
    pub fn new(input: CreateProduct) -> Self {
        let now = Utc::now();
        Self {
            id: None,
            name: input.name,
            description: input.description,
            price_cents: input.price_cents,
            stock: input.stock,
            sku: input.sku,
            category: input.category,
            image_url: input.image_url,
            active: true,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply an UpdateProduct DTO onto this record
    ///
    /// Explicit whitelist of the mutable business fields; `id` and
    /// `created_at` are left untouched and `updated_at` is bumped.
    pub fn apply_update(&mut self, update: UpdateProduct) {
        self.name = update.name;
        self.description = update.description;
        self.price_cents = update.price_cents;
        self.stock = update.stock;
        self.sku = update.sku;
        self.category = update.category;
        self.image_url = update.image_url;
        self.active = update.active;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_input() -> CreateProduct {
        CreateProduct {
            name: "Mechanical Keyboard".to_string(),
            description: Some("Tenkeyless, brown switches".to_string()),
            price_cents: 8999,
            stock: 12,
            sku: Some("KB-TKL-01".to_string()),
            category: ProductCategory::Electronics,
            image_url: None,
        }
    }

    #[test]
    fn test_new_product_starts_active_without_id() {
        let product = Product::new(create_input());
        assert_eq!(product.id, None);
        assert!(product.active);
        assert_eq!(product.created_at, product.updated_at);
    }

    #[test]
    fn test_apply_update_preserves_identity_and_created_at() {
        let mut product = Product::new(create_input());
        product.id = Some(3);
        let created_at = product.created_at;

        product.apply_update(UpdateProduct {
            name: "Ergonomic Keyboard".to_string(),
            description: None,
            price_cents: 12999,
            stock: 5,
            sku: Some("KB-ERGO-01".to_string()),
            category: ProductCategory::Electronics,
            image_url: None,
            active: true,
        });

        assert_eq!(product.id, Some(3));
        assert_eq!(product.created_at, created_at);
        assert_eq!(product.name, "Ergonomic Keyboard");
        assert_eq!(product.price_cents, 12999);
        assert!(product.updated_at >= created_at);
    }

    #[test]
    fn test_create_validation_rejects_short_name() {
        let input = CreateProduct {
            name: "ab".to_string(),
            ..create_input()
        };
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_create_validation_rejects_zero_price() {
        let input = CreateProduct {
            price_cents: 0,
            ..create_input()
        };
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_create_validation_rejects_negative_stock() {
        let input = CreateProduct {
            stock: -1,
            ..create_input()
        };
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_page_request_offset() {
        let page = PageRequest::new(2, 10, ProductSortField::Name, true);
        assert_eq!(page.offset(), 20);
    }

    #[test]
    fn test_category_round_trips_through_strings() {
        use std::str::FromStr;
        assert_eq!(ProductCategory::Electronics.to_string(), "electronics");
        assert_eq!(
            ProductCategory::from_str("books").unwrap(),
            ProductCategory::Books
        );
    }

    #[test]
    fn test_sort_field_parses_snake_case() {
        use std::str::FromStr;
        assert_eq!(
            ProductSortField::from_str("created_at").unwrap(),
            ProductSortField::CreatedAt
        );
    }
}
