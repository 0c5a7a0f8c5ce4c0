//! PostgreSQL implementation of ProductRepository

use async_trait::async_trait;
use sea_orm::sea_query::{extension::postgres::PgExpr, Expr, ExprTrait, OnConflict};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, Order, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect,
};

use crate::entity;
use crate::error::{ProductError, ProductResult};
use crate::models::{PageRequest, Product, ProductCategory, ProductSortField};
use crate::repository::ProductRepository;

/// PostgreSQL implementation of the ProductRepository
///
/// Identity comes from the table's BIGSERIAL primary key, so ids are
/// unique and monotonic without any coordination on this side. Stock
/// adjustment is a single conditional UPDATE, making the read-modify-write
/// atomic at the database.
pub struct PgProductRepository {
    db: DatabaseConnection,
}

impl PgProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn sort_column(sort: ProductSortField) -> entity::Column {
        match sort {
            ProductSortField::Name => entity::Column::Name,
            ProductSortField::Price => entity::Column::PriceCents,
            ProductSortField::Stock => entity::Column::Stock,
            ProductSortField::CreatedAt => entity::Column::CreatedAt,
            ProductSortField::Id => entity::Column::Id,
        }
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn find_all(&self) -> ProductResult<Vec<Product>> {
        let models = entity::Entity::find()
            .order_by_asc(entity::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: i64) -> ProductResult<Option<Product>> {
        let model = entity::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(Into::into))
    }

    async fn save(&self, product: Product) -> ProductResult<Product> {
        let has_id = product.id.is_some();
        let active_model: entity::ActiveModel = product.into();

        let model = if has_id {
            // Upsert: an explicit id overwrites the existing slot
            entity::Entity::insert(active_model)
                .on_conflict(
                    OnConflict::column(entity::Column::Id)
                        .update_columns([
                            entity::Column::Name,
                            entity::Column::Description,
                            entity::Column::PriceCents,
                            entity::Column::Stock,
                            entity::Column::Sku,
                            entity::Column::Category,
                            entity::Column::ImageUrl,
                            entity::Column::Active,
                            entity::Column::UpdatedAt,
                        ])
                        .to_owned(),
                )
                .exec_with_returning(&self.db)
                .await?
        } else {
            active_model.insert(&self.db).await?
        };

        tracing::info!(product_id = model.id, "Saved product");
        Ok(model.into())
    }

    async fn exists_by_id(&self, id: i64) -> ProductResult<bool> {
        let count = entity::Entity::find_by_id(id).count(&self.db).await?;
        Ok(count > 0)
    }

    async fn delete_by_id(&self, id: i64) -> ProductResult<bool> {
        let result = entity::Entity::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected > 0 {
            tracing::info!(product_id = id, "Deleted product");
            Ok(true)
        } else {
            Ok(false)
        }
    }

    async fn find_active(&self, page: &PageRequest) -> ProductResult<Vec<Product>> {
        let order = if page.ascending {
            Order::Asc
        } else {
            Order::Desc
        };

        let models = entity::Entity::find()
            .filter(entity::Column::Active.eq(true))
            .order_by(Self::sort_column(page.sort), order)
            // Ties resolve by id so page boundaries are stable
            .order_by_asc(entity::Column::Id)
            .limit(page.size)
            .offset(page.offset())
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn find_by_name_contains(&self, name: &str) -> ProductResult<Vec<Product>> {
        let needle = name.trim();
        if needle.is_empty() {
            return Err(ProductError::Validation(
                "search name must not be blank".to_string(),
            ));
        }

        let models = entity::Entity::find()
            .filter(entity::Column::Active.eq(true))
            .filter(Expr::col(entity::Column::Name).ilike(format!("%{}%", needle)))
            .order_by_asc(entity::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn find_by_category(&self, category: ProductCategory) -> ProductResult<Vec<Product>> {
        let models = entity::Entity::find()
            .filter(entity::Column::Active.eq(true))
            .filter(entity::Column::Category.eq(category))
            .order_by_asc(entity::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn find_by_sku(&self, sku: &str) -> ProductResult<Option<Product>> {
        let model = entity::Entity::find()
            .filter(entity::Column::Sku.eq(sku))
            .one(&self.db)
            .await?;

        Ok(model.map(Into::into))
    }

    async fn count_active(&self) -> ProductResult<u64> {
        let count = entity::Entity::find()
            .filter(entity::Column::Active.eq(true))
            .count(&self.db)
            .await?;

        Ok(count)
    }

    async fn adjust_stock(&self, id: i64, delta: i32) -> ProductResult<Product> {
        // Single conditional UPDATE: the stock check and the write happen
        // in one statement, so concurrent adjustments cannot interleave.
        let result = entity::Entity::update_many()
            .col_expr(
                entity::Column::Stock,
                Expr::col(entity::Column::Stock).add(delta),
            )
            .col_expr(entity::Column::UpdatedAt, Expr::current_timestamp().into())
            .filter(entity::Column::Id.eq(id))
            .filter(entity::Column::Stock.gte(-delta))
            .exec(&self.db)
            .await?;

        if result.rows_affected == 0 {
            // Nothing matched: either the id is unknown or the delta would
            // have pushed stock below zero.
            return match self.find_by_id(id).await? {
                None => Err(ProductError::NotFound(id)),
                Some(product) => Err(ProductError::InsufficientStock {
                    available: product.stock,
                    requested: delta,
                }),
            };
        }

        tracing::info!(product_id = id, delta, "Adjusted stock");
        self.find_by_id(id)
            .await?
            .ok_or(ProductError::NotFound(id))
    }
}
