use crate::models::{Product, ProductCategory};
use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::{NotSet, Set};
use serde::{Deserialize, Serialize};

/// Sea-ORM Entity for the products table
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price_cents: i64,
    pub stock: i32,
    #[sea_orm(unique)]
    pub sku: Option<String>,
    pub category: ProductCategory,
    pub image_url: Option<String>,
    pub active: bool,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

// Conversion from Sea-ORM Model to domain Product
impl From<Model> for Product {
    fn from(model: Model) -> Self {
        Self {
            id: Some(model.id),
            name: model.name,
            description: model.description,
            price_cents: model.price_cents,
            stock: model.stock,
            sku: model.sku,
            category: model.category,
            image_url: model.image_url,
            active: model.active,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        }
    }
}

// Conversion from domain Product to Sea-ORM ActiveModel
//
// An unassigned id maps to NotSet so the database sequence allocates one.
impl From<Product> for ActiveModel {
    fn from(product: Product) -> Self {
        ActiveModel {
            id: match product.id {
                Some(id) => Set(id),
                None => NotSet,
            },
            name: Set(product.name),
            description: Set(product.description),
            price_cents: Set(product.price_cents),
            stock: Set(product.stock),
            sku: Set(product.sku),
            category: Set(product.category),
            image_url: Set(product.image_url),
            active: Set(product.active),
            created_at: Set(product.created_at.into()),
            updated_at: Set(product.updated_at.into()),
        }
    }
}
