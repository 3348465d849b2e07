//! Product catalogue domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::product::{CreateProductDto, ProductDto, UpdateProductDto},
    server::util::pagination::PageRequest,
};

/// Catalogue product. Money fields are rupiah per unit.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub category: String,
    pub price: i64,
    pub discount: i64,
    /// Experience points granted per unit bought.
    pub exp: i64,
    /// Grams of plastic saved per unit bought.
    pub gram_plastic: i64,
    pub stock: i32,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    pub fn into_dto(self) -> ProductDto {
        ProductDto {
            id: self.id,
            name: self.name,
            description: self.description,
            category: self.category,
            price: self.price,
            discount: self.discount,
            exp: self.exp,
            gram_plastic: self.gram_plastic,
            stock: self.stock,
            image_url: self.image_url,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    pub fn from_entity(entity: entity::product::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            category: entity.category,
            price: entity.price,
            discount: entity.discount,
            exp: entity.exp,
            gram_plastic: entity.gram_plastic,
            stock: entity.stock,
            image_url: entity.image_url,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateProductParam {
    pub name: String,
    pub description: String,
    pub category: String,
    pub price: i64,
    pub discount: i64,
    pub exp: i64,
    pub gram_plastic: i64,
    pub stock: i32,
    pub image_url: Option<String>,
}

impl CreateProductParam {
    pub fn from_dto(dto: CreateProductDto) -> Self {
        Self {
            name: dto.name,
            description: dto.description,
            category: dto.category,
            price: dto.price,
            discount: dto.discount,
            exp: dto.exp,
            gram_plastic: dto.gram_plastic,
            stock: dto.stock,
            image_url: dto.image_url,
        }
    }
}

/// Partial update; `None` keeps the stored value.
#[derive(Debug, Clone, Default)]
pub struct UpdateProductParam {
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub price: Option<i64>,
    pub discount: Option<i64>,
    pub exp: Option<i64>,
    pub gram_plastic: Option<i64>,
    pub stock: Option<i32>,
    pub image_url: Option<String>,
}

impl UpdateProductParam {
    pub fn from_dto(dto: UpdateProductDto) -> Self {
        Self {
            name: dto.name,
            description: dto.description,
            category: dto.category,
            price: dto.price,
            discount: dto.discount,
            exp: dto.exp,
            gram_plastic: dto.gram_plastic,
            stock: dto.stock,
            image_url: dto.image_url,
        }
    }
}

/// Filters for the public product listing.
#[derive(Debug, Clone)]
pub struct GetProductsParam {
    /// Substring matched against the product name.
    pub search: Option<String>,
    /// Exact category match.
    pub category: Option<String>,
    pub page: PageRequest,
}
