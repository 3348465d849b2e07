//! Product catalogue service.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::product::ProductRepository,
    error::AppError,
    model::product::{CreateProductParam, GetProductsParam, Product, UpdateProductParam},
    util::pagination::Page,
};

pub struct ProductService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProductService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a product.
    ///
    /// # Returns
    /// - `Ok(Product)` - Created product
    /// - `Err(AppError::BadRequest)` - Blank name/category or a negative amount
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn create(&self, param: CreateProductParam) -> Result<Product, AppError> {
        if param.name.trim().is_empty() || param.category.trim().is_empty() {
            return Err(AppError::BadRequest(
                "Product name and category are required".to_string(),
            ));
        }
        validate_amounts(
            Some(param.price),
            Some(param.discount),
            Some(param.exp),
            Some(param.gram_plastic),
            Some(param.stock),
        )?;

        let product_repo = ProductRepository::new(self.db);

        Ok(product_repo.create(param).await?)
    }

    pub async fn get(&self, id: i32) -> Result<Product, AppError> {
        let product_repo = ProductRepository::new(self.db);

        product_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Product not found".to_string()))
    }

    pub async fn list(&self, param: GetProductsParam) -> Result<Page<Product>, AppError> {
        let product_repo = ProductRepository::new(self.db);

        Ok(product_repo.get_paginated(&param).await?)
    }

    /// Applies a partial update.
    ///
    /// # Returns
    /// - `Ok(Product)` - Updated product
    /// - `Err(AppError::BadRequest)` - A negative amount
    /// - `Err(AppError::NotFound)` - No live product with that id
    pub async fn update(&self, id: i32, param: UpdateProductParam) -> Result<Product, AppError> {
        validate_amounts(
            param.price,
            param.discount,
            param.exp,
            param.gram_plastic,
            param.stock,
        )?;

        let product_repo = ProductRepository::new(self.db);

        product_repo
            .update(id, param)
            .await?
            .ok_or_else(|| AppError::NotFound("Product not found".to_string()))
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let product_repo = ProductRepository::new(self.db);

        if !product_repo.soft_delete(id).await? {
            return Err(AppError::NotFound("Product not found".to_string()));
        }

        Ok(())
    }
}

fn validate_amounts(
    price: Option<i64>,
    discount: Option<i64>,
    exp: Option<i64>,
    gram_plastic: Option<i64>,
    stock: Option<i32>,
) -> Result<(), AppError> {
    let negative = [price, discount, exp, gram_plastic]
        .into_iter()
        .flatten()
        .any(|v| v < 0)
        || stock.is_some_and(|s| s < 0);

    if negative {
        return Err(AppError::BadRequest(
            "Price, discount, exp, gram_plastic and stock cannot be negative".to_string(),
        ));
    }

    Ok(())
}
