//! Checkout arithmetic.
//!
//! Pure functions turning a cart into per-line and grand totals. Every per-line value is
//! the product's unit value multiplied by the quantity; grand totals are plain sums.
//! Database access and voucher lookup stay in the order service.

use std::collections::HashMap;

use crate::server::{error::AppError, model::product::Product};

/// One requested cart line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartItem {
    pub product_id: i32,
    pub quantity: i32,
}

/// Merges duplicate product lines and validates quantities.
///
/// Lines keep the order in which each product first appears.
///
/// # Returns
/// - `Ok(Vec<CartItem>)` - One line per product with summed quantities
/// - `Err(AppError::BadRequest)` - Empty cart, a quantity `<= 0`, or merged quantities
///   that overflow
pub fn merge_cart(items: Vec<CartItem>) -> Result<Vec<CartItem>, AppError> {
    if items.is_empty() {
        return Err(AppError::BadRequest("Cart is empty".to_string()));
    }

    let mut merged: Vec<CartItem> = Vec::with_capacity(items.len());
    let mut index: HashMap<i32, usize> = HashMap::new();

    for item in items {
        if item.quantity <= 0 {
            return Err(AppError::BadRequest(format!(
                "Quantity for product {} must be greater than zero",
                item.product_id
            )));
        }

        match index.get(&item.product_id) {
            Some(&i) => {
                merged[i].quantity = merged[i]
                    .quantity
                    .checked_add(item.quantity)
                    .ok_or_else(|| quantity_too_large(item.product_id))?;
            }
            None => {
                index.insert(item.product_id, merged.len());
                merged.push(item);
            }
        }
    }

    Ok(merged)
}

fn quantity_too_large(product_id: i32) -> AppError {
    AppError::BadRequest(format!("Quantity for product {} is too large", product_id))
}

fn totals_too_large() -> AppError {
    AppError::BadRequest("Order totals are too large".to_string())
}

/// Totals of a single order line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineTotals {
    pub product_id: i32,
    pub quantity: i32,
    pub unit_price: i64,
    pub total_price: i64,
    pub total_discount: i64,
    pub total_exp: i64,
    pub total_gram_plastic: i64,
}

impl LineTotals {
    /// # Returns
    /// - `Ok(LineTotals)` - Unit values multiplied by `quantity`
    /// - `Err(AppError::BadRequest)` - A line total overflows
    pub fn new(product: &Product, quantity: i32) -> Result<Self, AppError> {
        let qty = i64::from(quantity);
        let times_qty = |value: i64| qty.checked_mul(value).ok_or_else(totals_too_large);

        Ok(Self {
            product_id: product.id,
            quantity,
            unit_price: product.price,
            total_price: times_qty(product.price)?,
            total_discount: times_qty(product.discount)?,
            total_exp: times_qty(product.exp)?,
            total_gram_plastic: times_qty(product.gram_plastic)?,
        })
    }
}

/// Grand totals of an order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderTotals {
    pub grand_total_quantity: i32,
    pub grand_total_price: i64,
    pub grand_total_discount: i64,
    pub grand_total_exp: i64,
    pub grand_total_gram_plastic: i64,
    pub shipment_fee: i64,
    pub admin_fee: i64,
    pub total_payment: i64,
}

impl OrderTotals {
    /// Sums line totals. Fees and `total_payment` stay 0 until [`OrderTotals::finalize`].
    ///
    /// # Returns
    /// - `Ok(OrderTotals)` - Summed totals
    /// - `Err(AppError::BadRequest)` - A sum overflows
    pub fn from_lines(lines: &[LineTotals]) -> Result<Self, AppError> {
        lines.iter().try_fold(Self::default(), |mut acc, line| {
            acc.grand_total_quantity = acc
                .grand_total_quantity
                .checked_add(line.quantity)
                .ok_or_else(totals_too_large)?;
            acc.grand_total_price = add(acc.grand_total_price, line.total_price)?;
            acc.grand_total_discount = add(acc.grand_total_discount, line.total_discount)?;
            acc.grand_total_exp = add(acc.grand_total_exp, line.total_exp)?;
            acc.grand_total_gram_plastic =
                add(acc.grand_total_gram_plastic, line.total_gram_plastic)?;
            Ok(acc)
        })
    }

    /// Adds a voucher discount on top of the product discounts.
    pub fn apply_voucher(&mut self, discount: i64) -> Result<(), AppError> {
        self.grand_total_discount = add(self.grand_total_discount, discount)?;
        Ok(())
    }

    /// Sets the fees and computes `max(0, price - discount) + shipment_fee + admin_fee`.
    pub fn finalize(&mut self, shipment_fee: i64, admin_fee: i64) -> Result<(), AppError> {
        let net = self
            .grand_total_price
            .checked_sub(self.grand_total_discount)
            .ok_or_else(totals_too_large)?
            .max(0);

        self.shipment_fee = shipment_fee;
        self.admin_fee = admin_fee;
        self.total_payment = add(add(net, shipment_fee)?, admin_fee)?;
        Ok(())
    }
}

fn add(a: i64, b: i64) -> Result<i64, AppError> {
    a.checked_add(b).ok_or_else(totals_too_large)
}
