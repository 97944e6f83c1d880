//! Order types.

use crate::error::CommerceError;
use crate::ids::{OrderId, OrderItemId, ProductId, UserId};
use crate::money::{Currency, Money};
use crate::pricing::CartView;
use serde::{Deserialize, Serialize};

/// Order fulfillment status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum OrderStatus {
    /// Order placed, not yet processed.
    #[default]
    New,
    /// Being prepared.
    Processing,
    /// Handed to delivery.
    Shipped,
    /// Delivered and closed.
    Done,
    /// Cancelled.
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::New => "new",
            OrderStatus::Processing => "processing",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Done => "done",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "new" => Some(OrderStatus::New),
            "processing" => Some(OrderStatus::Processing),
            "shipped" => Some(OrderStatus::Shipped),
            "done" => Some(OrderStatus::Done),
            "cancelled" => Some(OrderStatus::Cancelled),
            _ => None,
        }
    }
}

/// Customer contact details collected at checkout.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CustomerInfo {
    /// Customer name (required).
    pub name: String,
    /// Contact phone (required).
    pub phone: String,
    /// Contact email (required, lowercased).
    pub email: String,
    /// Delivery address, if any.
    pub delivery_address: Option<String>,
}

impl CustomerInfo {
    /// Validate that the required contact fields are present.
    pub fn validate(&self) -> Result<(), CommerceError> {
        if self.name.trim().is_empty()
            || self.phone.trim().is_empty()
            || self.email.trim().is_empty()
        {
            return Err(CommerceError::ValidationError(
                "name, phone and email are required".to_string(),
            ));
        }
        Ok(())
    }
}

/// A line within an order, priced at order time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderItem {
    /// Unique line identifier.
    pub id: OrderItemId,
    /// The ordered product.
    pub product_id: ProductId,
    /// Product name at order time.
    pub product_name: String,
    /// Quantity ordered.
    pub qty: i64,
    /// Unit price captured at order time.
    pub unit_price: Money,
}

impl OrderItem {
    /// qty * unit_price.
    pub fn line_total(&self) -> Money {
        self.unit_price
            .try_multiply(self.qty)
            .unwrap_or(Money::new(i64::MAX, self.unit_price.currency))
    }
}

/// A placed order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    /// Unique order identifier.
    pub id: OrderId,
    /// Human-readable order number ("Заказ №7").
    pub number: u64,
    /// Fulfillment status.
    pub status: OrderStatus,
    /// The ordering user.
    pub user_id: UserId,
    /// Customer contact details.
    pub customer: CustomerInfo,
    /// Order lines.
    pub items: Vec<OrderItem>,
    /// Order currency.
    pub currency: Currency,
    /// Unix timestamp of creation.
    pub created_at: i64,
    /// Unix timestamp of last update.
    pub updated_at: i64,
}

impl Order {
    /// Build an order from a priced cart view.
    ///
    /// The view must be non-empty; line prices are captured as-is.
    pub fn from_cart_view(
        user_id: UserId,
        customer: CustomerInfo,
        view: &CartView,
    ) -> Result<Self, CommerceError> {
        customer.validate()?;
        if view.is_empty() {
            return Err(CommerceError::ValidationError("cart is empty".to_string()));
        }

        let now = current_timestamp();
        let items = view
            .lines
            .iter()
            .map(|line| OrderItem {
                id: OrderItemId::generate(),
                product_id: line.product.id.clone(),
                product_name: line.product.name.clone(),
                qty: line.qty,
                unit_price: line.unit_price,
            })
            .collect();

        Ok(Self {
            id: OrderId::generate(),
            number: 0, // assigned by the store on insert
            status: OrderStatus::New,
            user_id,
            customer,
            items,
            currency: view.total.currency,
            created_at: now,
            updated_at: now,
        })
    }

    /// Sum of line totals.
    pub fn total_amount(&self) -> Money {
        let mut total = Money::zero(self.currency);
        for item in &self.items {
            total = total.try_add(&item.line_total()).unwrap_or(total);
        }
        total
    }

    /// Total item count (sum of quantities).
    pub fn item_count(&self) -> i64 {
        self.items.iter().map(|i| i.qty).sum()
    }
}

fn current_timestamp() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}
