//! Checkout types: orders and customer info.

mod order;

pub use order::{CustomerInfo, Order, OrderItem, OrderStatus};
