//! Order Models

use std::string::ToString;

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use adisyon::orders::{Order, OrderItem, OrderStatus, PaymentMethod};

use crate::{extensions::*, products::models::ProductResponse};

/// Order lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub(crate) enum OrderStatusBody {
    Open,
    Paid,
    Cancelled,
}

impl From<OrderStatus> for OrderStatusBody {
    fn from(status: OrderStatus) -> Self {
        match status {
            OrderStatus::Open => Self::Open,
            OrderStatus::Paid => Self::Paid,
            OrderStatus::Cancelled => Self::Cancelled,
        }
    }
}

impl From<OrderStatusBody> for OrderStatus {
    fn from(status: OrderStatusBody) -> Self {
        match status {
            OrderStatusBody::Open => Self::Open,
            OrderStatusBody::Paid => Self::Paid,
            OrderStatusBody::Cancelled => Self::Cancelled,
        }
    }
}

/// How an order was settled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) enum PaymentMethodBody {
    Cash,
    CreditCard,
    Other,
}

impl From<PaymentMethod> for PaymentMethodBody {
    fn from(method: PaymentMethod) -> Self {
        match method {
            PaymentMethod::Cash => Self::Cash,
            PaymentMethod::CreditCard => Self::CreditCard,
            PaymentMethod::Other => Self::Other,
        }
    }
}

impl From<PaymentMethodBody> for PaymentMethod {
    fn from(method: PaymentMethodBody) -> Self {
        match method {
            PaymentMethodBody::Cash => Self::Cash,
            PaymentMethodBody::CreditCard => Self::CreditCard,
            PaymentMethodBody::Other => Self::Other,
        }
    }
}

/// Order Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct OrderResponse {
    /// The unique identifier of the order
    #[serde(rename = "_id")]
    pub id: Uuid,

    /// Sequential order number
    pub order_number: u64,

    /// Line items in the order they were added
    pub items: Vec<OrderItemResponse>,

    /// Sum of line prices
    pub total_amount: f64,

    /// Lifecycle status
    pub status: OrderStatusBody,

    /// Set once the order is paid
    pub payment_method: Option<PaymentMethodBody>,

    /// Set once the order is paid
    pub paid_at: Option<String>,

    /// The date and time the order was created
    pub created_at: String,

    /// The date and time the order was last updated
    pub updated_at: String,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        OrderResponse {
            id: order.uuid.into_uuid(),
            order_number: order.number.get(),
            items: order.items.into_iter().map(OrderItemResponse::from).collect(),
            total_amount: order.total_amount.to_amount(),
            status: order.status.into(),
            payment_method: order.payment_method.map(Into::into),
            paid_at: order.paid_at.as_ref().map(ToString::to_string),
            created_at: order.created_at.to_string(),
            updated_at: order.updated_at.to_string(),
        }
    }
}

/// Order Item Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrderItemResponse {
    /// The product as it is in the catalog now
    pub product: ProductResponse,

    /// Units on the line
    pub quantity: u32,

    /// Line sub-total
    pub price: f64,
}

impl From<OrderItem> for OrderItemResponse {
    fn from(item: OrderItem) -> Self {
        OrderItemResponse {
            price: item.price.to_amount(),
            quantity: item.quantity,
            product: item.product.into(),
        }
    }
}
