//! Checkout order record
//!
//! Built once at checkout time, rendered into the outbound message,
//! then dropped. Never persisted.

use serde::{Deserialize, Serialize};

use super::cart::CartLineItem;

/// Fulfillment mode chosen at checkout
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Fulfillment {
    /// Delivery to a customer-provided address (fixed surcharge)
    Delivery { address: String },
    /// Pickup at the store (the store address is substituted)
    Pickup,
}

impl Fulfillment {
    pub fn is_delivery(&self) -> bool {
        matches!(self, Self::Delivery { .. })
    }
}

/// Payment mode chosen at checkout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    /// Pay on receipt
    #[default]
    Cash,
    /// Pay up front; the summary carries the transfer destination
    BankTransfer,
}

impl PaymentMethod {
    /// Label used in the order summary
    pub fn summary_label(&self) -> &'static str {
        match self {
            Self::Cash => "EFECTIVO",
            Self::BankTransfer => "TRANSFERENCIA BANCARIA",
        }
    }
}

/// Finalized order, input to the summarizer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRecord {
    /// Generated once per checkout session, stable across re-renders
    pub order_number: String,
    pub customer_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub fulfillment: Fulfillment,
    pub payment: PaymentMethod,
    pub items: Vec<CartLineItem>,
    /// Sum of line totals, MXN
    pub subtotal: i64,
    /// Fixed delivery surcharge; 0 for pickup
    pub delivery_fee: i64,
    /// `subtotal + delivery_fee`
    pub total: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payment_labels() {
        assert_eq!(PaymentMethod::Cash.summary_label(), "EFECTIVO");
        assert_eq!(
            PaymentMethod::BankTransfer.summary_label(),
            "TRANSFERENCIA BANCARIA"
        );
    }

    #[test]
    fn test_fulfillment_mode() {
        assert!(Fulfillment::Delivery { address: "Calle 1".into() }.is_delivery());
        assert!(!Fulfillment::Pickup.is_delivery());
    }
}
