//! Cart line items and the cart aggregate
//!
//! The cart is an insertion-ordered sequence of line items, merged by
//! identity key. All collection logic lives here; the engine crate
//! wraps it with the durable mirror.

use serde::{Deserialize, Serialize};

/// Kind of product behind a cart row
///
/// Drives the label used in the checkout summary: pizzas stay
/// `PIZZA`, boneless orders and snacks become `ANTOJITO`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ItemKind {
    /// Build-your-own pizza (tier-priced by weighted ingredients)
    Custom,
    /// Fixed-menu specialty pizza
    Specialty,
    /// Boneless order
    Boneless,
    /// Side item
    Snack,
}

impl ItemKind {
    /// Category tag used per line in the order summary
    pub fn summary_tag(&self) -> &'static str {
        match self {
            Self::Custom | Self::Specialty => "PIZZA",
            Self::Boneless | Self::Snack => "ANTOJITO",
        }
    }
}

/// Identity of a cart row: product kind + id + canonical detail text
///
/// Two additions with equal keys merge by summing quantity; rows with
/// the same display name but different details stay distinct. A
/// tagged struct rather than a concatenated string, so "hawaiana" +
/// "grande" can never collide with "hawaiana-grande".
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemKey {
    pub kind: ItemKind,
    pub product_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// One cart row
///
/// `unit_price` is computed once by the pricing rules when the item
/// enters the cart and never recomputed afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLineItem {
    pub kind: ItemKind,
    pub product_id: String,
    pub name: String,
    /// Per-unit price in MXN, inclusive of tier/modifier pricing
    pub unit_price: i64,
    /// Always >= 1; a row reaching 0 is removed, never stored
    pub quantity: u32,
    /// Free-form description, shown in the cart and part of identity
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl CartLineItem {
    /// Identity key for merge/update/remove
    pub fn key(&self) -> ItemKey {
        ItemKey {
            kind: self.kind,
            product_id: self.product_id.clone(),
            detail: self.details.clone(),
        }
    }

    pub fn line_total(&self) -> i64 {
        self.unit_price * self.quantity as i64
    }
}

/// Cart aggregate (insertion order preserved for display)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    pub items: Vec<CartLineItem>,
}

impl Cart {
    /// Add an item, merging with an existing row of equal key
    ///
    /// On merge the existing row keeps its unit price and gains the
    /// incoming quantity. Items with quantity 0 are ignored.
    pub fn add(&mut self, item: CartLineItem) {
        if item.quantity == 0 {
            return;
        }
        let key = item.key();
        if let Some(existing) = self.items.iter_mut().find(|i| i.key() == key) {
            existing.quantity += item.quantity;
        } else {
            self.items.push(item);
        }
    }

    /// Set a row's quantity exactly; `quantity <= 0` removes the row
    pub fn update_quantity(&mut self, key: &ItemKey, quantity: i64) {
        if quantity <= 0 {
            self.remove(key);
            return;
        }
        if let Some(existing) = self.items.iter_mut().find(|i| i.key() == *key) {
            // saturate rather than wrap on an oversized quantity
            existing.quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        }
    }

    /// Remove a row; no-op if absent
    pub fn remove(&mut self, key: &ItemKey) {
        self.items.retain(|i| i.key() != *key);
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of all quantities
    pub fn total_items(&self) -> u64 {
        self.items.iter().map(|i| i.quantity as u64).sum()
    }

    /// Sum of `unit_price * quantity` across all rows
    pub fn total_price(&self) -> i64 {
        self.items.iter().map(|i| i.line_total()).sum()
    }
}
