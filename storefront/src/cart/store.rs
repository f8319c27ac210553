//! In-memory cart with write-through persistence
//!
//! The in-memory [`Cart`] is the source of truth for the whole
//! session; the mirror only matters at startup (hydration) and as a
//! best-effort crash safety net. Mirror failures degrade the store to
//! memory-only operation and are logged, never surfaced to the
//! ordering flow.

use std::path::Path;

use shared::models::{Cart, CartLineItem, ItemKey};

use super::mirror::CartMirror;

/// Session cart with a durable local mirror
pub struct CartStore {
    cart: Cart,
    mirror: Option<CartMirror>,
}

impl CartStore {
    /// Open the mirror at the given path and hydrate from it
    ///
    /// A mirror that cannot be opened or whose slot cannot be decoded
    /// yields an empty, memory-only cart.
    pub fn open(path: impl AsRef<Path>) -> Self {
        let mirror = match CartMirror::open(path) {
            Ok(mirror) => Some(mirror),
            Err(e) => {
                tracing::warn!(error = %e, "Cart mirror unavailable, running memory-only");
                None
            }
        };

        let cart = match mirror.as_ref().map(|m| m.load()) {
            Some(Ok(Some(cart))) => {
                tracing::debug!(items = cart.items.len(), "Cart hydrated from mirror");
                cart
            }
            Some(Ok(None)) => Cart::default(),
            Some(Err(e)) => {
                tracing::warn!(error = %e, "Cart slot unreadable, starting empty");
                Cart::default()
            }
            None => Cart::default(),
        };

        Self { cart, mirror }
    }

    /// Memory-only store (no mirror)
    pub fn in_memory() -> Self {
        Self {
            cart: Cart::default(),
            mirror: None,
        }
    }

    // ========== Reads ==========

    pub fn items(&self) -> &[CartLineItem] {
        &self.cart.items
    }

    pub fn is_empty(&self) -> bool {
        self.cart.is_empty()
    }

    pub fn total_items(&self) -> u64 {
        self.cart.total_items()
    }

    pub fn total_price(&self) -> i64 {
        self.cart.total_price()
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    // ========== Mutations (write-through) ==========

    pub fn add(&mut self, item: CartLineItem) {
        self.cart.add(item);
        self.persist();
    }

    pub fn update_quantity(&mut self, key: &ItemKey, quantity: i64) {
        self.cart.update_quantity(key, quantity);
        self.persist();
    }

    pub fn remove(&mut self, key: &ItemKey) {
        self.cart.remove(key);
        self.persist();
    }

    /// Empty the cart and erase the durable slot
    pub fn clear(&mut self) {
        self.cart.clear();
        if let Some(mirror) = &self.mirror
            && let Err(e) = mirror.erase()
        {
            tracing::warn!(error = %e, "Failed to erase cart slot");
        }
    }

    fn persist(&self) {
        if let Some(mirror) = &self.mirror
            && let Err(e) = mirror.save(&self.cart)
        {
            tracing::warn!(error = %e, "Failed to mirror cart");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::ItemKind;

    fn item(product_id: &str, price: i64, quantity: u32) -> CartLineItem {
        CartLineItem {
            kind: ItemKind::Specialty,
            product_id: product_id.to_string(),
            name: product_id.to_string(),
            unit_price: price,
            quantity,
            details: None,
        }
    }

    #[test]
    fn test_memory_only_operations() {
        let mut store = CartStore::in_memory();
        assert!(store.is_empty());

        store.add(item("hawaiana", 150, 2));
        store.add(item("mexicana", 180, 1));
        assert_eq!(store.total_items(), 3);
        assert_eq!(store.total_price(), 480);

        let key = store.items()[0].key();
        store.update_quantity(&key, 0);
        assert_eq!(store.total_price(), 180);
    }

    #[test]
    fn test_rehydrates_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cart.redb");

        {
            let mut store = CartStore::open(&path);
            store.add(item("hawaiana", 150, 2));
        }

        let store = CartStore::open(&path);
        assert_eq!(store.total_items(), 2);
        assert_eq!(store.total_price(), 300);
    }

    #[test]
    fn test_clear_survives_restart() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cart.redb");

        {
            let mut store = CartStore::open(&path);
            store.add(item("hawaiana", 150, 2));
            store.clear();
            assert!(store.is_empty());
        }

        let store = CartStore::open(&path);
        assert!(store.is_empty());
    }

    #[test]
    fn test_unopenable_mirror_degrades_to_memory() {
        // a directory is not a valid database file
        let dir = tempfile::tempdir().unwrap();
        let mut store = CartStore::open(dir.path());

        store.add(item("hawaiana", 150, 1));
        assert_eq!(store.total_price(), 150);
    }
}
