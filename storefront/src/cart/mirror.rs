//! redb-based durable mirror of the cart
//!
//! Single-slot layout: one table, one well-known key, value is the
//! JSON-serialized cart. The mirror is write-through from
//! [`super::CartStore`]; it is never the read path during a session,
//! only the hydration source at startup.

use redb::{Database, ReadableDatabase, TableDefinition};
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

use shared::models::Cart;

/// Cart slot table: key = slot name, value = JSON-serialized Cart
const CART_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("cart");

const CART_KEY: &str = "cart";

/// Mirror errors
#[derive(Debug, Error)]
pub enum MirrorError {
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    #[error("Storage error: {0}")]
    Storage(#[from] redb::StorageError),

    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type MirrorResult<T> = Result<T, MirrorError>;

/// Durable cart slot backed by redb
#[derive(Clone)]
pub struct CartMirror {
    db: Arc<Database>,
}

impl CartMirror {
    /// Open or create the database at the given path
    pub fn open(path: impl AsRef<Path>) -> MirrorResult<Self> {
        let db = Database::create(path)?;

        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(CART_TABLE)?;
        }
        write_txn.commit()?;

        Ok(Self { db: Arc::new(db) })
    }

    /// Open an in-memory database (for testing)
    #[cfg(test)]
    pub fn open_in_memory() -> MirrorResult<Self> {
        let db = Database::builder().create_with_backend(redb::backends::InMemoryBackend::new())?;

        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(CART_TABLE)?;
        }
        write_txn.commit()?;

        Ok(Self { db: Arc::new(db) })
    }

    /// Overwrite the slot with the given cart
    pub fn save(&self, cart: &Cart) -> MirrorResult<()> {
        let bytes = serde_json::to_vec(cart)?;
        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(CART_TABLE)?;
            table.insert(CART_KEY, bytes.as_slice())?;
        }
        write_txn.commit()?;
        Ok(())
    }

    /// Read the slot, `None` when it has never been written or was erased
    pub fn load(&self) -> MirrorResult<Option<Cart>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(CART_TABLE)?;
        match table.get(CART_KEY)? {
            Some(guard) => Ok(Some(serde_json::from_slice(guard.value())?)),
            None => Ok(None),
        }
    }

    /// Remove the slot entirely
    pub fn erase(&self) -> MirrorResult<()> {
        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(CART_TABLE)?;
            table.remove(CART_KEY)?;
        }
        write_txn.commit()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{CartLineItem, ItemKind};

    fn item() -> CartLineItem {
        CartLineItem {
            kind: ItemKind::Specialty,
            product_id: "hawaiana".to_string(),
            name: "Hawaiana".to_string(),
            unit_price: 150,
            quantity: 2,
            details: Some("Jamón y Piña".to_string()),
        }
    }

    #[test]
    fn test_save_and_load() {
        let mirror = CartMirror::open_in_memory().unwrap();
        assert!(mirror.load().unwrap().is_none());

        let mut cart = Cart::default();
        cart.add(item());
        mirror.save(&cart).unwrap();

        let loaded = mirror.load().unwrap().unwrap();
        assert_eq!(loaded.total_items(), 2);
        assert_eq!(loaded.total_price(), 300);
    }

    #[test]
    fn test_erase_empties_slot() {
        let mirror = CartMirror::open_in_memory().unwrap();
        let mut cart = Cart::default();
        cart.add(item());
        mirror.save(&cart).unwrap();

        mirror.erase().unwrap();
        assert!(mirror.load().unwrap().is_none());

        // erasing an already-empty slot is fine
        mirror.erase().unwrap();
    }

    #[test]
    fn test_corrupt_slot_is_a_typed_error() {
        let mirror = CartMirror::open_in_memory().unwrap();

        let write_txn = mirror.db.begin_write().unwrap();
        {
            let mut table = write_txn.open_table(CART_TABLE).unwrap();
            table.insert(CART_KEY, b"not json".as_slice()).unwrap();
        }
        write_txn.commit().unwrap();

        assert!(matches!(
            mirror.load().unwrap_err(),
            MirrorError::Serialization(_)
        ));
    }
}
