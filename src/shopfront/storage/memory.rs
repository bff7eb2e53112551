use super::CartStorage;
use crate::error::{Result, ShopError};
use crate::model::Cart;
use std::cell::{Cell, RefCell};

/// In-memory storage for testing and development.
/// Does NOT persist data.
///
/// Uses `RefCell` for interior mutability since the store is single-threaded.
#[derive(Default)]
pub struct MemStorage {
    saved: RefCell<Option<Cart>>,
    save_count: Cell<usize>,
    simulate_read_error: Cell<bool>,
    simulate_write_error: Cell<bool>,
}

impl MemStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage that already holds `cart`, as if saved by an earlier session.
    pub fn with_cart(cart: Cart) -> Self {
        let storage = Self::new();
        *storage.saved.borrow_mut() = Some(cart);
        storage
    }

    pub fn set_simulate_read_error(&self, simulate: bool) {
        self.simulate_read_error.set(simulate);
    }

    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.set(simulate);
    }

    /// The last successfully saved cart, if any.
    pub fn saved(&self) -> Option<Cart> {
        self.saved.borrow().clone()
    }

    /// Number of successful saves.
    pub fn save_count(&self) -> usize {
        self.save_count.get()
    }
}

impl CartStorage for MemStorage {
    fn load(&self) -> Result<Cart> {
        if self.simulate_read_error.get() {
            return Err(ShopError::Persistence("Simulated read error".to_string()));
        }
        Ok(self.saved.borrow().clone().unwrap_or_default())
    }

    fn save(&self, cart: &Cart) -> Result<()> {
        if self.simulate_write_error.get() {
            return Err(ShopError::Persistence("Simulated write error".to_string()));
        }
        *self.saved.borrow_mut() = Some(cart.clone());
        self.save_count.set(self.save_count.get() + 1);
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::api::CartStore;
    use crate::catalog::{fixtures::sample_products, Catalog};

    pub struct StoreFixture {
        pub storage: MemStorage,
        pub catalog: Catalog,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                storage: MemStorage::new(),
                catalog: Catalog::from_products(sample_products()).unwrap(),
            }
        }

        pub fn with_empty_catalog(mut self) -> Self {
            self.catalog = Catalog::empty();
            self
        }

        pub fn with_saved_cart(mut self, cart: Cart) -> Self {
            self.storage = MemStorage::with_cart(cart);
            self
        }

        /// Opens a store borrowing the fixture's storage, so tests can inspect
        /// what was persisted.
        pub fn open(&self) -> CartStore<&MemStorage> {
            CartStore::open(&self.storage, self.catalog.clone())
        }
    }
}
