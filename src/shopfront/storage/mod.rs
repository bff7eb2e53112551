//! # Storage Layer
//!
//! The cart is persisted through the [`CartStorage`] trait so the store can
//! run against different backends.
//!
//! ## Implementations
//!
//! - [`fs::FileStorage`]: production storage
//!   - The whole cart is written to `cart.json` in the data directory
//!   - Writes go to a temp file first and are renamed into place
//!
//! - [`memory::MemStorage`]: in-memory storage for testing
//!   - No persistence
//!   - Can simulate read and write failures
//!
//! ## Storage Format
//!
//! ```text
//! <data dir>/
//! ├── cart.json     # JSON array of cart lines, in cart order
//! └── config.json   # Shop configuration
//! ```
//!
//! A missing cart file is an empty cart. An unreadable or corrupt one is an
//! error here; the store decides to start empty instead.

use crate::error::Result;
use crate::model::Cart;

pub mod fs;
pub mod memory;

/// Fixed key the cart is stored under.
pub const CART_STORAGE_KEY: &str = "cart";

/// Abstract interface for cart persistence.
///
/// The whole cart is read and written at once; there are no partial updates.
pub trait CartStorage {
    /// Read the persisted cart. Absent data is `Ok(Cart::default())`.
    fn load(&self) -> Result<Cart>;

    /// Replace the persisted cart.
    fn save(&self, cart: &Cart) -> Result<()>;
}

impl<S: CartStorage + ?Sized> CartStorage for &S {
    fn load(&self) -> Result<Cart> {
        (**self).load()
    }

    fn save(&self, cart: &Cart) -> Result<()> {
        (**self).save(cart)
    }
}
