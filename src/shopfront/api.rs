//! # API Facade
//!
//! [`CartStore`] is the single entry point for cart operations, whatever UI
//! drives it. It is a thin layer over the command modules:
//!
//! - **Owns** the in-memory cart, the injected [`Catalog`] and the injected
//!   [`CartStorage`] adapter
//! - **Dispatches** each operation to its command in `commands/*.rs`
//! - **Persists** the whole cart after every mutation
//! - **Returns structured types** (`Result<CmdResult>`), never text for a
//!   terminal
//!
//! ## Persistence failures
//!
//! The in-memory cart is authoritative. A failed read at startup starts an
//! empty cart; a failed write after a mutation is logged and otherwise
//! ignored, so the caller still sees the mutation succeed. Neither is
//! retried.
//!
//! ## Generic Over CartStorage
//!
//! - Production: `CartStore<FileStorage>`
//! - Testing: `CartStore<MemStorage>` (or `CartStore<&MemStorage>` to inspect
//!   what was saved)

use crate::catalog::Catalog;
use crate::commands;
use crate::error::Result;
use crate::model::{Cart, MinorUnits, ProductId, Totals};
use crate::money;
use crate::payment::PaymentGateway;
use crate::storage::CartStorage;

pub struct CartStore<S: CartStorage> {
    cart: Cart,
    catalog: Catalog,
    storage: S,
    shipping_fee: MinorUnits,
    currency_glyph: String,
}

impl<S: CartStorage> CartStore<S> {
    /// Restores the cart from `storage`. Unreadable data gives an empty cart.
    pub fn open(storage: S, catalog: Catalog) -> Self {
        let cart = match storage.load() {
            Ok(cart) => cart,
            Err(e) => {
                tracing::warn!(error = %e, "could not read saved cart, starting empty");
                Cart::default()
            }
        };
        tracing::debug!(lines = cart.len(), products = catalog.len(), "cart store opened");
        Self {
            cart,
            catalog,
            storage,
            shipping_fee: crate::config::DEFAULT_SHIPPING_FEE,
            currency_glyph: money::DEFAULT_CURRENCY_GLYPH.to_string(),
        }
    }

    pub fn with_shipping_fee(mut self, fee: MinorUnits) -> Self {
        self.shipping_fee = fee;
        self
    }

    pub fn with_currency_glyph(mut self, glyph: impl Into<String>) -> Self {
        self.currency_glyph = glyph.into();
        self
    }

    pub fn add_item(&mut self, product_id: ProductId, quantity: u32) -> Result<commands::CmdResult> {
        let result = commands::add::run(&mut self.cart, &self.catalog, product_id, quantity)?;
        self.persist();
        Ok(result)
    }

    pub fn change_quantity(
        &mut self,
        product_id: ProductId,
        delta: i64,
    ) -> Result<commands::CmdResult> {
        let result = commands::quantity::run(&mut self.cart, product_id, delta);
        self.persist();
        result
    }

    pub fn remove_item(&mut self, product_id: ProductId) -> Result<commands::CmdResult> {
        let result = commands::remove::run(&mut self.cart, product_id);
        self.persist();
        result
    }

    pub fn compute_totals(&self) -> Totals {
        commands::totals::compute(&self.cart, self.shipping_fee)
    }

    pub fn format_currency(&self, minor_units: MinorUnits) -> String {
        money::format_with_glyph(minor_units, &self.currency_glyph)
    }

    pub fn list_products(&self, filter: &commands::list::ProductFilter) -> Result<commands::CmdResult> {
        commands::list::run(&self.catalog, filter)
    }

    pub fn view_cart(&self) -> commands::CmdResult {
        commands::view::run(&self.cart, self.shipping_fee)
    }

    pub fn checkout_enabled(&self) -> bool {
        commands::view::checkout_enabled(&self.cart)
    }

    pub fn checkout<G: PaymentGateway + ?Sized>(
        &mut self,
        gateway: &mut G,
    ) -> Result<commands::CmdResult> {
        let result = commands::checkout::run(&mut self.cart, self.shipping_fee, gateway)?;
        if result.payment.as_ref().is_some_and(|p| p.is_approved()) {
            self.persist();
        }
        Ok(result)
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    fn persist(&self) {
        if let Err(e) = self.storage.save(&self.cart) {
            tracing::warn!(error = %e, lines = self.cart.len(), "could not save cart");
        }
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::list::ProductFilter;
pub use commands::{CmdMessage, CmdResult, MessageLevel};
