use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, ShopError};
use crate::model::{Cart, CartLine, ProductId};

/// Adds `quantity` units of a product.
///
/// Fails without touching the cart when the product is unknown (`NotFound`)
/// or sold / out of stock (`OutOfStock`). A repeated add grows the existing
/// line in place; a first add appends a snapshot of the product.
pub fn run(
    cart: &mut Cart,
    catalog: &Catalog,
    product_id: ProductId,
    quantity: u32,
) -> Result<CmdResult> {
    if quantity == 0 {
        return Err(ShopError::InvalidQuantity(quantity));
    }

    let product = catalog.find_by_id(product_id)?;
    if !product.is_available() {
        return Err(ShopError::OutOfStock(product_id));
    }

    let line = match cart.line_mut(product_id) {
        Some(existing) => {
            existing.quantity = existing.quantity.saturating_add(quantity);
            existing.clone()
        }
        None => {
            let line = CartLine::snapshot(product, quantity);
            cart.push(line.clone());
            line
        }
    };

    let mut result = CmdResult::default().with_affected_lines(vec![line]);
    result.add_message(CmdMessage::success(format!(
        "{} added to cart!",
        product.name
    )));
    Ok(result)
}
