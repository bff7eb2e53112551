use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Cart, ProductId};

/// Deletes the line for `product_id`. Removing an absent id changes nothing.
pub fn run(cart: &mut Cart, product_id: ProductId) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    if let Some(removed) = cart.remove(product_id) {
        result.add_message(CmdMessage::success(format!(
            "{} removed from cart",
            removed.name
        )));
        result.affected_lines.push(removed);
    }
    Ok(result)
}
