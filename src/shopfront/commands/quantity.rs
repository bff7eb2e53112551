use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Cart, ProductId};

/// Applies a signed change to a line's quantity.
///
/// An absent line is a no-op. A line whose quantity would drop to zero or
/// below is removed instead of being kept with a non-positive count.
pub fn run(cart: &mut Cart, product_id: ProductId, delta: i64) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    let Some(line) = cart.line_mut(product_id) else {
        result.add_message(CmdMessage::warning(format!(
            "Product {} is not in the cart",
            product_id
        )));
        return Ok(result);
    };

    let updated = i64::from(line.quantity).saturating_add(delta);
    if updated <= 0 {
        if let Some(removed) = cart.remove(product_id) {
            result.add_message(CmdMessage::success(format!(
                "{} removed from cart",
                removed.name
            )));
            result.affected_lines.push(removed);
        }
        return Ok(result);
    }

    line.quantity = u32::try_from(updated).unwrap_or(u32::MAX);
    result.add_message(CmdMessage::info(format!(
        "{} quantity: {}",
        line.name, line.quantity
    )));
    result.affected_lines.push(line.clone());
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CartLine;

    fn cart_with(id: ProductId, quantity: u32) -> Cart {
        Cart::from_lines(vec![CartLine {
            product_id: id,
            name: "Canvas Tote".into(),
            price: 200000,
            quantity,
            image: String::new(),
        }])
    }

    #[test]
    fn increments_and_decrements() {
        let mut cart = cart_with(5, 1);
        run(&mut cart, 5, 1).unwrap();
        assert_eq!(cart.line(5).unwrap().quantity, 2);
        run(&mut cart, 5, -1).unwrap();
        assert_eq!(cart.line(5).unwrap().quantity, 1);
    }

    #[test]
    fn dropping_to_zero_removes_line() {
        let mut cart = cart_with(5, 1);
        let result = run(&mut cart, 5, -1).unwrap();
        assert!(cart.is_empty());
        assert_eq!(result.affected_lines[0].product_id, 5);
    }

    #[test]
    fn minus_full_quantity_removes_line() {
        let mut cart = cart_with(5, 7);
        run(&mut cart, 5, -7).unwrap();
        assert!(!cart.contains(5));
    }

    #[test]
    fn overshooting_below_zero_removes_line() {
        let mut cart = cart_with(5, 2);
        run(&mut cart, 5, -10).unwrap();
        assert!(cart.is_empty());
    }

    #[test]
    fn absent_line_is_noop() {
        let mut cart = cart_with(5, 2);
        let result = run(&mut cart, 8, 1).unwrap();
        assert_eq!(cart, cart_with(5, 2));
        assert!(result.affected_lines.is_empty());
        assert!(result.has_level(crate::commands::MessageLevel::Warning));
    }

    #[test]
    fn huge_delta_saturates() {
        let mut cart = cart_with(5, 2);
        run(&mut cart, 5, i64::MAX).unwrap();
        assert_eq!(cart.line(5).unwrap().quantity, u32::MAX);
    }
}
