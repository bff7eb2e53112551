use crate::commands::{totals, CmdMessage, CmdResult};
use crate::model::{Cart, MinorUnits};

/// Everything a cart screen needs: the lines in order plus totals.
pub fn run(cart: &Cart, shipping_fee: MinorUnits) -> CmdResult {
    let mut result = CmdResult::default()
        .with_cart_lines(cart.lines().to_vec())
        .with_totals(totals::compute(cart, shipping_fee));
    if cart.is_empty() {
        result.add_message(CmdMessage::info("Your cart is empty."));
    }
    result
}

/// Checkout is only offered for a non-empty cart.
pub fn checkout_enabled(cart: &Cart) -> bool {
    !cart.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CartLine;

    #[test]
    fn empty_cart_says_so() {
        let cart = Cart::new();
        let result = run(&cart, 150000);
        assert!(result.cart_lines.is_empty());
        assert_eq!(result.messages[0].content, "Your cart is empty.");
        assert_eq!(result.totals.unwrap().grand_total, 0);
        assert!(!checkout_enabled(&cart));
    }

    #[test]
    fn lists_lines_in_cart_order() {
        let cart = Cart::from_lines(vec![
            CartLine {
                product_id: 4,
                name: "Sandals".into(),
                price: 800000,
                quantity: 1,
                image: String::new(),
            },
            CartLine {
                product_id: 1,
                name: "Dress".into(),
                price: 1500000,
                quantity: 2,
                image: String::new(),
            },
        ]);
        let result = run(&cart, 150000);
        let ids: Vec<_> = result.cart_lines.iter().map(|l| l.product_id).collect();
        assert_eq!(ids, vec![4, 1]);
        assert_eq!(result.totals.unwrap().grand_total, 3950000);
        assert!(result.messages.is_empty());
        assert!(checkout_enabled(&cart));
    }
}
