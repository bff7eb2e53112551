use crate::model::{Cart, MinorUnits, Totals};

/// Subtotal, flat shipping and grand total for `cart`.
///
/// Shipping is all-or-nothing: the full fee for any non-empty cart, zero
/// otherwise. Amounts saturate at `MinorUnits::MAX`.
pub fn compute(cart: &Cart, shipping_fee: MinorUnits) -> Totals {
    let subtotal = cart
        .lines()
        .iter()
        .fold(0, |acc: MinorUnits, line| acc.saturating_add(line.line_total()));
    let item_count = cart
        .lines()
        .iter()
        .fold(0, |acc: u64, line| acc.saturating_add(u64::from(line.quantity)));
    let shipping_fee = if cart.is_empty() { 0 } else { shipping_fee };

    Totals {
        subtotal,
        shipping_fee,
        grand_total: subtotal.saturating_add(shipping_fee),
        item_count,
    }
}
