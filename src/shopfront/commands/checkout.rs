use crate::commands::{totals, CmdMessage, CmdResult};
use crate::error::{Result, ShopError};
use crate::model::{Cart, MinorUnits};
use crate::money::format_amount;
use crate::payment::{PaymentGateway, PaymentOutcome, PaymentRequest};

/// Hands the grand total to `gateway`.
///
/// An empty cart is refused before the gateway is called. An approved
/// payment empties the cart; a declined one leaves it as it was.
pub fn run<G: PaymentGateway + ?Sized>(
    cart: &mut Cart,
    shipping_fee: MinorUnits,
    gateway: &mut G,
) -> Result<CmdResult> {
    if cart.is_empty() {
        return Err(ShopError::Api("Cannot check out an empty cart".to_string()));
    }

    let totals = totals::compute(cart, shipping_fee);
    let request = PaymentRequest::new(totals.grand_total);
    let outcome = gateway.charge(&request)?;

    let reference = outcome.reference();
    let mut result = CmdResult::default().with_totals(totals);
    match &outcome {
        PaymentOutcome::Approved { .. } => {
            tracing::info!(%reference, amount = totals.grand_total, "payment approved");
            result.affected_lines = cart.lines().to_vec();
            cart.clear();
            result.add_message(CmdMessage::success(format!(
                "Payment of {} received. Reference: {}",
                format_amount(totals.grand_total),
                reference
            )));
        }
        PaymentOutcome::Declined { reason, .. } => {
            tracing::info!(%reference, %reason, "payment declined");
            result.add_message(CmdMessage::error(format!("Payment declined: {}", reason)));
        }
    }
    Ok(result.with_payment(outcome))
}
