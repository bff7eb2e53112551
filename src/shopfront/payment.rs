//! # Payment hand-off
//!
//! Checkout passes the grand total to a [`PaymentGateway`]. What happens on
//! the other side (card forms, provider APIs) is the gateway's business; the
//! store only needs to know whether the payment went through.

use crate::error::Result;
use crate::model::MinorUnits;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaymentRequest {
    /// Unique per checkout attempt; providers use it to deduplicate.
    pub reference: Uuid,
    pub amount: MinorUnits,
    pub requested_at: DateTime<Utc>,
}

impl PaymentRequest {
    pub fn new(amount: MinorUnits) -> Self {
        Self {
            reference: Uuid::new_v4(),
            amount,
            requested_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum PaymentOutcome {
    Approved { reference: Uuid, paid_at: DateTime<Utc> },
    Declined { reference: Uuid, reason: String },
}

impl PaymentOutcome {
    pub fn is_approved(&self) -> bool {
        matches!(self, PaymentOutcome::Approved { .. })
    }

    pub fn reference(&self) -> Uuid {
        match self {
            PaymentOutcome::Approved { reference, .. } => *reference,
            PaymentOutcome::Declined { reference, .. } => *reference,
        }
    }
}

/// A payment provider.
///
/// `Err` means the gateway could not be reached or answered garbage; a
/// customer-side refusal is `Ok(PaymentOutcome::Declined)`.
pub trait PaymentGateway {
    fn charge(&mut self, request: &PaymentRequest) -> Result<PaymentOutcome>;
}

/// Gateway that settles locally without contacting any provider.
///
/// Approves every request unless built with [`DryRunGateway::declining`].
#[derive(Debug, Default)]
pub struct DryRunGateway {
    decline_reason: Option<String>,
    requests: Vec<PaymentRequest>,
}

impl DryRunGateway {
    pub fn approving() -> Self {
        Self::default()
    }

    pub fn declining(reason: impl Into<String>) -> Self {
        Self {
            decline_reason: Some(reason.into()),
            requests: Vec::new(),
        }
    }

    /// Every request seen so far, oldest first.
    pub fn requests(&self) -> &[PaymentRequest] {
        &self.requests
    }
}

impl PaymentGateway for DryRunGateway {
    fn charge(&mut self, request: &PaymentRequest) -> Result<PaymentOutcome> {
        self.requests.push(request.clone());
        let outcome = match &self.decline_reason {
            Some(reason) => PaymentOutcome::Declined {
                reference: request.reference,
                reason: reason.clone(),
            },
            None => PaymentOutcome::Approved {
                reference: request.reference,
                paid_at: Utc::now(),
            },
        };
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dry_run_approves_and_records() {
        let mut gateway = DryRunGateway::approving();
        let request = PaymentRequest::new(350_000);
        let outcome = gateway.charge(&request).unwrap();
        assert!(outcome.is_approved());
        assert_eq!(outcome.reference(), request.reference);
        assert_eq!(gateway.requests().len(), 1);
        assert_eq!(gateway.requests()[0].amount, 350_000);
    }

    #[test]
    fn declining_gateway_reports_reason() {
        let mut gateway = DryRunGateway::declining("card expired");
        let outcome = gateway.charge(&PaymentRequest::new(100)).unwrap();
        match outcome {
            PaymentOutcome::Declined { reason, .. } => assert_eq!(reason, "card expired"),
            other => panic!("expected decline, got {:?}", other),
        }
    }

    #[test]
    fn references_are_unique_per_request() {
        assert_ne!(
            PaymentRequest::new(1).reference,
            PaymentRequest::new(1).reference
        );
    }
}
