use crate::config::ShopConfig;
use crate::model::{CartLine, Product, Totals};
use crate::payment::PaymentOutcome;

pub mod add;
pub mod checkout;
pub mod config;
pub mod list;
pub mod quantity;
pub mod remove;
pub mod totals;
pub mod view;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Lines created or changed by a mutation (empty for queries).
    pub affected_lines: Vec<CartLine>,
    pub listed_products: Vec<Product>,
    pub cart_lines: Vec<CartLine>,
    pub totals: Option<Totals>,
    pub payment: Option<PaymentOutcome>,
    pub config: Option<ShopConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_lines(mut self, lines: Vec<CartLine>) -> Self {
        self.affected_lines = lines;
        self
    }

    pub fn with_listed_products(mut self, products: Vec<Product>) -> Self {
        self.listed_products = products;
        self
    }

    pub fn with_cart_lines(mut self, lines: Vec<CartLine>) -> Self {
        self.cart_lines = lines;
        self
    }

    pub fn with_totals(mut self, totals: Totals) -> Self {
        self.totals = Some(totals);
        self
    }

    pub fn with_payment(mut self, outcome: PaymentOutcome) -> Self {
        self.payment = Some(outcome);
        self
    }

    pub fn with_config(mut self, config: ShopConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn has_level(&self, level: MessageLevel) -> bool {
        self.messages.iter().any(|m| m.level == level)
    }
}
