use crate::model::ProductId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShopError {
    #[error("Product not found: {0}")]
    NotFound(ProductId),

    #[error("Product is out of stock: {0}")]
    OutOfStock(ProductId),

    #[error("Invalid quantity: {0} (must be at least 1)")]
    InvalidQuantity(u32),

    #[error("Could not load product data: {0}")]
    Load(String),

    #[error("Persistence error: {0}")]
    Persistence(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Payment error: {0}")]
    Payment(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, ShopError>;
