//! # Catalog
//!
//! Read-only product lookup, loaded once at startup from a [`CatalogSource`].
//!
//! A catalog that cannot be loaded is not fatal: [`Catalog::load_or_empty`]
//! logs the failure and hands back an empty catalog, so listings come out
//! empty while the cart (which only holds snapshots) keeps working.

use crate::error::{Result, ShopError};
use crate::model::{Product, ProductId};
use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

/// Where product records come from.
pub trait CatalogSource {
    /// Human readable name of the source, for log lines.
    fn describe(&self) -> String;

    /// Fetch every product record. Any failure maps to `ShopError::Load`.
    fn fetch(&self) -> Result<Vec<Product>>;
}

/// A JSON array of products on disk (`products.json`).
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CatalogSource for JsonFileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn fetch(&self) -> Result<Vec<Product>> {
        let content = fs::read_to_string(&self.path)
            .map_err(|e| ShopError::Load(format!("{}: {}", self.path.display(), e)))?;
        serde_json::from_str(&content)
            .map_err(|e| ShopError::Load(format!("{}: {}", self.path.display(), e)))
    }
}

/// Products held in memory. Used by tests and by callers that already have
/// the records.
impl CatalogSource for Vec<Product> {
    fn describe(&self) -> String {
        "in-memory products".to_string()
    }

    fn fetch(&self) -> Result<Vec<Product>> {
        Ok(self.clone())
    }
}

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a catalog, rejecting duplicate ids.
    pub fn from_products(products: Vec<Product>) -> Result<Self> {
        let mut seen = HashSet::new();
        for product in &products {
            if !seen.insert(product.id) {
                return Err(ShopError::Load(format!(
                    "duplicate product id {}",
                    product.id
                )));
            }
        }
        Ok(Self { products })
    }

    pub fn load<C: CatalogSource + ?Sized>(source: &C) -> Result<Self> {
        let catalog = Self::from_products(source.fetch()?)?;
        tracing::debug!(
            source = %source.describe(),
            count = catalog.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    /// Like [`Catalog::load`], but a failed load is logged and degrades to an
    /// empty catalog.
    pub fn load_or_empty<C: CatalogSource + ?Sized>(source: &C) -> Self {
        match Self::load(source) {
            Ok(catalog) => catalog,
            Err(e) => {
                tracing::warn!(source = %source.describe(), error = %e, "could not load product data");
                Self::empty()
            }
        }
    }

    pub fn find_by_id(&self, id: ProductId) -> Result<&Product> {
        self.products
            .iter()
            .find(|p| p.id == id)
            .ok_or(ShopError::NotFound(id))
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Distinct categories in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.products
            .iter()
            .map(|p| p.category.as_str())
            .filter(|c| !c.is_empty() && seen.insert(c.to_lowercase()))
            .collect()
    }
}

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use crate::model::{Product, ProductTag};

    pub fn product(id: u32, name: &str, category: &str, price: u64) -> Product {
        Product {
            id,
            name: name.to_string(),
            image: format!("images/{}.jpg", id),
            description: format!("{} description", name),
            category: category.to_string(),
            price,
            tag: None,
            sold: false,
            out_of_stock: false,
        }
    }

    /// A small catalog mixing available, sold and out-of-stock items.
    /// Product 5 is the available 200000-kobo item used throughout the tests.
    pub fn sample_products() -> Vec<Product> {
        let mut sold = product(2, "Beaded Necklace", "Accessories", 450000);
        sold.sold = true;
        sold.tag = Some(ProductTag::New);

        let mut out = product(3, "Linen Shirt", "Men", 1200000);
        out.out_of_stock = true;

        let mut sale = product(4, "Leather Sandals", "Footwear", 800000);
        sale.tag = Some(ProductTag::Sale);

        let mut fresh = product(6, "Silk Scarf", "accessories", 99950);
        fresh.tag = Some(ProductTag::New);
        fresh.description = "Hand-dyed adire silk".to_string();

        vec![
            product(1, "Ankara Dress", "Women", 1500000),
            sold,
            out,
            sale,
            product(5, "Canvas Tote", "Accessories", 200000),
            fresh,
        ]
    }
}
