use serde::{Deserialize, Serialize};

pub type ProductId = u32;

/// Money amounts are always integer minor units (kobo, cents).
pub type MinorUnits = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductTag {
    New,
    Sale,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    pub price: MinorUnits,
    #[serde(default)]
    pub tag: Option<ProductTag>,
    #[serde(default)]
    pub sold: bool,
    #[serde(default)]
    pub out_of_stock: bool,
}

/// Badge shown on a product card. `Sold` wins over any tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Badge {
    Sold,
    New,
    Sale,
}

impl Badge {
    pub fn label(&self) -> &'static str {
        match self {
            Badge::Sold => "SOLD",
            Badge::New => "NEW",
            Badge::Sale => "SALE",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Availability {
    Available,
    OutOfStock,
    Sold,
}

impl Product {
    pub fn badge(&self) -> Option<Badge> {
        if self.sold {
            return Some(Badge::Sold);
        }
        match self.tag {
            Some(ProductTag::New) => Some(Badge::New),
            Some(ProductTag::Sale) => Some(Badge::Sale),
            None => None,
        }
    }

    pub fn availability(&self) -> Availability {
        if self.sold {
            Availability::Sold
        } else if self.out_of_stock {
            Availability::OutOfStock
        } else {
            Availability::Available
        }
    }

    pub fn is_available(&self) -> bool {
        self.availability() == Availability::Available
    }
}

/// One cart entry. Name, price and image are copied from the catalog when the
/// line is created and are not refreshed afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    #[serde(rename = "id")]
    pub product_id: ProductId,
    pub name: String,
    pub price: MinorUnits,
    pub quantity: u32,
    #[serde(default)]
    pub image: String,
}

impl CartLine {
    pub fn snapshot(product: &Product, quantity: u32) -> Self {
        Self {
            product_id: product.id,
            name: product.name.clone(),
            price: product.price,
            quantity,
            image: product.image.clone(),
        }
    }

    /// Saturates at `MinorUnits::MAX` instead of overflowing.
    pub fn line_total(&self) -> MinorUnits {
        self.price.saturating_mul(MinorUnits::from(self.quantity))
    }
}

/// Ordered cart lines, at most one per product, every quantity >= 1.
///
/// Deserialization goes through [`Cart::from_lines`], so data read back from
/// storage is normalized before it is used.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<CartLine>", into = "Vec<CartLine>")]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a cart from raw lines: zero-quantity lines are dropped and
    /// repeated ids are merged into the first occurrence.
    pub fn from_lines(raw: Vec<CartLine>) -> Self {
        let mut cart = Cart::new();
        for line in raw {
            if line.quantity == 0 {
                continue;
            }
            match cart.line_mut(line.product_id) {
                Some(existing) => {
                    existing.quantity = existing.quantity.saturating_add(line.quantity)
                }
                None => cart.lines.push(line),
            }
        }
        cart
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn contains(&self, id: ProductId) -> bool {
        self.line(id).is_some()
    }

    pub fn line(&self, id: ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.product_id == id)
    }

    pub(crate) fn line_mut(&mut self, id: ProductId) -> Option<&mut CartLine> {
        self.lines.iter_mut().find(|line| line.product_id == id)
    }

    pub(crate) fn push(&mut self, line: CartLine) {
        debug_assert!(line.quantity >= 1);
        debug_assert!(!self.contains(line.product_id));
        self.lines.push(line);
    }

    /// Removes the line for `id`, returning it if it was present.
    pub(crate) fn remove(&mut self, id: ProductId) -> Option<CartLine> {
        let pos = self.lines.iter().position(|line| line.product_id == id)?;
        Some(self.lines.remove(pos))
    }

    pub(crate) fn clear(&mut self) {
        self.lines.clear();
    }
}

impl From<Vec<CartLine>> for Cart {
    fn from(lines: Vec<CartLine>) -> Self {
        Cart::from_lines(lines)
    }
}

impl From<Cart> for Vec<CartLine> {
    fn from(cart: Cart) -> Self {
        cart.lines
    }
}

/// Derived monetary figures for a cart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Totals {
    pub subtotal: MinorUnits,
    pub shipping_fee: MinorUnits,
    pub grand_total: MinorUnits,
    pub item_count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(id: ProductId, quantity: u32) -> CartLine {
        CartLine {
            product_id: id,
            name: format!("Item {}", id),
            price: 1000,
            quantity,
            image: String::new(),
        }
    }

    #[test]
    fn line_total_saturates() {
        let mut big = line(9, u32::MAX);
        big.price = 5_000_000_000;
        assert_eq!(big.line_total(), MinorUnits::MAX);
        assert_eq!(line(1, 3).line_total(), 3000);
    }

    #[test]
    fn from_lines_drops_zero_quantities() {
        let cart = Cart::from_lines(vec![line(1, 0), line(2, 3)]);
        assert_eq!(cart.len(), 1);
        assert!(!cart.contains(1));
        assert_eq!(cart.line(2).unwrap().quantity, 3);
    }

    #[test]
    fn from_lines_merges_duplicates_in_first_position() {
        let cart = Cart::from_lines(vec![line(7, 1), line(3, 1), line(7, 2)]);
        let ids: Vec<_> = cart.lines().iter().map(|l| l.product_id).collect();
        assert_eq!(ids, vec![7, 3]);
        assert_eq!(cart.line(7).unwrap().quantity, 3);
    }

    #[test]
    fn cart_serializes_as_plain_array() {
        let cart = Cart::from_lines(vec![line(5, 2)]);
        let json = serde_json::to_value(&cart).unwrap();
        assert!(json.is_array());
        assert_eq!(json[0]["id"], 5);
        assert_eq!(json[0]["quantity"], 2);
    }

    #[test]
    fn product_reads_camel_case_source() {
        let json = r#"{"id": 9, "name": "Kaftan", "price": 1250000, "outOfStock": true, "tag": "sale"}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert!(product.out_of_stock);
        assert!(!product.sold);
        assert_eq!(product.tag, Some(ProductTag::Sale));
        assert_eq!(product.availability(), Availability::OutOfStock);
    }

    #[test]
    fn sold_badge_takes_precedence_over_tag() {
        let json = r#"{"id": 1, "name": "Bag", "price": 100, "sold": true, "tag": "new"}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.badge(), Some(Badge::Sold));
        assert_eq!(product.availability(), Availability::Sold);
    }
}
