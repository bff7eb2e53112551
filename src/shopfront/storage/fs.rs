use super::{CartStorage, CART_STORAGE_KEY};
use crate::error::{Result, ShopError};
use crate::model::Cart;
use std::fs;
use std::path::PathBuf;
use uuid::Uuid;

pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn cart_path(&self) -> PathBuf {
        self.root.join(format!("{}.json", CART_STORAGE_KEY))
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(persistence)?;
        }
        Ok(())
    }
}

fn persistence(e: impl std::fmt::Display) -> ShopError {
    ShopError::Persistence(e.to_string())
}

impl CartStorage for FileStorage {
    fn load(&self) -> Result<Cart> {
        let path = self.cart_path();
        if !path.exists() {
            return Ok(Cart::default());
        }
        let content = fs::read_to_string(&path).map_err(persistence)?;
        if content.trim().is_empty() {
            return Ok(Cart::default());
        }
        serde_json::from_str(&content)
            .map_err(|e| ShopError::Persistence(format!("{}: {}", path.display(), e)))
    }

    fn save(&self, cart: &Cart) -> Result<()> {
        self.ensure_dir()?;
        let content = serde_json::to_string_pretty(cart).map_err(persistence)?;

        let tmp_file = self.root.join(format!(".{}-{}.tmp", CART_STORAGE_KEY, Uuid::new_v4()));
        fs::write(&tmp_file, content).map_err(persistence)?;
        if let Err(e) = fs::rename(&tmp_file, self.cart_path()) {
            let _ = fs::remove_file(&tmp_file);
            return Err(persistence(e));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CartLine;

    fn sample_cart() -> Cart {
        Cart::from_lines(vec![
            CartLine {
                product_id: 5,
                name: "Canvas Tote".into(),
                price: 200000,
                quantity: 2,
                image: "images/5.jpg".into(),
            },
            CartLine {
                product_id: 1,
                name: "Ankara Dress".into(),
                price: 1500000,
                quantity: 1,
                image: "images/1.jpg".into(),
            },
        ])
    }

    #[test]
    fn missing_file_is_empty_cart() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path());
        assert!(storage.load().unwrap().is_empty());
    }

    #[test]
    fn save_creates_the_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path().join("nested").join("shop"));
        storage.save(&sample_cart()).unwrap();
        assert!(storage.cart_path().exists());
    }

    #[test]
    fn corrupt_file_is_a_persistence_error() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path());
        fs::write(storage.cart_path(), "[{\"id\": 1,").unwrap();
        assert!(matches!(storage.load(), Err(ShopError::Persistence(_))));
    }

    #[test]
    fn round_trip_keeps_order() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path());
        let cart = sample_cart();
        storage.save(&cart).unwrap();
        assert_eq!(storage.load().unwrap(), cart);
    }
}
