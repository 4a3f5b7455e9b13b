use super::CartStore;
use crate::error::{MedcartError, Result};
use crate::model::CartLine;
use std::fs;
use std::path::{Path, PathBuf};

const CART_FILENAME: &str = "cart.json";

pub struct FileCartStore {
    data_dir: PathBuf,
}

impl FileCartStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn cart_path(&self) -> PathBuf {
        self.data_dir.join(CART_FILENAME)
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.data_dir.exists() {
            fs::create_dir_all(&self.data_dir).map_err(MedcartError::Io)?;
        }
        Ok(())
    }

    fn read_lines(path: &Path) -> Result<Vec<CartLine>> {
        let content = fs::read_to_string(path).map_err(MedcartError::Io)?;
        let lines: Vec<CartLine> =
            serde_json::from_str(&content).map_err(MedcartError::Serialization)?;
        Ok(lines)
    }
}

impl CartStore for FileCartStore {
    fn load(&self) -> Result<Vec<CartLine>> {
        let path = self.cart_path();
        if !path.exists() {
            return Ok(Vec::new());
        }
        Self::read_lines(&path)
    }

    fn save(&mut self, lines: &[CartLine]) -> Result<()> {
        self.ensure_dir()?;
        let content = serde_json::to_string_pretty(lines).map_err(MedcartError::Serialization)?;
        fs::write(self.cart_path(), content).map_err(MedcartError::Io)?;
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        let path = self.cart_path();
        if path.exists() {
            fs::remove_file(path).map_err(MedcartError::Io)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Medicine;
    use tempfile::TempDir;

    fn line(id: u32, quantity: u32) -> CartLine {
        let mut line = CartLine::new(Medicine {
            id,
            name: format!("MED-{}", id),
            active_ingredient: "SUBSTANCE".into(),
            active_ingredient_description: None,
            packaging: None,
            manufacturer: None,
            country: None,
            category: None,
        });
        line.quantity = quantity;
        line
    }

    #[test]
    fn missing_file_loads_as_empty() {
        let dir = TempDir::new().unwrap();
        let store = FileCartStore::new(dir.path());
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn save_then_load_roundtrips() {
        let dir = TempDir::new().unwrap();
        let mut store = FileCartStore::new(dir.path());

        store.save(&[line(1, 2), line(5, 1)]).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].id(), 1);
        assert_eq!(loaded[0].quantity, 2);
        assert_eq!(loaded[1].id(), 5);
    }

    #[test]
    fn corrupt_file_is_a_load_error() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CART_FILENAME), "not json {").unwrap();

        let store = FileCartStore::new(dir.path());
        assert!(store.load().is_err());
    }

    #[test]
    fn clear_removes_the_file() {
        let dir = TempDir::new().unwrap();
        let mut store = FileCartStore::new(dir.path());

        store.save(&[line(1, 1)]).unwrap();
        assert!(store.cart_path().exists());

        store.clear().unwrap();
        assert!(!store.cart_path().exists());
        assert!(store.load().unwrap().is_empty());

        // Clearing an already-empty store is fine.
        store.clear().unwrap();
    }
}
