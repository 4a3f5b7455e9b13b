use super::CartStore;
use crate::error::Result;
use crate::model::CartLine;

/// In-memory cart store for tests. No persistence across instances.
#[derive(Debug, Default)]
pub struct InMemoryCartStore {
    lines: Vec<CartLine>,
}

impl InMemoryCartStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with pre-existing lines, as if a previous session had
    /// written them.
    pub fn with_lines(lines: Vec<CartLine>) -> Self {
        Self { lines }
    }
}

impl CartStore for InMemoryCartStore {
    fn load(&self) -> Result<Vec<CartLine>> {
        Ok(self.lines.clone())
    }

    fn save(&mut self, lines: &[CartLine]) -> Result<()> {
        self.lines = lines.to_vec();
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.lines.clear();
        Ok(())
    }
}
