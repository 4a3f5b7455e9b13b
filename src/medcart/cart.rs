//! Cart state: the mapping from medicine id to requested quantity.
//!
//! The in-memory line list is authoritative. Every mutation is mirrored to
//! the [`CartStore`] so a later session reconstructs the same cart; store
//! failures are logged and otherwise ignored, they never fail an operation.

use tracing::warn;

use crate::model::{CartLine, Medicine};
use crate::store::CartStore;

pub struct Cart<S: CartStore> {
    store: S,
    lines: Vec<CartLine>,
}

impl<S: CartStore> Cart<S> {
    /// Restores the cart persisted in `store`, or starts empty when nothing
    /// is stored or the stored value cannot be read. A malformed persisted
    /// cart (old shape, corrupt file) is not an error: log and move on.
    pub fn restore(store: S) -> Self {
        let lines = match store.load() {
            Ok(lines) => lines,
            Err(e) => {
                warn!("could not restore persisted cart, starting empty: {}", e);
                Vec::new()
            }
        };
        Self { store, lines }
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of quantities across all lines (the cart badge number).
    pub fn total_units(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Adds one unit of `medicine`. Merges into the existing line when one
    /// exists for the same id, appends a new line with quantity 1 otherwise.
    /// Returns the resulting quantity. Never fails.
    pub fn add(&mut self, medicine: &Medicine) -> u32 {
        let quantity = match self.lines.iter_mut().find(|l| l.id() == medicine.id) {
            Some(line) => {
                line.quantity += 1;
                line.quantity
            }
            None => {
                self.lines.push(CartLine::new(medicine.clone()));
                1
            }
        };
        self.persist();
        quantity
    }

    /// Sets the quantity for `id` to exactly `quantity`; 0 removes the line.
    /// Both forms are harmless for an absent id: removal of nothing is
    /// nothing, and an update alone never materializes a line.
    pub fn set_quantity(&mut self, id: u32, quantity: u32) {
        if quantity == 0 {
            self.lines.retain(|l| l.id() != id);
        } else if let Some(line) = self.lines.iter_mut().find(|l| l.id() == id) {
            line.quantity = quantity;
        } else {
            return; // nothing to update, nothing to persist
        }
        self.persist();
    }

    /// Empties the cart and the persisted copy.
    pub fn clear(&mut self) {
        self.lines.clear();
        if let Err(e) = self.store.clear() {
            warn!("could not clear persisted cart: {}", e);
        }
    }

    fn persist(&mut self) {
        if let Err(e) = self.store.save(&self.lines) {
            warn!("could not persist cart, in-memory state kept: {}", e);
        }
    }
}
