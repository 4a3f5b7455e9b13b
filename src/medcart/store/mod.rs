//! # Storage Layer
//!
//! The cart's durability boundary. [`CartStore`] abstracts where the cart
//! lines are persisted so the rest of the crate never reaches for a concrete
//! backend directly:
//!
//! - [`fs::FileCartStore`]: production storage, a `cart.json` file in the
//!   data directory holding the full line collection as a JSON array.
//! - [`memory::InMemoryCartStore`]: in-memory storage for tests, no
//!   persistence.
//!
//! Every cart mutation rewrites the whole collection. Stores are fallible
//! but never authoritative: on any load/save failure the in-memory cart wins
//! for the rest of the session (see `cart.rs`).

use crate::error::Result;
use crate::model::CartLine;

pub mod fs;
pub mod memory;

/// Abstract interface for cart persistence.
pub trait CartStore {
    /// Read the persisted lines. An absent cart is `Ok(vec![])`, not an error.
    fn load(&self) -> Result<Vec<CartLine>>;

    /// Replace the persisted lines with `lines`.
    fn save(&mut self, lines: &[CartLine]) -> Result<()>;

    /// Drop the persisted copy entirely.
    fn clear(&mut self) -> Result<()>;
}
