//! # API Facade
//!
//! Single entry point for all medcart operations, regardless of the UI in
//! front of it. The facade dispatches to the command layer and returns
//! structured `CmdResult` values; it does no I/O of its own and never
//! touches stdout.
//!
//! `MedcartApi<S: CartStore>` is generic over the cart storage backend:
//! file-backed in production, in-memory in tests.

use std::path::PathBuf;

use crate::cart::Cart;
use crate::catalog::Catalog;
use crate::commands;
use crate::error::Result;
use crate::quote::ContactForm;
use crate::relay::RelayClient;
use crate::store::CartStore;

pub struct MedcartApi<S: CartStore> {
    catalog: Catalog,
    cart: Cart<S>,
    relay: RelayClient,
    data_dir: PathBuf,
}

impl<S: CartStore> MedcartApi<S> {
    /// Builds the facade, restoring any persisted cart from `store`.
    pub fn new(catalog: Catalog, store: S, relay: RelayClient, data_dir: PathBuf) -> Self {
        Self {
            catalog,
            cart: Cart::restore(store),
            relay,
            data_dir,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Number of units currently in the request list (the badge count).
    pub fn total_units(&self) -> u32 {
        self.cart.total_units()
    }

    pub fn search(&self, term: &str) -> Result<commands::CmdResult> {
        commands::search::run(&self.catalog, term)
    }

    pub fn view(&self, selector: &str) -> Result<commands::CmdResult> {
        commands::get::run(&self.catalog, selector)
    }

    pub fn add_to_cart(&mut self, id: u32) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.cart, &self.catalog, id)
    }

    pub fn cart_view(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.cart)
    }

    pub fn set_quantity(&mut self, id: u32, quantity: u32) -> Result<commands::CmdResult> {
        commands::quantity::run(&mut self.cart, id, quantity)
    }

    pub fn clear_cart(&mut self) -> Result<commands::CmdResult> {
        commands::clear::run(&mut self.cart)
    }

    pub async fn submit_quote(&mut self, form: &ContactForm) -> Result<commands::CmdResult> {
        commands::submit::run(&mut self.cart, &self.relay, form).await
    }

    pub fn config(&self, action: commands::config::ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.data_dir, action)
    }
}
