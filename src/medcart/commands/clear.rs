use crate::cart::Cart;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::CartStore;

/// Empties the request list and its persisted copy.
pub fn run<S: CartStore>(cart: &mut Cart<S>) -> Result<CmdResult> {
    cart.clear();
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success("Request list cleared"));
    Ok(result)
}
