use crate::cart::Cart;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::CartStore;

/// The cart view: every line in insertion order plus the unit total.
pub fn run<S: CartStore>(cart: &Cart<S>) -> Result<CmdResult> {
    let mut result = CmdResult::default().with_cart_lines(cart.lines().to_vec());

    if cart.is_empty() {
        result.add_message(CmdMessage::info("Your request list is empty"));
        result.add_message(CmdMessage::info("Use `medcart search <term>` to find products"));
    } else {
        result.add_message(CmdMessage::info(format!(
            "{} line(s), {} unit(s) total",
            cart.lines().len(),
            cart.total_units()
        )));
    }
    Ok(result)
}
