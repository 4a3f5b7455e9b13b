use crate::cart::Cart;
use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult, Notification};
use crate::error::Result;
use crate::store::CartStore;

/// Adds one unit of the medicine with `id` to the request list.
///
/// An unknown id is a lookup miss, not a failure: the result carries a
/// warning and a pointer back to search. A hit always succeeds and yields
/// the transient "added to cart" notification; the cart view is not opened.
pub fn run<S: CartStore>(cart: &mut Cart<S>, catalog: &Catalog, id: u32) -> Result<CmdResult> {
    let Some(medicine) = catalog.get(id) else {
        return Ok(CmdResult::default()
            .with_message(CmdMessage::warning(format!(
                "No medicine with id {} in the catalog",
                id
            )))
            .with_message(CmdMessage::info("Use `medcart search <term>` to find one")));
    };

    let quantity = cart.add(medicine);
    let line = cart
        .lines()
        .iter()
        .find(|l| l.id() == id)
        .cloned()
        .into_iter()
        .collect();

    let mut result = CmdResult::default()
        .with_cart_lines(line)
        .with_notification(Notification::added(&medicine.name));
    result.add_message(CmdMessage::info(format!(
        "{} x{} in the request list",
        medicine.name, quantity
    )));
    Ok(result)
}
