use crate::cart::Cart;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::CartStore;

/// Sets the committed quantity for a cart line; 0 removes it.
///
/// The committed value is the single source of truth, there is no delta
/// path. Updating an id that is not in the cart changes nothing.
pub fn run<S: CartStore>(cart: &mut Cart<S>, id: u32, quantity: u32) -> Result<CmdResult> {
    let existed = cart.lines().iter().any(|l| l.id() == id);
    cart.set_quantity(id, quantity);

    let mut result = CmdResult::default().with_cart_lines(cart.lines().to_vec());
    let message = match (existed, quantity) {
        (true, 0) => CmdMessage::success(format!("Removed id {} from the request list", id)),
        (true, q) => CmdMessage::success(format!("Quantity for id {} set to {}", id, q)),
        (false, _) => CmdMessage::info(format!("No request-list line for id {}", id)),
    };
    result.add_message(message);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::commands::add;
    use crate::model::Medicine;
    use crate::store::memory::InMemoryCartStore;

    fn catalog() -> Catalog {
        Catalog::from_medicines(vec![Medicine {
            id: 5,
            name: "VERZENIOS".into(),
            active_ingredient: "ABEMACICLIB".into(),
            active_ingredient_description: None,
            packaging: None,
            manufacturer: None,
            country: None,
            category: None,
        }])
        .unwrap()
    }

    #[test]
    fn zero_removes_and_later_update_does_not_resurrect() {
        let catalog = catalog();
        let mut cart = Cart::restore(InMemoryCartStore::new());
        add::run(&mut cart, &catalog, 5).unwrap();
        add::run(&mut cart, &catalog, 5).unwrap();

        run(&mut cart, 5, 0).unwrap();
        assert!(cart.is_empty());

        // Only add creates lines; an update on the removed id is a no-op.
        let result = run(&mut cart, 5, 5).unwrap();
        assert!(cart.is_empty());
        assert!(result.cart_lines.is_empty());
    }

    #[test]
    fn sets_absolute_quantity() {
        let catalog = catalog();
        let mut cart = Cart::restore(InMemoryCartStore::new());
        add::run(&mut cart, &catalog, 5).unwrap();

        let result = run(&mut cart, 5, 12).unwrap();
        assert_eq!(result.cart_lines[0].quantity, 12);
    }
}
