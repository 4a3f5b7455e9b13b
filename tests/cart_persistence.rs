//! Persistence round-trips through the file-backed cart store.

use medcart::cart::Cart;
use medcart::model::Medicine;
use medcart::store::fs::FileCartStore;
use medcart::store::CartStore;
use std::fs;
use tempfile::TempDir;

fn medicine(id: u32, name: &str) -> Medicine {
    Medicine {
        id,
        name: name.into(),
        active_ingredient: "SUBSTANCE".into(),
        active_ingredient_description: None,
        packaging: Some("20 TABLETS".into()),
        manufacturer: None,
        country: None,
        category: None,
    }
}

#[test]
fn a_fresh_session_reconstructs_the_same_cart() {
    let dir = TempDir::new().unwrap();

    {
        let mut cart = Cart::restore(FileCartStore::new(dir.path()));
        cart.add(&medicine(1, "ZIAGEN"));
        cart.add(&medicine(1, "ZIAGEN"));
        cart.add(&medicine(7, "ADENURIC"));
        cart.set_quantity(7, 5);
    } // session ends

    let restored = Cart::restore(FileCartStore::new(dir.path()));
    let mut state: Vec<(u32, u32)> = restored
        .lines()
        .iter()
        .map(|l| (l.id(), l.quantity))
        .collect();
    state.sort_unstable();
    assert_eq!(state, vec![(1, 2), (7, 5)]);
}

#[test]
fn a_corrupt_stored_cart_degrades_to_empty() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("cart.json"), "{{ not json").unwrap();

    let cart = Cart::restore(FileCartStore::new(dir.path()));
    assert!(cart.is_empty());
}

#[test]
fn an_old_incompatible_shape_degrades_to_empty() {
    let dir = TempDir::new().unwrap();
    // A stored value from some earlier scheme: valid JSON, wrong shape.
    fs::write(dir.path().join("cart.json"), r#"[{"sku":"abc"}]"#).unwrap();

    let cart = Cart::restore(FileCartStore::new(dir.path()));
    assert!(cart.is_empty());
}

#[test]
fn mutating_after_a_failed_restore_overwrites_the_bad_value() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("cart.json"), "garbage").unwrap();

    let mut cart = Cart::restore(FileCartStore::new(dir.path()));
    cart.add(&medicine(3, "ORENCIA"));

    let reread = FileCartStore::new(dir.path()).load().unwrap();
    assert_eq!(reread.len(), 1);
    assert_eq!(reread[0].id(), 3);
}

#[test]
fn clearing_the_cart_clears_the_persisted_copy() {
    let dir = TempDir::new().unwrap();

    let mut cart = Cart::restore(FileCartStore::new(dir.path()));
    cart.add(&medicine(1, "ZIAGEN"));
    cart.clear();

    assert!(!dir.path().join("cart.json").exists());
    let restored = Cart::restore(FileCartStore::new(dir.path()));
    assert!(restored.is_empty());
}
