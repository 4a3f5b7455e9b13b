//! The read-only catalog of medicines available for search.
//!
//! The production data set is a JSON array generated from the distributor's
//! price list and embedded at compile time; it is parsed exactly once behind
//! a `Lazy` static. Alternate constructors exist so tests (and a replacement
//! data file on disk) can build a catalog from arbitrary records.

use once_cell::sync::Lazy;

use crate::error::{MedcartError, Result};
use crate::model::Medicine;
use crate::slug;

static BUNDLED: Lazy<Catalog> = Lazy::new(|| {
    Catalog::from_json(include_str!("data/medicines.json"))
        .expect("bundled medicine data is valid")
});

/// The catalog store. Created once, never mutated.
#[derive(Debug, Clone)]
pub struct Catalog {
    medicines: Vec<Medicine>,
}

impl Catalog {
    /// The data set shipped with the binary.
    pub fn bundled() -> &'static Catalog {
        &BUNDLED
    }

    /// Parses a catalog from a JSON array of medicine records.
    ///
    /// Rejects duplicate ids: the id is the stable identity key for cart
    /// merging, so a data set that reuses one is broken at the source.
    pub fn from_json(json: &str) -> Result<Catalog> {
        let medicines: Vec<Medicine> = serde_json::from_str(json)?;
        Self::from_medicines(medicines)
    }

    pub fn from_medicines(medicines: Vec<Medicine>) -> Result<Catalog> {
        let mut seen = std::collections::HashSet::new();
        for medicine in &medicines {
            if !seen.insert(medicine.id) {
                return Err(MedcartError::Store(format!(
                    "duplicate medicine id {} in catalog data",
                    medicine.id
                )));
            }
        }
        Ok(Catalog { medicines })
    }

    pub fn iter(&self) -> impl Iterator<Item = &Medicine> {
        self.medicines.iter()
    }

    pub fn len(&self) -> usize {
        self.medicines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.medicines.is_empty()
    }

    pub fn get(&self, id: u32) -> Option<&Medicine> {
        self.medicines.iter().find(|m| m.id == id)
    }

    /// Looks a medicine up by its `active-ingredient/brand` slug.
    ///
    /// A bare single-segment slug matches on the brand alone, so shortened
    /// links keep working when the brand name is unambiguous.
    pub fn get_by_slug(&self, input: &str) -> Option<&Medicine> {
        let (ingredient, brand) = slug::split_slug(input);
        self.medicines.iter().find(|m| {
            let brand_matches = slug::slugify(&m.name) == brand;
            if ingredient.is_empty() {
                brand_matches
            } else {
                brand_matches && slug::slugify(&m.active_ingredient) == ingredient
            }
        })
    }
}
