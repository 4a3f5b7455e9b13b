use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::npp;

/// Detail view for a single medicine, addressed by numeric id or by its
/// `active-ingredient/brand` slug.
///
/// A miss is surfaced as a not-found view with a path back to the catalog,
/// never as a hard error.
pub fn run(catalog: &Catalog, selector: &str) -> Result<CmdResult> {
    let hit = if selector.chars().all(|c| c.is_ascii_digit()) && !selector.is_empty() {
        selector.parse::<u32>().ok().and_then(|id| catalog.get(id))
    } else {
        catalog.get_by_slug(selector)
    };

    let Some(medicine) = hit else {
        return Ok(CmdResult::default()
            .with_message(CmdMessage::warning(format!(
                "No medicine matching '{}' in the catalog",
                selector
            )))
            .with_message(CmdMessage::info("Use `medcart search <term>` to browse")));
    };

    let mut result = CmdResult::default().with_medicines(vec![medicine.clone()]);
    if npp::is_npp_ingredient(&medicine.active_ingredient) {
        result.add_message(CmdMessage::info(
            "Available under the Named Patient Program",
        ));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Medicine;

    fn catalog() -> Catalog {
        Catalog::from_medicines(vec![
            Medicine {
                id: 13,
                name: "IMBRUVICA".into(),
                active_ingredient: "IBRUTINIB".into(),
                active_ingredient_description: None,
                packaging: None,
                manufacturer: None,
                country: None,
                category: None,
            },
            Medicine {
                id: 1,
                name: "Parol".into(),
                active_ingredient: "Parasetamol".into(),
                active_ingredient_description: None,
                packaging: None,
                manufacturer: None,
                country: None,
                category: None,
            },
        ])
        .unwrap()
    }

    #[test]
    fn finds_by_id_and_by_slug() {
        let catalog = catalog();

        let by_id = run(&catalog, "13").unwrap();
        assert_eq!(by_id.medicines[0].name, "IMBRUVICA");

        let by_slug = run(&catalog, "parasetamol/parol").unwrap();
        assert_eq!(by_slug.medicines[0].id, 1);
    }

    #[test]
    fn npp_membership_is_noted() {
        let result = run(&catalog(), "13").unwrap();
        assert!(result
            .messages
            .iter()
            .any(|m| m.content.contains("Named Patient Program")));

        let result = run(&catalog(), "1").unwrap();
        assert!(result.messages.is_empty());
    }

    #[test]
    fn miss_is_a_not_found_view() {
        let result = run(&catalog(), "999").unwrap();
        assert!(result.medicines.is_empty());
        assert!(result.messages[0].content.contains("No medicine"));
        assert!(result.messages[1].content.contains("search"));
    }
}
